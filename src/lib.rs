//! # bs-greeks: Black-Scholes Pricing and Greeks
//!
//! A Rust library for pricing European options on non-dividend-paying
//! underlyings with the Black-Scholes formula, computing their sensitivities,
//! and sweeping price and PnL across spot × volatility scenarios.
//!
//! ## Key Features
//!
//! - **Closed-form pricing**: call and put from one evaluation of d₁, d₂
//! - **Complete Greeks**: Delta, Gamma, Theta, Vega, Rho for both legs
//! - **Well-defined boundary**: expiry and zero volatility priced at their limits
//! - **Unit conventions**: raw or market (per day / per vol point / per 1%) Greeks
//! - **Scenario grids**: parallel spot × volatility price and PnL matrices with Rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::analytics::price_and_greeks;
//!
//! // S, K, T, sigma, r
//! let res = price_and_greeks(100.0, 100.0, 1.0, 0.2, 0.05).expect("Valid inputs");
//! assert!((res.call_price - 10.4506).abs() < 1e-4);
//! assert!((res.put_price - 5.5735).abs() < 1e-4);
//! ```
//!
//! ```rust
//! use bs_greeks::scenario::{price_grid, pnl_grid};
//! use bs_greeks::analytics::{OptionKind, Position};
//!
//! let grid = price_grid(&[90.0, 100.0, 110.0], &[0.1, 0.2], 100.0, 1.0, 0.05).unwrap();
//! let pnl = pnl_grid(&grid, Position::long(OptionKind::Call), 10.0).unwrap();
//! assert_eq!(pnl.dim(), (3, 2));
//! ```
//!
//! ## Mathematical Foundation
//!
//! ```text
//! C = S Φ(d₁) - K e^(-rT) Φ(d₂)
//! P = K e^(-rT) Φ(-d₂) - S Φ(-d₁)
//! ```
//! with Φ evaluated through the complementary error function.

// Module declarations
pub mod analytics;
pub mod config;
pub mod error;
pub mod math_utils;
pub mod scenario;

// Re-export commonly used types for convenience
pub use analytics::{price_and_greeks, OptionKind, OptionParams, Position, PricingResult, Regime, Side};
pub use config::{GreekConvention, PricingConfig};
pub use error::{BsError, BsResult};
pub use scenario::{pnl, price_grid, PriceGrid};
