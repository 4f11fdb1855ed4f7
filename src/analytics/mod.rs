//! Closed-form Black-Scholes pricing
//!
//! - [`bs_analytic`]: the formulas themselves, one function per price or Greek
//! - [`engine`]: validated pricing requests, boundary handling and unit conventions
//! - [`payoffs`]: option kinds and position direction
//! - [`maturity`]: maturities from calendar dates

pub mod bs_analytic;
pub mod engine;
pub mod maturity;
pub mod payoffs;

pub use engine::{price_and_greeks, price_and_greeks_with, price_pair, OptionParams, PricingResult, Regime};
pub use maturity::year_fraction;
pub use payoffs::{OptionKind, Position, Side};
