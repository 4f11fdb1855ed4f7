//! Scenario sweeps built on the pointwise engine
//!
//! - [`range`]: evenly sampled spot/volatility axes
//! - [`grid`]: call and put price matrices over spot × volatility
//! - [`pnl`]: position PnL on a grid and at expiry

pub mod grid;
pub mod pnl;
pub mod range;

pub use grid::{price_grid, price_grid_over, price_grid_with, PriceGrid};
pub use pnl::{expiry_pnl, pnl, pnl_grid, ExpiryPnl};
pub use range::ScenarioRange;
