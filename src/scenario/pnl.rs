// src/scenario/pnl.rs
//! Profit and loss of option positions
//!
//! Two views are offered:
//! - mark-to-model: theoretical price at a scenario minus the premium paid,
//!   signed by position direction ([`pnl`], [`pnl_grid`])
//! - at expiry: payoff at a terminal spot minus the premium, for long holders
//!   ([`expiry_pnl`])

use crate::analytics::payoffs::{OptionKind, Position, Side};
use crate::error::{validation::*, BsResult};
use crate::scenario::grid::PriceGrid;
use ndarray::Array2;
use serde::Serialize;

/// `sign(side) * (price - purchase_price)`
pub fn pnl(price: f64, purchase_price: f64, side: Side) -> f64 {
    side.sign() * (price - purchase_price)
}

/// PnL of `position` at every cell of `grid`, same indexing as the grid.
pub fn pnl_grid(grid: &PriceGrid, position: Position, purchase_price: f64) -> BsResult<Array2<f64>> {
    validate_non_negative("purchase_price", purchase_price)?;
    Ok(grid
        .prices(position.kind)
        .mapv(|price| pnl(price, purchase_price, position.side)))
}

/// Long call and long put PnL at expiry for a set of terminal spots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryPnl {
    pub spots: Vec<f64>,
    pub call: Vec<f64>,
    pub put: Vec<f64>,
}

pub fn expiry_pnl(spots: &[f64], strike: f64, purchase_price: f64) -> BsResult<ExpiryPnl> {
    validate_non_negative("purchase_price", purchase_price)?;
    validate_non_empty("spot_range", spots)?;
    validate_positive("strike", strike)?;
    for &s in spots {
        validate_non_negative("spot", s)?;
    }

    let leg = |kind: OptionKind| -> Vec<f64> {
        spots
            .iter()
            .map(|&s| pnl(kind.intrinsic(s, strike), purchase_price, Side::Long))
            .collect()
    };

    Ok(ExpiryPnl {
        spots: spots.to_vec(),
        call: leg(OptionKind::Call),
        put: leg(OptionKind::Put),
    })
}
