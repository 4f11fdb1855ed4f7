// src/scenario/grid.rs
//! Spot × volatility price grid
//!
//! Every cell is an independent pointwise evaluation, so cells are flattened
//! and priced in parallel with rayon. Cell `(i, j)` of each matrix always
//! holds the price at `spots[i]`, `vols[j]` regardless of evaluation order.

use crate::analytics::engine::{price_pair, OptionParams};
use crate::analytics::payoffs::OptionKind;
use crate::config::PricingConfig;
use crate::error::{validation::*, BsError, BsResult};
use crate::scenario::range::ScenarioRange;
use ndarray::Array2;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, debug_span};

/// Call and put prices over a grid, indexed `[spot_index, vol_index]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceGrid {
    pub spots: Vec<f64>,
    pub vols: Vec<f64>,
    pub strike: f64,
    pub time_to_maturity: f64,
    pub rate: f64,
    pub call: Array2<f64>,
    pub put: Array2<f64>,
}

impl PriceGrid {
    /// `(spots, vols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.spots.len(), self.vols.len())
    }

    pub fn prices(&self, kind: OptionKind) -> &Array2<f64> {
        match kind {
            OptionKind::Call => &self.call,
            OptionKind::Put => &self.put,
        }
    }

    /// Parameters priced at cell `(spot_index, vol_index)`.
    pub fn params_at(&self, spot_index: usize, vol_index: usize) -> Option<OptionParams> {
        let spot = *self.spots.get(spot_index)?;
        let vol = *self.vols.get(vol_index)?;
        Some(OptionParams::new(spot, self.strike, self.time_to_maturity, vol, self.rate))
    }
}

/// Price every (spot, volatility) pair with the default configuration.
pub fn price_grid(
    spot_range: &[f64],
    vol_range: &[f64],
    k: f64,
    t: f64,
    r: f64,
) -> BsResult<PriceGrid> {
    price_grid_with(spot_range, vol_range, k, t, r, &PricingConfig::default())
}

/// Price a grid built from two [`ScenarioRange`] axes.
pub fn price_grid_over(
    spots: &ScenarioRange,
    vols: &ScenarioRange,
    k: f64,
    t: f64,
    r: f64,
    cfg: &PricingConfig,
) -> BsResult<PriceGrid> {
    spots.validate()?;
    vols.validate()?;
    price_grid_with(&spots.values(), &vols.values(), k, t, r, cfg)
}

pub fn price_grid_with(
    spot_range: &[f64],
    vol_range: &[f64],
    k: f64,
    t: f64,
    r: f64,
    cfg: &PricingConfig,
) -> BsResult<PriceGrid> {
    cfg.validate()?;
    validate_non_empty("spot_range", spot_range)?;
    validate_non_empty("vol_range", vol_range)?;
    for &s in spot_range {
        validate_positive("spot", s)?;
    }
    for &v in vol_range {
        validate_non_negative("volatility", v)?;
    }
    OptionParams::new(spot_range[0], k, t, vol_range[0], r).validate()?;

    let (n_spot, n_vol) = (spot_range.len(), vol_range.len());
    let _span = debug_span!("price_grid", n_spot, n_vol, parallel = cfg.parallel_grid).entered();
    debug!(n_spot, n_vol, strike = k, time_to_maturity = t, rate = r, "pricing grid");

    let price_cell = |idx: usize| {
        let (i, j) = (idx / n_vol, idx % n_vol);
        price_pair(&OptionParams::new(spot_range[i], k, t, vol_range[j], r))
    };

    let cells: Vec<(f64, f64)> = if cfg.parallel_grid {
        (0..n_spot * n_vol)
            .into_par_iter()
            .map(price_cell)
            .collect::<BsResult<_>>()?
    } else {
        (0..n_spot * n_vol).map(price_cell).collect::<BsResult<_>>()?
    };

    let (calls, puts): (Vec<f64>, Vec<f64>) = cells.into_iter().unzip();
    let to_matrix = |values: Vec<f64>| {
        Array2::from_shape_vec((n_spot, n_vol), values).map_err(|e| BsError::InvalidConfiguration {
            field: "grid".to_string(),
            reason: e.to_string(),
        })
    };

    Ok(PriceGrid {
        spots: spot_range.to_vec(),
        vols: vol_range.to_vec(),
        strike: k,
        time_to_maturity: t,
        rate: r,
        call: to_matrix(calls)?,
        put: to_matrix(puts)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_and_params() {
        let grid = price_grid(&[90.0, 100.0], &[0.1, 0.2, 0.3], 100.0, 1.0, 0.05).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.call.dim(), (2, 3));
        assert_eq!(grid.put.dim(), (2, 3));

        let p = grid.params_at(1, 2).unwrap();
        assert_eq!(p.spot, 100.0);
        assert_eq!(p.volatility, 0.3);
        assert!(grid.params_at(2, 0).is_none());
    }

    #[test]
    fn test_grid_rejects_bad_axes() {
        assert!(matches!(
            price_grid(&[], &[0.2], 100.0, 1.0, 0.05),
            Err(BsError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            price_grid(&[100.0, -5.0], &[0.2], 100.0, 1.0, 0.05),
            Err(BsError::InvalidParameters { .. })
        ));
        assert!(price_grid(&[100.0], &[-0.2], 100.0, 1.0, 0.05).is_err());
        assert!(price_grid(&[100.0], &[0.2], 0.0, 1.0, 0.05).is_err());
    }

    #[test]
    fn test_grid_over_ranges() {
        let spots = ScenarioRange::spot_default(100.0).unwrap();
        let vols = ScenarioRange::vol_default(0.2).unwrap();
        let grid = price_grid_over(&spots, &vols, 100.0, 1.0, 0.05, &PricingConfig::default()).unwrap();
        assert_eq!(grid.shape(), (10, 10));
        assert_eq!(grid.spots, spots.values());
    }

    #[test]
    fn test_zero_vol_column_is_intrinsic() {
        let grid = price_grid(&[90.0, 110.0], &[0.0], 100.0, 0.0, 0.05).unwrap();
        assert_eq!(grid.call[[0, 0]], 0.0);
        assert_eq!(grid.call[[1, 0]], 10.0);
        assert_eq!(grid.put[[0, 0]], 10.0);
    }
}
