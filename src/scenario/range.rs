// src/scenario/range.rs
use crate::error::{validation::*, BsError, BsResult};
use crate::math_utils::linspace;
use serde::{Deserialize, Serialize};

/// Relative spread of the default spot axis around the current spot.
pub const DEFAULT_SPOT_SPREAD: f64 = 0.2;
/// Relative spread of the default volatility axis around the current volatility.
pub const DEFAULT_VOL_SPREAD: f64 = 0.5;
pub const DEFAULT_POINTS: usize = 10;

/// Evenly sampled axis of a scenario grid, both bounds included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRange {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl ScenarioRange {
    pub fn new(min: f64, max: f64, points: usize) -> BsResult<Self> {
        let range = ScenarioRange { min, max, points };
        range.validate()?;
        Ok(range)
    }

    /// `[base * (1 - spread), base * (1 + spread)]`
    pub fn around(base: f64, spread: f64, points: usize) -> BsResult<Self> {
        validate_finite("base", base)?;
        validate_non_negative("spread", spread)?;
        if spread > 1.0 {
            return Err(BsError::InvalidParameters {
                parameter: "spread".to_string(),
                value: spread,
                constraint: "must be at most 1 so the lower bound keeps its sign".to_string(),
            });
        }
        let (lo, hi) = (base * (1.0 - spread), base * (1.0 + spread));
        Self::new(lo.min(hi), lo.max(hi), points)
    }

    /// Spot axis of ±20% around `spot`.
    pub fn spot_default(spot: f64) -> BsResult<Self> {
        Self::around(spot, DEFAULT_SPOT_SPREAD, DEFAULT_POINTS)
    }

    /// Volatility axis of ±50% around `volatility`.
    pub fn vol_default(volatility: f64) -> BsResult<Self> {
        Self::around(volatility, DEFAULT_VOL_SPREAD, DEFAULT_POINTS)
    }

    pub fn validate(&self) -> BsResult<()> {
        validate_finite("min", self.min)?;
        validate_finite("max", self.max)?;
        if self.points == 0 {
            return Err(BsError::InvalidConfiguration {
                field: "points".to_string(),
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.min > self.max {
            return Err(BsError::InvalidConfiguration {
                field: "min".to_string(),
                reason: format!("{} exceeds max {}", self.min, self.max),
            });
        }
        Ok(())
    }

    pub fn values(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_values() {
        let r = ScenarioRange::new(90.0, 110.0, 3).unwrap();
        assert_eq!(r.values(), vec![90.0, 100.0, 110.0]);
    }

    #[test]
    fn test_defaults_around_base() {
        let spot = ScenarioRange::spot_default(100.0).unwrap();
        assert_abs_diff_eq!(spot.min, 80.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spot.max, 120.0, epsilon = 1e-12);
        assert_eq!(spot.points, 10);

        let vol = ScenarioRange::vol_default(0.2).unwrap();
        assert_abs_diff_eq!(vol.min, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(vol.max, 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_spread_is_single_value() {
        let r = ScenarioRange::around(0.25, 0.0, 4).unwrap();
        assert!(r.values().iter().all(|&v| v == 0.25));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            ScenarioRange::new(1.0, 2.0, 0),
            Err(BsError::InvalidConfiguration { .. })
        ));
        assert!(ScenarioRange::new(2.0, 1.0, 5).is_err());
        assert!(ScenarioRange::new(f64::NAN, 1.0, 5).is_err());
        assert!(ScenarioRange::around(100.0, 1.5, 5).is_err());
        assert!(ScenarioRange::around(100.0, -0.1, 5).is_err());
    }
}
