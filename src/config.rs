// src/config.rs
//! Pricing configuration
//!
//! Greeks come out of the closed-form formulas in "raw" units: theta per year,
//! vega per unit of volatility (1.00 = 100 vol points) and rho per unit of rate.
//! Trading screens usually quote them per calendar day, per vol point and per
//! 1% rate move instead. [`GreekConvention`] selects between the two and is
//! carried on every result so a consumer can tell which one it holds.

use crate::error::{validation::*, BsError, BsResult};
use serde::{Deserialize, Serialize};

/// Unit convention applied to theta, vega and rho.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GreekConvention {
    /// Theta per year, vega per 1.00 of volatility, rho per 1.00 of rate.
    #[default]
    Raw,
    /// Theta per day, vega per 1 vol point, rho per 1% rate move.
    Market,
}

impl GreekConvention {
    pub fn scale_theta(&self, theta: f64, days_per_year: f64) -> f64 {
        match self {
            GreekConvention::Raw => theta,
            GreekConvention::Market => theta / days_per_year,
        }
    }

    pub fn scale_vega(&self, vega: f64) -> f64 {
        match self {
            GreekConvention::Raw => vega,
            GreekConvention::Market => vega / 100.0,
        }
    }

    pub fn scale_rho(&self, rho: f64) -> f64 {
        match self {
            GreekConvention::Raw => rho,
            GreekConvention::Market => rho / 100.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub convention: GreekConvention,
    /// Day count used for per-day theta and for date-based maturities.
    pub days_per_year: f64,
    /// Evaluate scenario grids with rayon.
    pub parallel_grid: bool,
}

impl PricingConfig {
    /// Validate the pricing configuration
    pub fn validate(&self) -> BsResult<()> {
        validate_finite("days_per_year", self.days_per_year)?;
        if self.days_per_year < 1.0 {
            return Err(BsError::InvalidConfiguration {
                field: "days_per_year".to_string(),
                reason: format!("must be at least 1 (got {})", self.days_per_year),
            });
        }
        Ok(())
    }

    pub fn market() -> Self {
        PricingConfig {
            convention: GreekConvention::Market,
            ..Default::default()
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            convention: GreekConvention::Raw,
            days_per_year: 365.0,
            parallel_grid: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = PricingConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.convention, GreekConvention::Raw);
        assert_eq!(cfg.days_per_year, 365.0);
    }

    #[test]
    fn test_rejects_bad_day_count() {
        let cfg = PricingConfig {
            days_per_year: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(BsError::InvalidConfiguration { .. })
        ));

        let cfg = PricingConfig {
            days_per_year: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(BsError::InvalidParameters { .. })));
    }

    #[test]
    fn test_market_scaling() {
        let m = GreekConvention::Market;
        assert_eq!(m.scale_theta(-365.0, 365.0), -1.0);
        assert_eq!(m.scale_vega(37.5), 0.375);
        assert_eq!(m.scale_rho(53.0), 0.53);

        let raw = GreekConvention::Raw;
        assert_eq!(raw.scale_theta(-6.4, 365.0), -6.4);
        assert_eq!(raw.scale_vega(37.5), 37.5);
        assert_eq!(raw.scale_rho(53.0), 53.0);
    }
}
