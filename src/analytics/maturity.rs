// src/analytics/maturity.rs
use crate::analytics::engine::OptionParams;
use crate::config::PricingConfig;
use crate::error::{validation::*, BsError, BsResult};
use chrono::NaiveDate;

/// Time between two calendar dates in years, ACT/`days_per_year`.
pub fn year_fraction(valuation: NaiveDate, expiry: NaiveDate, days_per_year: f64) -> BsResult<f64> {
    validate_positive("days_per_year", days_per_year)?;
    let days = (expiry - valuation).num_days();
    if days < 0 {
        return Err(BsError::InvalidParameters {
            parameter: "expiry".to_string(),
            value: days as f64,
            constraint: format!("must not precede valuation date {}", valuation),
        });
    }
    Ok(days as f64 / days_per_year)
}

impl OptionParams {
    /// Build a request whose maturity is measured between two dates.
    pub fn from_dates(
        spot: f64,
        strike: f64,
        valuation: NaiveDate,
        expiry: NaiveDate,
        volatility: f64,
        rate: f64,
        cfg: &PricingConfig,
    ) -> BsResult<Self> {
        cfg.validate()?;
        let t = year_fraction(valuation, expiry, cfg.days_per_year)?;
        let params = OptionParams::new(spot, strike, t, volatility, rate);
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::engine::Regime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_year_fraction() {
        assert_eq!(year_fraction(date(2025, 1, 1), date(2026, 1, 1), 365.0).unwrap(), 1.0);
        assert_eq!(year_fraction(date(2025, 3, 1), date(2025, 3, 1), 365.0).unwrap(), 0.0);
        assert!(year_fraction(date(2025, 3, 2), date(2025, 3, 1), 365.0).is_err());
        assert!(year_fraction(date(2025, 1, 1), date(2025, 2, 1), 0.0).is_err());
    }

    #[test]
    fn test_from_dates_on_expiry_is_expired() {
        let d = date(2025, 6, 20);
        let p = OptionParams::from_dates(100.0, 95.0, d, d, 0.2, 0.05, &PricingConfig::default()).unwrap();
        assert_eq!(p.time_to_maturity, 0.0);
        assert!(p.regime().contains(Regime::EXPIRED));
    }

    #[test]
    fn test_from_dates_validates_params() {
        let res = OptionParams::from_dates(
            -1.0,
            95.0,
            date(2025, 1, 1),
            date(2025, 7, 1),
            0.2,
            0.05,
            &PricingConfig::default(),
        );
        assert!(matches!(res, Err(BsError::InvalidParameters { .. })));
    }
}
