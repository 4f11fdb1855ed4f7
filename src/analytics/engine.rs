// src/analytics/engine.rs
//! Pointwise pricing engine
//!
//! Validates an [`OptionParams`] request, picks the pricing branch and returns
//! both prices together with the full set of Greeks.
//!
//! # Degenerate domain
//!
//! The closed form divides by σ√T, so it is undefined at expiry (T = 0) and
//! for zero volatility. There the forward is deterministic and the option is
//! worth its intrinsic value against the discounted strike:
//! ```text
//! C = max(S - K e^(-rT), 0)        P = max(K e^(-rT) - S, 0)
//! ```
//! At T = 0 this is exactly max(S - K, 0) / max(K - S, 0). Delta is 1 for an
//! in-the-money call (S > K e^(-rT)) and 0 otherwise, put delta is call delta
//! minus one, and gamma, vega, theta and rho are all 0. Put-call parity holds
//! in both branches.
//!
//! Zeroing theta and rho matches the expiry limit but not the σ → 0 limit with
//! T > 0. There an in-the-money call tends to theta = -rK e^(-rT) and
//! rho = KT e^(-rT), so both jump to 0 when σ reaches exactly 0. Callers that
//! need the carry terms of a zero-vol forward should price with a small
//! positive σ instead.

use crate::analytics::bs_analytic::{self, BsTerms};
use crate::analytics::payoffs::OptionKind;
use crate::config::PricingConfig;
use crate::error::{validation::*, BsError, BsResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Below this σ√T the closed form is replaced by its limit.
pub const MIN_STD_DEV: f64 = 1e-12;

bitflags! {
    /// Which pricing branch produced a result. Empty means closed form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Regime: u8 {
        const EXPIRED           = 1 << 0;
        const ZERO_VOL          = 1 << 1;
        const VANISHING_STD_DEV = 1 << 2;
    }
}

impl Regime {
    pub fn is_degenerate(&self) -> bool {
        !self.is_empty()
    }
}

/// A single option pricing request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    pub spot: f64,
    pub strike: f64,
    /// Years to expiry.
    pub time_to_maturity: f64,
    /// Annualized.
    pub volatility: f64,
    /// Annualized, continuously compounded.
    pub rate: f64,
}

impl OptionParams {
    pub fn new(spot: f64, strike: f64, time_to_maturity: f64, volatility: f64, rate: f64) -> Self {
        OptionParams {
            spot,
            strike,
            time_to_maturity,
            volatility,
            rate,
        }
    }

    /// Validate the request; S, K > 0, T, σ ≥ 0, everything finite.
    pub fn validate(&self) -> BsResult<()> {
        validate_positive("spot", self.spot)?;
        validate_positive("strike", self.strike)?;
        validate_non_negative("time_to_maturity", self.time_to_maturity)?;
        validate_non_negative("volatility", self.volatility)?;
        validate_finite("rate", self.rate)?;
        Ok(())
    }

    pub fn regime(&self) -> Regime {
        let mut regime = Regime::empty();
        if self.time_to_maturity <= 0.0 {
            regime |= Regime::EXPIRED;
        }
        if self.volatility <= 0.0 {
            regime |= Regime::ZERO_VOL;
        }
        if regime.is_empty() && self.volatility * self.time_to_maturity.sqrt() < MIN_STD_DEV {
            regime |= Regime::VANISHING_STD_DEV;
        }
        regime
    }

    /// e^(-rT)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time_to_maturity).exp()
    }

    /// (d₁, d₂), or `None` where they are undefined.
    pub fn d1_d2(&self) -> Option<(f64, f64)> {
        if self.regime().is_degenerate() {
            return None;
        }
        Some(bs_analytic::d1_d2(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.time_to_maturity,
        ))
    }

    pub fn with_spot(&self, spot: f64) -> Self {
        OptionParams { spot, ..*self }
    }

    pub fn with_volatility(&self, volatility: f64) -> Self {
        OptionParams { volatility, ..*self }
    }
}

/// Prices and Greeks of the call and put sharing one [`OptionParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingResult {
    pub call_price: f64,
    pub put_price: f64,
    pub delta_call: f64,
    pub delta_put: f64,
    /// Shared by call and put.
    pub gamma: f64,
    pub theta_call: f64,
    pub theta_put: f64,
    /// Shared by call and put.
    pub vega: f64,
    pub rho_call: f64,
    pub rho_put: f64,
    pub regime: Regime,
    pub convention: crate::config::GreekConvention,
}

impl PricingResult {
    pub fn is_degenerate(&self) -> bool {
        self.regime.is_degenerate()
    }

    pub fn price(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.call_price,
            OptionKind::Put => self.put_price,
        }
    }

    pub fn delta(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.delta_call,
            OptionKind::Put => self.delta_put,
        }
    }

    pub fn theta(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.theta_call,
            OptionKind::Put => self.theta_put,
        }
    }

    pub fn rho(&self, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.rho_call,
            OptionKind::Put => self.rho_put,
        }
    }

    fn values(&self) -> [(&'static str, f64); 10] {
        [
            ("call_price", self.call_price),
            ("put_price", self.put_price),
            ("delta_call", self.delta_call),
            ("delta_put", self.delta_put),
            ("gamma", self.gamma),
            ("theta_call", self.theta_call),
            ("theta_put", self.theta_put),
            ("vega", self.vega),
            ("rho_call", self.rho_call),
            ("rho_put", self.rho_put),
        ]
    }
}

/// Price a call/put pair and compute all Greeks in raw units.
///
/// Arguments follow the usual (S, K, T, σ, r) order.
///
/// # Errors
///
/// - `InvalidParameters` if S ≤ 0, K ≤ 0, T < 0, σ < 0 or any input is not finite
/// - `NumericalInstability` if the result would not be finite
pub fn price_and_greeks(s: f64, k: f64, t: f64, sigma: f64, r: f64) -> BsResult<PricingResult> {
    price_and_greeks_with(&OptionParams::new(s, k, t, sigma, r), &PricingConfig::default())
}

/// [`price_and_greeks`] with an explicit configuration (Greek convention).
pub fn price_and_greeks_with(params: &OptionParams, cfg: &PricingConfig) -> BsResult<PricingResult> {
    cfg.validate()?;
    params.validate()?;

    let regime = params.regime();
    let raw = if regime.is_degenerate() {
        debug!(?regime, ?params, "pricing at the degenerate boundary");
        degenerate_result(params, regime)
    } else {
        closed_form_result(params)
    };
    ensure_finite(&raw, params)?;

    let convention = cfg.convention;
    Ok(PricingResult {
        theta_call: convention.scale_theta(raw.theta_call, cfg.days_per_year),
        theta_put: convention.scale_theta(raw.theta_put, cfg.days_per_year),
        vega: convention.scale_vega(raw.vega),
        rho_call: convention.scale_rho(raw.rho_call),
        rho_put: convention.scale_rho(raw.rho_put),
        convention,
        ..raw
    })
}

/// Call and put price only; what a scenario grid evaluates at each cell.
pub fn price_pair(params: &OptionParams) -> BsResult<(f64, f64)> {
    params.validate()?;
    let (call, put) = if params.regime().is_degenerate() {
        degenerate_prices(params)
    } else {
        let terms = terms_for(params);
        (
            bs_analytic::call_price_from(&terms, params.spot, params.strike),
            bs_analytic::put_price_from(&terms, params.spot, params.strike),
        )
    };
    if !(call.is_finite() && put.is_finite()) {
        warn!(?params, call, put, "non-finite price rejected");
        return Err(BsError::NumericalInstability {
            method: "black_scholes".to_string(),
            reason: format!("non-finite prices (call = {}, put = {})", call, put),
        });
    }
    Ok((call, put))
}

fn terms_for(p: &OptionParams) -> BsTerms {
    BsTerms::new(p.spot, p.strike, p.rate, p.volatility, p.time_to_maturity)
}

fn degenerate_prices(p: &OptionParams) -> (f64, f64) {
    let discounted_strike = p.strike * p.discount_factor();
    (
        OptionKind::Call.intrinsic(p.spot, discounted_strike),
        OptionKind::Put.intrinsic(p.spot, discounted_strike),
    )
}

fn degenerate_result(p: &OptionParams, regime: Regime) -> PricingResult {
    let (call_price, put_price) = degenerate_prices(p);
    let delta_call = if p.spot > p.strike * p.discount_factor() {
        1.0
    } else {
        0.0
    };

    PricingResult {
        call_price,
        put_price,
        delta_call,
        delta_put: delta_call - 1.0,
        gamma: 0.0,
        theta_call: 0.0,
        theta_put: 0.0,
        vega: 0.0,
        rho_call: 0.0,
        rho_put: 0.0,
        regime,
        convention: Default::default(),
    }
}

fn closed_form_result(p: &OptionParams) -> PricingResult {
    let (s, k, r, sigma, t) = (p.spot, p.strike, p.rate, p.volatility, p.time_to_maturity);
    let terms = terms_for(p);
    let delta_call = crate::math_utils::norm_cdf(terms.d1);

    PricingResult {
        call_price: bs_analytic::call_price_from(&terms, s, k),
        put_price: bs_analytic::put_price_from(&terms, s, k),
        delta_call,
        delta_put: delta_call - 1.0,
        gamma: bs_analytic::gamma_from(&terms, s, sigma),
        theta_call: bs_analytic::call_theta_from(&terms, s, k, r, sigma),
        theta_put: bs_analytic::put_theta_from(&terms, s, k, r, sigma),
        vega: bs_analytic::vega_from(&terms, s),
        rho_call: bs_analytic::call_rho_from(&terms, k, t),
        rho_put: bs_analytic::put_rho_from(&terms, k, t),
        regime: Regime::empty(),
        convention: Default::default(),
    }
}

fn ensure_finite(result: &PricingResult, params: &OptionParams) -> BsResult<()> {
    if let Some((name, value)) = result.values().into_iter().find(|(_, v)| !v.is_finite()) {
        warn!(?params, field = name, value, "non-finite result rejected");
        return Err(BsError::NumericalInstability {
            method: "black_scholes".to_string(),
            reason: format!("{} evaluated to {}", name, value),
        });
    }
    Ok(())
}
