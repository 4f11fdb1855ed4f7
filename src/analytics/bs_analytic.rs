// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! The risk-neutral pricing formula gives:
//! ```text
//! V(S,t) = e^(-r(T-t)) * E^Q[payoff(S_T) | S_t = S]
//! ```
//!
//! For European options, this has closed-form solutions involving
//! the cumulative normal distribution function Φ(x).
//!
//! Every function here assumes the regular domain `t > 0`, `sigma > 0`.
//! The boundary of that domain is handled by [`crate::analytics::engine`].
//! Greeks are in raw units (theta per year, vega and rho per unit move).

use crate::math_utils::{norm_cdf, norm_pdf};

/// Quantities shared by the price and every Greek at one point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BsTerms {
    pub d1: f64,
    pub d2: f64,
    pub sqrt_t: f64,
    /// e^(-rT)
    pub discount: f64,
    /// φ(d₁)
    pub pdf_d1: f64,
}

impl BsTerms {
    pub fn new(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Self {
        let sqrt_t = t.sqrt();
        let (d1, d2) = d1_d2(s, k, r, sigma, t);
        BsTerms {
            d1,
            d2,
            sqrt_t,
            discount: (-r * t).exp(),
            pdf_d1: norm_pdf(d1),
        }
    }
}

/// Standardized variables of the Black-Scholes formula
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
pub fn d1_d2(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> (f64, f64) {
    let std_dev = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / std_dev;
    (d1, d1 - std_dev)
}

pub(crate) fn call_price_from(terms: &BsTerms, s: f64, k: f64) -> f64 {
    s * norm_cdf(terms.d1) - k * terms.discount * norm_cdf(terms.d2)
}

pub(crate) fn put_price_from(terms: &BsTerms, s: f64, k: f64) -> f64 {
    k * terms.discount * norm_cdf(-terms.d2) - s * norm_cdf(-terms.d1)
}

pub(crate) fn gamma_from(terms: &BsTerms, s: f64, sigma: f64) -> f64 {
    terms.pdf_d1 / (s * sigma * terms.sqrt_t)
}

pub(crate) fn vega_from(terms: &BsTerms, s: f64) -> f64 {
    s * terms.pdf_d1 * terms.sqrt_t
}

/// -S*φ(d₁)*σ/(2√T), the decay term common to call and put theta.
fn theta_decay(terms: &BsTerms, s: f64, sigma: f64) -> f64 {
    (-s * terms.pdf_d1 * sigma) / (2.0 * terms.sqrt_t)
}

pub(crate) fn call_theta_from(terms: &BsTerms, s: f64, k: f64, r: f64, sigma: f64) -> f64 {
    theta_decay(terms, s, sigma) - r * k * terms.discount * norm_cdf(terms.d2)
}

pub(crate) fn put_theta_from(terms: &BsTerms, s: f64, k: f64, r: f64, sigma: f64) -> f64 {
    theta_decay(terms, s, sigma) + r * k * terms.discount * norm_cdf(-terms.d2)
}

pub(crate) fn call_rho_from(terms: &BsTerms, k: f64, t: f64) -> f64 {
    k * t * terms.discount * norm_cdf(terms.d2)
}

pub(crate) fn put_rho_from(terms: &BsTerms, k: f64, t: f64) -> f64 {
    -k * t * terms.discount * norm_cdf(-terms.d2)
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,r,σ,T) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `s`: Current stock price
/// - `k`: Strike price
/// - `r`: Risk-free rate
/// - `sigma`: Volatility
/// - `t`: Time to expiration
///
/// # Returns
/// Present value of the call option
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    call_price_from(&BsTerms::new(s, k, r, sigma, t), s, k)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,r,σ,T) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    put_price_from(&BsTerms::new(s, k, r, sigma, t), s, k)
}

/// Black-Scholes Delta (∂V/∂S) for European call
///
/// # Formula
/// ```text
/// Δ = ∂C/∂S = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares to buy per option sold
/// - Range: [0, 1] for calls
pub fn bs_call_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    norm_cdf(d1_d2(s, k, r, sigma, t).0)
}

/// Black-Scholes Delta for European put: Φ(d₁) - 1, in [-1, 0]
pub fn bs_put_delta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    bs_call_delta(s, k, r, sigma, t) - 1.0
}

/// Black-Scholes Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. underlying price
/// - Maximum at-the-money, decreases as option goes in/out-of-money
/// - Same for calls and puts
pub fn bs_gamma(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    gamma_from(&BsTerms::new(s, k, r, sigma, t), s, sigma)
}

/// Black-Scholes Vega (∂V/∂σ)
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// Same for calls and puts. Units: price change per 1.00 change in volatility.
pub fn bs_vega(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    vega_from(&BsTerms::new(s, k, r, sigma, t), s)
}

/// Black-Scholes Theta (∂V/∂t) for European call
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Interpretation
/// - Time decay of option value, usually negative for long options
/// - Units: price change per year
pub fn bs_call_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    call_theta_from(&BsTerms::new(s, k, r, sigma, t), s, k, r, sigma)
}

/// Black-Scholes Theta for European put
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)
/// ```
pub fn bs_put_theta(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    put_theta_from(&BsTerms::new(s, k, r, sigma, t), s, k, r, sigma)
}

/// Black-Scholes Rho (∂V/∂r) for European call
///
/// # Formula
/// ```text
/// ρ = K * T * e^(-rT) * Φ(d₂)
/// ```
///
/// Positive for calls (higher rates increase call value).
pub fn bs_call_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    call_rho_from(&BsTerms::new(s, k, r, sigma, t), k, t)
}

/// Black-Scholes Rho for European put: -K * T * e^(-rT) * Φ(-d₂)
pub fn bs_put_rho(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    put_rho_from(&BsTerms::new(s, k, r, sigma, t), k, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d1_d2_atm() {
        let (d1, d2) = d1_d2(100.0, 100.0, 0.05, 0.2, 1.0);
        assert_abs_diff_eq!(d1, 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(d2, 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_terms_match_free_functions() {
        let (s, k, r, sigma, t) = (105.0, 95.0, 0.03, 0.25, 0.75);
        let terms = BsTerms::new(s, k, r, sigma, t);
        assert_eq!(call_price_from(&terms, s, k), bs_call_price(s, k, r, sigma, t));
        assert_eq!(put_price_from(&terms, s, k), bs_put_price(s, k, r, sigma, t));
        assert_eq!(gamma_from(&terms, s, sigma), bs_gamma(s, k, r, sigma, t));
    }

    #[test]
    fn test_theta_difference_is_carry() {
        // Θ_put - Θ_call = r K e^(-rT)
        let (s, k, r, sigma, t) = (100.0, 110.0, 0.04, 0.3, 0.5);
        let diff = bs_put_theta(s, k, r, sigma, t) - bs_call_theta(s, k, r, sigma, t);
        assert_abs_diff_eq!(diff, r * k * (-r * t).exp(), epsilon = 1e-10);
    }

    #[test]
    fn test_rho_difference_is_discounted_strike() {
        // ρ_call - ρ_put = K T e^(-rT)
        let (s, k, r, sigma, t) = (90.0, 100.0, 0.02, 0.15, 2.0);
        let diff = bs_call_rho(s, k, r, sigma, t) - bs_put_rho(s, k, r, sigma, t);
        assert_abs_diff_eq!(diff, k * t * (-r * t).exp(), epsilon = 1e-10);
    }
}
