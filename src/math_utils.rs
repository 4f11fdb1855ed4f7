// src/math_utils.rs
use statrs::function::erf;
use std::f64::consts::{PI, SQRT_2};

/// Beyond this |x| the normal CDF is 0 or 1 to double precision.
const CDF_SATURATION: f64 = 40.0;

/// Standard normal cumulative distribution function
///
/// # Formula
/// ```text
/// N(x) = ½ erfc(-x/√2)
/// ```
///
/// The complementary form keeps full relative precision in the lower tail,
/// where `0.5 * (1 + erf(x/√2))` cancels to zero well before the true value.
pub fn norm_cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x > CDF_SATURATION {
        return 1.0;
    }
    if x < -CDF_SATURATION {
        return 0.0;
    }
    0.5 * erf::erfc(-x / SQRT_2)
}

/// Standard normal probability density function
///
/// # Formula
/// ```text
/// φ(x) = (1/√(2π)) * exp(-x²/2)
/// ```
pub fn norm_pdf(x: f64) -> f64 {
    (1.0 / (2.0 * PI).sqrt()) * (-0.5 * x * x).exp()
}

/// `points` evenly spaced samples over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            (0..points)
                .map(|i| if i == points - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_abs_diff_eq!(norm_cdf(0.0), 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_cdf(1.96), 0.9750021048517795, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(-1.96), 0.024997895148220435, epsilon = 1e-10);
        assert_abs_diff_eq!(norm_cdf(3.0), 0.9986501019683699, epsilon = 1e-10);
    }

    /// Φ(x) = 1/2 + φ(x) Σ x^(2n+1) / (2n+1)!!, all terms positive for x ≥ 0.
    fn series_cdf(x: f64) -> f64 {
        if x < 0.0 {
            return 1.0 - series_cdf(-x);
        }
        let mut term = x;
        let mut sum = x;
        let mut n = 1.0;
        while term > 1e-18 * sum {
            n += 2.0;
            term *= x * x / n;
            sum += term;
        }
        0.5 + norm_pdf(x) * sum
    }

    #[test]
    fn test_norm_cdf_absolute_error_sweep() {
        let mut worst: f64 = 0.0;
        for i in -2000..=2000 {
            let x = i as f64 * 0.005;
            let err = (norm_cdf(x) - series_cdf(x)).abs();
            assert!(err < 1e-10, "norm_cdf({}) off by {:e}", x, err);
            worst = worst.max(err);
        }
        println!("worst absolute error on [-10, 10]: {:e}", worst);
    }

    #[test]
    fn test_norm_cdf_tails() {
        // Lower tail keeps relative precision
        let lower = norm_cdf(-8.0);
        assert!((lower - 6.220960574271819e-16).abs() / 6.220960574271819e-16 < 1e-8);

        assert_eq!(norm_cdf(50.0), 1.0);
        assert_eq!(norm_cdf(-50.0), 0.0);
        assert_eq!(norm_cdf(f64::INFINITY), 1.0);
        assert_eq!(norm_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 2.5, 5.0] {
            assert_abs_diff_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_norm_pdf() {
        assert_abs_diff_eq!(norm_pdf(0.0), 0.3989422804014327, epsilon = 1e-15);
        assert_abs_diff_eq!(norm_pdf(1.0), norm_pdf(-1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(80.0, 120.0, 5), vec![80.0, 90.0, 100.0, 110.0, 120.0]);
        assert_eq!(linspace(0.2, 0.4, 1), vec![0.2]);
        assert!(linspace(0.0, 1.0, 0).is_empty());

        let v = linspace(0.1, 0.3, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(*v.last().unwrap(), 0.3);
    }
}
