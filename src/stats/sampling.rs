//! Gaussian draw helpers and the standard normal quantile.
//!
//! All stochastic pipeline decisions go through the two draw functions so
//! that a run consumes exactly one sample per decision; this keeps the RNG
//! stream aligned across configurations and makes runs reproducible from a
//! seed.

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Draw an integer from `Normal(mean, sd)`, rounded to the nearest integer
/// and clamped to the inclusive range `[min, max]`.
pub fn gaussian_int_in_range<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    sd: f64,
    min: i64,
    max: i64,
) -> i64 {
    // sd is validated non-negative upstream
    let normal = Normal::new(mean, sd).unwrap();
    let draw = normal.sample(rng).round() as i64;
    draw.clamp(min, max)
}

/// Draw from `Normal(mean, sd)` truncated below at zero.
pub fn gaussian_non_negative<R: Rng + ?Sized>(rng: &mut R, mean: f64, sd: f64) -> f64 {
    // sd is validated non-negative upstream
    let normal = Normal::new(mean, sd).unwrap();
    normal.sample(rng).max(0.0)
}

/// Quantile of `Normal(mean, sd)` at probability `p`.
///
/// `p` is clamped away from 0 and 1 so the result stays finite for
/// boundary ratios.
pub fn quantile(mean: f64, sd: f64, p: f64) -> f64 {
    mean + sd * normal_quantile(p)
}

/// Inverse CDF of the standard normal distribution.
///
/// Acklam's rational approximation, with absolute relative error below
/// 1.15e-9 over the open unit interval. Inputs are clamped to
/// `[1e-12, 1 - 1e-12]`.
pub fn normal_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    let p = p.clamp(1e-12, 1.0 - 1e-12);

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_gaussian_int_in_range_clamps() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for _ in 0..200 {
            let v = gaussian_int_in_range(&mut rng, 5.0, 10.0, 0, 9);
            assert!((0..=9).contains(&v));
        }
    }

    #[test]
    fn test_gaussian_int_zero_sd_is_exact() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(gaussian_int_in_range(&mut rng, 3.0, 0.0, 0, 9), 3);
        }
        assert_eq!(gaussian_int_in_range(&mut rng, 42.0, 0.0, 0, 9), 9);
        assert_eq!(gaussian_int_in_range(&mut rng, -3.0, 0.0, 0, 9), 0);
    }

    #[test]
    fn test_gaussian_non_negative() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        for _ in 0..500 {
            assert!(gaussian_non_negative(&mut rng, -1.0, 2.0) >= 0.0);
        }
    }

    #[test]
    fn test_gaussian_draws_are_reproducible() {
        let mut a = Xoshiro256PlusPlus::seed_from_u64(99);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(
                gaussian_non_negative(&mut a, 10.0, 2.0),
                gaussian_non_negative(&mut b, 10.0, 2.0)
            );
        }
    }

    #[test]
    fn test_normal_quantile_known_values() {
        assert!((normal_quantile(0.5)).abs() < 1e-9);
        assert!((normal_quantile(0.975) - 1.959964).abs() < 1e-5);
        assert!((normal_quantile(0.025) + 1.959964).abs() < 1e-5);
        assert!((normal_quantile(0.84134474) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_normal_quantile_symmetry() {
        for &p in &[0.01, 0.1, 0.25, 0.4] {
            let lo = normal_quantile(p);
            let hi = normal_quantile(1.0 - p);
            assert!((lo + hi).abs() < 1e-8, "asymmetric at p = {p}");
        }
    }

    #[test]
    fn test_quantile_boundaries_are_finite() {
        assert!(quantile(10.0, 1.0, 0.0).is_finite());
        assert!(quantile(10.0, 1.0, 1.0).is_finite());
        assert!((quantile(10.0, 2.0, 0.5) - 10.0).abs() < 1e-9);
    }
}
