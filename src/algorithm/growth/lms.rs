//! LMS percentile estimation
//!
//! A measurement is turned into a z-score with the Box-Cox (LMS)
//! transform and then into a percentile using the Abramowitz-Stegun
//! rational approximation of the normal CDF (absolute error about 1.5e-7).
//! The approximation is used instead of an exact CDF so results stay
//! comparable with previously reported percentiles.

const A1: f64 = 0.254_829_592;
const A2: f64 = -0.284_496_736;
const A3: f64 = 1.421_413_741;
const A4: f64 = -1.453_152_027;
const A5: f64 = 1.061_405_429;
const P: f64 = 0.327_591_1;

/// Standard score of `value` given the LMS parameters
///
/// `l == 0` is the log-normal case.
#[must_use]
pub fn z_score(value: f64, l: f64, m: f64, s: f64) -> f64 {
    if l == 0.0 {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    }
}

/// Approximate standard normal CDF, in `[0, 1]`
#[must_use]
pub fn normal_cdf(z: f64) -> f64 {
    // The polynomial is off by ~1e-9 at the origin
    if z == 0.0 {
        return 0.5;
    }

    let sign = if z < 0.0 { -1.0 } else { 1.0 };
    let x = z.abs() / std::f64::consts::SQRT_2;
    let t = 1.0 / (1.0 + P * x);
    let y = 1.0 - (((((A5 * t + A4) * t) + A3) * t + A2) * t + A1) * t * (-x * x).exp();
    0.5 * (1.0 + sign * y)
}

/// Percentile (0-100) of `value` against the LMS parameters
///
/// Returns `None` when the value, median or coefficient of variation is
/// zero or not a number.
#[must_use]
pub fn percentile(value: f64, l: f64, m: f64, s: f64) -> Option<f64> {
    if !is_usable(value) || !is_usable(m) || !is_usable(s) || l.is_nan() {
        return None;
    }

    let z = z_score(value, l, m, s);
    if z.is_nan() {
        return None;
    }
    Some(normal_cdf(z) * 100.0)
}

fn is_usable(x: f64) -> bool {
    x != 0.0 && !x.is_nan()
}
