//! # Position on an elliptical orbit
//!
//! Closed-form and iterative relations between the anomalies of a body on a Keplerian
//! ellipse, following Murray & Dermott (*Solar System Dynamics*) and Goosse et al.
//! (*Introduction to climate dynamics and climate modeling*).
//!
//! ```text
//! t ──▶ M = n(t − τ) ──Kepler──▶ E ──half angle──▶ ν ──▶ r = a(1 − e²)/(1 + e cos ν)
//!                                                  └──▶ λ = ν + 180° + PERH
//! ```
//!
//! None of these functions validate their inputs: an eccentricity `e ≥ 1` yields NaN or
//! infinite results from the underlying square roots and divisions.

use crate::{
    constants::{Degree, Radian, DEFAULT_KEPLER_TOLERANCE, DEFAULT_STARTER_CORRECTION, DPI, RADEG},
    root_finding::{newton_raphson, StepConvergency},
};

/// Bring an angle into the half-open range `[min, max)` by adding or removing whole
/// multiples of `max - min`.
pub fn clip_angle(angle: f64, min: f64, max: f64) -> f64 {
    let length = max - min;
    let offset = (angle - min).rem_euclid(length);
    // rem_euclid may round a tiny negative offset up to `length` itself
    if offset >= length {
        min
    } else {
        min + offset
    }
}

/// Return the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    clip_angle(a, 0.0, DPI)
}

/// Mean anomaly (Murray & Dermott 2.39).
///
/// Arguments
/// ---------
/// * `n`: mean motion
/// * `t`: time
/// * `tau`: time of pericentre passage
///
/// The result is not reduced to `[0, 2π)`.
pub fn mean_anomaly(n: f64, t: f64, tau: f64) -> Radian {
    n * (t - tau)
}

/// Eccentric anomaly from the mean anomaly by solving Kepler's equation
/// `E - e sin E = M` (Murray & Dermott 2.52) with Newton–Raphson.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` (radians)
/// * `eccentricity`: eccentricity of the orbit, `0 ≤ e < 1`
/// * `tolerance`: relative tolerance; the Newton step limit is `2 · tolerance · E0`
/// * `k`: starting value correction, `E0 = M + sign(sin M) · k · e` (Murray & Dermott 2.64)
///
/// Return
/// ------
/// * the eccentric anomaly `E` (radians), not reduced to `[0, 2π)`.
///
/// Notes
/// -----
/// * The step limit scales with the starting value. For `M = 0` the seed is exactly `0`,
///   which is already the root, so the solver returns `0.0` on the first step.
/// * A negative seed gives a negative step limit; only an exact fixed point then stops
///   the iteration early, otherwise the last of the capped iterations is returned.
pub fn eccentric_anomaly(mean_anomaly: Radian, eccentricity: f64, tolerance: f64, k: f64) -> Radian {
    let e0 = mean_anomaly + sign(mean_anomaly.sin()) * k * eccentricity;
    let mut convergency = StepConvergency::new(2.0 * tolerance * e0);

    newton_raphson(
        e0,
        |x| x - eccentricity * x.sin() - mean_anomaly,
        |x| 1.0 - eccentricity * x.cos(),
        &mut convergency,
    )
}

/// [`eccentric_anomaly`] with the default tolerance (`1e-9`) and starter correction (`0.85`).
pub fn eccentric_anomaly_default(mean_anomaly: Radian, eccentricity: f64) -> Radian {
    eccentric_anomaly(
        mean_anomaly,
        eccentricity,
        DEFAULT_KEPLER_TOLERANCE,
        DEFAULT_STARTER_CORRECTION,
    )
}

/// Sign function with `sign(0) = 0`, unlike [`f64::signum`].
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// True anomaly from the eccentric anomaly (Murray & Dermott 2.46).
///
/// The half-angle formula `tan(ν/2) = sqrt((1 + e)/(1 − e)) tan(E/2)` is single valued
/// only for `E < π`. For `E ≥ π` the anomaly is reflected about `π`, converted, and
/// reflected back.
pub fn true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let reflect = |theta: f64| DPI - theta;
    let upper_hemisphere = |ecc_anom: f64| {
        2.0 * (((1.0 + eccentricity) / (1.0 - eccentricity)).sqrt() * (0.5 * ecc_anom).tan()).atan()
    };

    if eccentric_anomaly < std::f64::consts::PI {
        upper_hemisphere(eccentric_anomaly)
    } else {
        reflect(upper_hemisphere(reflect(eccentric_anomaly)))
    }
}

/// Distance from the focus (Goosse et al. 2.15, Murray & Dermott 2.19).
///
/// Arguments
/// ---------
/// * `true_anomaly`: true anomaly (radians)
/// * `semi_major_axis`: semi-major axis, the result has the same unit
/// * `eccentricity`: eccentricity, `0 ≤ e < 1`
pub fn distance_from_focus(true_anomaly: Radian, semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * true_anomaly.cos())
}

/// Mean distance from the focus (Goosse et al. 2.16).
pub fn mean_distance_from_focus(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity).sqrt()
}

/// True longitude from the true anomaly (Goosse et al. 2.19), in `[0, 2π)`.
///
/// `perh` is the longitude of the perihelion in degrees, measured from the vernal
/// equinox; see [`crate::constants::EARTH_PERH`].
pub fn true_longitude_from_true_anomaly(true_anomaly: Radian, perh: Degree) -> Radian {
    principal_angle((180.0 + perh) * RADEG + true_anomaly)
}

/// True anomaly from the true longitude.
///
/// **Provisional**: this is the bare linear inverse of
/// [`true_longitude_from_true_anomaly`] without any angle reduction, and it has not been
/// checked against the reference formulas. Do not rely on an exact round trip.
pub fn true_anomaly_from_true_longitude(true_longitude: Radian, perh: Degree) -> Radian {
    true_longitude - (180.0 + perh) * RADEG
}

#[cfg(test)]
mod kepler_test {
    use std::f64::consts::PI;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::constants::{EARTH_ECCENTRICITY, EARTH_PERH};

    #[test]
    fn test_clip_angle() {
        assert_eq!(clip_angle(0.0, 0.0, DPI), 0.0);
        assert_eq!(clip_angle(DPI, 0.0, DPI), 0.0);
        assert_relative_eq!(clip_angle(-PI / 2.0, 0.0, DPI), 1.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(clip_angle(5.0 * PI, 0.0, DPI), PI, epsilon = 1e-12);
        assert_relative_eq!(clip_angle(3.0 * PI / 2.0, -PI, PI), -PI / 2.0, epsilon = 1e-12);
        assert_eq!(clip_angle(PI, -PI, PI), -PI);
        assert_eq!(clip_angle(-1e-20, 0.0, DPI), 0.0);
        assert_relative_eq!(clip_angle(370.0, 0.0, 360.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clip_angle_far_away() {
        let angle = 1.0e6 * DPI + 0.25;
        let clipped = principal_angle(angle);
        assert!((0.0..DPI).contains(&clipped));
        assert_abs_diff_eq!(clipped, 0.25, epsilon = 1e-8);
    }

    #[test]
    fn test_mean_anomaly() {
        assert_eq!(mean_anomaly(2.0, 3.0, 0.0), 6.0);
        assert_eq!(mean_anomaly(2.0, 3.0, 1.0), 4.0);
        assert_eq!(mean_anomaly(1.0, -10.0, 0.0), -10.0);
    }

    #[test]
    fn test_eccentric_anomaly() {
        assert_eq!(eccentric_anomaly_default(0.0, 0.2), 0.0);
        assert_abs_diff_eq!(
            eccentric_anomaly_default(PI / 8.0, 0.2),
            0.4861429141492005,
            epsilon = 1e-8
        );
        assert_abs_diff_eq!(
            eccentric_anomaly_default(PI / 4.0, 0.2),
            0.9478282237995902,
            epsilon = 1e-8
        );
        assert_abs_diff_eq!(
            eccentric_anomaly_default(PI / 2.0, 0.2),
            1.7669606079827387,
            epsilon = 1e-8
        );
        assert_abs_diff_eq!(
            eccentric_anomaly_default(3.0 * PI / 4.0, 0.2),
            2.4791961516769594,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_eccentric_anomaly_circular_orbit() {
        for m in [0.1, 1.0, 2.5, 4.0, 6.0] {
            assert_abs_diff_eq!(eccentric_anomaly_default(m, 0.0), m, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_eccentric_anomaly_lower_half() {
        let e = 0.3;
        let m = 1.5 * PI;
        let ecc_anom = eccentric_anomaly_default(m, e);
        assert_abs_diff_eq!(ecc_anom - e * ecc_anom.sin(), m, epsilon = 1e-8);
        assert!(ecc_anom < m);
    }

    #[test]
    fn test_true_anomaly() {
        assert_eq!(true_anomaly(0.0, 0.2), 0.0);
        assert_relative_eq!(true_anomaly(PI, 0.2), PI);
        assert_relative_eq!(true_anomaly(1.2, 0.0), 1.2, epsilon = 1e-12);
        assert_relative_eq!(true_anomaly(4.5, 0.0), 4.5, epsilon = 1e-12);

        // ahead of E before aphelion, behind after it
        assert!(true_anomaly(1.0, 0.3) > 1.0);
        assert!(true_anomaly(2.0 * PI - 1.0, 0.3) < 2.0 * PI - 1.0);
    }

    #[test]
    fn test_true_anomaly_reflection_is_symmetric() {
        let e = 0.4;
        for ecc_anom in [0.2, 0.9, 1.7, 2.8] {
            let upper = true_anomaly(ecc_anom, e);
            let lower = true_anomaly(DPI - ecc_anom, e);
            assert_relative_eq!(upper + lower, DPI, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_distance_from_focus() {
        let a = 39.2851;
        let e = 0.246682;
        assert_relative_eq!(distance_from_focus(0.0, a, e), a * (1.0 - e), epsilon = 1e-12);
        assert_relative_eq!(distance_from_focus(PI, a, e), a * (1.0 + e), epsilon = 1e-12);
        assert_relative_eq!(
            distance_from_focus(PI / 2.0, a, e),
            a * (1.0 - e * e),
            epsilon = 1e-12
        );
        assert_eq!(distance_from_focus(1.0, 2.0, 0.0), 2.0);
    }

    #[test]
    fn test_distance_from_focus_parabolic_is_not_finite() {
        assert!(!distance_from_focus(PI, 1.0, 1.0).is_finite());
    }

    #[test]
    fn test_mean_distance_from_focus() {
        assert_eq!(mean_distance_from_focus(1.0, 0.0), 1.0);
        assert_relative_eq!(
            mean_distance_from_focus(1.0, EARTH_ECCENTRICITY),
            0.99986054527619,
            epsilon = 1e-9
        );
        assert!(mean_distance_from_focus(1.0, 1.5).is_nan());
    }

    #[test]
    fn test_true_longitude_from_true_anomaly() {
        // perihelion sits 180° + PERH away from the vernal equinox
        assert_relative_eq!(
            true_longitude_from_true_anomaly(0.0, EARTH_PERH),
            (282.04 - 0.0) * RADEG,
            epsilon = 1e-12
        );
        let lon = true_longitude_from_true_anomaly(PI, EARTH_PERH);
        assert!((0.0..DPI).contains(&lon));
        assert_relative_eq!(lon, 102.04 * RADEG, epsilon = 1e-12);
        assert_eq!(true_longitude_from_true_anomaly(0.0, 180.0), 0.0);
    }

    #[test]
    fn test_true_anomaly_from_true_longitude_is_unreduced() {
        // provisional inverse: a plain shift, no reduction to [0, 2π)
        let nu = true_anomaly_from_true_longitude(0.0, EARTH_PERH);
        assert_relative_eq!(nu, -282.04 * RADEG, epsilon = 1e-12);
        assert!(nu < 0.0);
    }
}
