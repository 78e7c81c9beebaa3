mod common;

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use insolation::constants::DPI;
use insolation::kepler::{
    eccentric_anomaly, eccentric_anomaly_default, principal_angle, true_anomaly,
    true_anomaly_from_true_longitude, true_longitude_from_true_anomaly,
};
use insolation::root_finding::{newton_raphson, StepConvergency};
use rand::Rng;

use crate::common::{rand_angle, seeded_rng};

#[test]
fn test_kepler_round_trip() {
    let mut rng = seeded_rng();
    for _ in 0..10_000 {
        let e: f64 = rng.random_range(0.0..=0.9);
        let m = rand_angle(&mut rng);
        let ecc_anom = eccentric_anomaly_default(m, e);
        assert_abs_diff_eq!(ecc_anom - e * ecc_anom.sin(), m, epsilon = 1e-8);
    }
}

#[test]
fn test_kepler_grid_edges() {
    for e in [0.0, 0.1, 0.5, 0.9] {
        for m in [1e-6, 1e-3, PI - 1e-6, PI, PI + 1e-6, DPI - 1e-6] {
            let ecc_anom = eccentric_anomaly_default(m, e);
            assert_abs_diff_eq!(ecc_anom - e * ecc_anom.sin(), m, epsilon = 1e-8);
        }
    }
}

#[test]
fn test_tighter_tolerance_is_not_worse() {
    let mut rng = seeded_rng();
    for _ in 0..1_000 {
        let e: f64 = rng.random_range(0.0..0.9);
        let m = rand_angle(&mut rng);
        let loose = eccentric_anomaly(m, e, 1e-6, 0.85);
        let tight = eccentric_anomaly(m, e, 1e-12, 0.85);
        let residual = |x: f64| (x - e * x.sin() - m).abs();
        assert!(residual(tight) <= residual(loose) + 1e-14);
    }
}

#[test]
fn test_starter_correction_does_not_change_root() {
    for k in [0.0, 0.5, 0.85] {
        assert_abs_diff_eq!(
            eccentric_anomaly(PI / 4.0, 0.2, 1e-9, k),
            0.9478282237995902,
            epsilon = 1e-8
        );
    }
}

#[test]
fn test_true_anomaly_monotonic_over_revolution() {
    let e = 0.246682;
    let mut previous = -1.0;
    for i in 0..=72 {
        let m = DPI * i as f64 / 72.0;
        let nu = true_anomaly(eccentric_anomaly_default(m, e), e);
        assert!(nu > previous, "true anomaly went backwards at step {i}");
        previous = nu;
    }
}

#[test]
fn test_true_longitude_is_normalized() {
    let mut rng = seeded_rng();
    for _ in 0..1_000 {
        let nu: f64 = rng.random_range(-20.0..20.0);
        let perh: f64 = rng.random_range(0.0..360.0);
        let lon = true_longitude_from_true_anomaly(nu, perh);
        assert!((0.0..DPI).contains(&lon));
    }
}

/// The inverse is a provisional formula: it only agrees with the forward transform up to
/// whole turns, so compare principal values and nothing more.
#[test]
fn test_provisional_inverse_matches_up_to_whole_turns() {
    let perh = 102.04;
    for nu in [0.3, 2.0, 4.0, 6.0] {
        let back = true_anomaly_from_true_longitude(true_longitude_from_true_anomaly(nu, perh), perh);
        assert_abs_diff_eq!(principal_angle(back), principal_angle(nu), epsilon = 1e-9);
    }
}

#[test]
fn test_generic_newton_raphson_residual() {
    let f = |x: f64| x.powi(3) - x - 1.0;
    let df = |x: f64| 3.0 * x.powi(2) - 1.0;
    for start in [1.0, 1.5, 2.0, 5.0] {
        let mut conv = StepConvergency::new(1e-12);
        let root = newton_raphson(start, f, df, &mut conv);
        assert!(f(root).abs() < 1e-10);
    }
}
