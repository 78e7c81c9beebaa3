use insolation::constants::{DPI, RADEG};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator so every run sees the same inputs.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42_u64)
}

/// Uniform random angle in [0, 2π)
pub fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * DPI
}

#[allow(dead_code)]
/// Uniform random latitude in (-max_abs_deg, max_abs_deg), in radians.
pub fn rand_latitude(rng: &mut StdRng, max_abs_deg: f64) -> f64 {
    rng.random_range(-max_abs_deg..max_abs_deg) * RADEG
}

#[allow(dead_code)]
/// Uniform random local solar time in [0, 24) hours.
pub fn rand_hour(rng: &mut StdRng) -> f64 {
    rng.random_range(0.0..24.0)
}
