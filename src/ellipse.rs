//! # Orbit sampling and Kepler's second law
//!
//! Helpers to check that the position chain of [`crate::kepler`] really traces the
//! expected ellipse: sample one revolution uniformly in mean anomaly, convert to Cartesian
//! coordinates in the orbital plane (focus at the origin, pericentre on the +x axis), and
//! measure the areas swept between consecutive samples. Equal time steps must sweep equal
//! areas.
//!
//! ```rust
//! use insolation::ellipse::{relative_area_spread, sample_orbit, swept_areas};
//! use insolation::orbit::OrbitParameters;
//!
//! let pluto = OrbitParameters::builder()
//!     .semi_major_axis(39.2851)
//!     .eccentricity(0.246682)
//!     .build()
//!     .unwrap();
//!
//! let samples = sample_orbit(&pluto, 360).unwrap();
//! let spread = relative_area_spread(&swept_areas(&samples)).unwrap();
//! assert!(spread < 1e-3);
//! ```

use nalgebra::Vector2;
use tracing::debug;

use crate::{
    constants::{Radian, DPI},
    insolation_errors::InsolationError,
    kepler::{distance_from_focus, eccentric_anomaly_default, true_anomaly},
    orbit::OrbitParameters,
};

/// One point of a sampled orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSample {
    pub mean_anomaly: Radian,
    pub eccentric_anomaly: Radian,
    pub true_anomaly: Radian,
    pub distance: f64,
    /// `(r cos ν, r sin ν)`
    pub position: Vector2<f64>,
}

/// Sample one full revolution in `steps` equal mean-anomaly steps.
///
/// The returned vector holds `steps + 1` samples: the last one is taken at `M = 2π` and
/// closes the curve on the first.
///
/// Errors
/// ------
/// * [`InsolationError::NotEnoughSamples`] if `steps < 2`.
pub fn sample_orbit(orbit: &OrbitParameters, steps: usize) -> Result<Vec<OrbitSample>, InsolationError> {
    if steps < 2 {
        return Err(InsolationError::NotEnoughSamples { min: 2, got: steps });
    }

    let samples: Vec<OrbitSample> = (0..=steps)
        .map(|i| {
            let mean_anomaly = DPI * i as f64 / steps as f64;
            let eccentric_anomaly = eccentric_anomaly_default(mean_anomaly, orbit.eccentricity);
            let true_anomaly = true_anomaly(eccentric_anomaly, orbit.eccentricity);
            let distance =
                distance_from_focus(true_anomaly, orbit.semi_major_axis, orbit.eccentricity);
            OrbitSample {
                mean_anomaly,
                eccentric_anomaly,
                true_anomaly,
                distance,
                position: Vector2::new(distance * true_anomaly.cos(), distance * true_anomaly.sin()),
            }
        })
        .collect();

    debug!(steps, eccentricity = orbit.eccentricity, "sampled orbit");
    Ok(samples)
}

/// Area of the triangle focus–`p0`–`p1` for each pair of consecutive samples.
///
/// This underestimates the true elliptic sector by the thin segment between the chord and
/// the arc, so it converges to the sector area as the step shrinks.
pub fn swept_areas(samples: &[OrbitSample]) -> Vec<f64> {
    samples
        .windows(2)
        .map(|pair| 0.5 * pair[0].position.perp(&pair[1].position))
        .collect()
}

/// Relative spread `2 (max − min) / (max + min)` of a set of areas.
///
/// Returns `None` for an empty slice.
pub fn relative_area_spread(areas: &[f64]) -> Option<f64> {
    let max = areas.iter().copied().reduce(f64::max)?;
    let min = areas.iter().copied().reduce(f64::min)?;
    Some(2.0 * (max - min) / (min + max))
}

/// Area of the ellipse, `π a² sqrt(1 − e²)`.
pub fn ellipse_area(orbit: &OrbitParameters) -> f64 {
    std::f64::consts::PI * orbit.semi_major_axis * orbit.mean_distance()
}
