//! # Orbit parameters
//!
//! This module defines [`OrbitParameters`], the bundle of elements describing one
//! elliptical orbit, and its validating builder [`OrbitParametersBuilder`].
//!
//! The struct is a thin, time-driven façade over the free functions of
//! [`crate::kepler`]:
//!
//! ```text
//! t ──▶ mean_anomaly ──▶ eccentric_anomaly ──▶ true_anomaly ──▶ distance / true_longitude
//! ```
//!
//! ## Example
//!
//! ```rust
//! use insolation::orbit::OrbitParameters;
//!
//! // Pluto-like orbit, one radian of mean anomaly per time unit
//! let pluto = OrbitParameters::builder()
//!     .semi_major_axis(39.2851)
//!     .eccentricity(0.246682)
//!     .mean_motion(1.0)
//!     .build()
//!     .unwrap();
//!
//! let r = pluto.distance(0.0);
//! assert!((r - 39.2851 * (1.0 - 0.246682)).abs() < 1e-9);
//! ```
//!
//! ## Notes
//!
//! - Validation happens only in [`OrbitParametersBuilder::build`]. A struct literal
//!   bypasses it, and the formulas then behave exactly like the raw functions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering::{Equal, Greater, Less};

use crate::{
    constants::{
        Degree, Radian, DPI, EARTH_ECCENTRICITY, EARTH_MEAN_MOTION, EARTH_PERH,
        EARTH_SEMI_MAJOR_AXIS,
    },
    insolation_errors::InsolationError,
    kepler::{
        distance_from_focus, eccentric_anomaly_default, mean_anomaly, mean_distance_from_focus,
        true_anomaly, true_anomaly_from_true_longitude, true_longitude_from_true_anomaly,
    },
};

/// Elements of an elliptical orbit.
///
/// Units:
/// * `semi_major_axis`: any length unit, distances are returned in the same unit
/// * `eccentricity`: unitless, `0 ≤ e < 1`
/// * `mean_motion`: radians per time unit
/// * `perihelion_time`: time of pericentre passage, same time unit as `mean_motion`
/// * `perh`: longitude of the perihelion relative to the vernal equinox, degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitParameters {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub mean_motion: f64,
    pub perihelion_time: f64,
    pub perh: Degree,
}

impl Default for OrbitParameters {
    /// The Earth's orbit: `a = 1 AU`, `e = 0.0167`, `PERH = 102.04°`, time in days.
    fn default() -> Self {
        OrbitParameters {
            semi_major_axis: EARTH_SEMI_MAJOR_AXIS,
            eccentricity: EARTH_ECCENTRICITY,
            mean_motion: EARTH_MEAN_MOTION,
            perihelion_time: 0.0,
            perh: EARTH_PERH,
        }
    }
}

impl OrbitParameters {
    pub fn builder() -> OrbitParametersBuilder {
        OrbitParametersBuilder::new()
    }

    /// Orbital period, `2π / n`.
    pub fn period(&self) -> f64 {
        DPI / self.mean_motion
    }

    pub fn mean_anomaly(&self, t: f64) -> Radian {
        mean_anomaly(self.mean_motion, t, self.perihelion_time)
    }

    pub fn eccentric_anomaly(&self, t: f64) -> Radian {
        eccentric_anomaly_default(self.mean_anomaly(t), self.eccentricity)
    }

    pub fn true_anomaly(&self, t: f64) -> Radian {
        true_anomaly(self.eccentric_anomaly(t), self.eccentricity)
    }

    /// True longitude at time `t`, in `[0, 2π)`.
    pub fn true_longitude(&self, t: f64) -> Radian {
        true_longitude_from_true_anomaly(self.true_anomaly(t), self.perh)
    }

    /// Distance from the focus at time `t`.
    pub fn distance(&self, t: f64) -> f64 {
        self.distance_at_true_anomaly(self.true_anomaly(t))
    }

    pub fn distance_at_true_anomaly(&self, true_anomaly: Radian) -> f64 {
        distance_from_focus(true_anomaly, self.semi_major_axis, self.eccentricity)
    }

    /// Distance from the focus for a given true longitude.
    ///
    /// Goes through the provisional [`true_anomaly_from_true_longitude`].
    pub fn distance_at_true_longitude(&self, true_longitude: Radian) -> f64 {
        self.distance_at_true_anomaly(true_anomaly_from_true_longitude(
            true_longitude,
            self.perh,
        ))
    }

    pub fn mean_distance(&self) -> f64 {
        mean_distance_from_focus(self.semi_major_axis, self.eccentricity)
    }
}

/// Builder for [`OrbitParameters`], with validation.
#[derive(Debug, Clone)]
pub struct OrbitParametersBuilder {
    params: OrbitParameters,
}

impl Default for OrbitParametersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitParametersBuilder {
    /// Create a new builder initialized with the Earth defaults.
    pub fn new() -> Self {
        Self {
            params: OrbitParameters::default(),
        }
    }

    pub fn semi_major_axis(mut self, v: f64) -> Self {
        self.params.semi_major_axis = v;
        self
    }
    pub fn eccentricity(mut self, v: f64) -> Self {
        self.params.eccentricity = v;
        self
    }
    pub fn mean_motion(mut self, v: f64) -> Self {
        self.params.mean_motion = v;
        self
    }
    pub fn perihelion_time(mut self, v: f64) -> Self {
        self.params.perihelion_time = v;
        self
    }
    pub fn perh(mut self, v: Degree) -> Self {
        self.params.perh = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `semi_major_axis > 0`
    /// * `0 ≤ eccentricity < 1` – parabolic and hyperbolic orbits are not supported
    /// * `mean_motion > 0`
    /// * `perihelion_time` and `perh` finite
    ///
    /// NaN fails every comparison and is therefore rejected.
    pub fn build(self) -> Result<OrbitParameters, InsolationError> {
        let p = &self.params;

        if p.semi_major_axis.partial_cmp(&0.0) != Some(Greater) || !p.semi_major_axis.is_finite()
        {
            return Err(InsolationError::InvalidOrbitParameter(
                "semi_major_axis must be finite and > 0".into(),
            ));
        }
        if !matches!(p.eccentricity.partial_cmp(&0.0), Some(Greater) | Some(Equal))
            || p.eccentricity.partial_cmp(&1.0) != Some(Less)
        {
            return Err(InsolationError::InvalidOrbitParameter(
                "eccentricity must be in [0, 1)".into(),
            ));
        }
        if p.mean_motion.partial_cmp(&0.0) != Some(Greater) || !p.mean_motion.is_finite() {
            return Err(InsolationError::InvalidOrbitParameter(
                "mean_motion must be finite and > 0".into(),
            ));
        }
        if !p.perihelion_time.is_finite() || !p.perh.is_finite() {
            return Err(InsolationError::InvalidOrbitParameter(
                "perihelion_time and perh must be finite".into(),
            ));
        }

        Ok(self.params)
    }
}
