//! # Planet capability
//!
//! The solar model never looks at an orbit directly. It only needs a *planet*: something
//! that knows its obliquity, the latitude of the point of interest, and how far it is from
//! its star at a given true longitude. [`Planet`] captures that contract, and
//! [`EllipticalPlanet`] is the implementation backed by an [`OrbitParameters`].
//!
//! ```rust
//! use insolation::planet::{EllipticalPlanet, Planet};
//!
//! let earth = EllipticalPlanet::builder()
//!     .latitude_deg(45.0)
//!     .build()
//!     .unwrap();
//!
//! let r = earth.instantaneous_distance(std::f64::consts::FRAC_PI_2);
//! assert!(r > 0.98 && r < 1.02);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    constants::{Degree, Hour, Radian, EARTH_OBLIQUITY, RADEG},
    insolation_errors::InsolationError,
    orbit::OrbitParameters,
    solar,
};

/// What the solar model needs to know about a planet.
///
/// Any type exposing these three quantities can drive a [`crate::solar::Solar`] model.
/// The provided methods forward to the free functions of [`crate::solar`].
pub trait Planet {
    /// Tilt of the rotation axis relative to the orbital plane.
    fn obliquity(&self) -> Radian;

    /// Latitude of the point of interest on the surface.
    fn latitude(&self) -> Radian;

    /// Distance from the star when the planet is at `true_longitude`.
    fn instantaneous_distance(&self, true_longitude: Radian) -> f64;

    fn sin_declination(&self, true_longitude: Radian) -> f64 {
        solar::sin_declination(self.obliquity(), true_longitude)
    }

    fn cos_zenith_angle(&self, true_longitude: Radian, latitude: Radian, t: Hour) -> f64 {
        solar::cos_zenith_angle(self.obliquity(), true_longitude, latitude, t)
    }
}

impl<P: Planet + ?Sized> Planet for &P {
    fn obliquity(&self) -> Radian {
        (**self).obliquity()
    }

    fn latitude(&self) -> Radian {
        (**self).latitude()
    }

    fn instantaneous_distance(&self, true_longitude: Radian) -> f64 {
        (**self).instantaneous_distance(true_longitude)
    }
}

/// A planet on an elliptical orbit.
///
/// The distance is obtained through
/// [`true_anomaly_from_true_longitude`](crate::kepler::true_anomaly_from_true_longitude)
/// and [`distance_from_focus`](crate::kepler::distance_from_focus).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalPlanet {
    pub orbit: OrbitParameters,
    /// radians
    pub obliquity: Radian,
    /// radians
    pub latitude: Radian,
}

impl Default for EllipticalPlanet {
    /// The Earth, observed from the equator.
    fn default() -> Self {
        EllipticalPlanet {
            orbit: OrbitParameters::default(),
            obliquity: EARTH_OBLIQUITY * RADEG,
            latitude: 0.0,
        }
    }
}

impl EllipticalPlanet {
    pub fn builder() -> EllipticalPlanetBuilder {
        EllipticalPlanetBuilder::new()
    }

    /// The same planet observed from another latitude.
    pub fn at_latitude(&self, latitude: Radian) -> Self {
        EllipticalPlanet { latitude, ..*self }
    }
}

impl Planet for EllipticalPlanet {
    fn obliquity(&self) -> Radian {
        self.obliquity
    }

    fn latitude(&self) -> Radian {
        self.latitude
    }

    fn instantaneous_distance(&self, true_longitude: Radian) -> f64 {
        self.orbit.distance_at_true_longitude(true_longitude)
    }
}

/// Builder for [`EllipticalPlanet`], with validation.
#[derive(Debug, Clone)]
pub struct EllipticalPlanetBuilder {
    planet: EllipticalPlanet,
}

impl Default for EllipticalPlanetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EllipticalPlanetBuilder {
    pub fn new() -> Self {
        Self {
            planet: EllipticalPlanet::default(),
        }
    }

    pub fn orbit(mut self, orbit: OrbitParameters) -> Self {
        self.planet.orbit = orbit;
        self
    }
    pub fn obliquity(mut self, v: Radian) -> Self {
        self.planet.obliquity = v;
        self
    }
    pub fn obliquity_deg(mut self, v: Degree) -> Self {
        self.planet.obliquity = v * RADEG;
        self
    }
    pub fn latitude(mut self, v: Radian) -> Self {
        self.planet.latitude = v;
        self
    }
    pub fn latitude_deg(mut self, v: Degree) -> Self {
        self.planet.latitude = v * RADEG;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `0 ≤ obliquity ≤ π`
    /// * `-π/2 ≤ latitude ≤ π/2`
    /// * the orbit passes the checks of
    ///   [`OrbitParametersBuilder::build`](crate::orbit::OrbitParametersBuilder::build)
    pub fn build(self) -> Result<EllipticalPlanet, InsolationError> {
        let p = self.planet;

        if !(0.0..=PI).contains(&p.obliquity) {
            return Err(InsolationError::InvalidPlanetParameter(
                "obliquity must be in [0, π]".into(),
            ));
        }
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&p.latitude) {
            return Err(InsolationError::InvalidPlanetParameter(
                "latitude must be in [-π/2, π/2]".into(),
            ));
        }

        let o = p.orbit;
        let orbit = OrbitParameters::builder()
            .semi_major_axis(o.semi_major_axis)
            .eccentricity(o.eccentricity)
            .mean_motion(o.mean_motion)
            .perihelion_time(o.perihelion_time)
            .perh(o.perh)
            .build()?;

        Ok(EllipticalPlanet { orbit, ..p })
    }
}
