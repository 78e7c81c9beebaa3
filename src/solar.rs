//! # Solar geometry and irradiance
//!
//! Model for the solar irradiance received at a point of a planet's surface, based on
//! *Solar Radiation on Mars* (Appelbaum & Flood, NASA Lewis Research Center) and the daily
//! insolation formulas of Goosse et al.
//!
//! ## Overview
//!
//! The free functions take every angle explicitly:
//!
//! - [`sin_declination`], [`hour_angle`], [`cos_zenith_angle`] – position of the star in
//!   the local sky,
//! - [`beam_irradience`] – inverse-square law,
//! - [`hour_angle_sunrise_sunset`], [`length_of_day`] – daylight, including polar day and
//!   polar night.
//!
//! [`Solar`] binds a solar constant to a [`Planet`] and adds the quantities that need the
//! orbital distance: [`Solar::surface_irradience`] and [`Solar::surface_irradience_daily`].
//!
//! ## Example
//!
//! ```rust
//! use insolation::planet::EllipticalPlanet;
//! use insolation::solar::Solar;
//!
//! let earth = EllipticalPlanet::builder().latitude_deg(52.0).build().unwrap();
//! let solar = Solar::builder(earth).build().unwrap();
//!
//! // summer solstice, local noon
//! let noon = solar.local_surface_irradience(std::f64::consts::FRAC_PI_2, 12.0);
//! let midnight = solar.local_surface_irradience(std::f64::consts::FRAC_PI_2, 0.0);
//! assert!(noon > 1000.0);
//! assert_eq!(midnight, 0.0);
//! ```
//!
//! ## Notes
//!
//! - Latitudes and obliquities are not validated here. Out-of-range values give NaN from
//!   the trigonometric primitives.
//! - The polar-day / polar-night branch of [`hour_angle_sunrise_sunset`] decides between
//!   continuous daylight and continuous night from the season (the half of the orbit the
//!   true longitude lies in). It has only been checked for Earth-like obliquities.

use std::f64::consts::PI;

use crate::{
    constants::{Hour, Radian, DEG_PER_HOUR, HOURS_PER_DAY, RADEG, SECONDS_PER_DAY, SOLAR_CONSTANT},
    insolation_errors::InsolationError,
    planet::Planet,
};

/// Sine of the solar declination.
pub fn sin_declination(obliquity: Radian, true_longitude: Radian) -> f64 {
    obliquity.sin() * true_longitude.sin()
}

/// Hour angle for a local solar time `t` in hours; solar noon (`t = 12`) maps to `0`.
pub fn hour_angle(t: Hour) -> Radian {
    (DEG_PER_HOUR * t - 180.0) * RADEG
}

/// Cosine of the solar zenith angle (Appelbaum & Flood eq. 5).
///
/// Negative values mean the star is below the horizon.
pub fn cos_zenith_angle(obliquity: Radian, true_longitude: Radian, latitude: Radian, t: Hour) -> f64 {
    let sin_decl = sin_declination(obliquity, true_longitude);
    let cos_decl = (1.0 - sin_decl * sin_decl).sqrt();
    latitude.sin() * sin_decl + latitude.cos() * cos_decl * hour_angle(t).cos()
}

/// Beam irradiance at distance `r` for a solar constant `s` defined at unit distance
/// (Appelbaum & Flood eq. 1).
pub fn beam_irradience(s: f64, r: f64) -> f64 {
    s / (r * r)
}

/// Hour angle of sunset (or of sunrise when `sunset` is false).
///
/// Away from the polar circles this is `±acos(−tan δ tan φ)`. When `|tan δ tan φ| ≥ 1`
/// the star either never sets or never rises:
///
/// | latitude | `tan δ tan φ` | true longitude | result            |
/// |----------|---------------|----------------|-------------------|
/// | `φ > 0`  | `> 1`         | `(0, π)`       | `π` (polar day)   |
/// | `φ < 0`  | `> 1`         | `(π, 2π)`      | `π` (polar day)   |
/// | other    |               |                | `0` (polar night) |
///
/// The polar-day result is `π` for sunrise as well as sunset.
pub fn hour_angle_sunrise_sunset(
    obliquity: Radian,
    true_longitude: Radian,
    latitude: Radian,
    sunset: bool,
) -> Radian {
    let declination = sin_declination(obliquity, true_longitude).asin();
    let product = declination.tan() * latitude.tan();

    if product.abs() < 1.0 {
        let ha = (-product).acos();
        if sunset {
            ha
        } else {
            -ha
        }
    } else if latitude > 0.0 && product > 1.0 && 0.0 < true_longitude && true_longitude < PI {
        PI
    } else if latitude < 0.0
        && product > 1.0
        && PI < true_longitude
        && true_longitude < 2.0 * PI
    {
        PI
    } else {
        0.0
    }
}

/// Hours of daylight, in `[0, 24]`.
pub fn length_of_day(obliquity: Radian, true_longitude: Radian, latitude: Radian) -> Hour {
    let ha = hour_angle_sunrise_sunset(obliquity, true_longitude, latitude, true);
    (HOURS_PER_DAY / PI * ha).max(0.0)
}

/// Solar irradiance model for one planet.
///
/// Attributes
/// ----------
/// * `planet`: the planet being processed
/// * `solar_constant`: irradiance at unit distance from the star, in W/m²
#[derive(Debug, Clone, PartialEq)]
pub struct Solar<P: Planet> {
    planet: P,
    solar_constant: f64,
}

impl<P: Planet> Solar<P> {
    /// Create a model with an explicit solar constant, without validation.
    pub fn new(planet: P, solar_constant: f64) -> Self {
        Solar {
            planet,
            solar_constant,
        }
    }

    pub fn builder(planet: P) -> SolarBuilder<P> {
        SolarBuilder::new(planet)
    }

    pub fn planet(&self) -> &P {
        &self.planet
    }

    pub fn solar_constant(&self) -> f64 {
        self.solar_constant
    }

    /// Beam irradiance in W/m² at distance `r`.
    pub fn beam_irradience(&self, r: f64) -> f64 {
        beam_irradience(self.solar_constant, r)
    }

    /// Beam irradiance on a horizontal surface (Appelbaum & Flood eqs. 5 and 6).
    ///
    /// Clamped to zero while the star is below the horizon.
    pub fn surface_irradience(&self, true_longitude: Radian, latitude: Radian, t: Hour) -> f64 {
        let cos_zenith_angle = self.planet.cos_zenith_angle(true_longitude, latitude, t);
        let r = self.planet.instantaneous_distance(true_longitude);
        (cos_zenith_angle * self.beam_irradience(r)).max(0.0)
    }

    pub fn hour_angle_sunrise_sunset(&self, true_longitude: Radian, latitude: Radian, sunset: bool) -> Radian {
        hour_angle_sunrise_sunset(self.planet.obliquity(), true_longitude, latitude, sunset)
    }

    pub fn length_of_day(&self, true_longitude: Radian, latitude: Radian) -> Hour {
        length_of_day(self.planet.obliquity(), true_longitude, latitude)
    }

    /// Daily insolation on a horizontal surface, in J/m² per day (Goosse et al. 2.21).
    ///
    /// `beam · (86400/π) · (h₀ sin φ sin δ + cos φ cos δ sin h₀)`, with `h₀` the sunset
    /// hour angle.
    pub fn surface_irradience_daily(&self, true_longitude: Radian, latitude: Radian) -> f64 {
        let sin_decl = self.planet.sin_declination(true_longitude);
        let cos_decl = (1.0 - sin_decl * sin_decl).sqrt();
        let ha = self.hour_angle_sunrise_sunset(true_longitude, latitude, true);
        let r = self.planet.instantaneous_distance(true_longitude);

        self.beam_irradience(r)
            * (SECONDS_PER_DAY / PI)
            * (ha * latitude.sin() * sin_decl + latitude.cos() * cos_decl * ha.sin())
    }

    /// [`Solar::surface_irradience`] at the planet's own latitude.
    pub fn local_surface_irradience(&self, true_longitude: Radian, t: Hour) -> f64 {
        self.surface_irradience(true_longitude, self.planet.latitude(), t)
    }

    /// [`Solar::surface_irradience_daily`] at the planet's own latitude.
    pub fn local_surface_irradience_daily(&self, true_longitude: Radian) -> f64 {
        self.surface_irradience_daily(true_longitude, self.planet.latitude())
    }

    /// [`Solar::length_of_day`] at the planet's own latitude.
    pub fn local_length_of_day(&self, true_longitude: Radian) -> Hour {
        self.length_of_day(true_longitude, self.planet.latitude())
    }
}

/// Builder for [`Solar`], with validation.
#[derive(Debug, Clone)]
pub struct SolarBuilder<P: Planet> {
    planet: P,
    solar_constant: f64,
}

impl<P: Planet> SolarBuilder<P> {
    /// Start from the planet and the default solar constant (1371 W/m²).
    pub fn new(planet: P) -> Self {
        SolarBuilder {
            planet,
            solar_constant: SOLAR_CONSTANT,
        }
    }

    pub fn solar_constant(mut self, v: f64) -> Self {
        self.solar_constant = v;
        self
    }

    /// Finalize the builder; the solar constant must be finite and strictly positive.
    pub fn build(self) -> Result<Solar<P>, InsolationError> {
        if !(self.solar_constant.is_finite() && self.solar_constant > 0.0) {
            return Err(InsolationError::InvalidSolarParameter(format!(
                "solar constant must be finite and > 0, got {}",
                self.solar_constant
            )));
        }
        Ok(Solar::new(self.planet, self.solar_constant))
    }
}
