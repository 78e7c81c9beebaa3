//! # Constants and type definitions for insolation
//!
//! This module centralizes the **physical constants**, **conversion factors**, and
//! **named defaults** used throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, days ↔ seconds)
//! - Core type aliases used across the crate
//! - Earth-specific orbital and solar defaults
//! - Numerical defaults of the Kepler solver
//!
//! The Earth values are only defaults: every function and builder that uses them accepts
//! an explicit override so other planets can be modelled.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Hours → degrees of hour angle (the sky turns 15° per hour)
pub const DEG_PER_HOUR: f64 = 15.0;

// -------------------------------------------------------------------------------------------------
// Earth defaults
// -------------------------------------------------------------------------------------------------

/// Eccentricity of the Earth's orbit
pub const EARTH_ECCENTRICITY: f64 = 0.0167;

/// Longitude of the perihelion measured from the moving vernal equinox, in degrees
/// (Goosse et al., PERH)
pub const EARTH_PERH: Degree = 102.04;

/// Obliquity of the Earth's rotation axis, in degrees
pub const EARTH_OBLIQUITY: Degree = 23.4;

/// Semi-major axis of the Earth's orbit, in AU
pub const EARTH_SEMI_MAJOR_AXIS: f64 = 1.0;

/// Mean motion of the Earth, in radians per day
pub const EARTH_MEAN_MOTION: f64 = DPI / 365.256_363;

/// Solar constant at the mean Sun-Earth distance of 1 AU, in W/m² (Appelbaum & Flood)
pub const SOLAR_CONSTANT: f64 = 1371.0;

// -------------------------------------------------------------------------------------------------
// Solver defaults
// -------------------------------------------------------------------------------------------------

/// Maximum number of Newton–Raphson iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 50;

/// Relative tolerance of the Kepler solver (scaled by the starting value)
pub const DEFAULT_KEPLER_TOLERANCE: f64 = 1.0e-9;

/// Starting value correction for the Kepler solver (Murray & Dermott 2.64)
pub const DEFAULT_STARTER_CORRECTION: f64 = 0.85;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Local solar time in hours, on a 24 hour scale
pub type Hour = f64;
