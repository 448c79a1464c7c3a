//! # Constants and type definitions for Orrery
//!
//! This module centralizes the **conversion factors**, **numerical defaults** and
//! **common type aliases** used throughout the `orrery` library.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, years ↔ days)
//! - Default settings of the Kepler equation solver
//! - Core type aliases used across the crate

use nalgebra::Vector3;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Number of days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

// -------------------------------------------------------------------------------------------------
// Numerical defaults
// -------------------------------------------------------------------------------------------------

/// Convergence threshold on the eccentric anomaly step (radians)
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Maximum number of Newton–Raphson iterations before giving up
pub const KEPLER_MAX_ITERATIONS: usize = 100;

/// Number of segments used to draw a full orbit path
pub const DEFAULT_ORBIT_SEGMENTS: usize = 100;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Duration in Julian years
pub type Year = f64;

/// Heliocentric position in AU, in the reference frame of the orbital elements
pub type Position = Vector3<f64>;
