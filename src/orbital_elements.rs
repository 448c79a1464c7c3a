//! # Orbital elements
//!
//! This module defines [`OrbitalElements`], the **immutable, validated record**
//! of one body's classical orbit at a reference epoch. It is the input of every
//! propagation routine in [`crate::propagator`].
//!
//! ## Elements
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless, elliptic only: `0 ≤ e < 1`)
//! 3. **i** – Inclination (radians)
//! 4. **Ω** – Longitude of the ascending node (radians)
//! 5. **ω** – Argument of perigee (radians)
//! 6. **M₀** – Mean anomaly at epoch (radians)
//!
//! plus the sidereal **orbital period** (years), which fixes the mean motion
//! `n = 2π / P`, and an **identifier** used for labeling and diagnostics.
//!
//! ## Construction
//!
//! - [`OrbitalElements::from_degrees`] – angular inputs in degrees, converted once
//!   with the exact factor π/180.
//! - [`OrbitalElements::new`] – angular inputs already in radians.
//!
//! Both reject, with [`OrreryError::InvalidElements`], an empty identifier, a
//! non-positive semi-major axis or period, an eccentricity outside `[0, 1)`, and
//! any non-finite field. Parabolic and hyperbolic orbits are therefore never
//! representable.
//!
//! ## Example
//!
//! ```rust
//! use orrery::orbital_elements::OrbitalElements;
//!
//! let earth = OrbitalElements::from_degrees(
//!     "Earth", 1.0, 0.0, 114.2, 0.0167, -11.26, 1.0, 0.0,
//! )
//! .unwrap();
//!
//! assert!((earth.perihelion_distance() - 0.9833).abs() < 1e-12);
//! ```

use std::fmt;

use crate::{
    constants::{AstronomicalUnit, Degree, Radian, Year, DPI, RADEG},
    orrery_errors::OrreryError,
};

/// Classical orbital elements (two-body, elliptic).
///
/// Units
/// -----
/// * `semi_major_axis`: AU.
/// * `eccentricity`: unitless.
/// * `inclination`, `argument_of_perigee`, `ascending_node`,
///   `mean_anomaly_at_epoch`: radians.
/// * `orbital_period`: years.
///
/// Fields are private so a value can only exist in validated form.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    identifier: String,
    semi_major_axis: AstronomicalUnit,
    inclination: Radian,
    argument_of_perigee: Radian,
    eccentricity: f64,
    ascending_node: Radian,
    orbital_period: Year,
    mean_anomaly_at_epoch: Radian,
}

impl OrbitalElements {
    /// Build orbital elements from angles expressed in radians.
    ///
    /// Arguments
    /// ---------
    /// * `identifier` – Body name, must not be blank.
    /// * `semi_major_axis` – `a` (AU), finite and `> 0`.
    /// * `inclination` – `i` (radians).
    /// * `argument_of_perigee` – `ω` (radians).
    /// * `eccentricity` – `e`, finite and in `[0, 1)`.
    /// * `ascending_node` – `Ω` (radians).
    /// * `orbital_period` – `P` (years), finite and `> 0`.
    /// * `mean_anomaly_at_epoch` – `M₀` (radians), any finite value.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidElements`] naming the first violated constraint.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        identifier: impl Into<String>,
        semi_major_axis: AstronomicalUnit,
        inclination: Radian,
        argument_of_perigee: Radian,
        eccentricity: f64,
        ascending_node: Radian,
        orbital_period: Year,
        mean_anomaly_at_epoch: Radian,
    ) -> Result<Self, OrreryError> {
        let elements = OrbitalElements {
            identifier: identifier.into(),
            semi_major_axis,
            inclination,
            argument_of_perigee,
            eccentricity,
            ascending_node,
            orbital_period,
            mean_anomaly_at_epoch,
        };
        elements.validate()?;
        Ok(elements)
    }

    /// Build orbital elements from angles expressed in degrees.
    ///
    /// The four angular inputs (`i`, `ω`, `Ω`, `M₀`) are converted to radians
    /// with [`RADEG`]; every other argument follows [`OrbitalElements::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_degrees(
        identifier: impl Into<String>,
        semi_major_axis: AstronomicalUnit,
        inclination: Degree,
        argument_of_perigee: Degree,
        eccentricity: f64,
        ascending_node: Degree,
        orbital_period: Year,
        mean_anomaly_at_epoch: Degree,
    ) -> Result<Self, OrreryError> {
        Self::new(
            identifier,
            semi_major_axis,
            inclination * RADEG,
            argument_of_perigee * RADEG,
            eccentricity,
            ascending_node * RADEG,
            orbital_period,
            mean_anomaly_at_epoch * RADEG,
        )
    }

    fn validate(&self) -> Result<(), OrreryError> {
        let id = self.identifier.as_str();
        let invalid = |reason: String| Err(OrreryError::invalid_elements(id, reason));

        if id.trim().is_empty() {
            return invalid("identifier must not be empty".into());
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return invalid(format!(
                "eccentricity must lie in [0, 1), got {}",
                self.eccentricity
            ));
        }
        if !self.semi_major_axis.is_finite() || self.semi_major_axis <= 0.0 {
            return invalid(format!(
                "semi-major axis must be positive, got {}",
                self.semi_major_axis
            ));
        }
        if !self.orbital_period.is_finite() || self.orbital_period <= 0.0 {
            return invalid(format!(
                "orbital period must be positive, got {}",
                self.orbital_period
            ));
        }

        let angles = [
            ("inclination", self.inclination),
            ("argument of perigee", self.argument_of_perigee),
            ("ascending node", self.ascending_node),
            ("mean anomaly at epoch", self.mean_anomaly_at_epoch),
        ];
        if let Some((name, value)) = angles.iter().find(|(_, v)| !v.is_finite()) {
            return invalid(format!("{name} must be finite, got {value}"));
        }

        Ok(())
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn semi_major_axis(&self) -> AstronomicalUnit {
        self.semi_major_axis
    }

    pub fn inclination(&self) -> Radian {
        self.inclination
    }

    pub fn argument_of_perigee(&self) -> Radian {
        self.argument_of_perigee
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn ascending_node(&self) -> Radian {
        self.ascending_node
    }

    pub fn orbital_period(&self) -> Year {
        self.orbital_period
    }

    pub fn mean_anomaly_at_epoch(&self) -> Radian {
        self.mean_anomaly_at_epoch
    }

    /// Mean motion `n = 2π / P` (radians per year).
    pub fn mean_motion(&self) -> f64 {
        DPI / self.orbital_period
    }

    /// Semi-latus rectum `p = a·(1 − e²)` (AU).
    pub fn semi_latus_rectum(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Perihelion distance `q = a·(1 − e)` (AU).
    pub fn perihelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `Q = a·(1 + e)` (AU).
    pub fn aphelion_distance(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = RADEG.recip();
        writeln!(f, "Orbital Elements of {}", self.identifier)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)     = {:.6} rad ({:.6}°)",
            self.ascending_node,
            self.ascending_node * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of perigee)   = {:.6} rad ({:.6}°)",
            self.argument_of_perigee,
            self.argument_of_perigee * rad_to_deg
        )?;
        writeln!(
            f,
            "  P   (orbital period)        = {:.6} yr",
            self.orbital_period
        )?;
        writeln!(
            f,
            "  M₀  (mean anomaly at epoch) = {:.6} rad ({:.6}°)",
            self.mean_anomaly_at_epoch,
            self.mean_anomaly_at_epoch * rad_to_deg
        )
    }
}
