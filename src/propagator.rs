//! # Keplerian propagation
//!
//! [`KeplerPropagator`] turns an [`OrbitalElements`] record into heliocentric
//! positions. Two calling conventions are offered:
//!
//! * [`KeplerPropagator::position_at_time`] – elapsed time since epoch
//!   (animation frames): `M → E → θ → r → (x, y, z)`.
//! * [`KeplerPropagator::position_at_true_anomaly`] – true anomaly supplied
//!   directly (orbit path sampling), no Kepler solve.
//!
//! The rotation from the perifocal frame to the reference frame is the 3-1-3
//! Euler sequence `(Ω, i, ω)`:
//!
//! ```text
//! x = r · ( cos(ω+θ)·cos(Ω) − cos(i)·sin(ω+θ)·sin(Ω) )
//! y = r · ( cos(ω+θ)·sin(Ω) + cos(i)·sin(ω+θ)·cos(Ω) )
//! z = r · ( sin(ω+θ)·sin(i) )
//! ```
//!
//! Every method is a pure function of its inputs: identical arguments give
//! bit-identical results, so positions can be computed from any thread.
//!
//! ## Example
//!
//! ```rust
//! use orrery::orbital_elements::OrbitalElements;
//! use orrery::propagator::KeplerPropagator;
//!
//! let earth = OrbitalElements::from_degrees(
//!     "Earth", 1.0, 0.0, 114.2, 0.0167, -11.26, 1.0, 0.0,
//! )
//! .unwrap();
//! let propagator = KeplerPropagator::default();
//!
//! let now = propagator.position_at_time(&earth, 0.25).unwrap();
//! let path = propagator.orbit_path(&earth, 100);
//! assert_eq!(path.len(), 101);
//! assert!(now.norm() > 0.98 && now.norm() < 1.02);
//! ```

use nalgebra::Vector3;

use crate::{
    constants::{AstronomicalUnit, Position, Radian, Year, DPI},
    kepler::{true_anomaly_from, KeplerSolver},
    orbital_elements::OrbitalElements,
    orrery_errors::OrreryError,
};

/// Two-body position propagator.
///
/// Holds only the solver settings; the orbit itself is always passed in, so a
/// single propagator serves every body of a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeplerPropagator {
    solver: KeplerSolver,
}

impl KeplerPropagator {
    pub fn new(solver: KeplerSolver) -> Self {
        KeplerPropagator { solver }
    }

    pub fn solver(&self) -> &KeplerSolver {
        &self.solver
    }

    /// Mean anomaly `M = M₀ + (2π / P)·Δt` after `time_delta` years.
    ///
    /// The result is not wrapped; the solver reduces it internally.
    pub fn mean_anomaly_at(&self, elements: &OrbitalElements, time_delta: Year) -> Radian {
        elements.mean_anomaly_at_epoch() + elements.mean_motion() * time_delta
    }

    /// True anomaly after `time_delta` years.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::ConvergenceError`] if Kepler's equation cannot be solved
    ///   within the solver's iteration cap.
    pub fn true_anomaly_at(
        &self,
        elements: &OrbitalElements,
        time_delta: Year,
    ) -> Result<Radian, OrreryError> {
        let mean_anomaly = self.mean_anomaly_at(elements, time_delta);
        let eccentric_anomaly = self
            .solver
            .solve_eccentric_anomaly(mean_anomaly, elements.eccentricity())?;
        Ok(true_anomaly_from(eccentric_anomaly, elements.eccentricity()))
    }

    /// Heliocentric distance `r = p / (1 + e·cos θ)` at true anomaly `θ`.
    pub fn radial_distance(
        &self,
        elements: &OrbitalElements,
        true_anomaly: Radian,
    ) -> AstronomicalUnit {
        elements.semi_latus_rectum() / (1.0 + elements.eccentricity() * true_anomaly.cos())
    }

    /// Position after `time_delta` years (same time unit as the period).
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::ConvergenceError`] from the Kepler solve. No partial or
    ///   stale position is ever returned.
    pub fn position_at_time(
        &self,
        elements: &OrbitalElements,
        time_delta: Year,
    ) -> Result<Position, OrreryError> {
        let true_anomaly = self.true_anomaly_at(elements, time_delta)?;
        Ok(self.position_at_true_anomaly(elements, true_anomaly))
    }

    /// Position at the true anomaly `θ`, bypassing the Kepler solve.
    pub fn position_at_true_anomaly(
        &self,
        elements: &OrbitalElements,
        true_anomaly: Radian,
    ) -> Position {
        let r = self.radial_distance(elements, true_anomaly);

        let (sin_u, cos_u) = (elements.argument_of_perigee() + true_anomaly).sin_cos();
        let (sin_node, cos_node) = elements.ascending_node().sin_cos();
        let (sin_incl, cos_incl) = elements.inclination().sin_cos();

        Vector3::new(
            r * (cos_u * cos_node - cos_incl * sin_u * sin_node),
            r * (cos_u * sin_node + cos_incl * sin_u * cos_node),
            r * (sin_u * sin_incl),
        )
    }

    /// Closed orbit polyline: `segments + 1` positions at `θ_k = 2π·k / segments`.
    ///
    /// The first and last points coincide up to rounding. `segments == 0`
    /// yields the single perihelion point.
    pub fn orbit_path(&self, elements: &OrbitalElements, segments: usize) -> Vec<Position> {
        if segments == 0 {
            return vec![self.position_at_true_anomaly(elements, 0.0)];
        }
        (0..=segments)
            .map(|k| {
                let theta = DPI * k as f64 / segments as f64;
                self.position_at_true_anomaly(elements, theta)
            })
            .collect()
    }
}
