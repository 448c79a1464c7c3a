//! # Kepler equation solver
//!
//! Elliptic two-body anomalies:
//!
//! - [`KeplerSolver`] – Newton–Raphson solver of `E − e·sin(E) = M` with an
//!   explicit iteration cap, configurable through `serde`.
//! - [`solve_eccentric_anomaly`] – one-shot helper using the default cap.
//! - [`true_anomaly_from`] – eccentric anomaly → true anomaly, half-angle form.
//! - [`principal_angle`] – angle normalization to `[0, 2π)`.
//!
//! The solver is seeded with `E₀ = M`. The mean anomaly is first reduced to
//! `[−π, π)` and the root is kept inside the bracket `[M − e, M + e]`
//! (`|E − M| = e·|sin E| ≤ e`). A Newton step leaving the bracket is replaced
//! by a bisection step, so iterations stay bounded even for `e` close to 1.

use std::f64::consts::PI;

use serde::Deserialize;

use crate::{
    constants::{Radian, DPI, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE},
    orrery_errors::OrreryError,
};

/// Principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    a.rem_euclid(DPI)
}

/// Newton–Raphson settings for Kepler's equation.
///
/// * `tolerance` – convergence threshold on `|E_{n+1} − E_n|` (radians).
/// * `max_iterations` – iteration cap; exceeding it yields
///   [`OrreryError::ConvergenceError`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct KeplerSolver {
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for KeplerSolver {
    fn default() -> Self {
        KeplerSolver {
            tolerance: KEPLER_TOLERANCE,
            max_iterations: KEPLER_MAX_ITERATIONS,
        }
    }
}

impl KeplerSolver {
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        KeplerSolver {
            tolerance,
            max_iterations,
        }
    }

    /// Solve Kepler's equation `E − e·sin(E) − M = 0` for the eccentric anomaly.
    ///
    /// Arguments
    /// ---------
    /// * `mean_anomaly` – Mean anomaly `M` (radians), any finite value.
    /// * `eccentricity` – Eccentricity `e`, expected in `[0, 1)`.
    ///
    /// Return
    /// ------
    /// * The eccentric anomaly `E` (radians) on the same revolution as `M`,
    ///   i.e. `E − e·sin(E) = M` holds for the caller's `M` without wrapping.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::ConvergenceError`] when no Newton step smaller than
    ///   `tolerance` is reached within `max_iterations`.
    pub fn solve_eccentric_anomaly(
        &self,
        mean_anomaly: Radian,
        eccentricity: f64,
    ) -> Result<Radian, OrreryError> {
        debug_assert!(
            !(eccentricity >= 1.0 || eccentricity < 0.0),
            "elliptic solver called with e = {eccentricity}"
        );

        let turns = ((mean_anomaly + PI) / DPI).floor();
        let offset = turns * DPI;
        let m = mean_anomaly - offset;
        let e = eccentricity;

        let (mut lower, mut upper) = (m - e, m + e);
        let mut ecc_anom = m;

        for _ in 0..self.max_iterations {
            let residual = ecc_anom - e * ecc_anom.sin() - m;
            if residual < 0.0 {
                lower = lower.max(ecc_anom);
            } else if residual > 0.0 {
                upper = upper.min(ecc_anom);
            }

            let derivative = 1.0 - e * ecc_anom.cos();
            let newton = ecc_anom - residual / derivative;

            if newton >= lower && newton <= upper {
                let step = newton - ecc_anom;
                ecc_anom = newton;
                if step.abs() <= self.tolerance {
                    return Ok(ecc_anom + offset);
                }
            } else {
                ecc_anom = 0.5 * (lower + upper);
            }
        }

        Err(OrreryError::ConvergenceError {
            mean_anomaly,
            eccentricity,
            iterations: self.max_iterations,
        })
    }
}

/// Solve Kepler's equation with a custom tolerance and the default iteration cap.
///
/// See [`KeplerSolver::solve_eccentric_anomaly`].
pub fn solve_eccentric_anomaly(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
) -> Result<Radian, OrreryError> {
    KeplerSolver::new(tolerance, KEPLER_MAX_ITERATIONS)
        .solve_eccentric_anomaly(mean_anomaly, eccentricity)
}

/// Convert an eccentric anomaly into a true anomaly.
///
/// Uses `θ = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2))`, which stays well
/// conditioned near `θ = π`.
pub fn true_anomaly_from(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    let half = 0.5 * eccentric_anomaly;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin())
        .atan2((1.0 - eccentricity).sqrt() * half.cos())
}
