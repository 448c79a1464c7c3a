//! # Orrery
//!
//! Two-body Keplerian propagation of planets and small bodies for solar-system
//! visualizers.
//!
//! - [`orbital_elements`] – validated, immutable classical elements.
//! - [`kepler`] – Kepler equation solver and anomaly conversions.
//! - [`propagator`] – positions by elapsed time or by true anomaly, orbit paths.
//! - [`planets`] – J2000 mean elements of the eight major planets.
//! - [`catalog`] – small-body catalog ingestion and NEO/PHA/NEC tagging.
//! - [`body_set`] – the active set of bodies, its filter and counters.

pub mod body_set;
pub mod catalog;
pub mod constants;
pub mod kepler;
pub mod orbital_elements;
pub mod orrery_errors;
pub mod planets;
pub mod propagator;
