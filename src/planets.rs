//! Major planets as [`OrbitalElements`], so they are animated by the same
//! Keplerian engine as the catalog bodies.
//!
//! Mean elements at J2000 relative to the mean ecliptic and equinox
//! (Standish, "Keplerian Elements for Approximate Positions of the Major
//! Planets", table 1, valid 1800–2050). The table stores the longitude of
//! perihelion `ϖ` and the mean longitude `L`; we use `ω = ϖ − Ω` and
//! `M₀ = L − ϖ`. Sidereal periods follow Kepler's third law, `P = a^{3/2}`
//! years.

use crate::{constants::Degree, orbital_elements::OrbitalElements, orrery_errors::OrreryError};

/// One row of the planetary table: name, a (AU), e, i, L, ϖ, Ω (degrees).
type PlanetRow = (&'static str, f64, f64, Degree, Degree, Degree, Degree);

const J2000_PLANETS: [PlanetRow; 8] = [
    ("Mercury", 0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593),
    ("Venus", 0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255),
    ("Earth", 1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0),
    ("Mars", 1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891),
    ("Jupiter", 5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909),
    ("Saturn", 9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448),
    ("Uranus", 19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503),
    ("Neptune", 30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574),
];

/// Orbital elements of the eight major planets, ordered by distance to the Sun.
pub fn major_planets() -> Result<Vec<OrbitalElements>, OrreryError> {
    J2000_PLANETS
        .iter()
        .map(|&(name, a, e, i, mean_lon, peri_lon, node)| {
            OrbitalElements::from_degrees(
                name,
                a,
                i,
                peri_lon - node,
                e,
                node,
                a.powf(1.5),
                mean_lon - peri_lon,
            )
        })
        .collect()
}
