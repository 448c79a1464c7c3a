use hifitime::{Epoch, Unit};
use serde::Deserialize;

use crate::{
    constants::{AstronomicalUnit, Degree, DAYS_PER_YEAR, JDTOMJD},
    orbital_elements::OrbitalElements,
    orrery_errors::OrreryError,
};

/// One row of the near-Earth comet orbital-element table.
///
/// Only the columns used to build an orbit are read; any other column of the
/// CSV is ignored by the deserializer.
///
/// Units
/// -----
/// * `e`: unitless.
/// * `i_deg`, `w_deg`, `node_deg`: degrees.
/// * `q_au_1` (perihelion), `q_au_2` (aphelion), `moid_au`: AU.
/// * `p_yr`: years.
/// * `epoch_tdb`, `tp_tdb`: TDB day numbers, Modified Julian Date when below
///   2 400 000.5, Julian Date otherwise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogRecord {
    pub object: String,
    pub e: f64,
    pub i_deg: Degree,
    pub w_deg: Degree,
    pub node_deg: Degree,
    pub q_au_1: AstronomicalUnit,
    #[serde(default)]
    pub q_au_2: Option<AstronomicalUnit>,
    pub p_yr: f64,
    pub epoch_tdb: f64,
    pub tp_tdb: f64,
    #[serde(default)]
    pub moid_au: Option<AstronomicalUnit>,
}

/// Largest accepted gap between the element epoch and the perihelion time
/// (days, about 2 700 years).
pub const MAX_DAYS_FROM_PERIHELION: f64 = 1.0e6;

/// TDB Julian Date of a catalog day number (MJD below 2 400 000.5).
fn julian_date(day_number: f64) -> f64 {
    if day_number < JDTOMJD {
        day_number + JDTOMJD
    } else {
        day_number
    }
}

fn tdb_epoch(day_number: f64) -> Epoch {
    Epoch::from_jde_tdb(julian_date(day_number))
}

impl CatalogRecord {
    /// Semi-major axis as the mean of perihelion and aphelion distances,
    /// or `q / (1 − e)` when the aphelion column is empty.
    pub fn semi_major_axis(&self) -> AstronomicalUnit {
        match self.q_au_2 {
            Some(aphelion) => 0.5 * (self.q_au_1 + aphelion),
            None => self.q_au_1 / (1.0 - self.e),
        }
    }

    /// Days elapsed from perihelion passage to the element epoch.
    pub fn days_since_perihelion(&self) -> f64 {
        (tdb_epoch(self.epoch_tdb) - tdb_epoch(self.tp_tdb)).to_unit(Unit::Day)
    }

    /// Mean anomaly at epoch, wrapped into `[0°, 360°)`.
    pub fn mean_anomaly_at_epoch(&self) -> Degree {
        let period_days = self.p_yr * DAYS_PER_YEAR;
        (360.0 / period_days * self.days_since_perihelion()).rem_euclid(360.0)
    }

    /// Validated orbital elements of this record.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidCatalogRecord`] when the epoch or perihelion
    ///   time is not finite, when they lie more than
    ///   [`MAX_DAYS_FROM_PERIHELION`] apart, or when the aphelion lies below
    ///   the perihelion.
    /// * [`OrreryError::InvalidElements`] for a malformed record (non-positive
    ///   period, e ≥ 1, …).
    pub fn to_orbital_elements(&self) -> Result<OrbitalElements, OrreryError> {
        if !(self.epoch_tdb.is_finite() && self.tp_tdb.is_finite()) {
            return Err(OrreryError::InvalidCatalogRecord(format!(
                "{}: epoch {} or perihelion time {} is not a day number",
                self.object, self.epoch_tdb, self.tp_tdb
            )));
        }
        let gap = julian_date(self.epoch_tdb) - julian_date(self.tp_tdb);
        if gap.abs() > MAX_DAYS_FROM_PERIHELION {
            return Err(OrreryError::InvalidCatalogRecord(format!(
                "{}: epoch {} is {} days away from perihelion time {}",
                self.object, self.epoch_tdb, gap, self.tp_tdb
            )));
        }
        if let Some(aphelion) = self.q_au_2 {
            if aphelion < self.q_au_1 {
                return Err(OrreryError::InvalidCatalogRecord(format!(
                    "{}: aphelion {} AU below perihelion {} AU",
                    self.object, aphelion, self.q_au_1
                )));
            }
        }

        OrbitalElements::from_degrees(
            self.object.trim(),
            self.semi_major_axis(),
            self.i_deg,
            self.w_deg,
            self.e,
            self.node_deg,
            self.p_yr,
            self.mean_anomaly_at_epoch(),
        )
    }
}

#[cfg(test)]
mod record_test {
    use super::*;
    use approx::assert_relative_eq;

    fn encke() -> CatalogRecord {
        CatalogRecord {
            object: "2P/Encke".into(),
            e: 0.8483,
            i_deg: 11.78,
            w_deg: 186.5,
            node_deg: 334.6,
            q_au_1: 0.34,
            q_au_2: Some(4.09),
            p_yr: 3.30,
            epoch_tdb: 54629.0,
            tp_tdb: 2454629.5 - 100.0,
            moid_au: Some(0.173),
        }
    }

    #[test]
    fn mjd_and_jd_are_mixed_consistently() {
        let record = encke();
        assert_relative_eq!(record.days_since_perihelion(), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn mean_anomaly_from_perihelion_time() {
        let record = encke();
        let expected = 360.0 / (3.30 * 365.25) * 100.0;
        assert_relative_eq!(record.mean_anomaly_at_epoch(), expected, epsilon = 1e-6);

        let before = CatalogRecord {
            tp_tdb: 2454629.5 + 10.0,
            ..encke()
        };
        let m = before.mean_anomaly_at_epoch();
        assert!((0.0..360.0).contains(&m));
        assert_relative_eq!(m, 360.0 - 360.0 / (3.30 * 365.25) * 10.0, epsilon = 1e-6);
    }

    #[test]
    fn semi_major_axis_sources() {
        assert_relative_eq!(encke().semi_major_axis(), 2.215, epsilon = 1e-12);
        let no_aphelion = CatalogRecord {
            q_au_2: None,
            ..encke()
        };
        assert_relative_eq!(
            no_aphelion.semi_major_axis(),
            0.34 / (1.0 - 0.8483),
            epsilon = 1e-12
        );
    }

    #[test]
    fn elements_keep_the_record_values() {
        let el = encke().to_orbital_elements().unwrap();
        assert_eq!(el.identifier(), "2P/Encke");
        assert_eq!(el.eccentricity(), 0.8483);
        assert_eq!(el.orbital_period(), 3.30);
    }

    #[test]
    fn hyperbolic_record_is_rejected() {
        let record = CatalogRecord {
            e: 1.2,
            q_au_2: None,
            ..encke()
        };
        assert!(matches!(
            record.to_orbital_elements(),
            Err(OrreryError::InvalidElements { .. })
        ));
    }

    #[test]
    fn inconsistent_record_is_rejected() {
        let swapped = CatalogRecord {
            q_au_1: 4.09,
            q_au_2: Some(0.34),
            ..encke()
        };
        assert!(matches!(
            swapped.to_orbital_elements(),
            Err(OrreryError::InvalidCatalogRecord(_))
        ));

        let no_epoch = CatalogRecord {
            epoch_tdb: f64::NAN,
            ..encke()
        };
        assert!(matches!(
            no_epoch.to_orbital_elements(),
            Err(OrreryError::InvalidCatalogRecord(_))
        ));
    }

    #[test]
    fn mjd_epoch_matches_its_julian_date() {
        let as_mjd = encke();
        let as_jd = CatalogRecord {
            epoch_tdb: 54629.0 + JDTOMJD,
            ..encke()
        };
        assert_eq!(tdb_epoch(54629.0), tdb_epoch(54629.0 + JDTOMJD));
        assert_relative_eq!(
            as_mjd.days_since_perihelion(),
            as_jd.days_since_perihelion(),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            as_mjd.mean_anomaly_at_epoch(),
            360.0 / (3.30 * 365.25) * 100.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn implausible_epoch_gap_is_rejected() {
        let absurd = CatalogRecord {
            epoch_tdb: 1e300,
            tp_tdb: -1e300,
            ..encke()
        };
        assert!(matches!(
            absurd.to_orbital_elements(),
            Err(OrreryError::InvalidCatalogRecord(_))
        ));

        let far = CatalogRecord {
            tp_tdb: 54629.0 - MAX_DAYS_FROM_PERIHELION - 1.0,
            ..encke()
        };
        assert!(matches!(
            far.to_orbital_elements(),
            Err(OrreryError::InvalidCatalogRecord(_))
        ));
    }
}
