use std::{fmt, str::FromStr};

use regex::Regex;
use serde::Deserialize;

use crate::{catalog::record::CatalogRecord, constants::AstronomicalUnit, orrery_errors::OrreryError};

/// Hazard / population tag attached to a catalog body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum BodyCategory {
    /// Near-Earth object
    #[serde(rename = "NEO")]
    Neo,
    /// Potentially hazardous asteroid
    #[serde(rename = "PHA")]
    Pha,
    /// Near-Earth comet
    #[serde(rename = "NEC")]
    Nec,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl BodyCategory {
    pub const ALL: [BodyCategory; 4] = [
        BodyCategory::Neo,
        BodyCategory::Pha,
        BodyCategory::Nec,
        BodyCategory::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BodyCategory::Neo => "NEO",
            BodyCategory::Pha => "PHA",
            BodyCategory::Nec => "NEC",
            BodyCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BodyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BodyCategory {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrreryError::InvalidCategory(s.to_string()))
    }
}

/// Thresholds of the category heuristic.
///
/// Defaults: NEO when the Earth MOID is below 0.3 AU, PHA below 0.05 AU, and
/// NEC when the perihelion is below 1.3 AU and the designation matches
/// `comet_designation` (periodic comets, `P/…` or `123P/…`). NEC wins over
/// the MOID-based tags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    pub neo_moid_au: AstronomicalUnit,
    pub pha_moid_au: AstronomicalUnit,
    pub nec_perihelion_au: AstronomicalUnit,
    pub comet_designation: String,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        ClassificationThresholds {
            neo_moid_au: 0.3,
            pha_moid_au: 0.05,
            nec_perihelion_au: 1.3,
            comet_designation: r"(^|\d)P/".to_string(),
        }
    }
}

/// Compiled form of [`ClassificationThresholds`].
#[derive(Debug, Clone)]
pub struct Classifier {
    thresholds: ClassificationThresholds,
    comet_designation: Regex,
}

impl Classifier {
    /// Errors
    /// ------
    /// * [`OrreryError::InvalidDesignationPattern`] if `comet_designation` is
    ///   not a valid regular expression.
    pub fn new(thresholds: ClassificationThresholds) -> Result<Self, OrreryError> {
        let comet_designation = Regex::new(&thresholds.comet_designation)?;
        Ok(Classifier {
            thresholds,
            comet_designation,
        })
    }

    pub fn thresholds(&self) -> &ClassificationThresholds {
        &self.thresholds
    }

    /// Tag a body from its designation, Earth MOID and perihelion distance.
    ///
    /// A missing MOID never yields NEO or PHA.
    pub fn classify(
        &self,
        designation: &str,
        moid: Option<AstronomicalUnit>,
        perihelion: AstronomicalUnit,
    ) -> BodyCategory {
        let t = &self.thresholds;
        if perihelion < t.nec_perihelion_au && self.comet_designation.is_match(designation) {
            return BodyCategory::Nec;
        }
        match moid {
            Some(m) if m < t.pha_moid_au => BodyCategory::Pha,
            Some(m) if m < t.neo_moid_au => BodyCategory::Neo,
            _ => BodyCategory::Unknown,
        }
    }

    pub fn classify_record(&self, record: &CatalogRecord) -> BodyCategory {
        self.classify(&record.object, record.moid_au, record.q_au_1)
    }
}

#[cfg(test)]
mod classification_test {
    use super::*;

    fn default_classifier() -> Classifier {
        Classifier::new(ClassificationThresholds::default()).unwrap()
    }

    #[test]
    fn moid_thresholds() {
        let c = default_classifier();
        assert_eq!(c.classify("(2004 MN4)", Some(0.0002), 0.75), BodyCategory::Pha);
        assert_eq!(c.classify("(1998 SF36)", Some(0.1), 0.95), BodyCategory::Neo);
        assert_eq!(c.classify("(433) Eros", Some(0.3), 1.13), BodyCategory::Unknown);
        assert_eq!(c.classify("(433) Eros", None, 1.13), BodyCategory::Unknown);
    }

    #[test]
    fn near_earth_comets_override_moid() {
        let c = default_classifier();
        assert_eq!(c.classify("2P/Encke", Some(0.02), 0.34), BodyCategory::Nec);
        assert_eq!(c.classify("P/2004 R1 (McNaught)", Some(0.5), 0.99), BodyCategory::Nec);
        // Perihelion too far out.
        assert_eq!(c.classify("29P/Schwassmann-Wachmann", Some(0.04), 5.7), BodyCategory::Pha);
        // Not a periodic comet designation.
        assert_eq!(c.classify("C/2013 A1 (Siding Spring)", Some(0.2), 1.2), BodyCategory::Neo);
    }

    #[test]
    fn thresholds_are_configurable() {
        let c = Classifier::new(ClassificationThresholds {
            neo_moid_au: 0.5,
            comet_designation: "^C/".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(c.classify("(1998 SF36)", Some(0.4), 0.95), BodyCategory::Neo);
        assert_eq!(c.classify("C/2013 A1", Some(0.4), 1.2), BodyCategory::Nec);
        assert_eq!(c.classify("2P/Encke", Some(0.4), 0.34), BodyCategory::Neo);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = Classifier::new(ClassificationThresholds {
            comet_designation: "(".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, OrreryError::InvalidDesignationPattern(_)));
    }

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in BodyCategory::ALL {
            assert_eq!(category.label().parse::<BodyCategory>().unwrap(), category);
        }
        assert_eq!("pha".parse::<BodyCategory>().unwrap(), BodyCategory::Pha);
        assert_eq!(
            "comet".parse::<BodyCategory>(),
            Err(OrreryError::InvalidCategory("comet".into()))
        );
    }
}
