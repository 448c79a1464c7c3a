//! # Small-body catalog ingestion
//!
//! Turns rows of the near-Earth comet orbital-element table into validated
//! [`OrbitalElements`] tagged with a [`BodyCategory`].
//!
//! - [`record`] – [`CatalogRecord`], the serde view of one CSV row, and the
//!   derivation of semi-major axis and mean anomaly at epoch.
//! - [`classification`] – NEO / PHA / NEC heuristic with configurable
//!   thresholds.
//! - `download` (feature `catalog-download`) – HTTP fetch of the CSV table.
//!
//! Malformed rows are **skipped and logged** (`tracing::warn!`) by
//! [`Catalog::from_csv_reader`]; they never reach the propagation core.
//!
//! ## Example
//!
//! ```rust
//! use orrery::catalog::{Catalog, CatalogConfig};
//!
//! let csv = "object,e,i_deg,w_deg,node_deg,q_au_1,q_au_2,p_yr,epoch_tdb,tp_tdb,moid_au\n\
//!            2P/Encke,0.8483,11.78,186.5,334.6,0.34,4.09,3.30,54629,2454529.5,0.173\n\
//!            bogus,1.4,0,0,0,1.0,,1.0,54629,2454529.5,\n";
//!
//! let catalog = Catalog::from_csv_str(csv, &CatalogConfig::default()).unwrap();
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.skipped(), 1);
//! ```

use std::{fs::File, io::Read, path::Path};

use serde::Deserialize;

use crate::{orbital_elements::OrbitalElements, orrery_errors::OrreryError};

pub mod classification;
pub mod record;

#[cfg(feature = "catalog-download")]
pub mod download;

pub use classification::{BodyCategory, ClassificationThresholds, Classifier};
pub use record::CatalogRecord;

/// Number of rows read from a catalog unless configured otherwise.
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Catalog loading settings.
///
/// * `max_records` – read at most this many rows (`None` reads them all).
/// * `thresholds` – category heuristic settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub max_records: Option<usize>,
    pub thresholds: ClassificationThresholds,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            max_records: Some(DEFAULT_MAX_RECORDS),
            thresholds: ClassificationThresholds::default(),
        }
    }
}

/// A catalog body ready to be propagated.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogBody {
    pub elements: OrbitalElements,
    pub category: BodyCategory,
}

impl CatalogBody {
    pub fn identifier(&self) -> &str {
        self.elements.identifier()
    }

    /// Text shown next to the body, e.g. `"2P/Encke - NEC"`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.identifier(), self.category)
    }
}

/// Bodies loaded from one catalog, plus the number of rejected rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    bodies: Vec<CatalogBody>,
    skipped: usize,
}

impl Catalog {
    /// Read a CSV catalog (header row required).
    ///
    /// Rows that cannot be deserialized or whose elements fail validation are
    /// skipped with a warning; only reader-level failures (I/O, malformed
    /// header) are returned as errors.
    ///
    /// Errors
    /// ------
    /// * [`OrreryError::CsvError`] if the header cannot be read.
    /// * [`OrreryError::InvalidDesignationPattern`] for a bad classification regex.
    pub fn from_csv_reader<R: Read>(
        reader: R,
        config: &CatalogConfig,
    ) -> Result<Self, OrreryError> {
        let classifier = Classifier::new(config.thresholds.clone())?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        csv_reader.headers()?;

        let limit = config.max_records.unwrap_or(usize::MAX);
        let mut catalog = Catalog::default();

        let rows = csv_reader.deserialize::<CatalogRecord>().take(limit);
        for (row, result) in rows.enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("Skipping catalog row {}: {}", row + 1, err);
                    catalog.skipped += 1;
                    continue;
                }
            };

            match record.to_orbital_elements() {
                Ok(elements) => {
                    let category = classifier.classify_record(&record);
                    tracing::debug!("Loaded {} as {}", elements.identifier(), category);
                    catalog.bodies.push(CatalogBody { elements, category });
                }
                Err(err) => {
                    tracing::warn!("Skipping catalog row {}: {}", row + 1, err);
                    catalog.skipped += 1;
                }
            }
        }

        tracing::info!(
            "Catalog loaded: {} bodies, {} rows skipped",
            catalog.bodies.len(),
            catalog.skipped
        );
        Ok(catalog)
    }

    pub fn from_csv_str(data: &str, config: &CatalogConfig) -> Result<Self, OrreryError> {
        Self::from_csv_reader(data.as_bytes(), config)
    }

    /// Errors
    /// ------
    /// * [`OrreryError::IoError`] if the file cannot be opened, then as
    ///   [`Catalog::from_csv_reader`].
    pub fn from_csv_path(
        path: impl AsRef<Path>,
        config: &CatalogConfig,
    ) -> Result<Self, OrreryError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file, config)
    }

    pub fn bodies(&self) -> &[CatalogBody] {
        &self.bodies
    }

    pub fn into_bodies(self) -> Vec<CatalogBody> {
        self.bodies
    }

    /// Number of rows rejected while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
