use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("Invalid orbital elements for '{identifier}': {reason}")]
    InvalidElements { identifier: String, reason: String },

    #[error(
        "Kepler equation did not converge after {iterations} iterations (M = {mean_anomaly}, e = {eccentricity})"
    )]
    ConvergenceError {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    #[error("Invalid catalog record: {0}")]
    InvalidCatalogRecord(String),

    #[error("Unknown body category: {0}")]
    InvalidCategory(String),

    #[error("Invalid designation pattern: {0}")]
    InvalidDesignationPattern(#[from] regex::Error),

    #[error("Error during the catalog CSV parsing: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "catalog-download")]
    #[error("HTTP reqwest error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

impl OrreryError {
    pub(crate) fn invalid_elements(identifier: &str, reason: impl Into<String>) -> Self {
        OrreryError::InvalidElements {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }
}

impl PartialEq for OrreryError {
    fn eq(&self, other: &Self) -> bool {
        use OrreryError::*;
        match (self, other) {
            (
                InvalidElements {
                    identifier: a,
                    reason: ra,
                },
                InvalidElements {
                    identifier: b,
                    reason: rb,
                },
            ) => a == b && ra == rb,
            (
                ConvergenceError {
                    mean_anomaly: ma,
                    eccentricity: ea,
                    iterations: ia,
                },
                ConvergenceError {
                    mean_anomaly: mb,
                    eccentricity: eb,
                    iterations: ib,
                },
            ) => ma.to_bits() == mb.to_bits() && ea.to_bits() == eb.to_bits() && ia == ib,
            (InvalidCatalogRecord(a), InvalidCatalogRecord(b)) => a == b,
            (InvalidCategory(a), InvalidCategory(b)) => a == b,
            (InvalidDesignationPattern(a), InvalidDesignationPattern(b)) => a == b,

            // Wrapped errors are not comparable: equal when the variant matches
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,
            #[cfg(feature = "catalog-download")]
            (ReqwestError(_), ReqwestError(_)) => true,

            _ => false,
        }
    }
}
