//! HTTP access to the CSV rendition of the near-Earth comet catalog
//! (feature `catalog-download`).

use crate::{
    catalog::{Catalog, CatalogConfig},
    orrery_errors::OrreryError,
};

/// Near-Earth comets orbital elements, CSV export of the NASA open data portal.
pub const NEAR_EARTH_COMETS_URL: &str = "https://data.nasa.gov/resource/b67r-rgxc.csv";

/// Download a CSV catalog and load it with [`Catalog::from_csv_str`].
///
/// Errors
/// ------
/// * [`OrreryError::ReqwestError`] on network failure or a non-success HTTP status.
/// * Any error of [`Catalog::from_csv_reader`].
pub async fn fetch_catalog(url: &str, config: &CatalogConfig) -> Result<Catalog, OrreryError> {
    tracing::info!("Downloading catalog from {}", url);
    let body = reqwest::get(url)
        .await?
        .error_for_status()?
        .text()
        .await?;
    Catalog::from_csv_str(&body, config)
}

/// Blocking wrapper around [`fetch_catalog`] running on a private
/// current-thread Tokio runtime.
///
/// Must not be called from inside another Tokio runtime.
pub fn fetch_catalog_blocking(url: &str, config: &CatalogConfig) -> Result<Catalog, OrreryError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(fetch_catalog(url, config))
}
