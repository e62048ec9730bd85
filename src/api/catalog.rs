//! Catalog Endpoints

use kangyur_catalog::{duplicate_ids, sample_catalog, CatalogItem};

use super::{get_json, ApiError};
use crate::config::AppConfig;

/// Fetch the catalog tree, or the bundled sample when no API is configured
pub async fn load_catalog(config: &AppConfig) -> Result<Vec<CatalogItem>, ApiError> {
    let Some(url) = config.catalog_url() else {
        log::info!("no API base configured, using bundled sample catalog");
        return sample_catalog().map_err(|e| ApiError::Dataset(e.to_string()));
    };

    log::debug!("fetching catalog from {}", url);
    let tree: Vec<CatalogItem> = get_json(&url).await?;
    for id in duplicate_ids(&tree) {
        log::warn!("catalog id {:?} appears more than once, lookups use the first", id);
    }
    Ok(tree)
}
