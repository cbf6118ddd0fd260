//! Loading and saving the catalog file.
//!
//! The catalog is a single JSON array of artwork records, read and written
//! whole. There is no database behind it; the file is the source of truth.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::types::Artwork;

/// Errors that can occur reading or writing a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write catalog file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in catalog file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load all records from a catalog file.
pub fn load(path: &Path) -> Result<Vec<Artwork>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    let records: Vec<Artwork> =
        serde_json::from_str(&raw).map_err(|e| CatalogError::Json {
            path: path.display().to_string(),
            source: e,
        })?;

    debug!(count = records.len(), path = %path.display(), "catalog loaded");
    Ok(records)
}

/// Write all records back to a catalog file, pretty-printed.
pub fn save(path: &Path, records: &[Artwork]) -> Result<(), CatalogError> {
    let json =
        serde_json::to_string_pretty(records).map_err(|e| CatalogError::Json {
            path: path.display().to_string(),
            source: e,
        })?;

    fs::write(path, json).map_err(|e| CatalogError::Write {
        path: path.display().to_string(),
        source: e,
    })?;

    debug!(count = records.len(), path = %path.display(), "catalog saved");
    Ok(())
}
