pub mod completions;
pub mod doctor;
pub mod normalize;
pub mod output;
pub mod parse;
pub mod search;
pub mod suggest;

use std::path::{Path, PathBuf};

use kunstdb_core::catalog::{self, Artwork};
use kunstdb_core::config::loader::ConfigLoader;
use kunstdb_core::config::types::LoggingConfig;

/// Resolve the catalog path from `--catalog` or the active profile.
///
/// Also initializes logging, from the config when one is loaded and with
/// defaults when `--catalog` bypasses it.
pub(crate) fn resolve_catalog(
    config: Option<&Path>,
    profile: Option<&str>,
    catalog: Option<&Path>,
) -> PathBuf {
    if let Some(path) = catalog {
        crate::logging::init(&LoggingConfig::default());
        return path.to_path_buf();
    }

    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            crate::logging::init(&rc.logging);
            rc.catalog_file
        }
        Err(e) => {
            eprintln!("Error loading config: {e}");
            eprintln!("Hint: Pass --catalog <path> to work without a config file.");
            std::process::exit(1);
        }
    }
}

pub(crate) fn load_catalog(path: &Path) -> Vec<Artwork> {
    match catalog::load(path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error loading catalog: {e}");
            std::process::exit(1);
        }
    }
}
