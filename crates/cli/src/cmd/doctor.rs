//! Doctor command implementation.

use std::path::Path;

use kunstdb_core::catalog;
use kunstdb_core::config::loader::{default_config_path, ConfigLoader};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL kdb doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    };

    crate::logging::init(&rc.logging);

    println!("OK   kdb doctor");
    println!(
        "path: {}",
        config.map_or_else(
            || default_config_path().display().to_string(),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("catalog_file: {}", rc.catalog_file.display());
    println!("logging.level: {}", rc.logging.level);

    match catalog::load(&rc.catalog_file) {
        Ok(records) => println!("records: {}", records.len()),
        Err(e) => {
            println!("FAIL catalog check");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
