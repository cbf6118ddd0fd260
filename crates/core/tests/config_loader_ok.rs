use std::fs;
use std::path::PathBuf;

use kunstdb_core::config::loader::ConfigLoader;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_default_profile_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
catalog_file = "/data/catalog.json"

[logging]
level = "debug"
"#;

    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.active_profile, "default");
    assert_eq!(rc.catalog_file.display().to_string(), "/data/catalog.json");
    assert_eq!(rc.logging.level, "debug");
    assert!(rc.logging.file.is_none());
}

#[test]
fn load_with_profile_override_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("kunstdb/config.toml");
    let toml = r#"
version = 1
profile = "default"

[profiles.default]
catalog_file = "/data/catalog.json"

[profiles.archive]
catalog_file = "/data/archive.json"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), Some("archive")).expect("should load");
    assert_eq!(rc.active_profile, "archive");
    assert_eq!(rc.catalog_file.display().to_string(), "/data/archive.json");
}

#[test]
fn logging_defaults_to_info() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[profiles.default]
catalog_file = "/data/catalog.json"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path), None).expect("should load");
    assert_eq!(rc.logging.level, "info");
}
