use std::fs;

use assert_cmd::prelude::*;
use tempfile::tempdir;

#[test]
fn doctor_reports_resolved_config_and_record_count() {
    let tmp = tempdir().unwrap();

    let catalog = tmp.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"[
            {"id": 1, "title": "Stillleben", "date": "ca. 1850"},
            {"id": 2, "title": "Fresko", "date": "14.Jh."}
        ]"#,
    )
    .unwrap();

    let cfg_path = tmp.path().join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
catalog_file = "{catalog}"
"#,
        catalog = catalog.display(),
    );
    fs::write(&cfg_path, toml).unwrap();

    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin!("kdb"));
    cmd.args(["--config", cfg_path.to_str().unwrap(), "doctor"]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   kdb doctor"))
        .stdout(predicates::str::contains("profile: default"))
        .stdout(predicates::str::contains("records: 2"));
}
