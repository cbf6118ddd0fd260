use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::prelude::*;
use tempfile::tempdir;

fn kdb() -> std::process::Command {
    std::process::Command::new(assert_cmd::cargo::cargo_bin!("kdb"))
}

fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalog.json");
    fs::write(
        &path,
        r#"[
            {
                "id": 1,
                "title": "Der Kuss",
                "artists": ["Gustav Klimt"],
                "date": "1908",
                "date_year_from": 1908,
                "date_year_to": 1908,
                "keywords": ["Malerei"],
                "location": "Wien"
            },
            {
                "id": 2,
                "title": "Landschaft bei Krumau",
                "artists": ["Egon Schiele"],
                "date": "ca. 1916",
                "date_year_from": 1911,
                "date_year_to": 1921,
                "keywords": ["Malerei", "Landschaft"]
            },
            {
                "id": 3,
                "title": "Fresko-Fragment",
                "date": "14.Jh.",
                "date_year_from": 1301,
                "date_year_to": 1400,
                "keywords": ["Wandmalerei"]
            }
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn basic_query_searches_all_fields() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args(["search", "schiele", "--quiet", "--catalog", catalog.to_str().unwrap()]);

    cmd.assert().success().stdout("2\n");
}

#[test]
fn basic_query_honors_exclusions() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args([
        "search",
        "malerei -wand",
        "--quiet",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    cmd.assert().success().stdout("1\n2\n");
}

#[test]
fn date_filter_finds_overlapping_records() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args([
        "search",
        "--date-from",
        "1900",
        "--date-to",
        "1910",
        "--quiet",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    cmd.assert().success().stdout("1\n");
}

#[test]
fn expert_filters_combine_with_and() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args([
        "search",
        "--keyword",
        "malerei",
        "--date-from",
        "1300",
        "--date-to",
        "1500",
        "--quiet",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    cmd.assert().success().stdout("3\n");
}

#[test]
fn json_output_contains_record_fields() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args([
        "search",
        "kuss",
        "--json",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("\"title\": \"Der Kuss\""))
        .stdout(predicates::str::contains("\"date_year_from\": 1908"));
}

#[test]
fn query_and_field_filters_are_mutually_exclusive() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args([
        "search",
        "kuss",
        "--title",
        "kuss",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("cannot be combined"));
}

#[test]
fn inverted_date_bounds_are_rejected() {
    let tmp = tempdir().unwrap();
    let catalog = write_catalog(tmp.path());

    let mut cmd = kdb();
    cmd.args([
        "search",
        "--date-from",
        "1920",
        "--date-to",
        "1900",
        "--catalog",
        catalog.to_str().unwrap(),
    ]);

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("must not be greater"));
}
