use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "farmdesk";

fn farmdesk(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FARMDESK_DATA_DIR", base);
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("FARMDESK_SEED");
    cmd
}

#[test]
fn dashboard_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    farmdesk(dir.path())
        .assert()
        .success()
        .stdout(contains("Farm Dashboard").and(contains("Repair irrigation pump")));
}

#[test]
fn farm_list_shows_sample_farms() {
    let dir = TempDir::new().unwrap();
    farmdesk(dir.path())
        .args(["farm", "list"])
        .assert()
        .success()
        .stdout(contains("North Ridge Farm").and(contains("Willow Creek Orchard")));
}

#[test]
fn expense_list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    farmdesk(dir.path())
        .args(["expense", "list", "--category", "fuel"])
        .assert()
        .success()
        .stdout(contains("Diesel").and(contains("Nitrogen").not()));
}

#[test]
fn expense_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    farmdesk(dir.path())
        .args(["expense", "show", "999"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn expense_list_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    farmdesk(dir.path())
        .args(["expense", "list", "--category", "rockets"])
        .assert()
        .failure();
}

#[test]
fn report_chart_exports_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("chart.csv");
    farmdesk(dir.path())
        .args(["report", "chart", "--chart", "pie", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("exported to"));

    let contents = std::fs::read_to_string(&out).unwrap();
    assert!(contents.starts_with("Category,Amount,Percentage"));
    assert!(contents.contains("Equipment"));
}

#[test]
fn init_writes_settings_and_seed() {
    let dir = TempDir::new().unwrap();
    farmdesk(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("seed.json").exists());

    // A second run keeps the existing seed
    farmdesk(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn seed_flag_loads_a_custom_file() {
    let dir = TempDir::new().unwrap();
    let seed = dir.path().join("custom.json");
    std::fs::write(
        &seed,
        r#"{
            "farms": [{"id": 1, "name": "Hilltop Acres"}],
            "expenses": [
                {"id": 1, "farmId": 1, "category": "fuel", "amount": 12.5, "date": "2024-03-01"},
                {"id": 2, "farmId": 1, "category": "fuel", "amount": "oops", "date": "2024-03-02"}
            ]
        }"#,
    )
    .unwrap();

    farmdesk(dir.path())
        .args(["farm", "list", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout(contains("Hilltop Acres").and(contains("North Ridge Farm").not()));

    farmdesk(dir.path())
        .args(["report", "stats", "--seed"])
        .arg(&seed)
        .assert()
        .success()
        .stdout(contains("$12.50"));
}
