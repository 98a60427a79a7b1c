use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn food(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("food").unwrap();
    cmd.env("FOOD_TRACKER_DIR", dir.path())
        .env_remove("FOOD_TRACKER_TOKEN");
    cmd
}

#[test]
fn test_show_config_needs_no_network() {
    let dir = TempDir::new().unwrap();
    food(&dir)
        .arg("--show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheet name:        Su19 Data"))
        .stdout(predicate::str::contains("Entries start row: 9"));
}

#[test]
fn test_invalid_entry_kind_is_rejected() {
    let dir = TempDir::new().unwrap();
    food(&dir)
        .args(["brunch", "Eggs", "5.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid entry kind: 'brunch'"));
}

#[test]
fn test_missing_amount_is_usage_error() {
    let dir = TempDir::new().unwrap();
    food(&dir).args(["lunch", "Sandwich"]).assert().failure();
}

#[test]
fn test_unconfigured_spreadsheet_is_reported() {
    let dir = TempDir::new().unwrap();
    food(&dir)
        .args(["shopping", "Trader Joe's", "42.10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("spreadsheet_id is not set"));
}

#[test]
fn test_missing_token_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"spreadsheet_id": "abc123"}"#,
    )
    .unwrap();

    food(&dir)
        .args(["shopping", "Trader Joe's", "42.10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No access token"));
}

#[test]
fn test_meal_prompt_reads_stdin() {
    let dir = TempDir::new().unwrap();
    food(&dir)
        .args(["lunch", "Sandwich", "8.50"])
        .write_stdin("9\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("(2) Cooked/Home"))
        .stdout(predicate::str::contains("Invalid choice '9'"))
        .stderr(predicate::str::contains("No meal type selected"));
}
