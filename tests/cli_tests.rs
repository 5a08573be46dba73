//! Subcommand behavior, exercised through the real binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn brickdex() -> Command {
    Command::cargo_bin("brickdex").unwrap()
}

fn write_catalog(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("instructions.json");
    std::fs::write(&path, json).unwrap();
    path
}

#[test]
fn list_embedded_catalog_shows_everything() {
    brickdex()
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 10 of 10 instructions."))
        .stdout(predicate::str::contains("Milo the Science Rover"));
}

#[test]
fn list_filters_and_reports_stats() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        &dir,
        r#"[
            {"title": "A", "category": "Motors", "difficulty": 2, "tags": ["x"]},
            {"title": "B", "category": "Sensors", "difficulty": 4}
        ]"#,
    );

    brickdex()
        .args(["list", path.to_str().unwrap(), "--search", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 2 instructions."))
        .stdout(predicate::str::contains("Category: Motors • Difficulty: 2/5"));
}

#[test]
fn list_empty_result_shows_the_empty_state_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, r#"[{"title": "A"}]"#);

    brickdex()
        .args(["list", path.to_str().unwrap(), "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 0 of 1 instructions."))
        .stdout(predicate::str::contains(
            "No instructions match the current filters.",
        ));
}

#[test]
fn list_missing_catalog_fails_with_guidance() {
    brickdex()
        .args(["list", "no/such/instructions.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exists"));
}

#[test]
fn list_json_output_is_parseable() {
    let output = brickdex()
        .args(["list", "--format", "json", "--search", "rover"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(payload["cards"].is_array());
    assert!(payload["stats"]["message"]
        .as_str()
        .unwrap()
        .starts_with("Showing"));
}

#[test]
fn categories_lists_distinct_sorted_options() {
    brickdex()
        .args(["categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robots"))
        .stdout(predicate::str::contains("Machines"));
}

#[test]
fn check_reports_problems_without_failing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        &dir,
        r#"[{"description": "no title or pdf"}, {"title": "A", "pdf_url": "x", "difficulty": 9}]"#,
    );

    brickdex()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("pdf_url"))
        .stdout(predicate::str::contains("1-5"));
}

#[test]
fn check_rejects_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(&dir, "not json at all");

    brickdex()
        .args(["check", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn export_round_trips_a_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_catalog(
        &dir,
        r#"[{"title": "A", "difficulty": 3}, "stray entry", {"title": "B"}]"#,
    );
    let out = dir.path().join("clean.json");

    brickdex()
        .args([
            "export",
            path.to_str().unwrap(),
            "--output",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 items"));

    // The normalized file loads cleanly and kept item order.
    let normalized: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(normalized.as_array().unwrap().len(), 2);
    assert_eq!(normalized[0]["title"], "A");
    // Difficulty is normalized to its textual form.
    assert_eq!(normalized[0]["difficulty"], "3");
}

#[test]
fn browse_refuses_to_run_without_a_terminal() {
    brickdex()
        .args(["browse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
