use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn wf_cmd(db_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("wf").expect("Failed to find wf binary");
    cmd.args(["--no-color", "--database-file", db_path]);
    cmd
}

fn add_leg(db: &str, trip: &str, from: (&str, &str), to: (&str, &str), transport: &str, price: &str) {
    wf_cmd(db)
        .args([
            "segment", "add", trip, "--from", from.0, "--from-at", from.1, "--to", to.0,
            "--to-at", to.1, "--transport", transport, "--price", price,
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_create_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wf_cmd(db_path.to_str().unwrap())
        .args(["trip", "create", "Spring Break"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip with ID: 1"))
        .stdout(predicate::str::contains("# 1. Spring Break"));
}

#[test]
fn test_cli_create_trip_default_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wf_cmd(db_path.to_str().unwrap())
        .args(["trip", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("新旅程"));
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wf_cmd(db_path.to_str().unwrap())
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn test_cli_default_command_lists_trips() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Listed"]).assert().success();

    wf_cmd(db)
        .assert()
        .success()
        .stdout(predicate::str::contains("Listed"));
}

#[test]
fn test_cli_favorites_listed_first() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    for name in ["One", "Two", "Three"] {
        wf_cmd(db).args(["trip", "create", name]).assert().success();
    }
    wf_cmd(db)
        .args(["trip", "favorite", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added to favorites"));

    let output = wf_cmd(db).args(["--json", "trip", "list"]).output().unwrap();
    assert!(output.status.success());
    let trips: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<u64> = trips
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_cli_rename_blank_is_noop() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Keep Me"]).assert().success();

    wf_cmd(db)
        .args(["trip", "rename", "1", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed."))
        .stdout(predicate::str::contains("Keep Me"));

    wf_cmd(db)
        .args(["trip", "rename", "1", "New Name"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed from 'Keep Me' to 'New Name'"));
}

#[test]
fn test_cli_segment_round_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Flight"]).assert().success();
    add_leg(db, "1", ("Origin", "0,0"), ("Destination", "1,1"), "飞机", "100");

    let output = wf_cmd(db)
        .args(["--json", "segment", "list", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let segments: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let segments = segments.as_array().unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0]["transport"], "飞机");
    assert_eq!(segments[0]["price"], "100");
    assert_eq!(segments[0]["start"]["position"]["lat"], 0.0);
    assert_eq!(segments[0]["end"]["position"]["lng"], 1.0);

    wf_cmd(db)
        .args(["segment", "list", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Origin → Destination"))
        .stdout(predicate::str::contains("**Total**: ¥100.00"));
}

#[test]
fn test_cli_unknown_transport_is_kept_with_warning() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Odd"]).assert().success();

    wf_cmd(db)
        .env("RUST_LOG", "warn")
        .args([
            "segment", "add", "1", "--from", "A", "--from-at", "0,0", "--to", "B", "--to-at",
            "1,1", "-t", "hovercraft",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("hovercraft"))
        .stderr(predicate::str::contains("Unknown transport 'hovercraft'"))
        .stderr(predicate::str::contains("汽车, 飞机, 高铁"));

    wf_cmd(db)
        .env("RUST_LOG", "warn")
        .args([
            "segment", "add", "1", "--from", "B", "--from-at", "1,1", "--to", "C", "--to-at",
            "2,2", "-t", "train",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown transport").not());
}

#[test]
fn test_cli_segment_add_to_missing_trip_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db)
        .args([
            "segment", "add", "42", "--from", "A", "--from-at", "0,0", "--to", "B", "--to-at",
            "1,1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip with ID 42 not found"));
}

#[test]
fn test_cli_segment_add_rejects_bad_coordinate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wf_cmd(db_path.to_str().unwrap())
        .args([
            "segment", "add", "1", "--from", "A", "--from-at", "north", "--to", "B", "--to-at",
            "1,1",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected LAT,LNG"));
}

#[test]
fn test_cli_delete_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Doomed"]).assert().success();
    add_leg(db, "1", ("A", "0,0"), ("B", "1,1"), "火车", "30");
    add_leg(db, "1", ("B", "1,1"), ("C", "2,2"), "火车", "30");

    wf_cmd(db)
        .args(["trip", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("without --confirm"));

    wf_cmd(db)
        .args(["trip", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted trip 'Doomed' (ID: 1) and 2 segment(s)",
        ));

    wf_cmd(db)
        .args(["trip", "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip with ID 1 not found"));
}

#[test]
fn test_cli_clear_segments_keeps_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Reset"]).assert().success();
    add_leg(db, "1", ("A", "0,0"), ("B", "1,1"), "汽车", "5");

    wf_cmd(db)
        .args(["segment", "clear", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 segment(s) from trip 1"));

    wf_cmd(db)
        .args(["trip", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset"))
        .stdout(predicate::str::contains("No segments in this trip."));
}

#[test]
fn test_cli_sidebar_expansion() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "First"]).assert().success();
    wf_cmd(db).args(["trip", "create", "Second"]).assert().success();
    add_leg(db, "1", ("Home", "0,0"), ("Coast", "1,1"), "bike", "0");
    add_leg(db, "2", ("Hidden", "5,5"), ("Away", "6,6"), "metro", "3");

    wf_cmd(db)
        .args(["sidebar", "--expand", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**First**"))
        .stdout(predicate::str::contains("**Second**"))
        .stdout(predicate::str::contains("Home → Coast"))
        .stdout(predicate::str::contains("continue from here"))
        .stdout(predicate::str::contains("Hidden").not());

    wf_cmd(db)
        .args(["sidebar", "--expand", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip with ID 9 not found"));
}

#[test]
fn test_cli_route_draw_plan() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db = db_path.to_str().unwrap();

    wf_cmd(db).args(["trip", "create", "Drawn"]).assert().success();
    add_leg(db, "1", ("Start", "0,0"), ("End", "1,1"), "高铁", "88");

    wf_cmd(db)
        .args(["route", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Clear map"))
        .stdout(predicate::str::contains("Add line #1 (18px #2196F3)"))
        .stdout(predicate::str::contains("Draw line #1 with 31 points"))
        .stdout(predicate::str::contains("\"¥88\""))
        .stdout(predicate::str::contains("start pin \"Start\""))
        .stdout(predicate::str::contains("end pin \"End\""))
        .stdout(predicate::str::contains("(padding 250)"));
}
