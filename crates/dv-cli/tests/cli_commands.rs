//! Integration tests for the dv binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dv() -> Command {
    Command::cargo_bin("dv").unwrap()
}

fn session_in(dir: &TempDir) -> String {
    dir.path().join("session.json").display().to_string()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

const TINY_STORY: &str = r#"{
  "initial": "puente",
  "states": [
    {
      "id": "puente",
      "description": "El puente de mando.",
      "transitions": [
        { "label": "saltar", "target": "vacio" },
        { "label": "huir", "target": "fuera" }
      ]
    },
    {
      "id": "fuera",
      "description": "Escapaste.",
      "isFinal": true,
      "finalType": "victoria"
    }
  ]
}"#;

// ---------------------------------------------------------------------------
// Turns
// ---------------------------------------------------------------------------

#[test]
fn turn_advances_and_saves_session() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);

    dv().args(["turn", "investigar nave", "--session", session.as_str(), "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": true"))
        .stdout(predicate::str::contains("\"currentStateId\": \"sala_control\""));

    let saved = read_json(Path::new(&session));
    assert_eq!(saved["currentStateId"], "sala_control");
    assert_eq!(saved["visitedStates"], serde_json::json!(["inicio", "sala_control"]));
}

#[test]
fn turns_continue_from_session() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);

    dv().args(["turn", "investigar_nave", "--session", session.as_str()])
        .assert()
        .success();
    dv().args(["turn", "ir a la bodega", "--session", session.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("bodega_carga"));

    let saved = read_json(Path::new(&session));
    assert_eq!(
        saved["visitedStates"],
        serde_json::json!(["inicio", "sala_control", "bodega_carga"])
    );
}

#[test]
fn unrecognized_turn_reports_failure() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);

    dv().args(["turn", "xyzzy", "--session", session.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("xyzzy"));

    let saved = read_json(Path::new(&session));
    assert_eq!(saved["currentStateId"], "inicio");
}

#[test]
fn escape_ends_the_story() {
    dv().args(["turn", "buscar salida"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"isFinal\": true"))
        .stdout(predicate::str::contains("\"finalType\": \"derrota_cobarde\""));
}

#[test]
fn corrupt_session_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);
    fs::write(&session, "{ not json").unwrap();

    dv().args(["look", "--json", "--session", session.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"currentStateId\": \"inicio\""));
}

#[test]
fn stale_session_state_is_reset() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);
    fs::write(
        &session,
        r#"{"currentStateId":"borrado","visitedStates":["inicio","borrado"]}"#,
    )
    .unwrap();

    dv().args(["turn", "buscar_salida", "--session", session.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("derrota_cobarde"));
}

// ---------------------------------------------------------------------------
// Look / reset
// ---------------------------------------------------------------------------

#[test]
fn look_shows_scene() {
    dv().args(["look", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Te despiertas"))
        .stdout(predicate::str::contains("Investigar Nave"))
        .stdout(predicate::str::contains("Buscar Salida"));
}

#[test]
fn reset_writes_fresh_session() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);

    dv().args(["turn", "buscar salida", "--session", session.as_str()])
        .assert()
        .success();
    dv().args(["reset", "--session", session.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session reset"));

    let saved = read_json(Path::new(&session));
    assert_eq!(saved["currentStateId"], "inicio");
    assert_eq!(saved["visitedStates"], serde_json::json!(["inicio"]));
}

// ---------------------------------------------------------------------------
// Introspection
// ---------------------------------------------------------------------------

#[test]
fn graph_json_has_totals() {
    let output = dv().args(["graph", "--json"]).output().unwrap();
    assert!(output.status.success());

    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["totalStates"], 41);
    assert!(info["finalStatesCount"].as_u64().unwrap() > 0);
    assert!(info.get("currentStateId").is_none());
}

#[test]
fn graph_marks_session_state() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);
    dv().args(["turn", "investigar_nave", "--session", session.as_str()])
        .assert()
        .success();

    let output = dv()
        .args(["graph", "--json", "--session", session.as_str()])
        .output()
        .unwrap();
    let info: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(info["currentStateId"], "sala_control");
}

#[test]
fn graph_table() {
    dv().arg("graph")
        .assert()
        .success()
        .stdout(predicate::str::contains("sala_control"))
        .stdout(predicate::str::contains("41 states"));
}

#[test]
fn suggest_from_start() {
    dv().args(["suggest", "busc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buscar_salida"));
}

#[test]
fn suggest_nothing() {
    dv().args(["suggest", "qqqqqqqq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching actions"));
}

#[test]
fn sample_prints_count() {
    let output = dv()
        .args(["sample", "--count", "3", "--seed", "9"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().filter(|l| l.contains("💭")).count(), 3);
}

#[test]
fn sample_is_reproducible() {
    let run = || {
        dv().args(["sample", "--seed", "11"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

// ---------------------------------------------------------------------------
// Story files
// ---------------------------------------------------------------------------

#[test]
fn check_builtin_warns_about_dangling() {
    dv().arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("41 states"))
        .stderr(predicate::str::contains("investigacion_profunda"));
}

#[test]
fn check_custom_story() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.json");
    fs::write(&story, TINY_STORY).unwrap();

    dv().args(["check", "--story", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 states"))
        .stdout(predicate::str::contains("1 dangling transition"));
}

#[test]
fn check_rejects_broken_story() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.json");
    fs::write(&story, r#"{"initial": "nada", "states": []}"#).unwrap();

    dv().args(["check", "--story", story.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn check_missing_file() {
    dv().args(["check", "--story", "/nonexistent/story.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn export_then_check() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("omega.json");

    dv().args(["export", "-o", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    dv().args(["check", "--story", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("41 states"));
}

#[test]
fn custom_story_turns() {
    let dir = TempDir::new().unwrap();
    let story = dir.path().join("story.json");
    fs::write(&story, TINY_STORY).unwrap();
    let story = story.to_str().unwrap();

    dv().args(["turn", "huir", "--story", story])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"finalType\": \"victoria\""));

    // The missing target sends the session back to the start.
    dv().args(["turn", "saltar", "--story", story])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"currentStateId\": \"puente\""));
}

// ---------------------------------------------------------------------------
// Interactive play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_until_quit() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir);

    dv().args(["play", "--session", session.as_str(), "--seed", "5"])
        .write_stdin("help\nxyzzy\ninvestigar nave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Meta commands"))
        .stdout(predicate::str::contains("is not a valid action"));

    let saved = read_json(Path::new(&session));
    assert_eq!(saved["currentStateId"], "sala_control");
}

#[test]
fn play_stops_at_eof() {
    dv().arg("play").write_stdin("").assert().success();
}
