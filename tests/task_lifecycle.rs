use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use std::path::Path;

fn taskz(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("taskz").unwrap();
    cmd.env("TASKZ_DATA_DIR", data_dir);
    cmd
}

fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

fn read_store(data_dir: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(data_dir.join("task.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn create_complete_delete_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    taskz(temp_dir.path())
        .args(["create", "Buy milk", "2% milk", &tomorrow()])
        .assert()
        .success()
        .stdout(predicates::str::contains("Task created: Buy milk"));

    // The store file is a JSON object keyed by the assigned uuid.
    let store = read_store(temp_dir.path());
    let records = store.as_object().unwrap();
    assert_eq!(records.len(), 1);
    let (id, record) = records.iter().next().unwrap();
    assert_eq!(record["id"], *id);
    assert_eq!(record["title"], "Buy milk");
    assert_eq!(record["description"], "2% milk");
    assert_eq!(record["status"], "pending");
    assert_eq!(record["due_date"]["timezone"], "UTC");
    let id = id.clone();

    taskz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Buy milk"));

    taskz(temp_dir.path())
        .args(["update", &id, "--completed"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Task updated: Buy milk"));

    let store = read_store(temp_dir.path());
    assert_eq!(store[&id]["status"], "completed");

    taskz(temp_dir.path())
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicates::str::contains("Task deleted: Buy milk"));

    taskz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No tasks found."));
}

#[test]
fn update_keeps_omitted_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    taskz(temp_dir.path())
        .args(["create", "Buy milk", "2% milk", &tomorrow()])
        .assert()
        .success();

    let store = read_store(temp_dir.path());
    let id = store.as_object().unwrap().keys().next().unwrap().clone();

    taskz(temp_dir.path())
        .args(["update", &id, "--title", "Buy bread"])
        .assert()
        .success();

    let store = read_store(temp_dir.path());
    assert_eq!(store[&id]["title"], "Buy bread");
    assert_eq!(store[&id]["description"], "2% milk");
    assert_eq!(store[&id]["status"], "pending");
}

#[test]
fn rejects_a_past_due_date() {
    let temp_dir = tempfile::tempdir().unwrap();

    taskz(temp_dir.path())
        .args(["create", "Too late", "already overdue", "2023-01-01"])
        .assert()
        .failure()
        .stderr(predicates::str::contains(
            "The due date can not be earlier than today.",
        ));
}

#[test]
fn rejects_a_malformed_due_date() {
    let temp_dir = tempfile::tempdir().unwrap();

    taskz(temp_dir.path())
        .args(["create", "T", "D", "02-12-2033"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("It should be Y-m-d."));
}

#[test]
fn delete_of_an_unknown_id_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let id = uuid::Uuid::new_v4().to_string();

    taskz(temp_dir.path())
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Task not found"));
}

#[test]
fn corrupted_store_reads_as_empty_by_default_but_fails_when_configured() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("task.json"), "{ not json").unwrap();

    taskz(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No tasks found."));

    taskz(temp_dir.path())
        .args(["config", "malformed-store", "fail"])
        .assert()
        .success()
        .stdout(predicates::str::contains("malformed-store = fail"));

    taskz(temp_dir.path()).arg("list").assert().failure();
}
