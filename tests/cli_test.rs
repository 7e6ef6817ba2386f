use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn skillplan(db: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("skillplan").unwrap();
    cmd.env("SKILLPLAN_DB_PATH", db.path());
    cmd
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("skillplan").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("study planner"));
}

#[test]
fn test_init_generates_roadmap() {
    let db = TempDir::new().unwrap();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "Coding", "--hours", "2", "--months", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("28 tasks"));

    skillplan(&db)
        .arg("roadmap")
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundation Week"));
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let db = TempDir::new().unwrap();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "AI"])
        .assert()
        .success();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "AI"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_task_completion_updates_progress_and_achievements() {
    let db = TempDir::new().unwrap();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "Coding", "--hours", "2", "--months", "1"])
        .assert()
        .success();

    skillplan(&db)
        .args(["task", "complete", "1-1-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/28"))
        .stdout(predicate::str::contains("First Step"));

    // undoing restores the original count
    skillplan(&db)
        .args(["task", "undo", "1-1-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0/28"));
}

#[test]
fn test_unknown_task_id_fails() {
    let db = TempDir::new().unwrap();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "Coding"])
        .assert()
        .success();

    skillplan(&db)
        .args(["task", "complete", "99-1-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No task with id"));
}

#[test]
fn test_stats_json_snapshot() {
    let db = TempDir::new().unwrap();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "Drawing"])
        .assert()
        .success();

    skillplan(&db)
        .args(["stats", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasks_completed"));
}

#[test]
fn test_reset_requires_force() {
    let db = TempDir::new().unwrap();

    skillplan(&db)
        .args(["init", "--name", "Ada", "--domain", "Singing"])
        .assert()
        .success();

    skillplan(&db)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    skillplan(&db)
        .args(["reset", "--force"])
        .assert()
        .success();

    skillplan(&db)
        .arg("roadmap")
        .assert()
        .success()
        .stdout(predicate::str::contains("No roadmap yet"));
}
