use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `rota` invocation running inside `dir`, so the default config and
/// data files resolve relative to the temp directory.
fn rota(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rota").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn show_on_empty_schedule_suggests_adding() {
    let dir = TempDir::new().unwrap();
    rota(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No users yet"));
}

#[test]
fn add_then_show_lists_user() {
    let dir = TempDir::new().unwrap();
    rota(&dir)
        .args(["add", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added alice"));
    rota(&dir)
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("USER")
                .and(predicate::str::contains("DATE"))
                .and(predicate::str::contains("alice")),
        );
}

#[test]
fn add_duplicate_fails() {
    let dir = TempDir::new().unwrap();
    rota(&dir).args(["add", "alice"]).assert().success();
    rota(&dir)
        .args(["add", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn remove_unknown_user_fails() {
    let dir = TempDir::new().unwrap();
    rota(&dir)
        .args(["remove", "mallory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn show_json_emits_assignments_object() {
    let dir = TempDir::new().unwrap();
    rota(&dir).args(["add", "alice"]).assert().success();
    rota(&dir)
        .args(["--json", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"assignments\""));
}

#[test]
fn lookup_defaults_to_next_assignment() {
    let dir = TempDir::new().unwrap();
    rota(&dir).args(["add", "alice"]).assert().success();
    rota(&dir).args(["add", "bob"]).assert().success();
    rota(&dir)
        .arg("lookup")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice").and(predicate::str::contains("bob").not()));
}

#[test]
fn swap_reorders_users() {
    let dir = TempDir::new().unwrap();
    rota(&dir).args(["add", "alice"]).assert().success();
    rota(&dir).args(["add", "bob"]).assert().success();
    rota(&dir)
        .args(["swap", "alice", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Swapped alice and bob"));
    rota(&dir)
        .arg("lookup")
        .assert()
        .success()
        .stdout(predicate::str::contains("bob"));
}

#[test]
fn delay_by_full_interval_fails() {
    let dir = TempDir::new().unwrap();
    rota(&dir).args(["add", "alice"]).assert().success();
    rota(&dir).args(["add", "bob"]).assert().success();
    rota(&dir)
        .args(["delay", "--days", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot delay"));
}

#[test]
fn config_file_changes_interval() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("rota.yaml"), "interval_days: 1\n").unwrap();
    rota(&dir).args(["add", "alice"]).assert().success();
    rota(&dir).args(["add", "bob"]).assert().success();
    // With a 1-day interval, delaying the next assignment by 1 day
    // would land on the following one.
    rota(&dir)
        .args(["delay", "--days", "1"])
        .assert()
        .failure();
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("rota.yaml"), "interval_days: 0\n").unwrap();
    rota(&dir)
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval_days"));
}
