#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ql() -> Command {
    cargo_bin_cmd!("questlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_questlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and add a quest with KPIs and daily tasks used by many tests
pub fn init_db_with_quest(db_path: &str) {
    // init DB (creates tables); --test skips the config file
    ql().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ql().args([
        "--db",
        db_path,
        "--user",
        "tester",
        "quest",
        "add",
        "Morning routine",
        "--category",
        "organization",
        "--kpi",
        "Runs:10:km",
        "--kpi",
        "Pages:30:pages",
        "--task",
        "Stretch",
        "--task",
        "Read",
    ])
    .assert()
    .success();
}
