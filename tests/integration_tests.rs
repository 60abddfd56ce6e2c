use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};

mod common;
use common::{init_db_with_quest, ql, setup_test_db};

#[test]
fn board_shows_added_quest_in_its_category() {
    let db = setup_test_db("board_shows");
    init_db_with_quest(&db);

    ql().args(["--db", &db, "--user", "tester", "board"])
        .assert()
        .success()
        .stdout(contains("Morning routine"))
        .stdout(is_match("(?s)Organization.*Morning routine").unwrap());
}

#[test]
fn kpi_bump_reports_counter_and_completion() {
    let db = setup_test_db("kpi_bump");

    ql().args(["--db", &db, "--test", "init"]).assert().success();
    ql().args([
        "--db", &db, "--user", "tester", "quest", "add", "Sprint", "--category", "finance",
        "--kpi", "Runs:2:km",
    ])
    .assert()
    .success();

    ql().args(["--db", &db, "--user", "tester", "kpi", "1", "1"])
        .assert()
        .success()
        .stdout(contains("Runs: 1 / 2 km"));

    ql().args(["--db", &db, "--user", "tester", "kpi", "1", "1"])
        .assert()
        .success()
        .stdout(contains("completed"));

    // completed placement wins over the finance column
    ql().args(["--db", &db, "--user", "tester", "board"])
        .assert()
        .success()
        .stdout(is_match("(?s)Completed.*Sprint").unwrap());
}

#[test]
fn kpi_delta_is_clamped_at_zero() {
    let db = setup_test_db("kpi_clamp");
    init_db_with_quest(&db);

    ql().args([
        "--db", &db, "--user", "tester", "kpi", "1", "1", "--delta", "-100",
    ])
    .assert()
    .success()
    .stdout(contains("Runs: 0 / 10 km"));
}

#[test]
fn checked_task_shows_up_in_daily_view() {
    let db = setup_test_db("check_task");
    init_db_with_quest(&db);

    ql().args([
        "--db", &db, "--user", "tester", "check", "task", "1", "Stretch",
    ])
    .assert()
    .success()
    .stdout(contains("1/2 tasks done"));

    ql().args(["--db", &db, "--user", "tester", "daily"])
        .assert()
        .success()
        .stdout(contains("[x] Stretch"))
        .stdout(contains("[ ] Read"));
}

#[test]
fn edit_preserves_kpi_current_counter() {
    let db = setup_test_db("edit_merge");
    init_db_with_quest(&db);

    ql().args([
        "--db", &db, "--user", "tester", "kpi", "1", "1", "--delta", "7",
    ])
    .assert()
    .success();

    // resubmit the KPI list with a new target for Runs
    ql().args([
        "--db", &db, "--user", "tester", "quest", "edit", "1",
        "--kpi", "Runs:20:km", "--kpi", "Pages:30:pages",
    ])
    .assert()
    .success();

    ql().args(["--db", &db, "--user", "tester", "kpis"])
        .assert()
        .success()
        .stdout(contains("7 / 20"))
        .stdout(contains("0 / 30"));
}

#[test]
fn blank_kpi_title_is_dropped_with_a_warning() {
    let db = setup_test_db("blank_kpi");

    ql().args(["--db", &db, "--test", "init"]).assert().success();
    ql().args([
        "--db", &db, "--user", "tester", "quest", "add", "Oops", "--category", "military",
        "--kpi", ":5:km", "--kpi", "Kept:5:km",
    ])
    .assert()
    .success()
    .stdout(contains("dropped"));

    ql().args(["--db", &db, "--user", "tester", "kpis"])
        .assert()
        .success()
        .stdout(contains("Kept"))
        .stdout(contains("0 / 5"));
}

#[test]
fn quest_move_changes_category_but_not_counters() {
    let db = setup_test_db("quest_move");
    init_db_with_quest(&db);

    ql().args(["--db", &db, "--user", "tester", "quest", "move", "1", "finance"])
        .assert()
        .success();

    ql().args(["--db", &db, "--user", "tester", "board"])
        .assert()
        .success()
        .stdout(is_match("(?s)Finance.*Morning routine").unwrap());

    ql().args(["--db", &db, "--user", "tester", "kpis"])
        .assert()
        .success()
        .stdout(contains("0 / 10"))
        .stdout(contains("0 / 30"));
}

#[test]
fn deleted_quest_disappears_from_the_board() {
    let db = setup_test_db("quest_del");
    init_db_with_quest(&db);

    ql().args(["--db", &db, "--user", "tester", "quest", "del", "1"])
        .assert()
        .success();

    ql().args(["--db", &db, "--user", "tester", "board"])
        .assert()
        .success()
        .stdout(contains("Morning routine").not());
}

#[test]
fn minds_roundtrip_and_daily_check() {
    let db = setup_test_db("minds");

    ql().args(["--db", &db, "--test", "init"]).assert().success();
    ql().args(["--db", &db, "--user", "tester", "mind", "add", "Be kind"])
        .assert()
        .success();

    ql().args(["--db", &db, "--user", "tester", "daily"])
        .assert()
        .success()
        .stdout(contains("Be kind"));

    ql().args(["--db", &db, "--user", "tester", "check", "mind", "1"])
        .assert()
        .success()
        .stdout(contains("Be kind"));

    ql().args(["--db", &db, "--user", "tester", "daily"])
        .assert()
        .success()
        .stdout(is_match(r"\[x\].*Be kind").unwrap());

    ql().args(["--db", &db, "--user", "tester", "mind", "del", "1"])
        .assert()
        .success();

    ql().args(["--db", &db, "--user", "tester", "daily"])
        .assert()
        .success()
        .stdout(contains("Be kind").not());
}

#[test]
fn unknown_category_is_rejected() {
    let db = setup_test_db("bad_category");

    ql().args(["--db", &db, "--test", "init"]).assert().success();
    ql().args([
        "--db", &db, "--user", "tester", "quest", "add", "X", "--category", "weird",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid category"));
}

#[test]
fn entries_are_scoped_to_their_owner() {
    let db = setup_test_db("owner_scope");
    init_db_with_quest(&db);

    ql().args(["--db", &db, "--user", "someone_else", "board"])
        .assert()
        .success()
        .stdout(contains("Morning routine").not());
}

#[test]
fn audit_log_records_operations() {
    let db = setup_test_db("audit_log");
    init_db_with_quest(&db);

    ql().args(["--db", &db, "--user", "tester", "quest", "del", "1"])
        .assert()
        .success();

    ql().args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("quest-add"))
        .stdout(contains("quest-del"));
}

#[test]
fn db_info_reports_counts() {
    let db = setup_test_db("db_info");
    init_db_with_quest(&db);

    ql().args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Quests: 1"));
}
