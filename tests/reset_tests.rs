use chrono::NaiveDate;
use questlog::core::reset::{LAST_RESET_KEY, ResetState, check_and_reset};
use questlog::db::initialize::init_db;
use questlog::db::pool::DbPool;
use questlog::db::queries;
use questlog::models::daily::DailyChecks;
use std::env;
use std::fs;
use std::path::PathBuf;

fn open_pool(name: &str) -> DbPool {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_questlog.sqlite", name));
    fs::remove_file(&path).ok();

    let pool = DbPool::new(&path.to_string_lossy()).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn stale_date_clears_state_and_updates_storage() {
    let mut pool = open_pool("reset_stale");
    let owner = "tester";

    queries::set_meta(&mut pool, owner, LAST_RESET_KEY, "2024-01-01").unwrap();
    queries::save_daily_check(&mut pool, owner, date("2024-01-01"), "1_Stretch", true).unwrap();

    let mut checks = DailyChecks::new();
    checks.insert("1_Stretch".to_string(), true);

    let state = check_and_reset(&mut pool, owner, date("2024-01-02"), &mut checks).unwrap();

    assert_eq!(state, ResetState::Stale);
    assert!(checks.is_empty());
    assert_eq!(
        queries::get_meta(&mut pool, owner, LAST_RESET_KEY)
            .unwrap()
            .as_deref(),
        Some("2024-01-02")
    );
    // prior-day rows are pruned
    assert!(
        queries::load_daily_checks(&mut pool, owner, date("2024-01-01"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn fresh_date_leaves_state_untouched() {
    let mut pool = open_pool("reset_fresh");
    let owner = "tester";
    let today = date("2024-03-10");

    queries::set_meta(&mut pool, owner, LAST_RESET_KEY, "2024-03-10").unwrap();
    queries::save_daily_check(&mut pool, owner, today, "mind_4", true).unwrap();

    let mut checks = DailyChecks::new();
    checks.insert("mind_4".to_string(), true);

    let state = check_and_reset(&mut pool, owner, today, &mut checks).unwrap();

    assert_eq!(state, ResetState::Fresh);
    assert_eq!(checks.get("mind_4"), Some(&true));
    assert_eq!(
        queries::load_daily_checks(&mut pool, owner, today)
            .unwrap()
            .get("mind_4"),
        Some(&true)
    );
}

#[test]
fn first_run_without_record_is_stale() {
    let mut pool = open_pool("reset_first");
    let mut checks = DailyChecks::new();

    let state = check_and_reset(&mut pool, "tester", date("2024-06-01"), &mut checks).unwrap();

    assert_eq!(state, ResetState::Stale);
    assert_eq!(
        queries::get_meta(&mut pool, "tester", LAST_RESET_KEY)
            .unwrap()
            .as_deref(),
        Some("2024-06-01")
    );
}

#[test]
fn reset_keeps_rows_written_for_today() {
    let mut pool = open_pool("reset_today_rows");
    let owner = "tester";
    let today = date("2024-02-02");

    queries::set_meta(&mut pool, owner, LAST_RESET_KEY, "2024-02-01").unwrap();
    queries::save_daily_check(&mut pool, owner, date("2024-02-01"), "1_Old", true).unwrap();
    queries::save_daily_check(&mut pool, owner, today, "1_New", true).unwrap();

    let mut checks = DailyChecks::new();
    check_and_reset(&mut pool, owner, today, &mut checks).unwrap();

    let stored = queries::load_daily_checks(&mut pool, owner, today).unwrap();
    assert_eq!(stored.get("1_New"), Some(&true));
    assert!(
        queries::load_daily_checks(&mut pool, owner, date("2024-02-01"))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn reset_is_scoped_to_the_owner() {
    let mut pool = open_pool("reset_owner_scope");
    let today = date("2024-05-05");

    queries::set_meta(&mut pool, "alice", LAST_RESET_KEY, "2024-05-04").unwrap();
    queries::save_daily_check(&mut pool, "bob", date("2024-05-04"), "9_Walk", true).unwrap();

    let mut checks = DailyChecks::new();
    check_and_reset(&mut pool, "alice", today, &mut checks).unwrap();

    // bob's rows and reset record are untouched
    assert_eq!(
        queries::load_daily_checks(&mut pool, "bob", date("2024-05-04"))
            .unwrap()
            .get("9_Walk"),
        Some(&true)
    );
    assert!(
        queries::get_meta(&mut pool, "bob", LAST_RESET_KEY)
            .unwrap()
            .is_none()
    );
}
