//! Idempotent schema migrations. Every migration probes the current
//! schema before acting, so re-running is always safe.

use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists (internal audit log).
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn quests_has_notes_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('quests')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "notes" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `quests` table.
///
/// `kpis` and `daily_tasks` are JSON documents. `category` carries no
/// CHECK constraint; unknown values are filtered at load instead.
fn create_quests_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS quests (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            title       TEXT NOT NULL,
            category    TEXT NOT NULL,
            kpis        TEXT NOT NULL DEFAULT '[]',
            daily_tasks TEXT NOT NULL DEFAULT '[]',
            notes       TEXT NOT NULL DEFAULT '',
            owner       TEXT NOT NULL,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_quests_owner_created ON quests(owner, created_at);
        "#,
    )?;
    Ok(())
}

/// Create the `minds` table.
fn create_minds_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS minds (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            text       TEXT NOT NULL,
            owner      TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_minds_owner_created ON minds(owner, created_at);
        "#,
    )?;
    Ok(())
}

/// Create the daily-check mapping and the per-owner durable KV store.
fn create_daily_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_checks (
            owner   TEXT NOT NULL,
            date    TEXT NOT NULL,
            key     TEXT NOT NULL,
            checked INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (owner, date, key)
        );

        CREATE TABLE IF NOT EXISTS meta (
            owner TEXT NOT NULL,
            key   TEXT NOT NULL,
            value TEXT NOT NULL,
            PRIMARY KEY (owner, key)
        );
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.3 `quests` table that lacked the `notes` column.
fn migrate_add_notes_to_quests(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "quests")? {
        return Ok(());
    }

    if quests_has_notes_column(conn)? {
        return Ok(());
    }

    warning("Adding 'notes' column to quests table...");

    conn.execute_batch(
        r#"
        ALTER TABLE quests ADD COLUMN notes TEXT NOT NULL DEFAULT '';
        "#,
    )?;
    Ok(())
}

/// Run every pending migration, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_add_notes_to_quests(conn)?;
    create_quests_table(conn)?;
    create_minds_table(conn)?;
    create_daily_tables(conn)?;
    Ok(())
}
