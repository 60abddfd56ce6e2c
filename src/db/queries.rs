//! Per-entity store operations: quests, minds, daily checks, durable KV.
//! Read failures propagate as errors, never as an empty result.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::category::Category;
use crate::models::daily::DailyChecks;
use crate::models::mind::Mind;
use crate::models::quest::Quest;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, Row, params};

// ---------------------------
// Quests
// ---------------------------

/// List the owner's quests, newest first (the board contract).
/// Rows whose category is not one of the four known values are skipped.
pub fn list_quests(pool: &mut DbPool, owner: &str) -> AppResult<Vec<Quest>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, title, category, kpis, daily_tasks, notes, owner, created_at, updated_at
         FROM quests
         WHERE owner = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([owner], map_quest_row)?;

    let mut out = Vec::new();
    for r in rows {
        if let Some(q) = r? {
            out.push(q);
        }
    }
    Ok(out)
}

fn map_quest_row(row: &Row) -> rusqlite::Result<Option<Quest>> {
    let category_str: String = row.get("category")?;
    let category = match Category::from_db_str(&category_str) {
        Some(c) => c,
        // unknown category: drop the row from display
        None => return Ok(None),
    };

    let kpis_json: String = row.get("kpis")?;
    let kpis = serde_json::from_str(&kpis_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let tasks_json: String = row.get("daily_tasks")?;
    let daily_tasks = serde_json::from_str(&tasks_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Some(Quest {
        id: row.get("id")?,
        title: row.get("title")?,
        category,
        kpis,
        daily_tasks,
        notes: row.get("notes")?,
        owner: row.get("owner")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    }))
}

pub fn insert_quest(pool: &mut DbPool, quest: &Quest) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO quests (title, category, kpis, daily_tasks, notes, owner, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            quest.title,
            quest.category.to_db_str(),
            serde_json::to_string(&quest.kpis)?,
            serde_json::to_string(&quest.daily_tasks)?,
            quest.notes,
            quest.owner,
            quest.created_at,
            quest.updated_at,
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn update_quest(pool: &mut DbPool, quest: &Quest) -> AppResult<()> {
    pool.conn.execute(
        "UPDATE quests
         SET title = ?1, category = ?2, kpis = ?3, daily_tasks = ?4, notes = ?5, updated_at = ?6
         WHERE id = ?7 AND owner = ?8",
        params![
            quest.title,
            quest.category.to_db_str(),
            serde_json::to_string(&quest.kpis)?,
            serde_json::to_string(&quest.daily_tasks)?,
            quest.notes,
            quest.updated_at,
            quest.id,
            quest.owner,
        ],
    )?;
    Ok(())
}

pub fn delete_quest(pool: &mut DbPool, owner: &str, id: i64) -> AppResult<()> {
    pool.conn.execute(
        "DELETE FROM quests WHERE id = ?1 AND owner = ?2",
        params![id, owner],
    )?;
    Ok(())
}

// ---------------------------
// Minds
// ---------------------------

/// List the owner's minds, newest first.
pub fn list_minds(pool: &mut DbPool, owner: &str) -> AppResult<Vec<Mind>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, text, owner, created_at, updated_at
         FROM minds
         WHERE owner = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([owner], |row| {
        Ok(Mind {
            id: row.get("id")?,
            text: row.get("text")?,
            owner: row.get("owner")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_mind(pool: &mut DbPool, mind: &Mind) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO minds (text, owner, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![mind.text, mind.owner, mind.created_at, mind.updated_at],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn update_mind(pool: &mut DbPool, mind: &Mind) -> AppResult<()> {
    pool.conn.execute(
        "UPDATE minds SET text = ?1, updated_at = ?2 WHERE id = ?3 AND owner = ?4",
        params![mind.text, mind.updated_at, mind.id, mind.owner],
    )?;
    Ok(())
}

pub fn delete_mind(pool: &mut DbPool, owner: &str, id: i64) -> AppResult<()> {
    pool.conn.execute(
        "DELETE FROM minds WHERE id = ?1 AND owner = ?2",
        params![id, owner],
    )?;
    Ok(())
}

// ---------------------------
// Daily checks
// ---------------------------

/// Load the check mapping for one (owner, calendar day).
pub fn load_daily_checks(pool: &mut DbPool, owner: &str, date: NaiveDate) -> AppResult<DailyChecks> {
    let mut stmt = pool
        .conn
        .prepare("SELECT key, checked FROM daily_checks WHERE owner = ?1 AND date = ?2")?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![owner, date_str], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i32>(1)? == 1))
    })?;

    let mut out = DailyChecks::new();
    for r in rows {
        let (key, checked) = r?;
        out.insert(key, checked);
    }
    Ok(out)
}

/// Upsert one check flag; called after every toggle.
pub fn save_daily_check(
    pool: &mut DbPool,
    owner: &str,
    date: NaiveDate,
    key: &str,
    checked: bool,
) -> AppResult<()> {
    let date_str = date.format("%Y-%m-%d").to_string();

    pool.conn.execute(
        "INSERT INTO daily_checks (owner, date, key, checked)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(owner, date, key) DO UPDATE SET checked = excluded.checked",
        params![owner, date_str, key, if checked { 1 } else { 0 }],
    )?;
    Ok(())
}

/// Prune check rows older than the given day. Returns the row count.
pub fn clear_daily_checks_before(pool: &mut DbPool, owner: &str, date: &str) -> AppResult<usize> {
    let n = pool.conn.execute(
        "DELETE FROM daily_checks WHERE owner = ?1 AND date < ?2",
        params![owner, date],
    )?;
    Ok(n)
}

// ---------------------------
// Durable KV (meta)
// ---------------------------

pub fn get_meta(pool: &mut DbPool, owner: &str, key: &str) -> AppResult<Option<String>> {
    let value = pool
        .conn
        .query_row(
            "SELECT value FROM meta WHERE owner = ?1 AND key = ?2",
            params![owner, key],
            |row| row.get(0),
        )
        .optional()?;
    Ok(value)
}

pub fn set_meta(pool: &mut DbPool, owner: &str, key: &str, value: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO meta (owner, key, value)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(owner, key) DO UPDATE SET value = excluded.value",
        params![owner, key, value],
    )?;
    Ok(())
}
