//! Application state controller.
//!
//! Owns the in-memory quest/mind/check collections (no module-level
//! state) and mediates every user action between the CLI and the store.
//! Writes go to the store first; the collections are then reloaded, so
//! the rendered view always reflects persisted state.

use crate::config::Config;
use crate::core::merge::{self, QuestForm};
use crate::core::progress;
use crate::core::reset::{self, ResetState};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::daily::{self, DailyChecks};
use crate::models::mind::Mind;
use crate::models::quest::Quest;
use crate::utils::date;

pub struct Session {
    pool: DbPool,
    owner: String,
    quests: Vec<Quest>,
    minds: Vec<Mind>,
    checks: DailyChecks,
}

/// Read-only view of the collections handed to the rendering side.
pub struct Snapshot<'a> {
    pub quests: &'a [Quest],
    pub minds: &'a [Mind],
    pub checks: &'a DailyChecks,
}

impl Session {
    /// Open the store for the configured owner: run the daily-reset check,
    /// then load quests, minds and today's checks.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::new(&cfg.database)?;
        crate::db::initialize::init_db(&pool.conn)?;

        let mut session = Self {
            pool,
            owner: cfg.user.clone(),
            quests: Vec::new(),
            minds: Vec::new(),
            checks: DailyChecks::new(),
        };

        session.check_daily_reset()?;
        session.refresh()?;
        Ok(session)
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Re-run the midnight staleness check against the stored reset date.
    pub fn check_daily_reset(&mut self) -> AppResult<ResetState> {
        let state =
            reset::check_and_reset(&mut self.pool, &self.owner, date::today(), &mut self.checks)?;

        if state == ResetState::Stale {
            ttlog(&self.pool.conn, "reset", &self.owner, "daily checks reset")?;
        }

        Ok(state)
    }

    /// Reload all collections from the store.
    pub fn refresh(&mut self) -> AppResult<()> {
        self.quests = queries::list_quests(&mut self.pool, &self.owner)?;
        self.minds = queries::list_minds(&mut self.pool, &self.owner)?;
        self.checks = queries::load_daily_checks(&mut self.pool, &self.owner, date::today())?;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            quests: &self.quests,
            minds: &self.minds,
            checks: &self.checks,
        }
    }

    pub fn find_quest(&self, id: i64) -> AppResult<&Quest> {
        self.quests
            .iter()
            .find(|q| q.id == id)
            .ok_or(AppError::QuestNotFound(id))
    }

    pub fn find_mind(&self, id: i64) -> AppResult<&Mind> {
        self.minds
            .iter()
            .find(|m| m.id == id)
            .ok_or(AppError::MindNotFound(id))
    }

    /// Create or update a quest from a submitted form. The KPI list goes
    /// through merge-on-edit, then the collections are re-read from the
    /// store. Returns the titles of dropped KPI entries so the caller can
    /// surface them.
    pub fn save_quest(&mut self, form: QuestForm, id: Option<i64>) -> AppResult<Vec<String>> {
        let existing = match id {
            Some(id) => Some(self.find_quest(id)?.clone()),
            None => None,
        };

        let clean = merge::sanitize(&form, existing.as_ref());

        match existing {
            Some(mut quest) => {
                quest.title = form.title.trim().to_string();
                quest.category = form.category;
                quest.notes = form.notes.trim().to_string();
                quest.kpis = clean.kpis;
                quest.daily_tasks = clean.daily_tasks;
                quest.touch();

                queries::update_quest(&mut self.pool, &quest)?;
                ttlog(&self.pool.conn, "quest-edit", &quest.title, "quest updated")?;
            }
            None => {
                let quest = Quest::new(
                    form.title.trim().to_string(),
                    form.category,
                    clean.kpis,
                    clean.daily_tasks,
                    form.notes.trim().to_string(),
                    self.owner.clone(),
                );

                queries::insert_quest(&mut self.pool, &quest)?;
                ttlog(&self.pool.conn, "quest-add", &quest.title, "quest created")?;
            }
        }

        self.refresh()?;
        Ok(clean.dropped_kpis)
    }

    pub fn delete_quest(&mut self, id: i64) -> AppResult<()> {
        let title = self.find_quest(id)?.title.clone();

        queries::delete_quest(&mut self.pool, &self.owner, id)?;
        ttlog(&self.pool.conn, "quest-del", &title, "quest deleted")?;
        self.refresh()
    }

    /// Direct-manipulation category move: only the category changes,
    /// KPIs and tasks are untouched.
    pub fn move_quest(&mut self, id: i64, category: Category) -> AppResult<()> {
        let mut quest = self.find_quest(id)?.clone();
        if quest.category == category {
            return Ok(());
        }

        quest.category = category;
        quest.touch();

        queries::update_quest(&mut self.pool, &quest)?;
        ttlog(&self.pool.conn, "quest-move", &quest.title, category.label())?;
        self.refresh()
    }

    /// Step one KPI counter and persist the quest.
    /// `kpi_index` is zero-based.
    pub fn bump_kpi(&mut self, quest_id: i64, kpi_index: usize, delta: i64) -> AppResult<()> {
        let mut quest = self.find_quest(quest_id)?.clone();
        progress::apply_delta(&mut quest, kpi_index, delta)?;

        queries::update_quest(&mut self.pool, &quest)?;
        self.refresh()
    }

    pub fn save_mind(&mut self, text: &str, id: Option<i64>) -> AppResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Data("mind text must not be empty".into()));
        }

        match id {
            Some(id) => {
                let mut mind = self.find_mind(id)?.clone();
                mind.text = text.to_string();
                mind.touch();

                queries::update_mind(&mut self.pool, &mind)?;
                ttlog(&self.pool.conn, "mind-edit", text, "mind updated")?;
            }
            None => {
                let mind = Mind::new(text.to_string(), self.owner.clone());

                queries::insert_mind(&mut self.pool, &mind)?;
                ttlog(&self.pool.conn, "mind-add", text, "mind created")?;
            }
        }

        self.refresh()
    }

    pub fn delete_mind(&mut self, id: i64) -> AppResult<()> {
        self.find_mind(id)?;

        queries::delete_mind(&mut self.pool, &self.owner, id)?;
        ttlog(&self.pool.conn, "mind-del", &id.to_string(), "mind deleted")?;
        self.refresh()
    }

    /// Set today's check for a quest's daily task and persist the change.
    pub fn toggle_task(&mut self, quest_id: i64, task: &str, checked: bool) -> AppResult<()> {
        let quest = self.find_quest(quest_id)?;
        if !quest.daily_tasks.iter().any(|t| t == task) {
            return Err(AppError::Data(format!(
                "quest {} has no daily task '{}'",
                quest_id, task
            )));
        }

        let key = daily::task_key(quest_id, task);
        self.set_check(&key, checked)
    }

    /// Set today's check for a mind and persist the change.
    pub fn toggle_mind(&mut self, mind_id: i64, checked: bool) -> AppResult<()> {
        self.find_mind(mind_id)?;

        let key = daily::mind_key(mind_id);
        self.set_check(&key, checked)
    }

    fn set_check(&mut self, key: &str, checked: bool) -> AppResult<()> {
        self.checks.insert(key.to_string(), checked);
        queries::save_daily_check(&mut self.pool, &self.owner, date::today(), key, checked)
    }
}
