use super::category::Category;
use super::kpi::Kpi;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// A user-defined goal: one category, optional KPIs, optional recurring
/// daily tasks, free-form notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub kpis: Vec<Kpi>,
    pub daily_tasks: Vec<String>,
    pub notes: String,
    pub owner: String,
    pub created_at: String, // ISO8601
    pub updated_at: String, // ISO8601
}

impl Quest {
    /// Constructor for quests created from a submitted form.
    /// `id = 0` means "not yet persisted"; the store assigns the real id.
    pub fn new(
        title: String,
        category: Category,
        kpis: Vec<Kpi>,
        daily_tasks: Vec<String>,
        notes: String,
        owner: String,
    ) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            title,
            category,
            kpis,
            daily_tasks,
            notes,
            owner,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Refresh `updated_at` after a mutation.
    pub fn touch(&mut self) {
        self.updated_at = Local::now().to_rfc3339();
    }

    /// Overall completion percentage (mean of clamped KPI percentages).
    pub fn completion(&self) -> u8 {
        crate::core::progress::quest_completion(self)
    }

    pub fn is_completed(&self) -> bool {
        self.completion() == 100
    }
}
