//! KPI aggregation: per-quest completion percentages and daily-task counts.

use crate::errors::{AppError, AppResult};
use crate::models::daily::{self, DailyChecks};
use crate::models::quest::Quest;

/// Overall completion of a quest: arithmetic mean of the clamped per-KPI
/// percentages, rounded to the nearest integer. A quest without KPIs is 0%
/// and therefore never counts as completed.
///
/// Pure and deterministic; board placement and the completion bars both
/// depend on it.
pub fn quest_completion(quest: &Quest) -> u8 {
    if quest.kpis.is_empty() {
        return 0;
    }

    let total: f64 = quest.kpis.iter().map(|k| k.percentage()).sum();
    (total / quest.kpis.len() as f64).round() as u8
}

/// Apply a +/- step to one KPI counter. The counter never goes below zero.
/// The caller is responsible for persisting the quest.
pub fn apply_delta(quest: &mut Quest, kpi_index: usize, delta: i64) -> AppResult<()> {
    let kpi = quest
        .kpis
        .get_mut(kpi_index)
        .ok_or(AppError::InvalidKpiIndex(kpi_index))?;

    kpi.current = kpi.current.saturating_add(delta).max(0);
    quest.touch();
    Ok(())
}

/// Count today's daily-task progress across all quests: (done, total).
pub fn daily_progress(quests: &[Quest], checks: &DailyChecks) -> (usize, usize) {
    let mut done = 0;
    let mut total = 0;

    for quest in quests {
        for task in &quest.daily_tasks {
            total += 1;
            if daily::is_checked(checks, &daily::task_key(quest.id, task)) {
                done += 1;
            }
        }
    }

    (done, total)
}
