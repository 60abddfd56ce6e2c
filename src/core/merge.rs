//! Quest form validation and merge-on-edit.
//!
//! Editing a quest resubmits the whole KPI list; the one contract that
//! matters here is that a KPI keeps its `current` counter as long as the
//! user did not rename it.

use crate::models::category::Category;
use crate::models::kpi::Kpi;
use crate::models::quest::Quest;

/// One KPI line as submitted on the command line.
#[derive(Debug, Clone)]
pub struct KpiEntry {
    pub title: String,
    pub target: Option<i64>,
    pub unit: String,
}

/// A quest add/edit submission before validation.
#[derive(Debug, Clone)]
pub struct QuestForm {
    pub title: String,
    pub category: Category,
    pub notes: String,
    pub kpis: Vec<KpiEntry>,
    pub daily_tasks: Vec<String>,
}

/// Surviving fields after sanitation, plus the titles of dropped KPI
/// entries so the caller can surface them to the user.
#[derive(Debug)]
pub struct SanitizedForm {
    pub kpis: Vec<Kpi>,
    pub daily_tasks: Vec<String>,
    pub dropped_kpis: Vec<String>,
}

/// Validate a submitted form and merge its KPI list against the persisted
/// quest (when editing).
///
/// - KPI entries with a blank title or without a positive target are
///   dropped from the saved list.
/// - A surviving entry inherits `current` from the existing KPI with the
///   exact same title, otherwise it starts at 0.
/// - Daily tasks are trimmed; blank entries are dropped.
pub fn sanitize(form: &QuestForm, existing: Option<&Quest>) -> SanitizedForm {
    let mut kpis = Vec::new();
    let mut dropped = Vec::new();

    for entry in &form.kpis {
        let title = entry.title.trim();
        let target = entry.target.unwrap_or(0);

        if title.is_empty() || target <= 0 {
            dropped.push(if title.is_empty() {
                "<blank title>".to_string()
            } else {
                format!("'{}'", title)
            });
            continue;
        }

        let current = existing
            .and_then(|q| q.kpis.iter().find(|k| k.title == title))
            .map(|k| k.current)
            .unwrap_or(0);

        kpis.push(Kpi {
            title: title.to_string(),
            target,
            unit: entry.unit.trim().to_string(),
            current,
        });
    }

    let daily_tasks = form
        .daily_tasks
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    SanitizedForm {
        kpis,
        daily_tasks,
        dropped_kpis: dropped,
    }
}

/// Parse a `TITLE:TARGET[:UNIT]` spec from the command line.
/// A malformed target simply yields `None` and the entry will be dropped
/// by `sanitize` (same silent-filter policy as the rest of the form).
pub fn parse_kpi_spec(spec: &str) -> KpiEntry {
    let mut parts = spec.splitn(3, ':');

    let title = parts.next().unwrap_or("").to_string();
    let target = parts.next().and_then(|t| t.trim().parse::<i64>().ok());
    let unit = parts.next().unwrap_or("").to_string();

    KpiEntry {
        title,
        target,
        unit,
    }
}
