use crate::cli::parser::{Commands, QuestAction};
use crate::config::Config;
use crate::core::merge::{self, KpiEntry, QuestForm};
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::ui::messages::{success, warning};

/// Quest lifecycle: add, edit, move between categories, delete.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quest { action } = cmd {
        let mut session = Session::open(cfg)?;

        match action {
            QuestAction::Add {
                title,
                category,
                kpis,
                tasks,
                notes,
            } => {
                let form = QuestForm {
                    title: title.clone(),
                    category: parse_category(category)?,
                    notes: notes.clone(),
                    kpis: kpis.iter().map(|s| merge::parse_kpi_spec(s)).collect(),
                    daily_tasks: tasks.clone(),
                };

                let dropped = session.save_quest(form, None)?;
                warn_dropped(&dropped);
                success(format!("Quest '{}' added.", title));
            }

            QuestAction::Edit {
                id,
                title,
                category,
                kpis,
                tasks,
                notes,
                no_kpis,
                no_tasks,
            } => {
                let existing = session.find_quest(*id)?.clone();

                // Omitted options keep the stored value; an option given at
                // least once replaces the whole list.
                let kpi_entries: Vec<KpiEntry> = if *no_kpis {
                    Vec::new()
                } else if kpis.is_empty() {
                    existing
                        .kpis
                        .iter()
                        .map(|k| KpiEntry {
                            title: k.title.clone(),
                            target: Some(k.target),
                            unit: k.unit.clone(),
                        })
                        .collect()
                } else {
                    kpis.iter().map(|s| merge::parse_kpi_spec(s)).collect()
                };

                let daily_tasks = if *no_tasks {
                    Vec::new()
                } else if tasks.is_empty() {
                    existing.daily_tasks.clone()
                } else {
                    tasks.clone()
                };

                let form = QuestForm {
                    title: title.clone().unwrap_or_else(|| existing.title.clone()),
                    category: match category {
                        Some(c) => parse_category(c)?,
                        None => existing.category,
                    },
                    notes: notes.clone().unwrap_or_else(|| existing.notes.clone()),
                    kpis: kpi_entries,
                    daily_tasks,
                };

                let dropped = session.save_quest(form, Some(*id))?;
                warn_dropped(&dropped);
                success(format!("Quest {} updated.", id));
            }

            QuestAction::Del { id } => {
                session.delete_quest(*id)?;
                success(format!("Quest {} deleted.", id));
            }

            QuestAction::Move { id, category } => {
                let category = parse_category(category)?;
                session.move_quest(*id, category)?;
                success(format!("Quest {} moved to {}.", id, category.label()));
            }
        }
    }

    Ok(())
}

fn parse_category(code: &str) -> AppResult<Category> {
    Category::from_code(code).ok_or_else(|| {
        AppError::InvalidCategory(format!(
            "'{}'. Use temptation, organization, military or finance (or T/O/M/F)",
            code
        ))
    })
}

fn warn_dropped(dropped: &[String]) {
    for entry in dropped {
        warning(format!(
            "KPI entry {} dropped: blank title or missing positive target.",
            entry
        ));
    }
}
