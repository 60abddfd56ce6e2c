use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Step a KPI counter; the quest is persisted and re-read afterwards.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Kpi {
        quest_id,
        index,
        delta,
    } = cmd
    {
        // shown 1-based in `kpis`, stored 0-based
        if *index == 0 {
            return Err(AppError::InvalidKpiIndex(0));
        }

        let mut session = Session::open(cfg)?;
        session.bump_kpi(*quest_id, index - 1, *delta)?;

        let quest = session.find_quest(*quest_id)?;
        let kpi = quest
            .kpis
            .get(index - 1)
            .ok_or(AppError::InvalidKpiIndex(*index))?;

        success(format!(
            "{}: {} / {} {}",
            kpi.title, kpi.current, kpi.target, kpi.unit
        ));

        if quest.is_completed() {
            info(format!("Quest '{}' completed! 🎉", quest.title));
        }
    }

    Ok(())
}
