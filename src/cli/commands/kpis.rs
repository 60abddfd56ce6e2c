use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::formatting::completion_bar;
use crate::utils::table::{Column, Table};

/// List every KPI of every quest with its counter and progress.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = Session::open(cfg)?;
    let snap = session.snapshot();

    let mut table = Table::new(vec![
        Column::new("Quest", 24),
        Column::new("KPI", 22),
        Column::new("Progress", 18),
        Column::new("Bar", 26),
    ]);

    for quest in snap.quests {
        for (i, kpi) in quest.kpis.iter().enumerate() {
            let reached = if kpi.is_reached() { " ✓" } else { "" };
            table.add_row(vec![
                quest.title.clone(),
                format!("{} ({})", kpi.title, i + 1),
                format!("{} / {} {}{}", kpi.current, kpi.target, kpi.unit, reached),
                completion_bar(kpi.percentage().round() as u8, 16),
            ]);
        }
    }

    print!("{}", table.render());
    Ok(())
}
