use crate::config::Config;
use crate::core::progress;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::models::daily;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::checkbox;

/// Show today's daily tasks and minds with their check state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = Session::open(cfg)?;
    let snap = session.snapshot();

    header(format!("Today {}", date::to_db_str(date::today())));

    let (done, total) = progress::daily_progress(snap.quests, snap.checks);
    println!("{}/{} tasks done\n", done, total);

    for quest in snap.quests {
        for task in &quest.daily_tasks {
            let checked = daily::is_checked(snap.checks, &daily::task_key(quest.id, task));
            println!("  {} {}  (quest: {})", checkbox(checked), task, quest.title);
        }
    }

    if !snap.minds.is_empty() {
        println!("\nMinds:");
        for mind in snap.minds {
            let checked = daily::is_checked(snap.checks, &daily::mind_key(mind.id));
            println!("  {} [{:>3}] {}", checkbox(checked), mind.id, mind.text);
        }
    }

    Ok(())
}
