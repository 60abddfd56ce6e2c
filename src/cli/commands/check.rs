use crate::cli::parser::{CheckTarget, Commands};
use crate::config::Config;
use crate::core::progress;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Toggle today's check for a daily task or a mind.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { target } = cmd {
        let mut session = Session::open(cfg)?;

        match target {
            CheckTarget::Task {
                quest_id,
                task,
                undo,
            } => {
                session.toggle_task(*quest_id, task, !*undo)?;

                let snap = session.snapshot();
                let (done, total) = progress::daily_progress(snap.quests, snap.checks);
                success(format!(
                    "{} '{}'. Today: {}/{} tasks done.",
                    if *undo { "Unchecked" } else { "Checked" },
                    task,
                    done,
                    total
                ));
            }

            CheckTarget::Mind { mind_id, undo } => {
                session.toggle_mind(*mind_id, !*undo)?;

                let text = session.find_mind(*mind_id)?.text.clone();
                success(format!(
                    "{} mind '{}'.",
                    if *undo { "Unchecked" } else { "Checked" },
                    text
                ));
            }
        }
    }

    Ok(())
}
