use crate::cli::parser::{Commands, MindAction};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Mind lifecycle: add, edit, delete.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mind { action } = cmd {
        let mut session = Session::open(cfg)?;

        match action {
            MindAction::Add { text } => {
                session.save_mind(text, None)?;
                success("Mind added.");
            }
            MindAction::Edit { id, text } => {
                session.save_mind(text, Some(*id))?;
                success(format!("Mind {} updated.", id));
            }
            MindAction::Del { id } => {
                session.delete_mind(*id)?;
                success(format!("Mind {} deleted.", id));
            }
        }
    }

    Ok(())
}
