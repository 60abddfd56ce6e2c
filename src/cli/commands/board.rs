use crate::config::Config;
use crate::core::placement;
use crate::core::session::{Session, Snapshot};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::completion_bar;

/// Show the quest board: four category buckets plus Completed.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let session = Session::open(cfg)?;
    render_board(&session.snapshot());
    Ok(())
}

/// Render the board from a snapshot. Also used by `watch` after each
/// midnight firing.
pub fn render_board(snap: &Snapshot) {
    header(format!("Quest board {}", date::to_db_str(date::today())));

    for (bucket, quests) in placement::bucketize(snap.quests) {
        println!("\n{}", bucket.label());

        if quests.is_empty() {
            println!("  (no quests)");
            continue;
        }

        for quest in quests {
            println!(
                "  [{:>3}] {:<32} {}",
                quest.id,
                quest.title,
                completion_bar(quest.completion(), 20)
            );
            if !quest.notes.is_empty() {
                println!("        {}", quest.notes);
            }
        }
    }
}
