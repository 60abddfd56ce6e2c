use crate::cli::commands::board::render_board;
use crate::config::Config;
use crate::core::scheduler::MidnightTimer;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::sync::mpsc;

/// Long-running board view. Renders immediately, then re-runs the reset
/// check and re-renders after each midnight firing.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = Session::open(cfg)?;
    render_board(&session.snapshot());

    info("Watching. The board refreshes after each midnight reset, Ctrl+C to quit.");

    // The timer thread only wakes this one; all state stays on the
    // owning thread.
    let (tx, rx) = mpsc::channel();
    let timer = MidnightTimer::start(move || {
        let _ = tx.send(());
    });

    while rx.recv().is_ok() {
        session.check_daily_reset()?;
        session.refresh()?;
        render_board(&session.snapshot());
    }

    timer.cancel();
    Ok(())
}
