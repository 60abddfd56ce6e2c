//! Self-renewing one-shot timer firing at each local midnight.

use chrono::{DateTime, Local, LocalResult, TimeZone};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Time remaining from `now` until the next local midnight (00:00:00).
pub fn until_next_midnight(now: DateTime<Local>) -> Duration {
    let tomorrow = now.date_naive().succ_opt().unwrap();
    let midnight = tomorrow.and_hms_opt(0, 0, 0).unwrap();

    let next = match Local.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(t, _) => t,
        // DST can skip midnight in some zones; fall back to a flat day.
        LocalResult::None => now + chrono::Duration::hours(24),
    };

    (next - now).to_std().unwrap_or(Duration::ZERO)
}

/// Cancellable chain of one-shot timers.
///
/// A background thread waits until the next local midnight, invokes the
/// callback, then reschedules itself (a chain of single shots, not a
/// fixed interval). The callback must re-check the date itself: the
/// timer is only a trigger, never the source of truth.
///
/// Dropping the handle cancels the chain, so a session teardown never
/// leaks a pending timer.
pub struct MidnightTimer {
    cancel: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl MidnightTimer {
    pub fn start<F>(mut on_midnight: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (cancel, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            loop {
                let wait = until_next_midnight(Local::now());
                match rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => on_midnight(),
                    // cancel message or dropped sender
                    _ => break,
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }

    /// Stop the chain and wait for the timer thread to exit.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MidnightTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
