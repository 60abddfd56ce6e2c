//! Daily reset: daily checks are valid for one calendar day only.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::daily::DailyChecks;
use crate::utils::date;
use chrono::NaiveDate;

/// Durable KV key holding the `YYYY-MM-DD` of the last performed reset.
pub const LAST_RESET_KEY: &str = "last_reset_date";

/// Freshness of the cached daily-check state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetState {
    /// Today's date matches the recorded reset date.
    Fresh,
    /// The calendar day changed, or no reset was ever recorded.
    Stale,
}

/// Compare today (local timezone, calendar-day granularity) against the
/// recorded last-reset date and reset daily state when the day changed:
/// clear the in-memory mapping, prune stored check rows from previous
/// days, record today as the new reset date.
///
/// The date comparison is the sole source of truth for staleness; timers
/// only decide when this runs again, so a process sleeping across
/// midnight is still caught on the next invocation.
pub fn check_and_reset(
    pool: &mut DbPool,
    owner: &str,
    today: NaiveDate,
    checks: &mut DailyChecks,
) -> AppResult<ResetState> {
    let today_str = date::to_db_str(today);
    let last = queries::get_meta(pool, owner, LAST_RESET_KEY)?;

    if last.as_deref() == Some(today_str.as_str()) {
        return Ok(ResetState::Fresh);
    }

    checks.clear();
    queries::clear_daily_checks_before(pool, owner, &today_str)?;
    queries::set_meta(pool, owner, LAST_RESET_KEY, &today_str)?;

    Ok(ResetState::Stale)
}
