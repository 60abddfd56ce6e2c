//! Daily check flags: an ephemeral per-day overlay over quests and minds.
//! KPI counters remain the authoritative progress; this mapping only
//! records what was ticked off today.

use std::collections::BTreeMap;

/// Check flags for one (owner, calendar day), keyed by task/mind key.
pub type DailyChecks = BTreeMap<String, bool>;

/// Key for a quest's daily task: `"{quest_id}_{task}"`.
pub fn task_key(quest_id: i64, task: &str) -> String {
    format!("{}_{}", quest_id, task)
}

/// Key for a mind: `"mind_{mind_id}"`.
pub fn mind_key(mind_id: i64) -> String {
    format!("mind_{}", mind_id)
}

/// Missing keys count as unchecked.
pub fn is_checked(checks: &DailyChecks, key: &str) -> bool {
    checks.get(key).copied().unwrap_or(false)
}
