use chrono::Local;
use serde::{Deserialize, Serialize};

/// A short daily reminder/affirmation with a per-day checked state
/// (the check itself lives in the daily-check mapping, not here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mind {
    pub id: i64,
    pub text: String,
    pub owner: String,
    pub created_at: String, // ISO8601
    pub updated_at: String, // ISO8601
}

impl Mind {
    pub fn new(text: String, owner: String) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            text,
            owner,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Local::now().to_rfc3339();
    }
}
