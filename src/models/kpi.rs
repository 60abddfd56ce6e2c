use serde::{Deserialize, Serialize};

/// A named numeric progress counter with a target value and unit.
/// Stored as part of the quest document (JSON column).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Kpi {
    pub title: String,
    pub target: i64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub current: i64,
}

impl Kpi {
    pub fn new(title: String, target: i64, unit: String) -> Self {
        Self {
            title,
            target,
            unit,
            current: 0,
        }
    }

    /// Effective target: a zero or negative stored target counts as 1.
    pub fn effective_target(&self) -> i64 {
        if self.target > 0 { self.target } else { 1 }
    }

    /// Completion percentage, clamped to 100.
    pub fn percentage(&self) -> f64 {
        ((self.current as f64 / self.effective_target() as f64) * 100.0).min(100.0)
    }

    /// Whether the counter reached the (effective) target.
    pub fn is_reached(&self) -> bool {
        self.current >= self.effective_target()
    }
}
