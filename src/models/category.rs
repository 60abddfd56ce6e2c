use serde::{Deserialize, Serialize};

/// The four fixed quest categories used for grouping on the board.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Temptation,
    Organization,
    Military,
    Finance,
}

/// Board order of the category columns.
pub const ALL_CATEGORIES: [Category; 4] = [
    Category::Temptation,
    Category::Organization,
    Category::Military,
    Category::Finance,
];

impl Category {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::Temptation => "temptation",
            Category::Organization => "organization",
            Category::Military => "military",
            Category::Finance => "finance",
        }
    }

    /// Convert DB string → enum. Rows carrying anything else are skipped
    /// at load time (the store enforces no schema on this column).
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "temptation" => Some(Category::Temptation),
            "organization" => Some(Category::Organization),
            "military" => Some(Category::Military),
            "finance" => Some(Category::Finance),
            _ => None,
        }
    }

    /// Parse a user-supplied code: full name or first letter, case-insensitive.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" | "temptation" => Some(Category::Temptation),
            "o" | "organization" => Some(Category::Organization),
            "m" | "military" => Some(Category::Military),
            "f" | "finance" => Some(Category::Finance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Temptation => "Temptation",
            Category::Organization => "Organization",
            Category::Military => "Military",
            Category::Finance => "Finance",
        }
    }
}
