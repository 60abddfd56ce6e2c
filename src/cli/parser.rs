use clap::{Parser, Subcommand};

/// Command-line interface definition for questlog
/// CLI application to track quests, KPIs and daily habits with SQLite
#[derive(Parser)]
#[command(
    name = "questlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal quest & habit tracker: categories, KPIs, daily tasks and reminders with SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the owner of entries (defaults to the configured user)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration and database paths")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage quests (add, edit, move, delete)
    Quest {
        #[command(subcommand)]
        action: QuestAction,
    },

    /// Step a KPI counter up or down
    Kpi {
        /// Quest id as shown by `board`
        quest_id: i64,

        /// KPI position within the quest (1-based, as shown by `kpis`)
        index: usize,

        /// Step to apply to the counter (may be negative)
        #[arg(
            long = "delta",
            allow_hyphen_values = true,
            default_value_t = 1
        )]
        delta: i64,
    },

    /// Manage minds (short daily reminders)
    Mind {
        #[command(subcommand)]
        action: MindAction,
    },

    /// Check or uncheck today's items
    Check {
        #[command(subcommand)]
        target: CheckTarget,
    },

    /// Show the quest board grouped by category, completed quests last
    Board,

    /// Show today's daily tasks and minds with their check state
    Daily,

    /// List every KPI with its counter and progress
    Kpis,

    /// Keep the board open and reset daily checks at each midnight
    Watch,
}

#[derive(Subcommand)]
pub enum QuestAction {
    /// Create a new quest
    Add {
        title: String,

        /// Category: T=Temptation, O=Organization, M=Military, F=Finance
        #[arg(long = "category")]
        category: String,

        /// KPI spec TITLE:TARGET[:UNIT]; repeat for multiple KPIs
        #[arg(long = "kpi")]
        kpis: Vec<String>,

        /// Daily task text; repeat for multiple tasks
        #[arg(long = "task")]
        tasks: Vec<String>,

        #[arg(long = "notes", default_value = "")]
        notes: String,
    },

    /// Edit a quest (omitted options keep their stored value)
    Edit {
        id: i64,

        #[arg(long = "title")]
        title: Option<String>,

        #[arg(long = "category")]
        category: Option<String>,

        /// Replacement KPI list; counters of unrenamed KPIs are preserved
        #[arg(long = "kpi")]
        kpis: Vec<String>,

        /// Replacement daily-task list
        #[arg(long = "task")]
        tasks: Vec<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        /// Clear the KPI list instead of keeping the stored one
        #[arg(long = "no-kpis", conflicts_with = "kpis")]
        no_kpis: bool,

        /// Clear the daily-task list instead of keeping the stored one
        #[arg(long = "no-tasks", conflicts_with = "tasks")]
        no_tasks: bool,
    },

    /// Delete a quest
    Del { id: i64 },

    /// Move a quest to another category (KPIs and tasks are untouched)
    Move { id: i64, category: String },
}

#[derive(Subcommand)]
pub enum MindAction {
    /// Add a new mind
    Add { text: String },

    /// Replace the text of a mind
    Edit { id: i64, text: String },

    /// Delete a mind
    Del { id: i64 },
}

#[derive(Subcommand)]
pub enum CheckTarget {
    /// Mark a quest's daily task done today (or undone with --undo)
    Task {
        quest_id: i64,
        task: String,

        #[arg(long = "undo")]
        undo: bool,
    },

    /// Mark a mind done today (or undone with --undo)
    Mind {
        mind_id: i64,

        #[arg(long = "undo")]
        undo: bool,
    },
}
