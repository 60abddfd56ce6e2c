//! SQLite connection wrapper (lightweight for CLI usage).
//! One connection per command invocation; there is no cross-thread
//! sharing, the session owns the pool for its whole lifetime.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
