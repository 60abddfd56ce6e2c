use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Initialize configuration file and database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)
}
