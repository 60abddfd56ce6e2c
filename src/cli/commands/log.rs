use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        for (date, operation, target, message) in load_log(&pool.conn)? {
            println!("{}  {:<12} {:<28} {}", date, operation, target, message);
        }
    }

    Ok(())
}
