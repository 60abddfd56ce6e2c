use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Database maintenance: migrations, integrity check, vacuum, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            let result: String = pool
                .conn
                .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;

            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Integrity check reported: {}", result));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            success("Database vacuumed.");
        }

        if *show_info {
            let quests: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM quests", [], |row| row.get(0))?;
            let minds: i64 = pool
                .conn
                .query_row("SELECT COUNT(*) FROM minds", [], |row| row.get(0))?;
            let checks: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM daily_checks", [], |row| row.get(0))?;

            info(format!("Database: {}", cfg.database));
            info(format!(
                "Quests: {}  Minds: {}  Daily checks: {}",
                quests, minds, checks
            ));
        }
    }

    Ok(())
}
