use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

/// View or check the configuration.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                warning("No configuration file found. Run `questlog init` first.");
            }
        }

        if *check {
            if Path::new(&cfg.database).exists() {
                success(format!("Database found at {}", cfg.database));
            } else {
                warning(format!(
                    "Database missing at {} (run `questlog init`)",
                    cfg.database
                ));
            }
            info(format!("Owner: {}", cfg.user));
        }
    }

    Ok(())
}
