use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::legacy::upgrade_all;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{CYAN, GREEN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { migrate, info: show_info } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // 1) MIGRATE: schema first, then legacy day values
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);

            for version in init_db(&pool.conn)? {
                success(format!("Migration applied: {}", version));
            }

            let report = upgrade_all(&mut pool)?;
            for key in &report.upgraded {
                audit(
                    &pool.conn,
                    "legacy_upgrade",
                    key,
                    "Upgraded legacy arrival value to a daily record",
                );
            }
            for key in &report.skipped {
                warning(format!("Unrecognized value under '{}', left untouched", key));
            }

            if report.upgraded.is_empty() {
                info("No legacy values found.");
            } else {
                success(format!("Upgraded {} legacy day(s).", report.upgraded.len()));
            }

            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *show_info {
            init_db(&pool.conn)?;
            stats::print_db_info(&pool, &cfg.database)?;
        }
    }

    Ok(())
}
