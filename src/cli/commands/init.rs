use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::ui::messages::success;
use crate::utils::path::expand_to_string;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.db.as_deref().map(expand_to_string), cli.test)?;
    if let Some(dataset) = &cli.dataset {
        cfg.dataset = Some(expand_to_string(dataset));
    }

    // Fail early on a broken dataset
    let schedule = Schedule::load(cfg.dataset.as_deref())?;

    println!("⚙️  Initializing virada…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let store = SqliteStore::open(&cfg.database)?;

    success(format!("Database initialized at {}", &cfg.database));

    // Internal log, not blocking
    if let Err(e) = log::ttlog(
        &store.pool().conn,
        "init",
        "Database initialized",
        &format!(
            "Database initialized at {} ({} venues)",
            &cfg.database,
            schedule.locations.len()
        ),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 virada initialization completed!");
    Ok(())
}
