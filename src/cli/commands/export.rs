use super::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filters,
        force,
    } = cmd
    {
        let engine = open_engine(cfg)?;
        let criteria = filters.to_criteria(&engine.venue_names())?;
        let view = engine.recompute(&criteria);

        let path = expand_tilde(file);
        let rows = ExportLogic::export(&view, *format, &path, *force)?;

        // Internal log, not blocking
        if let Err(e) = ttlog(
            &engine.store().pool().conn,
            "export",
            format.as_str(),
            &format!("{} events written to {}", rows, path.display()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }
    Ok(())
}
