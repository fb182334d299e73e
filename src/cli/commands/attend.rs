use super::open_engine;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::EventId;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Attend {
        venue,
        artist,
        time,
        yes,
        no,
    } = cmd
    {
        let mut engine = open_engine(cfg)?;
        let id = EventId::new(venue, artist, time);

        let update = if *yes {
            engine.set_attending(&id, true)?
        } else if *no {
            engine.set_attending(&id, false)?
        } else {
            engine.toggle_attending(&id)?
        };

        if update.attending {
            success(format!("Attending: {} at {} ({})", artist, venue, time));
        } else {
            success(format!("Not attending: {} at {} ({})", artist, venue, time));
        }

        if !update.persisted {
            warning("The change will be lost when the program exits.");
        }
    }
    Ok(())
}
