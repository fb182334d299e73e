use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::utils::table::{Column, Table};

/// Handle the `venues` command: one row per venue, dataset order.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let schedule = Schedule::load(cfg.dataset.as_deref())?;

    let mut table = Table::new(vec![
        Column::auto("Venue"),
        Column::auto("Events"),
        Column::auto("Address"),
    ]);

    for venue in &schedule.locations {
        table.add_row(vec![
            venue.name.clone(),
            venue.events.len().to_string(),
            venue.address.clone(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
