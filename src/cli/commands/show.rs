use super::{clock_for, open_engine};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::happening::{HappeningBoard, HappeningTicker};
use crate::errors::AppResult;
use crate::ui::grid::{GridOptions, render_view};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        filters,
        layout,
        at,
    } = cmd
    {
        let engine = open_engine(cfg)?;
        let criteria = filters.to_criteria(&engine.venue_names())?;
        let view = engine.recompute(&criteria);

        let clock = clock_for(at.as_deref())?;
        let mut board = HappeningBoard::new(HappeningTicker::new(cfg.refresh_interval()));
        board.poll(clock.as_ref(), engine.venues());

        let opts = GridOptions {
            show_layout: *layout,
            separator: cfg.separator_char.clone(),
        };
        print!("{}", render_view(&view, &board, &opts));
    }
    Ok(())
}
