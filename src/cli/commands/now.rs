use super::{clock_for, open_engine};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::happening::{Clock, HappeningBoard, HappeningTicker, SystemClock};
use crate::errors::AppResult;
use crate::models::Venue;
use crate::ui::messages::header;
use std::thread;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Now { at, watch } = cmd {
        let engine = open_engine(cfg)?;
        let mut board = HappeningBoard::new(HappeningTicker::new(cfg.refresh_interval()));

        if *watch {
            let clock = SystemClock;
            loop {
                if board.poll(&clock, engine.venues()) {
                    print_running(&board, engine.venues(), &clock, cfg);
                }
                thread::sleep(Duration::from_secs(1));
            }
        }

        let clock = clock_for(at.as_deref())?;
        board.poll(clock.as_ref(), engine.venues());
        print_running(&board, engine.venues(), clock.as_ref(), cfg);
    }
    Ok(())
}

fn print_running(board: &HappeningBoard, venues: &[Venue], clock: &dyn Clock, cfg: &Config) {
    header(
        format!("Happening now ({})", clock.now().format("%d/%m %H:%M")),
        &cfg.separator_char,
    );

    let mut any = false;
    for venue in venues {
        for ev in &venue.events {
            if board.is_happening(&ev.identity(&venue.name)) {
                let mark = if ev.attending { "★" } else { "•" };
                println!(
                    "{} {} | {} | {} ({})",
                    mark,
                    venue.name,
                    ev.time,
                    ev.artist,
                    ev.duration_label()
                );
                any = true;
            }
        }
    }

    if !any {
        println!("Nothing is happening right now.");
    }
}
