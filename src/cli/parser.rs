use crate::core::filter::{DateSelector, FilterCriteria, HourRange};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for virada
/// Browse the festival schedule by venue and day and keep track of what you attend
#[derive(Parser)]
#[command(
    name = "virada",
    version = env!("CARGO_PKG_VERSION"),
    about = "Festival schedule by venue and day, with filters and a persisted attending list",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the schedule dataset (JSON document with a `locations` list)
    #[arg(global = true, long = "dataset")]
    pub dataset: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `show` and `export`.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Only show this venue (repeatable). Default: every venue
    #[arg(long = "venue", value_name = "NAME")]
    pub venues: Vec<String>,

    /// Festival day: all, 24.5 or 25.5
    #[arg(long, value_name = "DAY", default_value = "all")]
    pub date: String,

    /// First hour of the time window (0-24)
    #[arg(long = "from", value_name = "HOUR", default_value_t = 0)]
    pub from: u32,

    /// Last hour of the time window (0-24, inclusive)
    #[arg(long = "to", value_name = "HOUR", default_value_t = 24)]
    pub to: u32,

    /// Only events marked as attending
    #[arg(long = "attending")]
    pub attending: bool,
}

impl FilterArgs {
    /// Build the filter criteria, checking venue names against the schedule.
    pub fn to_criteria(&self, all_venues: &[String]) -> AppResult<FilterCriteria> {
        let selected: Vec<String> = if self.venues.is_empty() {
            all_venues.to_vec()
        } else {
            if let Some(unknown) = self.venues.iter().find(|v| !all_venues.contains(v)) {
                return Err(AppError::UnknownVenue(unknown.clone()));
            }
            self.venues.clone()
        };

        Ok(FilterCriteria::all(selected)
            .with_date(self.date.parse::<DateSelector>()?)
            .with_hours(HourRange::new(self.from, self.to)?)
            .with_attending_only(self.attending))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List venues with their address and number of events
    Venues,

    /// Show the schedule grouped by venue and day
    Show {
        #[command(flatten)]
        filters: FilterArgs,

        /// Print the computed timeline layout (top, height, column height)
        #[arg(long = "layout")]
        layout: bool,

        /// Evaluate "happening now" at this instant (YYYY-MM-DD HH:MM) instead of the clock
        #[arg(long = "at", value_name = "INSTANT")]
        at: Option<String>,
    },

    /// Mark an event as attending (toggles when neither --yes nor --no is given)
    Attend {
        /// Venue name
        #[arg(long)]
        venue: String,

        /// Artist name
        #[arg(long)]
        artist: String,

        /// Start time as written in the schedule (e.g. 18h, 20h30)
        #[arg(long)]
        time: String,

        /// Mark as attending
        #[arg(long, conflicts_with = "no")]
        yes: bool,

        /// Mark as not attending
        #[arg(long, conflicts_with = "yes")]
        no: bool,
    },

    /// Show the events happening right now
    Now {
        /// Evaluate at this instant (YYYY-MM-DD HH:MM) instead of the clock
        #[arg(long = "at", value_name = "INSTANT", conflicts_with = "watch")]
        at: Option<String>,

        /// Keep running and refresh on the configured cadence
        #[arg(long = "watch")]
        watch: bool,
    },

    /// Export the filtered schedule with its layout
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filters: FilterArgs,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
