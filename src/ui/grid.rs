//! Terminal rendering of a computed schedule view.

use crate::core::calculator::timeline::{DaySection, ScheduleView, VenueColumn};
use crate::core::happening::HappeningBoard;
use crate::utils::colors::{GREY, RESET, color_for_bucket, colorize_attending, happening_badge};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub const EMPTY_MESSAGE: &str = "No events match your filters. Try adjusting your selection.";

const ADDRESS_WIDTH: usize = 64;

#[derive(Debug, Clone)]
pub struct GridOptions {
    /// Add the computed top/height of each slot and the column height.
    pub show_layout: bool,
    pub separator: String,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            show_layout: false,
            separator: "-".to_string(),
        }
    }
}

pub fn render_view(view: &ScheduleView, board: &HappeningBoard, opts: &GridOptions) -> String {
    if view.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let rule = opts.separator.repeat(ADDRESS_WIDTH);
    let mut out = String::new();

    for venue in &view.venues {
        out.push_str(&rule);
        out.push('\n');
        render_venue(&mut out, venue, board, opts);
    }

    out
}

fn render_venue(out: &mut String, venue: &VenueColumn, board: &HappeningBoard, opts: &GridOptions) {
    out.push_str(&bold(&venue.name));
    out.push('\n');

    for line in textwrap::wrap(&venue.address, ADDRESS_WIDTH) {
        out.push_str(&format!("{GREY}{line}{RESET}\n"));
    }

    for section in &venue.sections {
        out.push('\n');
        render_section(out, section, board, opts);
    }
    out.push('\n');
}

fn render_section(out: &mut String, section: &DaySection, board: &HappeningBoard, opts: &GridOptions) {
    let color = color_for_bucket(section.bucket);
    out.push_str(&format!("  {color}{}{RESET}", section.bucket.title()));
    if opts.show_layout {
        out.push_str(&format!(
            "  (from {}h, column {})",
            section.min_hour, section.column_height
        ));
    }
    out.push('\n');

    let mut columns = vec![
        Column::auto(""),
        Column::auto("Time"),
        Column::auto("Artist"),
        Column::auto("Duration"),
    ];
    if opts.show_layout {
        columns.push(Column::auto("Top"));
        columns.push(Column::auto("Height"));
    }
    columns.push(Column::auto(""));

    let mut table = Table::new(columns).indented(4);

    for slot in &section.slots {
        let mut row = vec![
            colorize_attending(slot.event.attending),
            slot.event.time.clone(),
            slot.event.artist.clone(),
            slot.event.duration_label(),
        ];
        if opts.show_layout {
            row.push(slot.top.to_string());
            row.push(format_units(slot.height));
        }
        row.push(if board.is_happening(&slot.id) {
            happening_badge()
        } else {
            String::new()
        });
        table.add_row(row);
    }

    out.push_str(&table.render());
}

/// Layout units with at most one decimal.
fn format_units(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}
