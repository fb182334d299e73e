use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Colour;

/// Column budget for "operation (target)".
const OP_WIDTH: usize = 60;

/// ANSI colour of an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51), // orange
        "save_attendance" => Colour::Green,
        "export" => Colour::Blue,
        other if other.starts_with("migrate") => Colour::Purple,
        _ => Colour::White,
    }
}

/// "operation (target)", cut to the column budget, operation word coloured.
fn format_operation(entry: &LogEntry) -> String {
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = truncate(&plain, OP_WIDTH);
    let color = color_for_operation(&entry.operation);

    match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(entries: &[LogEntry]) -> String {
        let op_w = entries
            .iter()
            .map(|e| e.operation.len() + e.target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut out = String::new();
        for e in entries {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {} => {}\n",
                e.id,
                date,
                pad_right(&format_operation(e), op_w),
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        out
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;

        println!("📜 Internal log:\n");
        if entries.is_empty() {
            println!("(empty)");
        } else {
            print!("{}", Self::render(&entries));
        }

        Ok(())
    }
}
