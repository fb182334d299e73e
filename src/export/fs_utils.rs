// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file missing → Ok
/// - file present and `force` → Ok
/// - file present without `force` → asks the user on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "export cancelled, '{}' not overwritten",
            path.display()
        ))),
    }
}
