use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::{complete_config_file, missing_fields};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            let missing = missing_fields(&path)?;
            if missing.is_empty() {
                success(format!("{} is complete", path.display()));
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            let added = complete_config_file(&path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{}'", editor_to_use));
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited using fallback '{}'",
                            default_editor
                        )),
                        _ => error(format!(
                            "Failed to edit configuration file using fallback '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
