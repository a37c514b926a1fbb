use super::{Context, Source, build_engine};
use crate::adapters::clock::SystemClock;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};
use std::process::Command;
use std::sync::Arc;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        set_active,
        auto_intensive,
        edit_config,
        editor,
    } = cmd
    {
        // ---- UPDATE SCHEDULE SELECTION ----
        if set_active.is_some() || auto_intensive.is_some() {
            let engine = build_engine(ctx, Arc::new(SystemClock), Source::Portal);
            let selection = engine.select_schedule(set_active.as_deref(), *auto_intensive)?;
            success(format!(
                "Active set: {} (August auto-intensive: {})",
                selection.active_set_id, selection.auto_detect_intensive_august
            ));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let current = Config::load_from(ctx.config_path)?;
            println!("📄 Current configuration ({}):\n", ctx.config_path.display());
            println!("{}", serde_yaml::to_string(&current)?);
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

            match Command::new(&editor_to_use).arg(ctx.config_path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration edited with '{}'", editor_to_use));
                }
                _ => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));
                    match Command::new(&default_editor).arg(ctx.config_path).status() {
                        Ok(s) if s.success() => {
                            success(format!("Configuration edited with '{}'", default_editor));
                        }
                        _ => error(format!(
                            "Failed to edit configuration with '{}'",
                            default_editor
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
