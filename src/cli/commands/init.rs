use super::Context;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the config directory and file.
pub fn handle(ctx: &Context) -> AppResult<()> {
    println!("⚙️  Initializing cucostatus…");

    if Config::init_at(ctx.config_path, ctx.test)? {
        success(format!("Config file: {}", ctx.config_path.display()));
    } else {
        info(format!(
            "Config file left untouched: {}",
            ctx.config_path.display()
        ));
    }

    println!("📄 Detail file : {}", ctx.cfg.detail_path(ctx.config_path).display());
    println!("🗂️  State file  : {}", ctx.cfg.state_path(ctx.config_path).display());
    Ok(())
}
