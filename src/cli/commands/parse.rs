use super::Context;
use crate::cli::parser::Commands;
use crate::core::parser::{parse_debug_input, parse_detail};
use crate::errors::AppResult;
use crate::utils::colors::colorize_in_out;

/// Handle the `parse` subcommand
pub fn handle(cmd: &Commands, _ctx: &Context) -> AppResult<()> {
    if let Commands::Parse { raw, debug, json } = cmd {
        let parsed = if *debug {
            parse_debug_input(raw)?
        } else {
            parse_detail(raw)
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
            return Ok(());
        }

        let join = |v: &[String], is_in: bool| {
            if v.is_empty() {
                colorize_in_out("--:--", is_in)
            } else {
                v.iter()
                    .map(|t| colorize_in_out(t, is_in))
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        };

        println!("Entries: {}", join(parsed.entries.as_slice(), true));
        println!("Exits:   {}", join(parsed.exits.as_slice(), false));
    }
    Ok(())
}
