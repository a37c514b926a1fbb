use super::{Context, Source, build_engine, clock_from, parse_date_arg};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::utils::formatting::{bold, mins2readable};

/// Handle the `exit` subcommand (what-if theoretical exit)
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Exit {
        entry,
        set,
        date,
        now,
        json,
    } = cmd
    {
        let clock = clock_from(date, now)?;
        let engine = build_engine(ctx, clock, Source::Portal);
        let estimate = engine.calculate_exit(entry, set.as_deref(), parse_date_arg(date)?)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&estimate)?);
            return Ok(());
        }

        println!(
            "Entry {} → exit at {} ({} required, set '{}')",
            entry,
            bold(&estimate.exit_time),
            mins2readable(estimate.required_minutes, false, false),
            estimate.set_id
        );
        if estimate.remaining_minutes > 0 {
            println!(
                "Remaining: {}",
                mins2readable(estimate.remaining_minutes, false, false)
            );
        } else {
            println!("Required presence already reached.");
        }
    }
    Ok(())
}
