use super::{Context, Source, build_engine, clock_from};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `ack` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Ack { date, now, clear } = cmd {
        let engine = build_engine(ctx, clock_from(date, now)?, Source::Portal);
        let day = engine.today();

        if *clear {
            engine.clear_time_to_leave()?;
            success(format!("Time-to-leave alert re-enabled for {day}"));
        } else {
            engine.acknowledge_time_to_leave()?;
            success(format!("Time-to-leave alert acknowledged for {day}"));
        }
    }
    Ok(())
}
