use super::{Context, Source, block_on, build_engine, clock_from};
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::ui::messages::print_status;
use tracing::debug;

/// Handle the `status` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Status {
        detail,
        detail_file,
        debug,
        debug_file,
        date,
        now,
        force_refresh,
        json,
    } = cmd
    {
        let clock = clock_from(date, now)?;
        let source = Source::from_args(detail, detail_file, debug, debug_file);
        let engine = build_engine(ctx, clock, source);

        let status = block_on(engine.get_work_status(*force_refresh))?;
        debug!(status = %status.status, "status computed");

        if *json {
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            print_status(&status);
        }
    }
    Ok(())
}
