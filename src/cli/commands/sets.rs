use super::{Context, Source, build_engine, clock_from};
use crate::cli::parser::Commands;
use crate::core::schedule::find_set;
use crate::errors::AppResult;
use crate::utils::formatting::{mins2readable, pad_right};
use chrono::Weekday;

const DAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "Mon"),
    (Weekday::Tue, "Tue"),
    (Weekday::Wed, "Wed"),
    (Weekday::Thu, "Thu"),
    (Weekday::Fri, "Fri"),
    (Weekday::Sat, "Sat"),
    (Weekday::Sun, "Sun"),
];

/// Handle the `sets` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Sets { date, json } = cmd {
        let engine = build_engine(ctx, clock_from(date, &None)?, Source::Portal);
        let sets = engine.available_sets();

        if *json {
            println!("{}", serde_json::to_string_pretty(&sets)?);
            return Ok(());
        }

        println!("Working hours sets:");
        for info in &sets {
            let set = find_set(&info.id)?;
            let days = DAYS
                .iter()
                .map(|(w, label)| match set.day(*w) {
                    Some(d) => format!("{label} {}", mins2readable(d.total_presence_minutes, false, true)),
                    None => format!("{label} --:--"),
                })
                .collect::<Vec<_>>()
                .join("  ");

            println!(
                "{} {} {} {}",
                if info.is_current { "*" } else { " " },
                pad_right(&info.id, 10),
                pad_right(&info.name, 20),
                days
            );
        }
    }
    Ok(())
}
