use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::briefing::describe_dose;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{celebrate, info};
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { date } = cmd {
        let d = parse_optional_date(date.as_ref())?;
        let mut pool = DbPool::new(&cfg.database)?;
        let status = Core::load_daily_summary(&mut pool, d)?.status;

        match &status.next {
            Some(next) => {
                let dosage = if next.dosage.is_empty() {
                    String::new()
                } else {
                    format!(" {}", next.dosage)
                };
                println!(
                    "⏰ Next up: {}{} ({}, dose {})",
                    describe_dose(next, cfg.time_format),
                    dosage,
                    next.label,
                    next.ordinal
                );
                if status.pending.len() > 1 {
                    println!("   {} more pending after this one", status.pending.len() - 1);
                }
            }
            None if status.is_empty() => info(format!("No medications scheduled for {}.", d)),
            None => celebrate(format!(
                "All {} doses taken for {}!",
                status.totals.total_doses, d
            )),
        }
    }

    Ok(())
}
