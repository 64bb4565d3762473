use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::frequency::Frequency;
use crate::models::medication::MedicationRecord;
use crate::models::schedule::{DurationDays, MedicationSchedule};
use crate::utils::date::parse_optional_date;
use crate::utils::time::parse_time_strict;
use chrono::Local;

/// Add a medication.
///
/// Input is validated strictly here, so the engine never has to coerce a
/// stored value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        frequency,
        at,
        from,
        days,
        mode,
        dosage,
        category,
    } = cmd
    {
        let frequency: Frequency = frequency.parse()?;
        let start_time = parse_time_strict(at)?;
        let start_date = parse_optional_date(from.as_ref())?;
        let duration: DurationDays = days.parse()?;
        let next_day_mode = match mode {
            Some(m) => m.parse()?,
            None => cfg.default_next_day_mode,
        };

        let record = MedicationRecord {
            id: 0,
            name: name.trim().to_string(),
            dosage: dosage.trim().to_string(),
            category: category
                .clone()
                .unwrap_or_else(|| cfg.default_category.clone()),
            schedule: MedicationSchedule::new(
                frequency,
                &start_time,
                start_date,
                duration,
                next_day_mode,
            ),
            created_at: Local::now().to_rfc3339(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, &record)?;
    }

    Ok(())
}
