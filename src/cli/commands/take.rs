use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::take::TakeLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_date;
use crate::utils::time::display_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Take {
        id,
        dose,
        date,
        undo,
    } = cmd
    {
        let d = parse_optional_date(date.as_ref())?;
        let mut pool = DbPool::new(&cfg.database)?;

        let updated = TakeLogic::apply(&mut pool, *id, d, *dose, *undo)?;

        success(format!(
            "Medication #{} dose {} ({}, {}) marked as {} for {}",
            id,
            updated.ordinal,
            updated.label,
            display_time(&updated.time, cfg.time_format),
            if updated.taken { "taken" } else { "not taken" },
            d
        ));
    }

    Ok(())
}
