use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::{PlannedDay, plan_range};
use crate::db::pool::DbPool;
use crate::db::queries::load_medications;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::colors::{GREY, colorize};
use crate::utils::date::{format_weekday, parse_optional_date};
use crate::utils::formatting::{bold, pad_right};
use crate::utils::time::display_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        from,
        days,
        export,
        format,
        force,
    } = cmd
    {
        let start = parse_optional_date(from.as_ref())?;
        let count = days.unwrap_or(cfg.planner_days);

        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_medications(&mut pool)?;
        let plan = plan_range(&records, start, count);

        if let Some(file) = export {
            let rows = ExportLogic::export_plan(&plan, *format, file, *force)?;
            info(format!("{} planned doses written as {}", rows, format.as_str()));
            return Ok(());
        }

        for day in &plan {
            print_day(day, cfg);
        }
    }

    Ok(())
}

fn print_day(day: &PlannedDay, cfg: &Config) {
    println!("{}  {}", bold(&format_weekday(&day.date)), day.date);

    if day.is_empty() {
        println!("  {}", colorize("nothing scheduled", GREY));
        return;
    }

    for group in &day.groups {
        println!("  [{}]", group.category);
        for dose in &group.doses {
            let dosage = if dose.dosage.is_empty() {
                String::new()
            } else {
                format!(" {}", dose.dosage)
            };
            println!(
                "    {} {}{}  {}",
                pad_right(&display_time(&dose.time, cfg.time_format), 8),
                dose.medication_name,
                dosage,
                dose.label
            );
        }
    }
}
