use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::briefing::briefing;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::{celebrate, header};
use crate::utils::colors::{color_for_adherence, color_for_dose, colorize};
use crate::utils::date::{format_weekday, parse_optional_date};
use crate::utils::formatting::{bold, pad_right, progress, separator, taken_mark};
use crate::utils::time::display_time;

const WRAP_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { date, json } = cmd {
        let d = parse_optional_date(date.as_ref())?;
        let mut pool = DbPool::new(&cfg.database)?;
        let summary = Core::load_daily_summary(&mut pool, d)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_day(&summary, cfg);
        }
    }

    Ok(())
}

fn print_day(summary: &DaySummary, cfg: &Config) {
    header(format!("{} ({})", format_weekday(&summary.date), summary.date));

    for med in &summary.medications {
        let title = if med.dosage.is_empty() {
            med.name.clone()
        } else {
            format!("{} ({})", med.name, med.dosage)
        };
        println!("{}  [{}]", bold(&title), med.category);

        for dose in &med.doses {
            let line = format!(
                "  {} {}  {}",
                taken_mark(dose.taken),
                pad_right(&display_time(&dose.time, cfg.time_format), 8),
                dose.label
            );
            println!("{}", colorize(&line, color_for_dose(dose.taken)));
        }
    }

    let totals = &summary.status.totals;
    println!("{}", separator(&cfg.separator_char, 40));
    println!(
        "Progress: {}",
        colorize(
            &progress(
                totals.taken_doses,
                totals.total_doses,
                totals.adherence_percent()
            ),
            color_for_adherence(totals.adherence_percent())
        )
    );

    let text = textwrap::fill(&briefing(&summary.status, cfg.time_format), WRAP_WIDTH);
    if summary.status.all_taken() {
        celebrate(text);
    } else {
        println!("{}", text);
    }
}
