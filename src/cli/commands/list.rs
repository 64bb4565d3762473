use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_medications;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use crate::utils::time::display_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let records = load_medications(&mut pool)?;

        if records.is_empty() {
            info("No medications stored yet. Use `rdoseplan add` to create one.");
            return Ok(());
        }

        let mut table = Table::new(
            ["ID", "Name", "Dosage", "Category", "Frequency", "At", "From", "Days", "Mode"]
                .into_iter()
                .map(Column::new)
                .collect(),
        );

        for r in &records {
            let s = &r.schedule;
            table.add_row(vec![
                r.id.to_string(),
                r.name.clone(),
                r.dosage.clone(),
                r.category.clone(),
                s.frequency.describe(),
                display_time(&s.start_time, cfg.time_format),
                s.start_date.to_string(),
                s.duration.to_string(),
                s.next_day_mode.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
