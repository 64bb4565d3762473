use crate::core::planner::PlannedDay;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, PlanExportRow};
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Write a planner range to `file` in the given format.
    pub fn export_plan(
        days: &[PlannedDay],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if path.is_dir() {
            return Err(AppError::Export(format!(
                "'{}' is a directory",
                path.display()
            )));
        }

        ensure_writable(&path, force)?;

        let rows = PlanExportRow::from_days(days);
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
