use super::Sheet;
use crate::error::{Result, ShowcaseError};
use crate::types::scores::Attendance;
use std::path::Path;

/// Attendance ratio per project: filled check-in cells over check-in columns.
///
/// Every column except `index_column` and `ignored` counts as one check-in; an
/// empty cell is an absence and any content is a presence.
pub fn read_attendance(path: &Path, index_column: &str, ignored: &[String]) -> Result<Attendance> {
    let sheet = Sheet::read(path)?;
    let index = sheet.column(index_column)?;
    let checkins = sheet.remaining_columns(index, ignored);

    if checkins.is_empty() {
        return Err(ShowcaseError::EmptyTable(format!(
            "attendance sheet {} has no check-in columns",
            sheet.path
        )));
    }
    if sheet.records.is_empty() {
        return Err(ShowcaseError::EmptyTable(format!(
            "attendance sheet {} has no projects",
            sheet.path
        )));
    }

    let mut attendance = Attendance::new();
    for row in 0..sheet.records.len() {
        let project = sheet.cell(row, index).to_string();
        let present = checkins
            .iter()
            .filter(|&&col| !sheet.cell(row, col).is_empty())
            .count();
        let ratio = present as f64 / checkins.len() as f64;
        if attendance.insert(project.clone(), ratio).is_some() {
            return Err(ShowcaseError::DuplicateLabel {
                axis: "project",
                label: project,
            });
        }
    }

    tracing::info!(
        path = %path.display(),
        projects = attendance.len(),
        checkins = checkins.len(),
        "loaded attendance sheet"
    );
    Ok(attendance)
}
