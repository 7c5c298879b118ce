use super::Sheet;
use crate::error::Result;
use crate::types::scores::IdMapping;
use std::path::Path;

/// Project name to project number, for blending name-keyed scores with
/// number-keyed attendance.
pub fn read_pairs(path: &Path, name_column: &str, number_column: &str) -> Result<IdMapping> {
    let sheet = Sheet::read(path)?;
    let name = sheet.column(name_column)?;
    let number = sheet.column(number_column)?;

    let pairs = (0..sheet.records.len())
        .map(|row| {
            (
                sheet.cell(row, name).to_string(),
                sheet.cell(row, number).to_string(),
            )
        })
        .collect::<Vec<_>>();
    let mapping = IdMapping::new(pairs)?;

    tracing::info!(path = %path.display(), pairs = mapping.len(), "loaded name/number pairs");
    Ok(mapping)
}
