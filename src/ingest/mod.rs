pub mod attendance;
pub mod pairs;
pub mod scores;

use crate::error::{Result, ShowcaseError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;

/// Header row plus every data record of a CSV file, whitespace-trimmed.
pub(crate) struct Sheet {
    pub path: String,
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
}

impl Sheet {
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShowcaseError::PathNotFound(path.display().to_string()));
        }
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = records.len(),
            "read csv"
        );
        Ok(Self {
            path: path.display().to_string(),
            headers,
            records,
        })
    }

    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| ShowcaseError::MissingColumn {
                path: self.path.clone(),
                column: name.to_string(),
            })
    }

    /// Columns other than `index` whose header is not listed in `ignored`.
    pub fn remaining_columns(&self, index: usize, ignored: &[String]) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .filter(|(col, header)| {
                *col != index && !ignored.iter().any(|name| name == header)
            })
            .map(|(col, _)| col)
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.records[row].get(col).unwrap_or("")
    }
}
