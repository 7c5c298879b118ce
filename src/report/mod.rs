pub mod csv;
pub mod json;
pub mod md;

use crate::error::{Result, ShowcaseError};
use crate::types::report::Ranking;
use sha2::{Digest, Sha256};
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Csv,
}

pub fn render(ranking: &Ranking, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(ranking).map_err(ShowcaseError::Json),
        OutputFormat::Md => Ok(md::to_markdown(ranking)),
        OutputFormat::Csv => csv::to_csv(ranking),
    }
}

/// Hex SHA-256 of a file, recorded so a published ranking can be traced to its input.
pub fn file_digest(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:x}"))
}
