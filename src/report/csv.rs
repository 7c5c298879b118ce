use crate::error::{Result, ShowcaseError};
use crate::types::report::Ranking;
use std::io;

pub fn to_csv(ranking: &Ranking) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["rank", "project", "score"])?;
    for entry in &ranking.entries {
        writer.write_record([
            entry.rank.to_string(),
            entry.project.clone(),
            entry.score.to_string(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| {
        ShowcaseError::Io(io::Error::new(e.error().kind(), e.error().to_string()))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| ShowcaseError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
