use crate::adjust::Degeneracy;
use crate::types::scores::AdjustedScores;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub project: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub version: String,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kappa: Option<f64>,
    pub normalized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendance_ratio: Option<f64>,
    pub input_sha256: String,
    pub generated_at: String,
    pub warnings: Vec<Degeneracy>,
    pub entries: Vec<RankedEntry>,
}

impl Ranking {
    pub fn new(method: &str, scores: &AdjustedScores, input_sha256: String) -> Self {
        let entries = scores
            .iter()
            .enumerate()
            .map(|(index, (project, score))| RankedEntry {
                rank: index + 1,
                project: project.to_string(),
                score,
            })
            .collect();
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            method: method.to_string(),
            kappa: None,
            normalized: true,
            attendance_ratio: None,
            input_sha256,
            generated_at: Utc::now().to_rfc3339(),
            warnings: Vec::new(),
            entries,
        }
    }
}
