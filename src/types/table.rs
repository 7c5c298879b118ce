use crate::error::{Result, ShowcaseError};
use std::collections::HashSet;

/// Raw judge scores laid out row-major: one row per project, one column per judge.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    projects: Vec<String>,
    judges: Vec<String>,
    values: Vec<f64>,
}

impl ScoreTable {
    pub fn new(judges: Vec<String>, rows: Vec<(String, Vec<f64>)>) -> Result<Self> {
        if judges.is_empty() {
            return Err(ShowcaseError::EmptyTable(
                "score table has no judge columns".to_string(),
            ));
        }
        if rows.is_empty() {
            return Err(ShowcaseError::EmptyTable(
                "score table has no projects".to_string(),
            ));
        }
        ensure_unique("judge", &judges)?;

        let mut projects = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len() * judges.len());
        let mut seen = HashSet::new();
        for (project, scores) in rows {
            if !seen.insert(project.clone()) {
                return Err(ShowcaseError::DuplicateLabel {
                    axis: "project",
                    label: project,
                });
            }
            if scores.len() != judges.len() {
                return Err(ShowcaseError::RaggedRow {
                    project,
                    expected: judges.len(),
                    found: scores.len(),
                });
            }
            if let Some(col) = scores.iter().position(|score| !score.is_finite()) {
                return Err(ShowcaseError::NonFiniteScore {
                    project,
                    judge: judges[col].clone(),
                });
            }
            values.extend(scores);
            projects.push(project);
        }

        Ok(Self {
            projects,
            judges,
            values,
        })
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn judges(&self) -> &[String] {
        &self.judges
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn judge_count(&self) -> usize {
        self.judges.len()
    }

    #[cfg(test)]
    pub fn get(&self, project: &str, judge: &str) -> Option<f64> {
        let row = self.projects.iter().position(|p| p == project)?;
        let col = self.judges.iter().position(|j| j == judge)?;
        Some(self.row(row)[col])
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let width = self.judges.len();
        &self.values[row * width..(row + 1) * width]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(col)
            .step_by(self.judges.len())
            .copied()
    }
}

fn ensure_unique(axis: &'static str, labels: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ShowcaseError::DuplicateLabel {
                axis,
                label: label.clone(),
            });
        }
    }
    Ok(())
}
