use crate::error::{Result, ShowcaseError};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Attendance ratio in `[0, 1]` keyed by attendance identifier.
pub type Attendance = BTreeMap<String, f64>;

/// One score per project, kept in descending score order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustedScores {
    entries: Vec<(String, f64)>,
}

impl AdjustedScores {
    /// Sorts descending; equal scores keep their input order. `-0.0` and `0.0`
    /// compare equal.
    pub fn ranked(mut entries: Vec<(String, f64)>) -> Self {
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        Self { entries }
    }

    #[cfg(test)]
    pub fn get(&self, project: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(label, _)| label == project)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries
            .iter()
            .map(|(label, score)| (label.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Injective translation from score-table identifiers to attendance identifiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdMapping {
    forward: BTreeMap<String, String>,
}

impl IdMapping {
    pub fn new(pairs: impl IntoIterator<Item = (String, String)>) -> Result<Self> {
        let mut forward = BTreeMap::new();
        let mut targets: BTreeMap<String, String> = BTreeMap::new();
        for (source, target) in pairs {
            if let Some(first) = targets.get(&target) {
                if *first != source {
                    return Err(ShowcaseError::DuplicateMappingTarget {
                        first: first.clone(),
                        second: source,
                        target,
                    });
                }
            }
            if let Some(previous) = forward.insert(source.clone(), target.clone()) {
                if previous != target {
                    return Err(ShowcaseError::InvalidParameter(format!(
                        "identifier '{source}' maps to both '{previous}' and '{target}'"
                    )));
                }
            }
            targets.insert(target, source);
        }
        Ok(Self { forward })
    }

    pub fn translate(&self, source: &str) -> Result<&str> {
        self.forward
            .get(source)
            .map(String::as_str)
            .ok_or_else(|| ShowcaseError::MissingMapping(source.to_string()))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }
}
