pub mod blend;
pub mod kappa;
pub mod normalize;
pub mod stats;
pub mod variance;

pub use blend::blend_with_attendance;
pub use kappa::kappa_adjusted;
pub use variance::proportional_variance;

use crate::types::scores::AdjustedScores;
use serde::Serialize;
use std::fmt;

/// Degenerate input that was absorbed by a fallback instead of producing NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Degeneracy {
    /// Every value was identical; normalization returned all zeros.
    FlatRange,
    /// No judge had variance; weights fell back to `1 / judges`.
    ZeroVariance,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlatRange => write!(f, "flat_range: all scores identical, normalized to zeros"),
            Self::ZeroVariance => write!(f, "zero_variance: no judge variance, equal weights used"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    pub scores: AdjustedScores,
    pub degeneracies: Vec<Degeneracy>,
}

fn finish(
    projects: &[String],
    raw: Vec<f64>,
    normalize: bool,
    mut degeneracies: Vec<Degeneracy>,
) -> Adjustment {
    let values = if normalize {
        let (values, flat) = normalize::normalize(&raw);
        degeneracies.extend(flat);
        values
    } else {
        raw
    };

    let entries = projects.iter().cloned().zip(values).collect();
    Adjustment {
        scores: AdjustedScores::ranked(entries),
        degeneracies,
    }
}
