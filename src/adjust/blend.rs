use crate::error::{Result, ShowcaseError};
use crate::types::scores::{AdjustedScores, Attendance, IdMapping};

pub const DEFAULT_ATTENDANCE_RATIO: f64 = 0.2;

/// `score * (1 - ratio) + attendance * ratio` for every scored project.
///
/// Identifiers are translated through `mapping` before the attendance lookup.
/// Inputs are not rescaled; both sides are expected to already sit in `[0, 1]`.
pub fn blend_with_attendance(
    scores: &AdjustedScores,
    attendance: &Attendance,
    ratio: f64,
    mapping: Option<&IdMapping>,
) -> Result<AdjustedScores> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(ShowcaseError::InvalidParameter(format!(
            "attendance ratio must be between 0.0 and 1.0 (found {ratio})"
        )));
    }

    let mut blended = Vec::with_capacity(scores.len());
    for (project, score) in scores.iter() {
        let key = match mapping {
            Some(mapping) => mapping.translate(project)?,
            None => project,
        };
        let present = attendance
            .get(key)
            .copied()
            .ok_or_else(|| ShowcaseError::MissingIdentifier(key.to_string()))?;
        blended.push((project.to_string(), score * (1.0 - ratio) + present * ratio));
    }

    tracing::info!(projects = blended.len(), ratio, "blended attendance");
    Ok(AdjustedScores::ranked(blended))
}
