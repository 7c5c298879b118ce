use super::stats::judge_stats;
use super::{finish, Adjustment};
use crate::error::{Result, ShowcaseError};
use crate::types::table::ScoreTable;

/// Kappa-adjusted score.
///
/// For each judge `j` with mean `mu_j` and sample deviation `sigma_j`, a score
/// contributes `sign(d) * (|d| * sigma_j^kappa)^(1 / (1 + kappa))` where
/// `d = score - mu_j`. Contributions are summed per project. `kappa = 0`
/// reduces to the plain signed-deviation sum.
pub fn kappa_adjusted(table: &ScoreTable, kappa: f64, normalize: bool) -> Result<Adjustment> {
    if !kappa.is_finite() || kappa < 0.0 {
        return Err(ShowcaseError::InvalidParameter(format!(
            "kappa must be a non-negative finite number (found {kappa})"
        )));
    }

    let stats = judge_stats(table);
    let exponent = 1.0 / (1.0 + kappa);
    let spread: Vec<f64> = stats.iter().map(|stat| stat.std_dev.powf(kappa)).collect();

    let raw: Vec<f64> = (0..table.project_count())
        .map(|row| {
            table
                .row(row)
                .iter()
                .zip(&stats)
                .zip(&spread)
                .map(|((score, stat), scale)| signed_power(score - stat.mean, *scale, exponent))
                .sum::<f64>()
        })
        .collect();

    tracing::info!(
        projects = table.project_count(),
        judges = table.judge_count(),
        kappa,
        normalize,
        "computed kappa-adjusted scores"
    );
    Ok(finish(table.projects(), raw, normalize, Vec::new()))
}

/// `sign(d) * (|d| * scale)^exponent`, with the sign taken before the
/// fractional power so the base is never negative.
fn signed_power(deviation: f64, scale: f64, exponent: f64) -> f64 {
    if deviation == 0.0 {
        return 0.0;
    }
    let magnitude = (deviation.abs() * scale).powf(exponent);
    deviation.signum() * magnitude
}
