use super::stats::judge_stats;
use super::{finish, Adjustment, Degeneracy};
use crate::types::table::ScoreTable;

/// Each judge's share of the summed variance. Falls back to equal weights when
/// no judge has any variance.
pub fn variance_weights(table: &ScoreTable) -> (Vec<f64>, Option<Degeneracy>) {
    let variances: Vec<f64> = judge_stats(table)
        .iter()
        .map(|stat| stat.variance)
        .collect();
    let total: f64 = variances.iter().sum();

    if total <= 0.0 {
        tracing::warn!(
            judges = variances.len(),
            "no judge has score variance; using equal weights"
        );
        let equal = 1.0 / variances.len() as f64;
        return (vec![equal; variances.len()], Some(Degeneracy::ZeroVariance));
    }

    (variances.iter().map(|v| v / total).collect(), None)
}

/// Proportional-variance score: per-project average of raw scores weighted by
/// each judge's share of total variance.
pub fn proportional_variance(table: &ScoreTable, normalize: bool) -> Adjustment {
    let (weights, degenerate) = variance_weights(table);

    let raw: Vec<f64> = (0..table.project_count())
        .map(|row| {
            table
                .row(row)
                .iter()
                .zip(&weights)
                .map(|(score, weight)| score * weight)
                .sum::<f64>()
        })
        .collect();

    tracing::info!(
        projects = table.project_count(),
        judges = table.judge_count(),
        normalize,
        "computed proportional-variance scores"
    );
    finish(table.projects(), raw, normalize, degenerate.into_iter().collect())
}
