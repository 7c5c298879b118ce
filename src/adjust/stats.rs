use crate::types::table::ScoreTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JudgeStats {
    pub mean: f64,
    /// Sample variance (n - 1 denominator); zero when fewer than two projects.
    pub variance: f64,
    pub std_dev: f64,
}

pub fn judge_stats(table: &ScoreTable) -> Vec<JudgeStats> {
    let n = table.project_count() as f64;
    let stats: Vec<JudgeStats> = (0..table.judge_count())
        .map(|col| {
            let mean = table.column(col).sum::<f64>() / n;
            let variance = if table.project_count() < 2 || is_flat(table, col) {
                0.0
            } else {
                table
                    .column(col)
                    .map(|value| (value - mean).powi(2))
                    .sum::<f64>()
                    / (n - 1.0)
            };
            JudgeStats {
                mean,
                variance,
                std_dev: variance.sqrt(),
            }
        })
        .collect();

    for (judge, stat) in table.judges().iter().zip(&stats) {
        tracing::debug!(
            judge = %judge,
            mean = stat.mean,
            std_dev = stat.std_dev,
            "judge statistics"
        );
    }
    stats
}

/// Exact check; `sum / n` rounding would otherwise leave a flat column with a
/// tiny nonzero variance.
fn is_flat(table: &ScoreTable, col: usize) -> bool {
    let mut values = table.column(col);
    match values.next() {
        Some(first) => values.all(|value| value == first),
        None => true,
    }
}
