use super::Degeneracy;

/// Min-max rescale onto `[0, 1]`: `(x - min) / (max - min)`.
///
/// A zero range (including a single value) has no meaningful rescaling, so
/// every output is `0.0` and `Degeneracy::FlatRange` is reported.
pub fn normalize(values: &[f64]) -> (Vec<f64>, Option<Degeneracy>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if values.is_empty() || range <= 0.0 {
        if !values.is_empty() {
            tracing::warn!(
                count = values.len(),
                value = min,
                "normalization input has zero range; emitting all zeros"
            );
        }
        let flat = values.first().map(|_| Degeneracy::FlatRange);
        return (vec![0.0; values.len()], flat);
    }

    let scaled = values.iter().map(|value| (value - min) / range).collect();
    (scaled, None)
}
