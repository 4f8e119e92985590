//! Scalar field normalization.

/// Returns the (min, max) of a scalar field, or `None` for an empty field.
#[must_use]
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some((min, max))
}

/// Min-max normalizes a scalar field to the [0, 1] working domain.
///
/// The field's own minimum maps to 0 and its maximum to 1, over the whole
/// field (not per triangle). A constant field maps identically to 0.
#[must_use]
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let Some((min, max)) = min_max(values) else {
        return Vec::new();
    };
    let span = max - min;
    if span <= 0.0 {
        // Constant field: pin everything to the bottom of the domain
        return vec![0.0; values.len()];
    }
    values.iter().map(|&v| (v - min) / span).collect()
}
