//! Deterministic top-N ranking over frequency mappings.

use crate::core::types::Minutes;

/// Return the `n` keys with the highest weight, heaviest first.
///
/// Equal weights are ordered by key ascending, so the result does not depend
/// on mapping iteration order. The input is never modified.
pub fn top_n(weights: &Minutes, n: usize) -> Vec<String> {
    if n == 0 || weights.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(&String, &u64)> = weights.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(n)
        .map(|(key, _)| key.clone())
        .collect()
}
