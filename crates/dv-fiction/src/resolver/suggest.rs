use strsim::jaro_winkler;

/// Minimum similarity for a label to be suggested without a substring hit.
const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Suggest labels from `available` for a partially typed action.
///
/// Labels are compared in their spoken form (`tomar_traje` as `tomar traje`).
/// Prefix matches rank first, then substring matches, then labels whose
/// Jaro-Winkler similarity reaches the threshold. Ties keep table order.
pub fn suggest_actions(partial: &str, available: &[&str], limit: usize) -> Vec<String> {
    let partial_lower = partial.trim().to_lowercase();
    if partial_lower.is_empty() {
        return Vec::new();
    }

    let mut suggestions: Vec<(&str, f64)> = available
        .iter()
        .filter_map(|label| {
            let spoken = label.replace('_', " ").to_lowercase();
            if spoken.starts_with(&partial_lower) || label.starts_with(&partial_lower) {
                Some((*label, 2.0))
            } else if spoken.contains(&partial_lower) || label.contains(&partial_lower) {
                Some((*label, 1.0))
            } else {
                let score = jaro_winkler(&partial_lower, &spoken);
                (score >= SIMILARITY_THRESHOLD).then_some((*label, score))
            }
        })
        .collect();

    suggestions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    suggestions
        .into_iter()
        .take(limit)
        .map(|(label, _)| label.to_string())
        .collect()
}
