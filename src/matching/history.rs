/// Neutral default when no prior information exists.
pub(crate) const NEUTRAL_HISTORY: f32 = 0.5;

/// Computes the collaborative prior from past outcome scores.
///
/// The score is the arithmetic mean of the outcomes, clamped to `[0, 1]`.
/// An empty history carries no prior information and yields the neutral
/// default of `0.5`, as does a history containing non-real values.
pub fn history_score(outcomes: &[f32]) -> f32 {
    if outcomes.is_empty() || outcomes.iter().any(|outcome| !outcome.is_finite()) {
        return NEUTRAL_HISTORY;
    }

    (outcomes.iter().sum::<f32>() / outcomes.len() as f32).clamp(0., 1.)
}
