use crate::{matching::config::BlendWeights, utils::round_to};

/// Decimal places of the aggregate score, for reproducible comparison.
const SCORE_PLACES: u32 = 4;

/// Linearly blends the three component signals into one compatibility score.
///
/// Every component is expected in `[0, 1]` and the weights sum to one, so the
/// aggregate lies in `[0, 1]` as well. The blend is deterministic and rounded
/// to four decimal places.
pub fn compatibility(
    content: f32,
    feasibility: f32,
    history: f32,
    weights: &BlendWeights,
) -> f32 {
    round_to(
        weights.content() * content
            + weights.feasibility() * feasibility
            + weights.history() * history,
        SCORE_PLACES,
    )
}
