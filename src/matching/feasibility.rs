use crate::matching::candidate::AvailabilityWindow;

/// Weight of the timezone proximity signal within the feasibility score.
const TIMEZONE_WEIGHT: f32 = 0.6;

/// Weight of the schedule-overlap signal within the feasibility score.
const OVERLAP_WEIGHT: f32 = 0.4;

/// Neutral default when logistics data is malformed.
pub(crate) const NEUTRAL_FEASIBILITY: f32 = 0.5;

/// Linear decay range of the timezone distance.
const WRAPAROUND_HOURS: f32 = 24.;

/// Computes the logistics feasibility of two subjects in `[0, 1]`.
///
/// Timezone proximity decays linearly over a 24-hour range and floors at
/// zero; schedule overlap is the Jaccard overlap of the slot sets, with an
/// empty union meaning no feasibility rather than an undefined value. The
/// two signals blend `0.6 / 0.4`.
///
/// Non-finite timezone offsets are malformed profile data and yield the
/// neutral default of `0.5` — feasibility degrades, it never blocks a
/// recommendation.
pub fn feasibility(a: &AvailabilityWindow, b: &AvailabilityWindow) -> f32 {
    if !a.timezone.is_finite() || !b.timezone.is_finite() {
        return NEUTRAL_FEASIBILITY;
    }

    #[allow(clippy::float_cmp)] // exact equality short-circuits the decay
    let tz_score = if a.timezone == b.timezone {
        1.
    } else {
        (1. - (a.timezone - b.timezone).abs() / WRAPAROUND_HOURS).max(0.)
    };

    let union = a.slots.union(&b.slots).count();
    let avail_score = if union == 0 {
        0.
    } else {
        a.slots.intersection(&b.slots).count() as f32 / union as f32
    };

    TIMEZONE_WEIGHT * tz_score + OVERLAP_WEIGHT * avail_score
}
