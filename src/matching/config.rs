use displaydoc::Display;
use thiserror::Error;

/// Tolerance for the unit-sum check of the blend weights.
const SUM_TOLERANCE: f32 = 1e-6;

/// Potential errors of the blend weights.
#[derive(Copy, Clone, Debug, Display, Error, PartialEq)]
pub enum WeightsError {
    /// Invalid content weight, expected value from the unit interval
    Content,
    /// Invalid feasibility weight, expected value from the unit interval
    Feasibility,
    /// Invalid history weight, expected value from the unit interval
    History,
    /// Invalid blend, expected weights summing to one
    Sum,
}

/// The blend weights of the compatibility aggregation.
///
/// The aggregator never renormalises: a blend that does not sum to one is a
/// caller error and is rejected here, at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlendWeights {
    content: f32,
    feasibility: f32,
    history: f32,
}

impl BlendWeights {
    /// Creates a validated weight blend.
    ///
    /// # Errors
    /// Fails if any weight lies outside of the unit interval or if the
    /// weights do not sum to one.
    pub fn new(content: f32, feasibility: f32, history: f32) -> Result<Self, WeightsError> {
        if !(0. ..=1.).contains(&content) {
            return Err(WeightsError::Content);
        }
        if !(0. ..=1.).contains(&feasibility) {
            return Err(WeightsError::Feasibility);
        }
        if !(0. ..=1.).contains(&history) {
            return Err(WeightsError::History);
        }
        if (content + feasibility + history - 1.).abs() > SUM_TOLERANCE {
            return Err(WeightsError::Sum);
        }

        Ok(Self {
            content,
            feasibility,
            history,
        })
    }

    /// The legacy two-signal blend (`0.7` content, `0.3` feasibility).
    ///
    /// Kept as a caller-chosen alternate configuration for consumers of the
    /// older content-plus-logistics recommendation path; the three-signal
    /// default is canonical.
    pub fn legacy_two_signal() -> Self {
        Self {
            content: 0.7,
            feasibility: 0.3,
            history: 0.,
        }
    }

    /// The weight of the content similarity signal.
    pub fn content(&self) -> f32 {
        self.content
    }

    /// The weight of the logistics feasibility signal.
    pub fn feasibility(&self) -> f32 {
        self.feasibility
    }

    /// The weight of the collaborative history signal.
    pub fn history(&self) -> f32 {
        self.history
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            content: 0.4,
            feasibility: 0.4,
            history: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let weights = BlendWeights::default();
        assert!((weights.content() + weights.feasibility() + weights.history() - 1.).abs() < 1e-6);
    }

    #[test]
    fn test_new_accepts_the_defaults() {
        assert_eq!(BlendWeights::new(0.4, 0.4, 0.2), Ok(BlendWeights::default()));
    }

    #[test]
    fn test_legacy_two_signal_blend_validates() {
        let legacy = BlendWeights::legacy_two_signal();
        assert_eq!(
            BlendWeights::new(0.7, 0.3, 0.),
            Ok(legacy),
        );
        assert_eq!(legacy.history(), 0.);
    }

    #[test]
    fn test_new_rejects_out_of_interval_weights() {
        assert_eq!(BlendWeights::new(-0.1, 0.9, 0.2), Err(WeightsError::Content));
        assert_eq!(
            BlendWeights::new(0.4, 1.1, 0.2),
            Err(WeightsError::Feasibility)
        );
        assert_eq!(
            BlendWeights::new(0.4, 0.4, f32::NAN),
            Err(WeightsError::History)
        );
    }

    #[test]
    fn test_new_rejects_blends_not_summing_to_one() {
        assert_eq!(BlendWeights::new(0.4, 0.4, 0.4), Err(WeightsError::Sum));
        assert_eq!(BlendWeights::new(0.1, 0.1, 0.1), Err(WeightsError::Sum));
    }
}
