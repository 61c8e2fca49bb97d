use displaydoc::Display;
use thiserror::Error;

use crate::{matching::WeightsError, similarity::SimilarityError};

/// Potential errors of the scoring core.
///
/// Only caller contract violations surface here; sub-scorer degradations are
/// absorbed locally with their documented neutral defaults.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum Error {
    /// Failed to build the term-weighting model: {0}
    Similarity(#[from] SimilarityError),
    /// Invalid compatibility blend weights: {0}
    Weights(#[from] WeightsError),
}
