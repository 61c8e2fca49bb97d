use derive_more::{Deref, From};
use float_cmp::{ApproxEq, F32Margin};
use ndarray::{Array1, ArrayBase, Data, Ix1, Zip};
use serde::{Deserialize, Serialize};

/// Additive epsilon in the cosine denominator to avoid division by zero.
pub(crate) const SIMILARITY_EPSILON: f32 = 1e-9;

/// A subject's position in a shared feature space.
///
/// Either derived from free text via term-weighting or supplied directly by
/// the portal's profile layer. The weights are non-negative, hence the cosine
/// of two skill vectors lies in the unit interval.
#[derive(Clone, Debug, Deref, From, Serialize, Deserialize)]
pub struct SkillVector(Array1<f32>);

impl SkillVector {
    /// Creates a skill vector from raw feature weights.
    pub fn new(weights: impl Into<Array1<f32>>) -> Self {
        Self(weights.into())
    }
}

impl From<Vec<f32>> for SkillVector {
    fn from(weights: Vec<f32>) -> Self {
        Self(Array1::from(weights))
    }
}

impl<S> PartialEq<ArrayBase<S, Ix1>> for SkillVector
where
    S: Data<Elem = f32>,
{
    fn eq(&self, other: &ArrayBase<S, Ix1>) -> bool {
        if self.shape() != other.shape() {
            return false;
        }

        let margin = F32Margin::default();
        Zip::from(&self.0)
            .and(other)
            .all(|this, other| (*this).approx_eq(*other, margin))
    }
}

impl PartialEq for SkillVector {
    fn eq(&self, other: &Self) -> bool {
        self.eq(&other.0)
    }
}

/// Computes the l2 norm (euclidean metric) of a vector.
pub(crate) fn l2_norm(a: &SkillVector) -> f32 {
    a.dot(&a.0).sqrt()
}

/// Computes the cosine similarity of two skill vectors, clamped to `[0, 1]`.
///
/// Mismatched shapes and vectors containing non-real values are malformed
/// profile data and score `0.0` instead of panicking; an all-zero vector also
/// scores `0.0` via the epsilon in the denominator.
pub fn cosine_similarity(a: &SkillVector, b: &SkillVector) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if !norm_a.is_finite() || !norm_b.is_finite() {
        return 0.0;
    }

    let similarity = a.dot(&b.0) / (norm_a * norm_b + SIMILARITY_EPSILON);
    if similarity.is_finite() {
        similarity.clamp(0., 1.)
    } else {
        0.0
    }
}
