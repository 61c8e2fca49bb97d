use std::iter::once;

use log::{info, warn};
use serde::Serialize;

use crate::{
    matching::{
        candidate::{Candidate, CandidateId, SkillProfile, Subject},
        compatibility::compatibility,
        config::BlendWeights,
        feasibility::feasibility,
        history::history_score,
    },
    similarity::{TermWeighting, MENTOR_FEATURE_CAP},
    utils::{nan_safe_f32_cmp_desc, round_to},
    vector::cosine_similarity,
};

/// One entry of a ranked recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Identity of the recommended candidate.
    pub id: CandidateId,
    /// Display label of the recommended candidate.
    pub label: String,
    /// Aggregate compatibility score in `[0, 1]`.
    pub score: f32,
    /// Raw skill-match similarity, when that signal was measurable.
    pub skill_match: Option<f32>,
}

impl Recommendation {
    /// The compatibility score as a display percentage with one decimal.
    pub fn score_percent(&self) -> f32 {
        round_to(self.score * 100., 1)
    }

    /// The skill match as a display percentage with one decimal.
    pub fn skill_match_percent(&self) -> Option<f32> {
        self.skill_match
            .map(|similarity| round_to(similarity * 100., 1))
    }
}

/// Ranks a candidate pool against a subject and returns the top `k`.
///
/// Every candidate receives an aggregate compatibility score; the list is
/// sorted descending by score with ties keeping their pool order, then
/// truncated to `k` entries. A pool smaller than `k` returns all of its
/// members and an empty pool returns an empty list.
///
/// Degradation is local: a candidate whose similarity input is unusable
/// (sparse corpus, mismatched vector) is demoted by a `0.0` content
/// contribution, malformed logistics or history fall back to their neutral
/// defaults, and the ranking as a whole always succeeds.
pub fn rank(
    subject: &Subject,
    pool: &[Candidate],
    k: usize,
    weights: &BlendWeights,
) -> Vec<Recommendation> {
    if pool.is_empty() {
        return Vec::new();
    }

    let mut recommendations = pool
        .iter()
        .zip(content_similarities(subject, pool))
        .map(|(candidate, content)| Recommendation {
            id: candidate.id.clone(),
            label: candidate.label.clone(),
            score: compatibility(
                content.unwrap_or(0.),
                feasibility(&subject.availability, &candidate.availability),
                history_score(&candidate.history),
                weights,
            ),
            skill_match: content,
        })
        .collect::<Vec<_>>();

    // stable sort keeps the pool order of candidates with equal scores
    recommendations.sort_by(|a, b| nan_safe_f32_cmp_desc(&a.score, &b.score));
    recommendations.truncate(k);

    info!(
        "generated {} of {} requested recommendations from a pool of {}",
        recommendations.len(),
        k,
        pool.len(),
    );

    recommendations
}

/// Computes the content similarity of every pool member against the subject.
///
/// Free-text profiles share one term-weighting model per call, fitted over
/// the subject text followed by the candidate texts. Pre-computed vectors are
/// compared directly. `None` marks candidates whose profile representation
/// cannot be compared against the subject's, or any text candidate when the
/// corpus is too sparse for a vocabulary.
fn content_similarities(subject: &Subject, pool: &[Candidate]) -> Vec<Option<f32>> {
    match &subject.profile {
        SkillProfile::Vector(subject_vector) => pool
            .iter()
            .map(|candidate| match &candidate.profile {
                SkillProfile::Vector(vector) => Some(cosine_similarity(subject_vector, vector)),
                SkillProfile::Text(_) => None,
            })
            .collect(),
        SkillProfile::Text(subject_text) => {
            let corpus = once(subject_text.as_str()).chain(pool.iter().filter_map(candidate_text));
            let model = match TermWeighting::fit(corpus, MENTOR_FEATURE_CAP) {
                Ok(model) => model,
                Err(reason) => {
                    warn!("content similarity unavailable for this pool: {}", reason);
                    return vec![None; pool.len()];
                }
            };

            let subject_vector = model.transform(subject_text);
            pool.iter()
                .map(|candidate| match &candidate.profile {
                    SkillProfile::Text(text) => {
                        Some(cosine_similarity(&subject_vector, &model.transform(text)))
                    }
                    SkillProfile::Vector(_) => None,
                })
                .collect()
        }
    }
}

fn candidate_text(candidate: &Candidate) -> Option<&str> {
    match &candidate.profile {
        SkillProfile::Text(text) => Some(text.as_str()),
        SkillProfile::Vector(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::matching::candidate::AvailabilityWindow;

    use super::*;

    fn vector_candidate(id: &str, vector: Vec<f32>) -> Candidate {
        Candidate {
            id: CandidateId::from(id),
            label: format!("candidate {}", id),
            profile: SkillProfile::Vector(vector.into()),
            availability: AvailabilityWindow::new(0., 9..18),
            history: vec![],
        }
    }

    fn text_candidate(id: &str, text: &str) -> Candidate {
        Candidate {
            id: CandidateId::from(id),
            label: format!("candidate {}", id),
            profile: SkillProfile::Text(text.to_string()),
            availability: AvailabilityWindow::new(0., 9..18),
            history: vec![],
        }
    }

    fn text_subject(text: &str) -> Subject {
        Subject {
            profile: SkillProfile::Text(text.to_string()),
            availability: AvailabilityWindow::new(0., 9..18),
        }
    }

    #[test]
    fn test_rank_empty_pool() {
        let subject = text_subject("rust and distributed systems");
        assert!(rank(&subject, &[], 5, &BlendWeights::default()).is_empty());
        assert!(rank(&subject, &[], 0, &BlendWeights::default()).is_empty());
    }

    #[test]
    fn test_rank_truncates_to_k() {
        let subject = text_subject("python data engineering");
        let pool = vec![
            text_candidate("1", "python data pipelines"),
            text_candidate("2", "python engineering"),
            text_candidate("3", "sales outreach"),
        ];

        let top = rank(&subject, &pool, 2, &BlendWeights::default());
        assert_eq!(top.len(), 2);

        let all = rank(&subject, &pool, 10, &BlendWeights::default());
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_rank_scores_are_non_increasing() {
        let subject = text_subject("python data engineering with sql");
        let pool = vec![
            text_candidate("1", "gardening and cooking"),
            text_candidate("2", "python sql data engineering"),
            text_candidate("3", "python data"),
        ];

        let ranked = rank(&subject, &pool, 3, &BlendWeights::default());
        assert!(ranked
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
        assert_eq!(ranked[0].id, CandidateId::from("2"));
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let subject = Subject {
            profile: SkillProfile::Vector(vec![1., 0.].into()),
            availability: AvailabilityWindow::new(0., 9..12),
        };
        // identical profiles, availability and history give identical scores
        let pool = vec![
            vector_candidate("first", vec![1., 0.]),
            vector_candidate("second", vec![1., 0.]),
            vector_candidate("third", vec![1., 0.]),
        ];

        let ranked = rank(&subject, &pool, 3, &BlendWeights::default());
        let order = ranked.iter().map(|r| r.id.0.as_str()).collect::<Vec<_>>();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn test_sparse_corpus_keeps_candidates_rankable() {
        let subject = text_subject("ml");
        // single-character tokens never survive tokenization
        let pool = vec![text_candidate("1", "a"), text_candidate("2", "b")];

        let ranked = rank(&subject, &pool, 2, &BlendWeights::default());
        assert_eq!(ranked.len(), 2);
        for recommendation in &ranked {
            assert_eq!(recommendation.skill_match, None);
            // feasibility 1.0 and neutral history still score the candidate
            assert!(recommendation.score > 0.);
        }
    }

    #[test]
    fn test_mismatched_vector_scores_zero_similarity() {
        let subject = Subject {
            profile: SkillProfile::Vector(vec![1., 0., 0.].into()),
            availability: AvailabilityWindow::new(0., 9..12),
        };
        let pool = vec![vector_candidate("short", vec![1., 0.])];

        let ranked = rank(&subject, &pool, 1, &BlendWeights::default());
        assert_eq!(ranked[0].skill_match, Some(0.));
    }

    #[test]
    fn test_mixed_representations_are_not_comparable() {
        let subject = text_subject("python data engineering");
        let pool = vec![
            text_candidate("text", "python data"),
            vector_candidate("vector", vec![0.5, 0.5]),
        ];

        let similarities = content_similarities(&subject, &pool);
        assert!(similarities[0].is_some());
        assert_eq!(similarities[1], None);
    }

    #[test]
    fn test_percent_presentation() {
        let recommendation = Recommendation {
            id: CandidateId::from("1"),
            label: "candidate 1".to_string(),
            score: 0.9343,
            skill_match: Some(0.99936),
        };
        assert_eq!(recommendation.score_percent(), 93.4);
        assert_eq!(recommendation.skill_match_percent(), Some(99.9));
    }

    #[test]
    fn test_recommendations_serialize_for_the_json_handoff() {
        let recommendation = Recommendation {
            id: CandidateId::from("11"),
            label: "A. Mentor".to_string(),
            score: 0.9343,
            skill_match: None,
        };

        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["id"], "11");
        assert_eq!(json["label"], "A. Mentor");
    }
}
