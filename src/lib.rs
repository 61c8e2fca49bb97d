//! Compatibility scoring and ranking core of the campus portal.
//!
//! Three pure signals feed a weighted blend: TF-IDF text similarity between
//! profiles, logistics feasibility from timezones and schedule overlap, and a
//! collaborative prior from past interaction outcomes. The ranker scores a
//! candidate pool against a fixed subject and returns the top-k, degrading
//! gracefully on sparse or malformed input instead of failing a request.
//!
//! All components are synchronous, stateless functions of their inputs; the
//! term-weighting vocabulary is rebuilt per call, so concurrent ranking
//! requests need no coordination.

mod error;
mod matching;
mod resume;
mod similarity;
mod utils;
mod vector;

pub use crate::{
    error::Error,
    matching::{
        compatibility,
        feasibility,
        history_score,
        rank,
        AvailabilityWindow,
        BlendWeights,
        Candidate,
        CandidateId,
        Recommendation,
        SkillProfile,
        Subject,
        WeightsError,
    },
    resume::{score_resume, ResumeReport},
    similarity::{
        document_similarity,
        similarities_to_reference,
        SimilarityError,
        TermWeighting,
        MENTOR_FEATURE_CAP,
        RESUME_FEATURE_CAP,
    },
    vector::{cosine_similarity, SkillVector},
};
