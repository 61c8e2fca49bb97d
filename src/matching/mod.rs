//! The mentor-matching pipeline.
//!
//! Combines a content similarity signal, a logistics feasibility signal and a
//! collaborative history signal into one compatibility score per candidate,
//! then ranks a candidate pool against a fixed subject.

mod candidate;
mod compatibility;
mod config;
mod feasibility;
mod history;
mod ranker;

pub use self::{
    candidate::{AvailabilityWindow, Candidate, CandidateId, SkillProfile, Subject},
    compatibility::compatibility,
    config::{BlendWeights, WeightsError},
    feasibility::feasibility,
    history::history_score,
    ranker::{rank, Recommendation},
};
