use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::vector::SkillVector;

/// Opaque identity of a match candidate, assigned by the portal's storage
/// layer.
#[repr(transparent)]
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The content side of a profile.
///
/// Profiles are validated upstream into one of these variants; the scoring
/// core never guesses field meanings from loosely typed records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SkillProfile {
    /// Free text (profile bio, skills field), vectorised per ranking call.
    Text(String),
    /// A pre-computed position in a shared feature space.
    Vector(SkillVector),
}

/// Reachability of a subject: discrete time-slot ids plus a timezone offset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Signed timezone offset in hours, fractional offsets allowed.
    pub timezone: f32,
    /// Time-slot identifiers (e.g. hour-of-day buckets) with reachability.
    pub slots: BTreeSet<u32>,
}

impl AvailabilityWindow {
    /// Creates an availability window from an offset and slot ids.
    pub fn new(timezone: f32, slots: impl IntoIterator<Item = u32>) -> Self {
        Self {
            timezone,
            slots: slots.into_iter().collect(),
        }
    }
}

/// A member of the candidate pool for one recommendation request.
///
/// Constructed per request from upstream profile data and owned by the
/// request scope; this core never persists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Identity of the candidate.
    pub id: CandidateId,
    /// Display label (e.g. the portal user name).
    pub label: String,
    /// Skill content used for the similarity signal.
    pub profile: SkillProfile,
    /// Logistics used for the feasibility signal.
    pub availability: AvailabilityWindow,
    /// Past outcome scores in `[0, 1]` for the collaborative signal.
    pub history: Vec<f32>,
}

/// The fixed side of a recommendation request (e.g. the student profile).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Skill content of the subject.
    pub profile: SkillProfile,
    /// Logistics of the subject.
    pub availability: AvailabilityWindow,
}
