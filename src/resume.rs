//! Resume-to-job-description scoring.
//!
//! An example consumer of the similarity primitive: the resume score blends
//! TF-IDF similarity against the job description with a structural
//! section-completeness signal, and reports keyword-level feedback.

use log::info;
use serde::Serialize;

use crate::{
    similarity::{document_similarity, RESUME_FEATURE_CAP},
    utils::round_to,
};

/// Weight of the content similarity signal within the resume score.
const CONTENT_WEIGHT: f32 = 0.6;

/// Weight of the section-completeness signal within the resume score.
const STRUCTURE_WEIGHT: f32 = 0.4;

/// Section headers a complete resume is expected to carry.
const SECTION_HEADERS: [&str; 4] = ["education", "experience", "skills", "projects"];

/// Fixed skill vocabulary scanned for in resumes.
const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "javascript",
    "sql",
    "java",
    "c++",
    "typescript",
    "machine learning",
    "nlp",
    "deep learning",
    "tensorflow",
    "pytorch",
    "react",
    "angular",
    "vue",
    "node.js",
    "flask",
    "django",
    "docker",
    "kubernetes",
    "aws",
    "gcp",
    "azure",
    "git",
    "jenkins",
    "ci/cd",
    "agile",
    "scrum",
    "communication",
    "leadership",
    "problem solving",
    "teamwork",
];

/// Keywords marking an education mention.
const EDUCATION_KEYWORDS: [&str; 8] = [
    "bachelor", "master", "phd", "b.s.", "m.s.", "b.a.", "m.a.", "degree",
];

/// Feedback structure returned alongside a resume score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeReport {
    /// Blended score as a percentage in `[0, 100]`, two decimal places.
    pub score: f32,
    /// Raw similarity against the job description in `[0, 1]`.
    pub skill_match: f32,
    /// Skills from the fixed vocabulary detected in the resume.
    pub skills_found: Vec<&'static str>,
    /// Whether an education mention was detected.
    pub has_education: bool,
    /// Fraction of the expected section headers present, in `[0, 1]`.
    pub section_completeness: f32,
    /// Expected section headers missing from the resume.
    pub missing_sections: Vec<String>,
    /// Free-text advice for the applicant.
    pub advice: String,
}

/// Scores a resume against a job description.
///
/// The score blends content similarity and section completeness `0.6 / 0.4`
/// and is presented in `[0, 100]`. A resume too short for a similarity
/// vocabulary contributes `0.0` content — the structural signal and feedback
/// are still produced, the call never fails.
pub fn score_resume(resume: &str, job_description: &str) -> ResumeReport {
    let skill_match = match document_similarity(resume, job_description, RESUME_FEATURE_CAP) {
        Ok(similarity) => similarity,
        Err(reason) => {
            info!("resume similarity degraded to 0.0: {}", reason);
            0.0
        }
    };

    let resume_lower = resume.to_lowercase();
    let skills_found = SKILL_VOCABULARY
        .iter()
        .copied()
        .filter(|skill| resume_lower.contains(skill))
        .collect::<Vec<_>>();
    let has_education = EDUCATION_KEYWORDS
        .iter()
        .any(|keyword| resume_lower.contains(keyword));

    let missing_sections = SECTION_HEADERS
        .iter()
        .filter(|section| !resume_lower.contains(*section))
        .map(|section| capitalize(section))
        .collect::<Vec<_>>();
    let section_completeness =
        (SECTION_HEADERS.len() - missing_sections.len()) as f32 / SECTION_HEADERS.len() as f32;

    let score = round_to(
        100. * (CONTENT_WEIGHT * skill_match + STRUCTURE_WEIGHT * section_completeness),
        2,
    );

    let advice = format!(
        "Strengths: {}. Improvements: add more role-specific keywords, quantify \
         achievements, and highlight relevant projects with measurable impact.",
        if skills_found.is_empty() {
            "consider adding more skills".to_string()
        } else {
            format!("found {} skills", skills_found.len())
        },
    );

    info!("resume score calculated: {}", score);

    ResumeReport {
        score,
        skill_match,
        skills_found,
        has_education,
        section_completeness,
        missing_sections,
        advice,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().collect::<String>() + chars.as_str())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    const RESUME: &str = "Software Engineer | 5+ years experience
        Skills: Python, SQL, Docker, Kubernetes, AWS, Machine Learning
        Education: BS Computer Science
        Experience: developed ML models, built microservices, AWS cloud deployment
        Projects: fraud detection pipeline";

    const JOB: &str = "Senior Python developer with SQL and Docker experience wanted";

    #[test]
    fn test_score_resume_detects_skills_and_sections() {
        let report = score_resume(RESUME, JOB);

        assert!(report.skills_found.contains(&"python"));
        assert!(report.skills_found.contains(&"sql"));
        assert!(report.skills_found.contains(&"docker"));
        assert!(report.has_education);
        assert_eq!(report.section_completeness, 1.0);
        assert!(report.missing_sections.is_empty());
    }

    #[test]
    fn test_score_blends_similarity_and_structure() {
        let report = score_resume(RESUME, JOB);

        assert!((0. ..=100.).contains(&report.score));
        assert!(approx_eq!(
            f32,
            report.score,
            round_to(100. * (0.6 * report.skill_match + 0.4), 2),
            epsilon = 1e-3
        ));
    }

    #[test]
    fn test_score_resume_too_short_degrades_to_structure_only() {
        let report = score_resume("hi", "");

        assert_eq!(report.skill_match, 0.0);
        assert_eq!(report.score, 0.0);
        assert_eq!(
            report.missing_sections,
            ["Education", "Experience", "Skills", "Projects"],
        );
    }

    #[test]
    fn test_missing_sections_are_reported_capitalized() {
        let resume = "Experience: shipped a compiler. Skills: rust, llvm.";
        let report = score_resume(resume, "compiler engineer with llvm experience");

        assert_eq!(report.missing_sections, ["Education", "Projects"]);
        assert_eq!(report.section_completeness, 0.5);
    }

    #[test]
    fn test_advice_mentions_missing_skills() {
        let report = score_resume("hi", "");
        assert!(report.advice.contains("consider adding more skills"));

        let report = score_resume(RESUME, JOB);
        assert!(report.advice.contains("found"));
    }
}
