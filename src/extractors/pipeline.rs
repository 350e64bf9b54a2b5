// src/extractors/pipeline.rs

// --- Imports ---
use crate::extractors::sections::{SectionKind, SectionLocator};
use crate::extractors::{achievements, education, personal, skills, work};
use crate::resume::ExtractedResume;

/// Runs the full extraction pipeline over decoded resume text.
///
/// Best-effort by construction: there is no failure path. Rules that match
/// nothing leave their fields empty, unusable fragments are dropped, and the
/// result is always a well-formed [`ExtractedResume`] meant as a starting
/// point for human review. The call is a pure function of its input: no
/// shared state, identical output for identical text.
pub fn extract(raw_text: &str) -> ExtractedResume {
    let spans = SectionLocator::partition(raw_text);
    tracing::debug!("Partitioned document into {} section span(s)", spans.len());

    let summary = SectionLocator::section(&spans, SectionKind::Summary);
    let resume = ExtractedResume {
        personal_info: personal::extract(raw_text, summary),
        work_experience: work::extract(SectionLocator::section(&spans, SectionKind::Experience)),
        education: education::extract(SectionLocator::section(&spans, SectionKind::Education)),
        skills: skills::extract(SectionLocator::section(&spans, SectionKind::Skills)),
        achievements: achievements::extract(SectionLocator::section(&spans, SectionKind::Achievements)),
    };

    tracing::debug!(
        "Extraction produced {} work, {} education, {} skill, {} achievement item(s)",
        resume.work_experience.len(),
        resume.education.len(),
        resume.skills.len(),
        resume.achievements.len(),
    );
    resume
}
