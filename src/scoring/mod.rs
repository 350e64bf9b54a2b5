// src/scoring/mod.rs
use crate::resume::ExtractedResume;

// Additive weights and per-section caps for the completeness score.
const FULL_NAME_POINTS: u32 = 10;
const EMAIL_POINTS: u32 = 5;
const PHONE_POINTS: u32 = 5;
const SUMMARY_POINTS: u32 = 10;
const WORK_POINTS_EACH: u32 = 10;
const WORK_CAP: u32 = 30;
const EDUCATION_POINTS_EACH: u32 = 5;
const EDUCATION_CAP: u32 = 15;
const SKILLS_CAP: u32 = 20;
const ACHIEVEMENT_CAP: u32 = 10;

/// Computes the ATS-style completeness score for a resume record.
///
/// Pure and deterministic: safe to call from any thread, cheap enough to
/// recompute on every field edit, and agnostic to whether the record was
/// typed by hand or auto-extracted. Each contribution is capped individually
/// but the sum is not: with every cap saturated and all personal-info
/// bonuses present the score reaches 105, above the nominal "/100"
/// presentation. Clamping is deliberately left to the presentation layer.
/// The achievements term is worth 2.5 points each, computed in integer
/// arithmetic (truncating) and capped at 10.
pub fn completeness_score(resume: &ExtractedResume) -> u32 {
    let mut score = 0;

    if !resume.personal_info.full_name.is_empty() {
        score += FULL_NAME_POINTS;
    }
    if !resume.personal_info.email.is_empty() {
        score += EMAIL_POINTS;
    }
    if !resume.personal_info.phone.is_empty() {
        score += PHONE_POINTS;
    }
    if !resume.personal_info.summary.is_empty() {
        score += SUMMARY_POINTS;
    }

    score += (resume.work_experience.len() as u32 * WORK_POINTS_EACH).min(WORK_CAP);
    score += (resume.education.len() as u32 * EDUCATION_POINTS_EACH).min(EDUCATION_CAP);
    score += (resume.skills.len() as u32).min(SKILLS_CAP);
    score += (resume.achievements.len() as u32 * 5 / 2).min(ACHIEVEMENT_CAP);

    score
}
