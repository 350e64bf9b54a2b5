// src/resume/models.rs
use serde::{Deserialize, Serialize};

/// Contact and header details pulled from the whole document.
///
/// Every field is optional in practice: an empty string means the matching
/// rule found nothing. Wire names are camelCase so the output composes with
/// the builder form state without translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub website_url: String,
    pub summary: String,
}

/// One employment entry from the experience section.
///
/// `id` is an ordinal local to a single extraction run (`job-1`, `job-2`, …),
/// not a durable identifier. Invariant: `is_current == true` implies
/// `end_date` is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceEntry {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

/// One education entry. Same `id` and `is_current`/`end_date` conventions as
/// [`WorkExperienceEntry`] (`edu-1`, `edu-2`, …).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

/// A certification, award, or honor. `title` is always non-empty; items
/// without a recoverable title are dropped during extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementEntry {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Aggregate extraction result. Structurally identical to a manually
/// authored resume record, so the completeness scorer consumes both without
/// caring where the data came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedResume {
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<WorkExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub achievements: Vec<AchievementEntry>,
}

impl ExtractedResume {
    /// True when no rule produced anything at all.
    pub fn is_empty(&self) -> bool {
        self.personal_info == PersonalInfo::default()
            && self.work_experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.achievements.is_empty()
    }
}
