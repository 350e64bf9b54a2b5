// src/resume/mod.rs
pub mod models;

// Re-export the record types used across the extraction pipeline and scorer
pub use models::{
    AchievementEntry, EducationEntry, ExtractedResume, PersonalInfo, WorkExperienceEntry,
};
