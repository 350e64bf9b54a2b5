// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::resume::ExtractedResume;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Directory holding everything produced for one document.
    pub fn document_dir(&self, stem: &str) -> PathBuf {
        self.base_dir.join(stem)
    }

    /// Saves the extracted resume as JSON, pretty-printed on request.
    pub fn save_resume(
        &self,
        stem: &str,
        resume: &ExtractedResume,
        pretty: bool,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(stem);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join(format!("{stem}_extracted.json"));

        let json = if pretty {
            serde_json::to_string_pretty(resume)
        } else {
            serde_json::to_string(resume)
        }
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Saved extracted resume to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves a metadata sidecar: source file, per-section counts, the
    /// completeness score, and an extraction timestamp.
    pub fn save_metadata(
        &self,
        stem: &str,
        source: &Path,
        resume: &ExtractedResume,
        score: u32,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(stem);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join(format!("{stem}_extracted_meta.json"));

        let metadata = serde_json::json!({
            "sourceFile": source.display().to_string(),
            "workExperienceCount": resume.work_experience.len(),
            "educationCount": resume.education.len(),
            "skillCount": resume.skills.len(),
            "achievementCount": resume.achievements.len(),
            "completenessScore": score,
            "extractionTimestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
