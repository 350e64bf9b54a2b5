// src/intake/reader.rs
use std::path::Path;

use crate::utils::error::IntakeError;

/// Upstream upload ceiling. The upload layer accepts PDF/DOC/DOCX up to
/// 5 MB, so the decoded text handed to this engine is never larger; the same
/// limit is enforced here to bound worst-case regex evaluation.
pub const MAX_DOCUMENT_BYTES: u64 = 5 * 1024 * 1024;

/// The decoded plain-text content of an uploaded resume.
///
/// Binary decoding (PDF/DOC/DOCX to text) happens upstream; this reader only
/// performs the one awaitable file read of the engine's lifecycle. Decoding
/// is lossy on invalid UTF-8 rather than failing: degraded input is the
/// expected case and the line-based heuristics downstream tolerate it.
#[derive(Debug, Clone)]
pub struct RawDocument {
    text: String,
}

impl RawDocument {
    /// Wraps already-decoded text, e.g. text arriving from an upload handler.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Reads a decoded resume text file from disk.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IntakeError> {
        let path = path.as_ref();
        let metadata = tokio::fs::metadata(path).await?;
        if metadata.len() > MAX_DOCUMENT_BYTES {
            return Err(IntakeError::TooLarge {
                size: metadata.len(),
                limit: MAX_DOCUMENT_BYTES,
            });
        }

        let bytes = tokio::fs::read(path).await?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        tracing::debug!("Read {} bytes of document text from {}", text.len(), path.display());

        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_roundtrip() {
        let path = std::env::temp_dir().join("resume_extractor_intake_test.txt");
        std::fs::write(&path, "Alex Johnson\nSKILLS\nRust\n").unwrap();

        let doc = tokio_test::block_on(RawDocument::from_file(&path)).unwrap();
        assert_eq!(doc.text(), "Alex Johnson\nSKILLS\nRust\n");
        assert!(!doc.is_empty());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let path = std::env::temp_dir().join("resume_extractor_intake_lossy_test.txt");
        std::fs::write(&path, [0x41u8, 0xFF, 0x42]).unwrap();

        let doc = tokio_test::block_on(RawDocument::from_file(&path)).unwrap();
        assert!(doc.text().starts_with('A'));
        assert!(doc.text().ends_with('B'));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = tokio_test::block_on(RawDocument::from_file("/no/such/file.txt"));
        assert!(matches!(result, Err(IntakeError::Io(_))));
    }

    #[test]
    fn test_empty_file_is_not_an_error() {
        let path = std::env::temp_dir().join("resume_extractor_intake_empty_test.txt");
        std::fs::write(&path, "").unwrap();

        let doc = tokio_test::block_on(RawDocument::from_file(&path)).unwrap();
        assert!(doc.is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
