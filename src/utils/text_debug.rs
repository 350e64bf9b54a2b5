// src/utils/text_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extractors::{recognize_heading, Heading};
use crate::utils::error::AppError;

/// Saves an annotated copy of the document with every recognized section
/// heading marked, so failed extractions can be diagnosed by eye.
pub fn save_annotated_text(text: &str, filename: &Path) -> Result<(), AppError> {
    let mut file = File::create(filename)?;

    let mut annotated = String::new();
    let mut heading_count = 0usize;
    for line in text.lines() {
        match recognize_heading(line) {
            Some(Heading::Section(kind)) => {
                heading_count += 1;
                annotated.push_str(&format!(">>> [{}] {}\n", kind.as_str(), line));
            }
            Some(Heading::Boundary) => {
                heading_count += 1;
                annotated.push_str(&format!(">>> [boundary] {}\n", line));
            }
            None => {
                annotated.push_str(line);
                annotated.push('\n');
            }
        }
    }
    annotated.push_str(&format!("\n--- {} recognized heading(s) ---\n", heading_count));

    file.write_all(annotated.as_bytes())?;

    tracing::info!("Saved annotated document to {}", filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotated_dump_marks_headings() {
        let text = "Alex Johnson\nEXPERIENCE\nSenior Engineer | Acme\nPROJECTS\n";
        let path = std::env::temp_dir().join("resume_extractor_annotated_test.txt");
        save_annotated_text(text, &path).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.contains(">>> [Experience] EXPERIENCE"));
        assert!(saved.contains(">>> [boundary] PROJECTS"));
        assert!(saved.contains("Alex Johnson\n"));
        assert!(saved.contains("2 recognized heading(s)"));

        let _ = std::fs::remove_file(&path);
    }
}
