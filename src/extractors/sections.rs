// src/extractors/sections.rs

// --- Imports ---
use crate::extractors::patterns::SECTION_HEADING;

/// The canonical resume sections a span can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Achievements,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary",
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Achievements => "Achievements",
        }
    }
}

/// A recognized heading line. `Boundary` headings (currently `PROJECTS`)
/// terminate the preceding span but feed no extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Section(SectionKind),
    Boundary,
}

/// Classifies a line as a section heading, case-insensitively, with the
/// keyword matched line-leading. Returns `None` for ordinary body lines.
pub fn recognize_heading(line: &str) -> Option<Heading> {
    let caps = SECTION_HEADING.captures(line.trim())?;
    let kind = match caps[1].to_ascii_lowercase().as_str() {
        "summary" | "profile" | "objective" | "about" => Some(SectionKind::Summary),
        "experience" | "work" | "employment" => Some(SectionKind::Experience),
        "education" => Some(SectionKind::Education),
        "skills" => Some(SectionKind::Skills),
        "certifications" | "achievements" | "awards" | "honors" => Some(SectionKind::Achievements),
        // "projects" and anything else the heading pattern admits
        _ => None,
    };
    Some(kind.map_or(Heading::Boundary, Heading::Section))
}

/// One contiguous text span belonging to a named section.
#[derive(Debug, Clone)]
pub struct SectionSpan {
    pub kind: SectionKind,
    pub text: String,
}

/// Partitions a document into section spans.
///
/// The document is walked once, in order; each line belongs to at most one
/// span, so no extractor ever sees text another extractor already consumed.
/// The first heading of a kind wins: a repeated heading still terminates the
/// span before it, but the region it opens is assigned to nothing. Text
/// before the first recognized heading belongs to no span (personal details
/// are scanned from the whole document separately).
pub struct SectionLocator;

impl SectionLocator {
    pub fn partition(text: &str) -> Vec<SectionSpan> {
        let mut spans: Vec<SectionSpan> = Vec::new();
        let mut open: Option<SectionKind> = None;
        let mut buf: Vec<&str> = Vec::new();

        for line in text.lines() {
            match recognize_heading(line) {
                Some(heading) => {
                    Self::close(&mut spans, open.take(), &mut buf);
                    open = match heading {
                        Heading::Section(kind) if !spans.iter().any(|s| s.kind == kind) => Some(kind),
                        _ => None,
                    };
                }
                None => buf.push(line),
            }
        }
        Self::close(&mut spans, open, &mut buf);
        spans
    }

    fn close(spans: &mut Vec<SectionSpan>, open: Option<SectionKind>, buf: &mut Vec<&str>) {
        if let Some(kind) = open {
            spans.push(SectionSpan {
                kind,
                text: buf.join("\n"),
            });
        }
        buf.clear();
    }

    /// The span text for a kind, or `""` when the section was not found.
    pub fn section<'a>(spans: &'a [SectionSpan], kind: SectionKind) -> &'a str {
        spans
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.text.as_str())
            .unwrap_or("")
    }
}
