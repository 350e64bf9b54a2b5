// src/extractors/patterns.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::Regex;

// Process-wide compiled pattern tables. Everything here is initialized once
// and shared by all extraction calls; no pattern is compiled per document.

// --- Section headings ---

/// Recognizes a section heading on an already-trimmed line: a known keyword
/// at line start, an optional colon, and at most a short plain-word tail
/// ("WORK EXPERIENCE", "Skills:", "CERTIFICATIONS AND AWARDS"). Lines with
/// digits or separators never qualify.
pub static SECTION_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(summary|profile|objective|about|experience|work|employment|education|skills|certifications|achievements|awards|honors|projects)\b\s*:?\s*([A-Za-z&/ ]{0,40})?$",
    )
    .expect("Failed to compile SECTION_HEADING")
});

// --- Personal info ---

/// A line consisting solely of a capitalized word sequence; the name
/// heuristic ("the name is the first heading-like line").
pub static NAME_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z -]+$").expect("Failed to compile NAME_LINE"));

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._-]+@[A-Za-z0-9._-]+\.[A-Za-z0-9._-]+").expect("Failed to compile EMAIL")
});

pub static PHONE_US_PAREN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d{3}\)\s*\d{3}-\d{4}").expect("Failed to compile PHONE_US_PAREN"));

pub static PHONE_US_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}-\d{3}-\d{4}\b").expect("Failed to compile PHONE_US_DASH"));

pub static PHONE_INTL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}[ -]?\(?\d{3}\)?[ -]?\d{3}[ -]?\d{4}").expect("Failed to compile PHONE_INTL")
});

/// `City, ST` with a real two-letter state code.
pub static LOCATION_CITY_STATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z ]*,[ \t]*[A-Z]{2}\b").expect("Failed to compile LOCATION_CITY_STATE")
});

/// Generic `City, Region`. Weakest rule in the engine; false-positives on
/// unrelated comma-separated phrases are expected and left to human review.
pub static LOCATION_CITY_REGION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z][A-Za-z ]*,[ \t]*[A-Za-z][A-Za-z ]*").expect("Failed to compile LOCATION_CITY_REGION")
});

pub static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/[A-Za-z0-9_-]+").expect("Failed to compile LINKEDIN")
});

/// Bare or schemed URL-ish token. Matches email domains too; the caller
/// treats the field as a suggestion.
pub static WEBSITE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:https?://)?[\w.-]+\.[a-z]{2,}(?:/[\w./-]*)?").expect("Failed to compile WEBSITE")
});

// --- Work history ---

/// Capitalized title phrase followed by a separator; marks an entry-start
/// line and captures the job title.
pub static WORK_TITLE_SEP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Za-z ]+?)[ \t]*[|,-]").expect("Failed to compile WORK_TITLE_SEP")
});

/// Entry-start line: a bare `YYYY - YYYY|Present` range at line start.
pub static WORK_ENTRY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d{4}\s*-\s*(?:\d{4}|present)").expect("Failed to compile WORK_ENTRY_YEAR")
});

/// Entry-start line: three-letter month abbreviation plus year at line start.
pub static WORK_ENTRY_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{4}")
        .expect("Failed to compile WORK_ENTRY_MONTH")
});

/// Whole-line capitalized phrase, the job-title fallback when the first line
/// carries no separator.
pub static TITLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Z][A-Za-z ]+)[ \t]*$").expect("Failed to compile TITLE_LINE")
});

/// Company as the phrase following `at`/`for`/`@`, up to a separator or end
/// of line.
pub static COMPANY_AT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?im)(?:\b(?:at|for)|@)[ \t]+([A-Za-z0-9][A-Za-z0-9 &.]*?)[ \t]*(?:[|,-]|$)")
        .expect("Failed to compile COMPANY_AT")
});

/// Company as the segment after the first separator on a
/// `Title | Company [| Location]` line.
pub static COMPANY_AFTER_SEP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*[A-Z][A-Za-z ]+[ \t]*[|,-][ \t]*([A-Za-z0-9][A-Za-z0-9 &.]*?)[ \t]*(?:[|,-].*)?$")
        .expect("Failed to compile COMPANY_AFTER_SEP")
});

/// Bare `YYYY - YYYY|Present` range anywhere in a block.
pub static DATE_RANGE_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(\d{4})\s*-\s*(\d{4}|present)\b").expect("Failed to compile DATE_RANGE_YEAR")
});

/// `Mon YYYY - Mon YYYY|Present` range anywhere in a block.
pub static DATE_RANGE_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{4})\s*-\s*(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{4}|present)\b",
    )
    .expect("Failed to compile DATE_RANGE_MONTH")
});

// --- Education ---

/// `<Degree> of <Degree> in <Field>`, e.g. "Bachelor of Science in Computer
/// Science" -> ("Bachelor of Science", "Computer Science").
pub static DEGREE_OF_IN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([A-Za-z]+ of [A-Za-z]+)[ \t]+in[ \t]+([A-Za-z][A-Za-z ,]*)")
        .expect("Failed to compile DEGREE_OF_IN")
});

/// `<Degree> of|in <Field>`, the looser two-group form.
pub static DEGREE_SIMPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([A-Za-z]+)[ \t]+(?:of|in)[ \t]+([A-Za-z][A-Za-z ,]*)")
        .expect("Failed to compile DEGREE_SIMPLE")
});

/// `<Phrase> Degree|Diploma|Certificate`; only the phrase is captured and it
/// is assigned to degree with the field left empty.
pub static DEGREE_LABELED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b([A-Za-z][A-Za-z ,]*?)[ \t]+(?:degree|diploma|certificate)\b")
        .expect("Failed to compile DEGREE_LABELED")
});

/// A standalone letters-only line, the school-name heuristic.
pub static SCHOOL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z &,.']*$").expect("Failed to compile SCHOOL_LINE")
});

/// School as the text preceding a year or dash token on the same line.
pub static SCHOOL_BEFORE_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t]*([A-Za-z][A-Za-z &,.']*?)[ \t]*(?:\d{4}|-)").expect("Failed to compile SCHOOL_BEFORE_YEAR")
});

/// `Graduated:`/`Graduation:` label with an optional month and a year.
pub static GRADUATION_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:graduated|graduation)\s*:?\s*(?:(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+)?(\d{4})",
    )
    .expect("Failed to compile GRADUATION_YEAR")
});

/// Any plausible calendar year token.
pub static YEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").expect("Failed to compile YEAR_TOKEN"));

/// Labeled education description, captured up to a blank line.
pub static EDU_DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)\b(?:coursework|courses|activities|achievements)\s*:\s*(.+?)(?:\n\s*\n|\z)")
        .expect("Failed to compile EDU_DESCRIPTION")
});

// --- Skills ---

/// Bullet or hyphen markers used as list delimiters.
pub static SKILL_MARKER_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[•-]").expect("Failed to compile SKILL_MARKER_SPLIT"));

/// Table-like row delimiters: runs of 2+ spaces, tabs, or pipes.
pub static TABLE_ROW_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}|\t|\|").expect("Failed to compile TABLE_ROW_SPLIT"));

// --- Achievements ---

/// First title/description separator inside an item: dash, en dash, colon,
/// or a line break.
pub static ACHIEVEMENT_SEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-–:]|\n").expect("Failed to compile ACHIEVEMENT_SEP"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_heading_accepts_common_forms() {
        for line in ["EXPERIENCE", "Work Experience", "SKILLS:", "Education", "CERTIFICATIONS AND AWARDS"] {
            assert!(SECTION_HEADING.is_match(line), "expected heading: {line}");
        }
    }

    #[test]
    fn test_section_heading_rejects_body_lines() {
        for line in [
            "Work Stream Lead | Acme",
            "Education in progress since 2020",
            "• Led a team of 5",
            "Senior Engineer",
        ] {
            assert!(!SECTION_HEADING.is_match(line), "unexpected heading: {line}");
        }
    }

    #[test]
    fn test_date_range_year_captures_present() {
        let caps = DATE_RANGE_YEAR.captures("2020 - Present").unwrap();
        assert_eq!(&caps[1], "2020");
        assert_eq!(&caps[2], "Present");
    }

    #[test]
    fn test_date_range_month_skips_bare_year_form() {
        let text = "Jun 2018 - May 2020";
        assert!(DATE_RANGE_YEAR.captures(text).is_none());
        let caps = DATE_RANGE_MONTH.captures(text).unwrap();
        assert_eq!(&caps[1], "2018");
        assert_eq!(&caps[2], "2020");
    }

    #[test]
    fn test_company_after_sep_takes_second_segment() {
        let caps = COMPANY_AFTER_SEP.captures("Senior Engineer | Acme Corp").unwrap();
        assert_eq!(&caps[1], "Acme Corp");
        let caps = COMPANY_AFTER_SEP
            .captures("Software Developer, WebSolutions Co., Oakland, CA")
            .unwrap();
        assert_eq!(&caps[1], "WebSolutions Co.");
    }

    #[test]
    fn test_degree_of_in_keeps_full_degree_phrase() {
        let caps = DEGREE_OF_IN.captures("Bachelor of Science in Computer Science").unwrap();
        assert_eq!(&caps[1], "Bachelor of Science");
        assert_eq!(&caps[2], "Computer Science");
    }
}
