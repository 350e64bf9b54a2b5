// src/extractors/skills.rs

// --- Imports ---
use crate::extractors::patterns::{SKILL_MARKER_SPLIT, TABLE_ROW_SPLIT};

/// Header-echo words that leak into skill lists ("Technical Skills:" etc.).
const STOPLIST: &[&str] = &["skills", "technical", "soft", "proficient", "familiar", "experienced"];

/// Extracts the skill list from the Skills section span.
///
/// Three mutually exclusive strategies, tried in fixed priority order; the
/// first applicable one is used exclusively:
/// 1. comma-separated list,
/// 2. bullet- or hyphen-marked list,
/// 3. line-wise, splitting table-like rows (2+ spaces, tabs, pipes) when a
///    line carries more than one capitalized word.
/// Duplicates are kept; deduplication is the caller's business.
pub fn extract(section: &str) -> Vec<String> {
    let text = section.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let raw: Vec<String> = if text.contains(',') {
        text.split(',').map(str::to_string).collect()
    } else if text.contains('•') || text.contains('-') {
        SKILL_MARKER_SPLIT.split(text).map(str::to_string).collect()
    } else {
        text.lines().flat_map(split_table_row).collect()
    };

    raw.into_iter()
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty() && !is_stopword(skill))
        .collect()
}

/// A line with more than one capitalized word is treated as a table-like row
/// of skills; otherwise the whole line is one skill.
fn split_table_row(line: &str) -> Vec<String> {
    let capitalized = line
        .split_whitespace()
        .filter(|word| word.chars().next().map_or(false, |c| c.is_ascii_uppercase()))
        .count();
    if capitalized > 1 {
        TABLE_ROW_SPLIT.split(line).map(str::to_string).collect()
    } else {
        vec![line.to_string()]
    }
}

fn is_stopword(skill: &str) -> bool {
    let lower = skill.to_lowercase();
    STOPLIST.iter().any(|word| *word == lower)
}
