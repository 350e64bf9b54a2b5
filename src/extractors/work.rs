// src/extractors/work.rs

// --- Imports ---
use crate::extractors::common::{self, first_match, MatchRule};
use crate::extractors::patterns::{
    COMPANY_AFTER_SEP, COMPANY_AT, DATE_RANGE_MONTH, DATE_RANGE_YEAR, TITLE_LINE, WORK_ENTRY_MONTH,
    WORK_ENTRY_YEAR, WORK_TITLE_SEP,
};
use crate::resume::WorkExperienceEntry;

/// Extracts employment entries from the Experience section span.
///
/// Blocks are delimited by lines that look like the start of a new entry:
/// a capitalized title phrase followed by a separator, or a date line once
/// the running block already carries one (so the date line directly under a
/// title stays attached to it). Document order is preserved; no re-sorting.
pub fn extract(section: &str) -> Vec<WorkExperienceEntry> {
    if section.trim().is_empty() {
        return Vec::new();
    }

    split_blocks(section)
        .into_iter()
        .filter_map(parse_block)
        .enumerate()
        .map(|(idx, mut entry)| {
            entry.id = format!("job-{}", idx + 1);
            entry
        })
        .collect()
}

fn split_blocks(section: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_has_date = false;

    for line in section.lines() {
        let trimmed = line.trim();
        let starts_entry = WORK_TITLE_SEP.is_match(trimmed)
            || (current_has_date
                && (WORK_ENTRY_YEAR.is_match(trimmed) || WORK_ENTRY_MONTH.is_match(trimmed)));
        if starts_entry && !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
            current_has_date = false;
        }
        current.push(line);
        if DATE_RANGE_YEAR.is_match(line) || DATE_RANGE_MONTH.is_match(line) {
            current_has_date = true;
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

/// Parses one candidate block. Returns `None` for blocks that yield neither
/// a job title nor a company, so stray fragments never become empty entries.
fn parse_block(block: String) -> Option<WorkExperienceEntry> {
    let job_title = find_title(&block).unwrap_or_default();
    let company = find_company(&block).unwrap_or_default();
    if job_title.is_empty() && company.is_empty() {
        return None;
    }

    let location = common::find_location(&block).unwrap_or_default();
    let range = common::find_date_range(&block).unwrap_or_default();
    let description = bullet_lines(&block);

    Some(WorkExperienceEntry {
        id: String::new(),
        job_title,
        company,
        location,
        start_date: range.start,
        end_date: range.end,
        is_current: range.current,
        description,
    })
}

fn title_before_separator(block: &str) -> Option<String> {
    WORK_TITLE_SEP
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}

fn title_standalone_line(block: &str) -> Option<String> {
    TITLE_LINE.captures(block).map(|caps| caps[1].trim().to_string())
}

/// Title cascade: leading capitalized phrase before a separator, else the
/// first whole-line capitalized phrase.
fn find_title(block: &str) -> Option<String> {
    const RULES: &[MatchRule<String>] = &[title_before_separator, title_standalone_line];
    first_match(RULES, block)
}

fn company_after_keyword(block: &str) -> Option<String> {
    COMPANY_AT.captures(block).map(|caps| caps[1].trim().to_string())
}

fn company_after_separator(block: &str) -> Option<String> {
    COMPANY_AFTER_SEP
        .captures(block)
        .map(|caps| caps[1].trim().to_string())
}

/// Company cascade: phrase following `at`/`@`/`for`, else the segment after
/// the first separator on a `Title | Company [| …]` line.
fn find_company(block: &str) -> Option<String> {
    const RULES: &[MatchRule<String>] = &[company_after_keyword, company_after_separator];
    first_match(RULES, block)
}

/// Only bullet-marked lines contribute to the description, in original order.
fn bullet_lines(block: &str) -> String {
    block
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            trimmed.starts_with('•') || trimmed.starts_with('-')
        })
        .collect::<Vec<_>>()
        .join("\n")
}
