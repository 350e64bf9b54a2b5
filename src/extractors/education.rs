// src/extractors/education.rs

// --- Imports ---
use std::collections::BTreeSet;

use crate::extractors::common::{self, first_match, MatchRule};
use crate::extractors::patterns::{
    DEGREE_LABELED, DEGREE_OF_IN, DEGREE_SIMPLE, EDU_DESCRIPTION, GRADUATION_YEAR, SCHOOL_BEFORE_YEAR,
    SCHOOL_LINE, YEAR_TOKEN,
};
use crate::resume::EducationEntry;

/// Years assumed for a program when only a graduation year is present. The
/// back-computed start date is a deliberate approximation carried over from
/// the original heuristic, not a derived fact.
const ASSUMED_PROGRAM_YEARS: i32 = 4;

/// Extracts education entries from the Education section span.
///
/// A capitalized line opens a new block only once the running block has seen
/// a year token, so one entry's degree line, school line, and date line stay
/// together. Blocks yielding neither a school nor a degree are dropped.
pub fn extract(section: &str) -> Vec<EducationEntry> {
    if section.trim().is_empty() {
        return Vec::new();
    }

    split_blocks(section)
        .into_iter()
        .filter_map(parse_block)
        .enumerate()
        .map(|(idx, mut entry)| {
            entry.id = format!("edu-{}", idx + 1);
            entry
        })
        .collect()
}

fn split_blocks(section: &str) -> Vec<String> {
    let mut blocks: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut seen_year = false;

    for line in section.lines() {
        let trimmed = line.trim();
        let opens_block = trimmed
            .chars()
            .next()
            .map_or(false, |c| c.is_ascii_uppercase());
        if opens_block && seen_year && !current.is_empty() {
            blocks.push(current.join("\n"));
            current.clear();
            seen_year = false;
        }
        if trimmed.is_empty() && current.is_empty() {
            continue;
        }
        current.push(line);
        if YEAR_TOKEN.is_match(line) {
            seen_year = true;
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks.retain(|block| !block.trim().is_empty());
    blocks
}

fn parse_block(block: String) -> Option<EducationEntry> {
    let (degree, field_of_study) = find_degree(&block).unwrap_or_default();
    let school = find_school(&block).unwrap_or_default();
    if school.is_empty() && degree.is_empty() {
        return None;
    }

    let location = common::find_location(&block).unwrap_or_default();
    let (start_date, end_date, is_current) = find_dates(&block);
    let description = EDU_DESCRIPTION
        .captures(&block)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default();

    Some(EducationEntry {
        id: String::new(),
        school,
        degree,
        field_of_study,
        location,
        start_date,
        end_date,
        is_current,
        description,
    })
}

fn degree_full_phrase(block: &str) -> Option<(String, String)> {
    DEGREE_OF_IN
        .captures(block)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
}

fn degree_two_part(block: &str) -> Option<(String, String)> {
    DEGREE_SIMPLE
        .captures(block)
        .map(|caps| (caps[1].trim().to_string(), caps[2].trim().to_string()))
}

fn degree_labeled(block: &str) -> Option<(String, String)> {
    // Only one group captures; it goes to degree and the field stays empty.
    DEGREE_LABELED
        .captures(block)
        .map(|caps| (caps[1].trim().to_string(), String::new()))
}

/// Degree cascade: full `X of Y in Z` phrase, then the looser `X of|in Y`
/// form, then a `… Degree|Diploma|Certificate` label.
fn find_degree(block: &str) -> Option<(String, String)> {
    const RULES: &[MatchRule<(String, String)>] = &[degree_full_phrase, degree_two_part, degree_labeled];
    first_match(RULES, block)
}

fn is_degree_line(line: &str) -> bool {
    DEGREE_OF_IN.is_match(line) || DEGREE_SIMPLE.is_match(line) || DEGREE_LABELED.is_match(line)
}

/// School: the first standalone letters-only line that is not the degree
/// line, else the text preceding a year or dash token.
fn find_school(block: &str) -> Option<String> {
    let standalone = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_degree_line(line))
        .find(|line| SCHOOL_LINE.is_match(line))
        .map(str::to_string);
    if standalone.is_some() {
        return standalone;
    }
    block
        .lines()
        .filter(|line| !is_degree_line(line))
        .find_map(|line| SCHOOL_BEFORE_YEAR.captures(line))
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Dates: the shared range cascade first; failing that, a lone graduation
/// year (labelled, or the block's only year token) sets the end date and
/// back-computes the start as `end − ASSUMED_PROGRAM_YEARS`.
fn find_dates(block: &str) -> (String, String, bool) {
    if let Some(range) = common::find_date_range(block) {
        return (range.start, range.end, range.current);
    }
    if let Some(year) = graduation_year(block) {
        return ((year - ASSUMED_PROGRAM_YEARS).to_string(), year.to_string(), false);
    }
    (String::new(), String::new(), false)
}

fn graduation_year(block: &str) -> Option<i32> {
    if let Some(caps) = GRADUATION_YEAR.captures(block) {
        return caps[1].parse().ok();
    }
    let years: BTreeSet<&str> = YEAR_TOKEN
        .captures_iter(block)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect();
    if years.len() == 1 {
        years.iter().next().and_then(|y| y.parse().ok())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_school_and_range_in_one_entry() {
        let section = "Bachelor of Science in Computer Science\nUC Berkeley\n2014 - 2018\n";
        let entries = extract(section);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.id, "edu-1");
        assert_eq!(entry.degree, "Bachelor of Science");
        assert_eq!(entry.field_of_study, "Computer Science");
        assert_eq!(entry.school, "UC Berkeley");
        assert_eq!(entry.start_date, "2014");
        assert_eq!(entry.end_date, "2018");
        assert!(!entry.is_current);
    }

    #[test]
    fn test_two_entries_split_after_year_seen() {
        let section = "Bachelor of Science in Computer Science\n\
            UC Berkeley\n\
            2014 - 2018\n\
            Master of Science in Data Engineering\n\
            Stanford University\n\
            2018 - 2020\n";
        let entries = extract(section);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].school, "UC Berkeley");
        assert_eq!(entries[1].id, "edu-2");
        assert_eq!(entries[1].degree, "Master of Science");
        assert_eq!(entries[1].school, "Stanford University");
    }

    #[test]
    fn test_lone_graduation_year_back_computes_start() {
        let section = "Bachelor of Arts in History\nOberlin College\nGraduated: May 2018\n";
        let entries = extract(section);
        assert_eq!(entries[0].end_date, "2018");
        assert_eq!(entries[0].start_date, "2014");
        assert!(!entries[0].is_current);
    }

    #[test]
    fn test_single_bare_year_treated_as_graduation() {
        let section = "Associate Degree\nCity College\nClass of 2021\n";
        let entries = extract(section);
        assert_eq!(entries[0].degree, "Associate");
        assert_eq!(entries[0].end_date, "2021");
        assert_eq!(entries[0].start_date, "2017");
    }

    #[test]
    fn test_labeled_description_captured() {
        let section = "Bachelor of Science in Computer Science\nUC Berkeley\n2014 - 2018\nCoursework: Data Structures, Algorithms\n";
        let entries = extract(section);
        assert_eq!(entries[0].description, "Data Structures, Algorithms");
    }

    #[test]
    fn test_block_without_school_or_degree_dropped() {
        assert!(extract("2001 - 2005\n").is_empty());
    }

    #[test]
    fn test_current_studies() {
        let section = "Master of Science in Robotics\nETH Zurich\n2023 - Present\n";
        let entries = extract(section);
        assert!(entries[0].is_current);
        assert_eq!(entries[0].end_date, "");
    }

    #[test]
    fn test_empty_section_yields_no_entries() {
        assert!(extract("").is_empty());
    }
}
