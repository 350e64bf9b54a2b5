// src/extractors/achievements.rs

// --- Imports ---
use crate::extractors::patterns::ACHIEVEMENT_SEP;
use crate::resume::AchievementEntry;

/// Extracts certifications, awards, and honors from the Achievements span.
///
/// Items are accumulated line-wise: a bullet marker or a capitalized line
/// start opens a new item, a blank line closes the running one, and anything
/// else continues it. Each item is split at the first dash, en dash, colon,
/// or line break into title and description; items with no recoverable title
/// are dropped.
pub fn extract(section: &str) -> Vec<AchievementEntry> {
    if section.trim().is_empty() {
        return Vec::new();
    }

    split_items(section)
        .into_iter()
        .filter_map(parse_item)
        .enumerate()
        .map(|(idx, mut entry)| {
            entry.id = format!("achievement-{}", idx + 1);
            entry
        })
        .collect()
}

fn split_items(section: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in section.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush(&mut items, &mut current);
            continue;
        }
        let stripped = trimmed.trim_start_matches(|c| c == '•' || c == '-').trim_start();
        let is_bullet = stripped.len() != trimmed.len();
        let opens_item = is_bullet
            || trimmed
                .chars()
                .next()
                .map_or(false, |c| c.is_ascii_uppercase());
        if opens_item {
            flush(&mut items, &mut current);
        }
        current.push(if is_bullet { stripped } else { trimmed });
    }
    flush(&mut items, &mut current);
    items
}

fn flush(items: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        items.push(current.join("\n"));
        current.clear();
    }
}

fn parse_item(item: String) -> Option<AchievementEntry> {
    let (title, description) = match ACHIEVEMENT_SEP.find(&item) {
        Some(sep) => (
            item[..sep.start()].trim().to_string(),
            item[sep.end()..].trim().replace('\n', " "),
        ),
        None => (item.trim().to_string(), String::new()),
    };
    if title.is_empty() {
        return None;
    }
    Some(AchievementEntry {
        id: String::new(),
        title,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulleted_items_with_dash_separator() {
        let section = "• AWS Certified Solutions Architect - Earned AWS certification\n\
            • Open Source Contributor: Active contributor to a React library\n";
        let entries = extract(section);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "achievement-1");
        assert_eq!(entries[0].title, "AWS Certified Solutions Architect");
        assert_eq!(entries[0].description, "Earned AWS certification");
        assert_eq!(entries[1].title, "Open Source Contributor");
        assert_eq!(entries[1].description, "Active contributor to a React library");
    }

    #[test]
    fn test_item_without_separator_is_title_only() {
        let entries = extract("Dean's List\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Dean's List");
        assert_eq!(entries[0].description, "");
    }

    #[test]
    fn test_continuation_line_becomes_description() {
        let section = "Employee of the Year\nawarded for sustained client impact\n";
        let entries = extract(section);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Employee of the Year");
        assert_eq!(entries[0].description, "awarded for sustained client impact");
    }

    #[test]
    fn test_blank_lines_separate_items() {
        let section = "First Place, Hackathon\n\nPatent Holder\n";
        let entries = extract(section);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_item_with_empty_title_dropped() {
        // A leading separator leaves nothing before it to use as a title.
        let entries = extract("- : stray description\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_empty_section() {
        assert!(extract("").is_empty());
    }
}
