// src/extractors/personal.rs

// --- Imports ---
use crate::extractors::common::{self, first_match, MatchRule};
use crate::extractors::patterns::{EMAIL, LINKEDIN, NAME_LINE, PHONE_INTL, PHONE_US_DASH, PHONE_US_PAREN, WEBSITE};
use crate::extractors::sections::recognize_heading;
use crate::resume::PersonalInfo;

/// Extracts contact and header details from the whole document.
///
/// Every rule is independent and order-independent: a rule that matches
/// nothing leaves its field empty and never blocks another rule. The summary
/// comes from the Summary section span located by the caller, since personal
/// details are the one group not expected under a labeled heading.
pub fn extract(text: &str, summary_section: &str) -> PersonalInfo {
    PersonalInfo {
        full_name: find_full_name(text),
        email: find_first(&EMAIL, text),
        phone: find_phone(text).unwrap_or_default(),
        location: common::find_location(text).unwrap_or_default(),
        linkedin_url: find_first(&LINKEDIN, text),
        website_url: find_website(text),
        summary: summary_section.trim().to_string(),
    }
}

fn find_first(pattern: &regex::Regex, text: &str) -> String {
    pattern.find(text).map(|m| m.as_str().to_string()).unwrap_or_default()
}

/// First line consisting solely of a capitalized word sequence, skipping
/// recognized section headings.
fn find_full_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && recognize_heading(line).is_none())
        .find(|line| NAME_LINE.is_match(line))
        .unwrap_or_default()
        .to_string()
}

fn phone_us_paren(text: &str) -> Option<String> {
    PHONE_US_PAREN.find(text).map(|m| m.as_str().to_string())
}

fn phone_us_dash(text: &str) -> Option<String> {
    PHONE_US_DASH.find(text).map(|m| m.as_str().to_string())
}

fn phone_international(text: &str) -> Option<String> {
    PHONE_INTL.find(text).map(|m| m.as_str().to_string())
}

/// Phone cascade: `(NNN) NNN-NNNN`, then `NNN-NNN-NNNN`, then the permissive
/// international digit-group form.
fn find_phone(text: &str) -> Option<String> {
    const RULES: &[MatchRule<String>] = &[phone_us_paren, phone_us_dash, phone_international];
    first_match(RULES, text)
}

/// First URL-ish token that is not the LinkedIn match.
fn find_website(text: &str) -> String {
    WEBSITE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|m| !m.to_ascii_lowercase().contains("linkedin"))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Alex Johnson\n\
        San Francisco, CA\n\
        (555) 123-4567\n\
        alex.johnson@example.com\n\
        linkedin.com/in/alexjohnson\n";

    #[test]
    fn test_full_header_extraction() {
        let info = extract(HEADER, "");
        assert_eq!(info.full_name, "Alex Johnson");
        assert_eq!(info.email, "alex.johnson@example.com");
        assert_eq!(info.phone, "(555) 123-4567");
        assert_eq!(info.location, "San Francisco, CA");
        assert_eq!(info.linkedin_url, "linkedin.com/in/alexjohnson");
        assert_eq!(info.summary, "");
    }

    #[test]
    fn test_name_skips_section_headings() {
        let text = "SUMMARY\nSeasoned engineer.\nAlex Johnson\n";
        assert_eq!(find_full_name(text), "Alex Johnson");
    }

    #[test]
    fn test_phone_cascade_prefers_paren_form() {
        let text = "call 555-123-4567 or (777) 123-4567";
        assert_eq!(find_phone(text).unwrap(), "(777) 123-4567");
    }

    #[test]
    fn test_dash_phone_matched() {
        assert_eq!(find_phone("555-123-4567").unwrap(), "555-123-4567");
    }

    #[test]
    fn test_website_skips_linkedin_match() {
        let text = "linkedin.com/in/alexjohnson\nhttps://alexjohnson.dev/blog\n";
        assert_eq!(find_website(text), "https://alexjohnson.dev/blog");
    }

    #[test]
    fn test_website_empty_when_only_linkedin_present() {
        assert_eq!(find_website("see linkedin.com/in/alexjohnson"), "");
    }

    #[test]
    fn test_rules_fail_silently_on_garbage() {
        let info = extract("%%%% 12 :: ~~ \u{0000}", "");
        assert_eq!(info, PersonalInfo::default());
    }

    #[test]
    fn test_summary_is_trimmed_span_text() {
        let info = extract("Alex Johnson\n", "\n  Seasoned engineer.\n\n");
        assert_eq!(info.summary, "Seasoned engineer.");
    }
}
