// src/extractors/common.rs

// --- Imports ---
use crate::extractors::patterns::{
    DATE_RANGE_MONTH, DATE_RANGE_YEAR, LOCATION_CITY_REGION, LOCATION_CITY_STATE,
};

/// A single match-attempt rule. Rules are pure and fail by returning `None`.
pub type MatchRule<T> = fn(&str) -> Option<T>;

/// Evaluates an ordered rule list lazily and returns the first success.
/// Keeps every heuristic cascade a flat, independently testable list instead
/// of nested conditionals.
pub fn first_match<T>(rules: &[MatchRule<T>], text: &str) -> Option<T> {
    rules.iter().find_map(|rule| rule(text))
}

/// A recognized employment or study date range. `current` set means the
/// range ended in "Present" and `end` is left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub current: bool,
}

impl DateRange {
    fn from_parts(start: &str, end: &str) -> Self {
        if end.eq_ignore_ascii_case("present") {
            Self {
                start: start.to_string(),
                end: String::new(),
                current: true,
            }
        } else {
            Self {
                start: start.to_string(),
                end: end.to_string(),
                current: false,
            }
        }
    }
}

fn bare_year_range(text: &str) -> Option<DateRange> {
    DATE_RANGE_YEAR
        .captures(text)
        .map(|caps| DateRange::from_parts(&caps[1], &caps[2]))
}

fn month_year_range(text: &str) -> Option<DateRange> {
    DATE_RANGE_MONTH
        .captures(text)
        .map(|caps| DateRange::from_parts(&caps[1], &caps[2]))
}

/// Date-range cascade: bare `YYYY - YYYY|Present` first, then
/// `Mon YYYY - Mon YYYY|Present`.
pub fn find_date_range(text: &str) -> Option<DateRange> {
    const RULES: &[MatchRule<DateRange>] = &[bare_year_range, month_year_range];
    first_match(RULES, text)
}

fn city_state(text: &str) -> Option<String> {
    LOCATION_CITY_STATE
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}

fn city_region(text: &str) -> Option<String> {
    LOCATION_CITY_REGION
        .find(text)
        .map(|m| m.as_str().trim().to_string())
}

/// Location cascade: `City, ST` first, then the generic `City, Region` form.
pub fn find_location(text: &str) -> Option<String> {
    const RULES: &[MatchRule<String>] = &[city_state, city_region];
    first_match(RULES, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_year_range_present_sets_current() {
        let range = find_date_range("2020 - Present").unwrap();
        assert_eq!(range.start, "2020");
        assert_eq!(range.end, "");
        assert!(range.current);
    }

    #[test]
    fn test_bare_year_range_closed() {
        let range = find_date_range("2014 - 2018").unwrap();
        assert_eq!(range.start, "2014");
        assert_eq!(range.end, "2018");
        assert!(!range.current);
    }

    #[test]
    fn test_month_range_used_when_bare_range_absent() {
        let range = find_date_range("Mar 2018 - May 2020").unwrap();
        assert_eq!(range.start, "2018");
        assert_eq!(range.end, "2020");
    }

    #[test]
    fn test_no_range_in_prose() {
        assert!(find_date_range("improved performance by 40%").is_none());
    }

    #[test]
    fn test_location_prefers_state_form() {
        let text = "Python, Go\nSan Francisco, CA";
        assert_eq!(find_location(text).unwrap(), "San Francisco, CA");
    }

    #[test]
    fn test_location_generic_fallback() {
        assert_eq!(find_location("Toulouse, France").unwrap(), "Toulouse, France");
    }

    #[test]
    fn test_first_match_stops_at_first_success() {
        fn never(_: &str) -> Option<u32> {
            None
        }
        fn one(_: &str) -> Option<u32> {
            Some(1)
        }
        fn two(_: &str) -> Option<u32> {
            Some(2)
        }
        assert_eq!(first_match(&[never, one, two], "x"), Some(1));
        assert_eq!(first_match::<u32>(&[never], "x"), None);
    }
}
