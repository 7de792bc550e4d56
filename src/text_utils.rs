use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn is_valid_slug(slug: &str) -> bool {
    lazy_static! {
        static ref SLUG_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
    }
    SLUG_REGEX.is_match(slug)
}

/// `time-and-effort` -> `Time And Effort`
pub fn category_heading(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn format_date(date_time: &DateTime<Utc>) -> String {
    date_time.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(" soup ")), Some("soup"));
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("lemon-pasta_2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("../etc"));
        assert!(!is_valid_slug("with space"));
    }

    #[test]
    fn test_category_heading() {
        assert_eq!(category_heading("time-and-effort"), "Time And Effort");
        assert_eq!(category_heading("cuisine"), "Cuisine");
        assert_eq!(category_heading("--odd--slug"), "Odd Slug");
    }

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();
        assert_eq!(format_date(&date), "March 4, 2024");
    }
}
