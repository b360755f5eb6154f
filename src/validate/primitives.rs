//! Value predicates shared by the rules.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Syntactic URL well-formedness (WHATWG parsing, absolute URLs only).
pub fn is_valid_url(s: &str) -> bool {
    url::Url::parse(s).is_ok()
}

/// ISO-8601 date to at least year granularity: `2000`, `2000-10`,
/// `2000-10-01`, or a full date-time with or without offset.
pub fn is_iso_date(s: &str) -> bool {
    let s = s.trim();
    if is_year(s) {
        return true;
    }
    if s.len() == 7 && s.get(..4).is_some_and(is_year) && s.as_bytes()[4] == b'-' {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok();
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(s).is_ok()
        || DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%#z").is_ok()
        || DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%#z").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").is_ok()
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}
