use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading integer of a request value
    /// - Matches: "42", "  42", "-7", "+3", "12abc"
    /// - No match: "abc", "", "a12"
    pub static ref LEADING_INT_REGEX: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
}

/// Parse the leading integer of a request value.
///
/// Path segments and query values are parsed leniently: surrounding garbage after
/// the digits is ignored, and a value with no leading digits yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    LEADING_INT_REGEX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}

/// Treat empty query values as absent.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
