//! Field validators
//!
//! One validator per field the application collects. Order of checks is part
//! of the contract: emptiness, then length, then shape, then semantic checks
//! (check character, calendar), each with its own message.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::validation::checksum::fiscal_code_check_char;
use crate::validation::result::ValidationResult;

static ORDER_ID_REGEX: OnceLock<Regex> = OnceLock::new();
static FISCAL_CODE_REGEX: OnceLock<Regex> = OnceLock::new();
static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
static TIME_REGEX: OnceLock<Regex> = OnceLock::new();

fn order_id_regex() -> &'static Regex {
    ORDER_ID_REGEX.get_or_init(|| Regex::new(r"^[A-Z0-9]{1,20}$").unwrap())
}

fn fiscal_code_regex() -> &'static Regex {
    FISCAL_CODE_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z]{6}[0-9]{2}[A-Z][0-9]{2}[A-Z][0-9]{3}[A-Z]$").unwrap()
    })
}

fn date_regex() -> &'static Regex {
    // Constrains day 01-31 and month 01-12; days past the end of a short
    // month pass here and are rejected by the calendar check.
    DATE_REGEX.get_or_init(|| {
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])\.(0[1-9]|1[012])\.((19|20)\d\d)$").unwrap()
    })
}

fn time_regex() -> &'static Regex {
    TIME_REGEX.get_or_init(|| Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").unwrap())
}

/// Validate a purchase order number: 1-20 alphanumeric characters.
pub fn validate_order_id(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Order number is required");
    }

    let sanitized = value.trim().to_uppercase();

    if sanitized.chars().count() > 20 {
        return ValidationResult::fail("Order number too long (max 20 characters)");
    }

    if !order_id_regex().is_match(&sanitized) {
        return ValidationResult::fail("Order number contains invalid characters");
    }

    ValidationResult::pass(sanitized)
}

/// Validate an Italian fiscal code, including its check character.
pub fn validate_fiscal_code(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Fiscal code is required");
    }

    let sanitized = value.trim().to_uppercase();

    if sanitized.chars().count() != 16 {
        return ValidationResult::fail("Fiscal code must be 16 characters");
    }

    if !fiscal_code_regex().is_match(&sanitized) {
        return ValidationResult::fail("Invalid fiscal code format");
    }

    let expected = fiscal_code_check_char(&sanitized[..15]);
    if sanitized.as_bytes()[15] != expected as u8 {
        return ValidationResult::fail("Fiscal code check character mismatch");
    }

    ValidationResult::pass(sanitized)
}

/// Validate a date in DD.MM.YYYY form. A "/" separator is accepted and
/// normalized to "." before matching.
pub fn validate_date(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Date is required");
    }

    let sanitized = value.trim().replace('/', ".");

    let Some(caps) = date_regex().captures(&sanitized) else {
        return ValidationResult::fail("Invalid date format (use DD.MM.YYYY)");
    };

    let day: u32 = caps[1].parse().unwrap_or(0);
    let month: u32 = caps[2].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);

    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return ValidationResult::fail("Date does not exist");
    }

    ValidationResult::pass(sanitized)
}

/// Validate a 24-hour clock time in HH:MM form.
pub fn validate_time(value: &str) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("Time is required");
    }

    let sanitized = value.trim().to_string();

    if !time_regex().is_match(&sanitized) {
        return ValidationResult::fail("Invalid time format (use HH:MM)");
    }

    ValidationResult::pass(sanitized)
}

/// Strip non-printable characters from a string, leaving printable content
/// untouched. Applied defensively before any value reaches a query boundary,
/// even where parameterized queries are used.
pub fn sanitize_printable(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control() || *c == ' ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_valid_range() {
        let result = validate_order_id("abc123");
        assert!(result.valid);
        assert_eq!(result.sanitized_value.as_deref(), Some("ABC123"));

        assert!(validate_order_id("A").valid);
        assert!(validate_order_id(&"9".repeat(20)).valid);
    }

    #[test]
    fn test_order_id_empty() {
        let result = validate_order_id("");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Order number is required"));
    }

    #[test]
    fn test_order_id_too_long() {
        let result = validate_order_id(&"A".repeat(21));
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Order number too long (max 20 characters)")
        );
    }

    #[test]
    fn test_order_id_bad_charset() {
        let result = validate_order_id("ABC-123");
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Order number contains invalid characters")
        );
    }

    #[test]
    fn test_fiscal_code_valid() {
        let result = validate_fiscal_code("rssmra80a01h501u");
        assert!(result.valid);
        assert_eq!(result.sanitized_value.as_deref(), Some("RSSMRA80A01H501U"));
    }

    #[test]
    fn test_fiscal_code_trims_before_matching() {
        assert!(validate_fiscal_code("  RSSMRA80A01H501U  ").valid);
    }

    #[test]
    fn test_fiscal_code_wrong_length() {
        let result = validate_fiscal_code("RSSMRA80A01H501");
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Fiscal code must be 16 characters")
        );
    }

    #[test]
    fn test_fiscal_code_bad_shape() {
        let result = validate_fiscal_code("1SSMRA80A01H501U");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Invalid fiscal code format"));
    }

    #[test]
    fn test_fiscal_code_check_char_flip() {
        // Flipping only the check character flips the result
        let result = validate_fiscal_code("RSSMRA80A01H501V");
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Fiscal code check character mismatch")
        );
    }

    #[test]
    fn test_date_valid_and_separator_normalized() {
        let result = validate_date("01/05/2024");
        assert!(result.valid);
        assert_eq!(result.sanitized_value.as_deref(), Some("01.05.2024"));
    }

    #[test]
    fn test_date_format_error() {
        let result = validate_date("99.99.9999");
        assert!(!result.valid);
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid date format (use DD.MM.YYYY)")
        );
    }

    #[test]
    fn test_date_calendar_error_is_distinct() {
        // April has 30 days: passes the pattern, fails the calendar
        let result = validate_date("31.04.2024");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Date does not exist"));
    }

    #[test]
    fn test_date_leap_year() {
        assert!(validate_date("29.02.2024").valid);
        let result = validate_date("29.02.2023");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Date does not exist"));
    }

    #[test]
    fn test_time_valid() {
        assert!(validate_time("08:30").valid);
        assert!(validate_time("23:59").valid);
        assert!(validate_time("0:05").valid);
    }

    #[test]
    fn test_time_invalid() {
        let result = validate_time("25:00");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Invalid time format (use HH:MM)"));
        assert!(!validate_time("12:60").valid);
    }

    #[test]
    fn test_sanitize_printable_strips_control_chars() {
        assert_eq!(sanitize_printable("ab\x00c\nd\te"), "abcde");
        assert_eq!(sanitize_printable("plain text 123"), "plain text 123");
        assert_eq!(sanitize_printable(""), "");
    }
}
