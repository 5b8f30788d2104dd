//! Sensitive data redaction
//!
//! Every log line leaving a worker passes through this filter before it is
//! persisted or displayed. Rules run in registration order; replacements are
//! fixed points of their own rule, so applying the filter twice is a no-op.

use regex::Regex;

use crate::logging::event::LogEvent;

/// Ordered redaction rules applied to outgoing log text.
#[derive(Debug)]
pub struct SensitiveDataFilter {
    rules: Vec<(Regex, &'static str)>,
}

impl SensitiveDataFilter {
    /// Build the standard rule set.
    pub fn new() -> Self {
        let rules = vec![
            // Password key/value fragments, whole fragment masked
            (
                Regex::new(r#"(?i)password["\s:=]+["']?[\w@#$%^&*!]+["']?"#).unwrap(),
                "password=***MASKED***",
            ),
            // Token/API key/secret: key kept, value masked
            (
                Regex::new(r#"(?i)(token|api_key|apikey|secret)["\s:=]+["']?[\w-]+["']?"#)
                    .unwrap(),
                "${1}=***MASKED***",
            ),
            // Fiscal-code-shaped substrings, shape only, no checksum
            (
                Regex::new(r"[A-Z]{6}[0-9]{2}[A-Z][0-9]{2}[A-Z][0-9]{3}[A-Z]").unwrap(),
                "***CF_MASKED***",
            ),
            // Card-shaped digit groups
            (
                Regex::new(r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}\b").unwrap(),
                "***CARD_MASKED***",
            ),
        ];

        Self { rules }
    }

    /// Apply every rule in order to a piece of text.
    pub fn apply(&self, text: &str) -> String {
        let mut masked = text.to_string();
        for (pattern, replacement) in &self.rules {
            masked = pattern.replace_all(&masked, *replacement).into_owned();
        }
        masked
    }

    /// Redact a log event, preserving its timestamp.
    pub fn filter(&self, event: LogEvent) -> LogEvent {
        LogEvent {
            text: self.apply(&event.text),
            timestamp: event.timestamp,
        }
    }

    /// Whether any rule still matches the text. Filtered output never does.
    pub fn matches(&self, text: &str) -> bool {
        self.rules
            .iter()
            .any(|(pattern, _)| pattern.is_match(text) && self.apply(text) != text)
    }
}

impl Default for SensitiveDataFilter {
    fn default() -> Self {
        Self::new()
    }
}
