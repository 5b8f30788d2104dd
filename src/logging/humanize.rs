//! Log humanizer
//!
//! Maps a raw technical log line to a category and a friendly paraphrase for
//! display. Classification is keyword-based with a fixed priority; the
//! phrasing is picked at random from a per-category pool, with a seedable
//! generator so tests can pin the choice. Display transform only: it never
//! redacts anything and must run after `SensitiveDataFilter` in any pipeline
//! that persists or transmits text.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Category assigned to a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Start,
    Login,
    Search,
    Download,
    Success,
    Error,
    Wait,
    Info,
}

impl LogCategory {
    /// Stable lowercase name, used for display and styling hooks.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogCategory::Start => "start",
            LogCategory::Login => "login",
            LogCategory::Search => "search",
            LogCategory::Download => "download",
            LogCategory::Success => "success",
            LogCategory::Error => "error",
            LogCategory::Wait => "wait",
            LogCategory::Info => "info",
        }
    }
}

/// A humanized log line. The original text always rides along unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanizedLog {
    /// Friendly paraphrase (or the original text for `Info`)
    pub human_text: String,
    /// The raw line as emitted
    pub original_text: String,
    /// Matched category
    pub category: LogCategory,
}

// Keyword stems per category. The portal and the bots log in a mix of
// English and Italian, so both stems are listed.
const START_KEYWORDS: &[&str] = &["avvio", "start", "launch"];
const LOGIN_KEYWORDS: &[&str] = &["login", "access", "connection"];
const SEARCH_KEYWORDS: &[&str] = &["search", "found", "analyz", "cerca", "trovat"];
const DOWNLOAD_KEYWORDS: &[&str] = &["download", "saved", "export", "scaric", "salvat"];
const SUCCESS_KEYWORDS: &[&str] = &["success", "complet", "\u{2713}"];
const ERROR_KEYWORDS: &[&str] = &["error", "fail", "fallit", "exception", "\u{2717}"];
const WAIT_KEYWORDS: &[&str] = &["wait", "attes"];

const START_PHRASES: &[&str] = &[
    "🚀 Here we go! Starting the engines...",
    "👋 Hello! Getting right to work.",
    "🤖 Bot ready. Let's go!",
    "⚡ Kicking off the automation.",
];
const LOGIN_PHRASES: &[&str] = &[
    "🔐 Signing in to the portal...",
    "👤 Entering the credentials...",
    "🔑 Knocking on the portal door...",
    "🚪 Opening up the system.",
];
const SEARCH_PHRASES: &[&str] = &[
    "🔍 Looking for the requested data...",
    "🕵️ Off to investigate...",
    "🔎 Digging through the records...",
    "🧐 Let's see what turns up...",
];
const DOWNLOAD_PHRASES: &[&str] = &[
    "📥 Fetching the files...",
    "💾 Saving everything to disk...",
    "📦 Package incoming...",
    "📨 Collecting the documents.",
];
const SUCCESS_PHRASES: &[&str] = &[
    "✅ Done! All good.",
    "🎉 Mission accomplished!",
    "✨ Nice work, all finished.",
    "🏆 Completed successfully.",
];
const ERROR_PHRASES: &[&str] = &[
    "❌ Oops, something went wrong.",
    "⚠️ Hit a snag.",
    "🚫 There's a technical problem.",
    "🤕 Ouch, unexpected error.",
];
const WAIT_PHRASES: &[&str] = &[
    "⏳ Hold on a moment...",
    "☕ Virtual coffee break...",
    "🕒 Give me a second...",
    "✋ Waiting for the site to respond...",
];

/// Classify a message. First match in priority order wins; `Info` is the
/// fallback when nothing matches.
pub fn categorize(message: &str) -> LogCategory {
    let lower = message.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(START_KEYWORDS) {
        LogCategory::Start
    } else if contains_any(LOGIN_KEYWORDS) {
        LogCategory::Login
    } else if contains_any(SEARCH_KEYWORDS) {
        LogCategory::Search
    } else if contains_any(DOWNLOAD_KEYWORDS) {
        LogCategory::Download
    } else if contains_any(SUCCESS_KEYWORDS) {
        LogCategory::Success
    } else if contains_any(ERROR_KEYWORDS) {
        LogCategory::Error
    } else if contains_any(WAIT_KEYWORDS) {
        LogCategory::Wait
    } else {
        LogCategory::Info
    }
}

/// Turns technical log lines into friendly ones.
pub struct Humanizer {
    rng: StdRng,
}

impl Humanizer {
    /// Create a humanizer with OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a humanizer with a fixed seed, for deterministic phrasing.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Humanize a message: pick a phrase for its category, keep the original.
    pub fn humanize(&mut self, message: &str) -> HumanizedLog {
        let category = categorize(message);

        let pool: &[&str] = match category {
            LogCategory::Start => START_PHRASES,
            LogCategory::Login => LOGIN_PHRASES,
            LogCategory::Search => SEARCH_PHRASES,
            LogCategory::Download => DOWNLOAD_PHRASES,
            LogCategory::Success => SUCCESS_PHRASES,
            LogCategory::Error => ERROR_PHRASES,
            LogCategory::Wait => WAIT_PHRASES,
            LogCategory::Info => {
                return HumanizedLog {
                    human_text: message.to_string(),
                    original_text: message.to_string(),
                    category,
                };
            }
        };

        let pick = self.rng.random_range(0..pool.len());
        HumanizedLog {
            human_text: pool[pick].to_string(),
            original_text: message.to_string(),
            category,
        }
    }
}

impl Default for Humanizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_beats_login_keywords_in_italian() {
        // "connessione" is not an English "connection" match, so the error
        // stem in "Errore" decides the category
        assert_eq!(categorize("Errore: connessione fallita"), LogCategory::Error);
    }

    #[test]
    fn test_start_category_italian() {
        assert_eq!(categorize("Avvio in corso"), LogCategory::Start);
    }

    #[test]
    fn test_priority_order_first_match_wins() {
        // Both a start and an error stem: start is checked first
        assert_eq!(categorize("start failed"), LogCategory::Start);
        assert_eq!(categorize("login error"), LogCategory::Login);
    }

    #[test]
    fn test_glyph_categories() {
        assert_eq!(categorize("row 3 \u{2713}"), LogCategory::Success);
        assert_eq!(categorize("row 4 \u{2717}"), LogCategory::Error);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("DOWNLOAD complete... saved"), LogCategory::Download);
        assert_eq!(categorize("WAITING for page"), LogCategory::Wait);
    }

    #[test]
    fn test_info_passes_text_through() {
        let mut humanizer = Humanizer::with_seed(7);
        let result = humanizer.humanize("");
        assert_eq!(result.category, LogCategory::Info);
        assert_eq!(result.human_text, "");

        let result = humanizer.humanize("row 12 of 40");
        assert_eq!(result.category, LogCategory::Info);
        assert_eq!(result.human_text, "row 12 of 40");
        assert_eq!(result.original_text, "row 12 of 40");
    }

    #[test]
    fn test_phrase_comes_from_category_pool() {
        let mut humanizer = Humanizer::with_seed(42);
        let result = humanizer.humanize("Avvio in corso");
        assert_eq!(result.category, LogCategory::Start);
        assert!(START_PHRASES.contains(&result.human_text.as_str()));
        assert_eq!(result.original_text, "Avvio in corso");
    }

    #[test]
    fn test_seeded_humanizer_is_deterministic() {
        let mut a = Humanizer::with_seed(9);
        let mut b = Humanizer::with_seed(9);
        for _ in 0..10 {
            assert_eq!(a.humanize("error!"), b.humanize("error!"));
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(LogCategory::Start.as_str(), "start");
        assert_eq!(LogCategory::Info.as_str(), "info");
    }
}
