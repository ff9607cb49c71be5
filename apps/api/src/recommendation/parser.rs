//! Response Parser — splits a free-text completion into the four recommendation lists.
//!
//! Two grammars are understood. The tagged grammar (`<restaurants>...</restaurants>` etc.)
//! is strict: all four tags, in order, or it does not match at all. The marker grammar
//! (`Restaurants:` ... `Breakfast:` ...) is the legacy fallback and is deliberately loose:
//! each section is extracted on its own, and a missing marker only empties the sections
//! it bounds.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::recommendation::{RecommendationResult, Section};

/// Legacy marker patterns. Each section runs from its marker to the next
/// section's marker; Workouts runs to the end of the text.
static MARKER_PATTERNS: LazyLock<[(Section, Regex); 4]> = LazyLock::new(|| {
    [
        (
            Section::Restaurants,
            Regex::new(r"(?s)Restaurants:(.*?)Breakfast:").unwrap(),
        ),
        (
            Section::Breakfast,
            Regex::new(r"(?s)Breakfast:(.*?)Dinner:").unwrap(),
        ),
        (
            Section::Dinner,
            Regex::new(r"(?s)Dinner:(.*?)Workouts:").unwrap(),
        ),
        (Section::Workouts, Regex::new(r"(?s)Workouts:(.*)\z").unwrap()),
    ]
});

static TAG_PATTERNS: LazyLock<[(Section, Regex); 4]> = LazyLock::new(|| {
    [
        (
            Section::Restaurants,
            Regex::new(r"(?is)<restaurants>(.*?)</restaurants>").unwrap(),
        ),
        (
            Section::Breakfast,
            Regex::new(r"(?is)<breakfast>(.*?)</breakfast>").unwrap(),
        ),
        (
            Section::Dinner,
            Regex::new(r"(?is)<dinner>(.*?)</dinner>").unwrap(),
        ),
        (
            Section::Workouts,
            Regex::new(r"(?is)<workouts>(.*?)</workouts>").unwrap(),
        ),
    ]
});

/// Parses a completion, preferring the tagged grammar and falling back to markers.
pub fn parse_response(text: &str) -> RecommendationResult {
    match parse_tagged(text) {
        Some(result) => {
            debug!("Parsed completion with tagged grammar");
            result
        }
        None => {
            debug!("Tagged grammar did not match; using marker fallback");
            parse_markers(text)
        }
    }
}

/// Legacy marker extraction. Never fails; an unmatched section is empty.
pub fn parse_markers(text: &str) -> RecommendationResult {
    let mut result = RecommendationResult::default();
    for (section, pattern) in MARKER_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            *slot(&mut result, *section) = split_block(&caps[1]);
        }
    }
    result
}

/// Strict tagged extraction. Returns `None` unless all four sections are
/// present, each opening after the previous one closed.
pub fn parse_tagged(text: &str) -> Option<RecommendationResult> {
    let mut result = RecommendationResult::default();
    let mut cursor = 0;
    for (section, pattern) in TAG_PATTERNS.iter() {
        let caps = pattern.captures_at(text, cursor)?;
        let whole = caps.get(0)?;
        if let Some(earlier) = pattern.find(&text[..whole.start()]) {
            // A repeated tag before the cursor means the sections are out of order.
            debug!("Tagged section {:?} found out of order at {}", section, earlier.start());
            return None;
        }
        *slot(&mut result, *section) = split_block(&caps[1]);
        cursor = whole.end();
    }
    Some(result)
}

/// Trims a matched block and splits it into individually trimmed lines.
/// Blank lines are kept as empty strings, so a blank block yields `[""]`.
fn split_block(block: &str) -> Vec<String> {
    block
        .trim()
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect()
}

fn slot(result: &mut RecommendationResult, section: Section) -> &mut Vec<String> {
    match section {
        Section::Restaurants => &mut result.restaurants,
        Section::Breakfast => &mut result.breakfasts,
        Section::Dinner => &mut result.dinners,
        Section::Workouts => &mut result.workouts,
    }
}
