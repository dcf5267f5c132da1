//! Typed field detectors shared by the parse strategies.
//!
//! Each detector is a plain `fn(&str) -> Option<DetectedField>` so the
//! line-based strategy can run them as an explicit ordered list; the
//! token-based strategies reuse the same scanning primitives. All
//! detectors are read-only over their input.

use regex::Regex;
use shiproute_core::regions;

/// One field extracted from a line or token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DetectedField {
    Email(String),
    Phone(String),
    /// Canonical full state name.
    State(String),
    PostalCode(String),
}

pub(crate) type Detector = fn(&str) -> Option<DetectedField>;

/// Detectors in priority order for line-based parsing. The first detector
/// that matches claims the line.
pub(crate) const LINE_DETECTORS: &[Detector] =
    &[detect_email, detect_phone, detect_state_code, detect_zip];

/// Run the ordered detector list over one line.
pub(crate) fn detect_line(line: &str) -> Option<DetectedField> {
    LINE_DETECTORS.iter().find_map(|detector| detector(line))
}

fn detect_email(line: &str) -> Option<DetectedField> {
    find_email(line).map(DetectedField::Email)
}

fn detect_phone(line: &str) -> Option<DetectedField> {
    find_phone(line).map(DetectedField::Phone)
}

fn detect_state_code(line: &str) -> Option<DetectedField> {
    line.split_whitespace()
        .map(|tok| tok.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .find_map(state_code_token)
        .map(|name| DetectedField::State(name.to_string()))
}

fn detect_zip(line: &str) -> Option<DetectedField> {
    find_zip(line).map(DetectedField::PostalCode)
}

/// First email address in `text`.
pub(crate) fn find_email(text: &str) -> Option<String> {
    let re = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid regex");
    re.find(text).map(|m| m.as_str().to_string())
}

/// First phone-shaped run in `text` carrying at least 7 digits.
///
/// Accepts international formats: `+639691645226`, `+1 (555) 123-4567`,
/// `555-123-4567`, `0171 123 4567`.
pub(crate) fn find_phone(text: &str) -> Option<String> {
    let re = Regex::new(r"\+?\(?\d[\d\s().-]{4,}\d").expect("valid regex");
    let result = re
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| digit_count(candidate) >= 7)
        .map(str::to_string);
    result
}

/// First US ZIP (`NNNNN` or `NNNNN-NNNN`) in `text`.
pub(crate) fn find_zip(text: &str) -> Option<String> {
    let re = Regex::new(r"\b\d{5}(?:-\d{4})?\b").expect("valid regex");
    re.find(text).map(|m| m.as_str().to_string())
}

/// Canonical full name for a token that is exactly a 2-letter uppercase
/// USPS state code. Lowercase 2-letter tokens are rejected on purpose:
/// prose words like "in", "me", "ok" collide with the code space.
pub(crate) fn state_code_token(token: &str) -> Option<&'static str> {
    if token.len() == 2 && token.bytes().all(|b| b.is_ascii_uppercase()) {
        regions::state_full_name(token)
    } else {
        None
    }
}

/// Whether `token` is a run of digits and phone punctuation with at
/// least 7 digits.
pub(crate) fn is_phone_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | '.'))
        && digit_count(token) >= 7
}

/// Whether `token` is exactly a US ZIP (`NNNNN` or `NNNNN-NNNN`).
pub(crate) fn is_postal_token(token: &str) -> bool {
    let re = Regex::new(r"^\d{5}(?:-\d{4})?$").expect("valid regex");
    re.is_match(token)
}

/// Whether `token` is purely alphabetic and starts with an uppercase
/// letter (one word of a capitalized name run).
pub(crate) fn is_title_alpha(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|first| first.is_uppercase() && first.is_alphabetic())
        && chars.all(char::is_alphabetic)
}

pub(crate) fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}
