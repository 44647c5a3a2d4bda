//! Removal of citation artifacts from model-generated text.
//!
//! Grounded replies tend to carry inline markers such as `[3]`, `【3】`, `(3)`,
//! circled digits or `[2 - from google_maps]`. They are meaningless once the
//! text is detached from the grounding metadata, so every string leaf of a
//! parsed reply is cleaned before it reaches callers.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static CITATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\[\d+\s*-\s*from\s*[^\]]+\]",
        r"\[\d+\]",
        r"【\d+】",
        r"\(\d+\)",
        r"[\x{2460}-\x{2473}]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("citation pattern must compile"))
    .collect()
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

fn strip_once(text: &str) -> String {
    let mut out = text.to_string();
    for pattern in CITATION_PATTERNS.iter() {
        out = pattern.replace_all(&out, "").into_owned();
    }
    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Strips citation markers and collapses whitespace.
///
/// Repeats until the text stops changing, so `clean_text(clean_text(s)) == clean_text(s)`
/// even when removing one marker exposes another (`[[1]2]`).
pub fn clean_text(text: &str) -> String {
    let mut current = strip_once(text);
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Recursively cleans every string leaf. Keys and non-string leaves are kept as-is.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(clean_text(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key, sanitize_value(v)))
                .collect(),
        ),
        other => other,
    }
}
