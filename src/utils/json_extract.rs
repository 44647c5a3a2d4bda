//! Locating and repairing the JSON object inside a free-text model reply.
//!
//! Models are asked for a ```` ```json ```` fenced block, but replies often add
//! prose around it, drop the fence, or leave trailing commas and `//` comments.
//! Extraction takes the fenced block when present and the outermost brace span
//! otherwise. Repair only handles trailing commas and line comments; anything
//! else (unbalanced braces, bad quoting, truncation) is reported as invalid.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;

static JSON_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("fence pattern must compile")
});

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in reply")]
    NoJson,

    #[error("invalid JSON: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Returns the text most likely to hold the reply's JSON object.
///
/// Prefers the non-empty interior of the first ```` ```json ```` fence, then
/// the span from the first `{` to the last `}`.
pub fn extract_candidate(text: &str) -> Option<&str> {
    if let Some(captures) = JSON_FENCE.captures(text)
        && let Some(body) = captures.get(1)
        && !body.as_str().is_empty()
    {
        return Some(body.as_str());
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Walks `text` outside of string literals, calling `visit` for each byte
/// offset that is not inside a string.
fn outside_strings(text: &str, mut visit: impl FnMut(usize, char) -> bool, out: &mut String) {
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push(c);
            continue;
        }

        if visit(i, c) {
            out.push(c);
        }
    }
}

fn strip_line_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            // Comment text is dropped whole, quotes included.
            '/' if chars.peek() == Some(&'/') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    outside_strings(
        text,
        |i, c| {
            if c != ',' {
                return true;
            }
            let next = text[i + 1..].chars().find(|ch| !ch.is_whitespace());
            !matches!(next, Some(']') | Some('}'))
        },
        &mut out,
    );

    out
}

/// Removes `//` line comments and commas directly before `]` or `}`.
///
/// String literals are left untouched, so URLs such as `"https://..."` survive.
pub fn repair_json(candidate: &str) -> String {
    strip_trailing_commas(&strip_line_comments(candidate))
}

/// Extracts, repairs and parses the JSON object embedded in `text`.
pub fn extract_json(text: &str) -> Result<Value, ParseError> {
    let candidate = extract_candidate(text).ok_or(ParseError::NoJson)?;
    let repaired = repair_json(candidate);
    Ok(serde_json::from_str(&repaired)?)
}
