//! Two-outcome result of a generation request.

use std::fmt;

/// Why a request was served from demo data instead of a live reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// No provider credential is configured. This is demo mode, not a failure.
    MissingCredential,
    /// The provider call itself failed (transport, HTTP status, undecodable body).
    Provider(String),
    /// The provider answered without any text.
    EmptyReply,
    /// The reply held no usable JSON, or it did not match the result schema.
    Parse(String),
}

impl FallbackReason {
    /// Short machine-readable label.
    pub fn code(&self) -> &'static str {
        match self {
            FallbackReason::MissingCredential => "missing_credential",
            FallbackReason::Provider(_) => "provider_error",
            FallbackReason::EmptyReply => "empty_reply",
            FallbackReason::Parse(_) => "parse_error",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::MissingCredential => write!(f, "no provider credential configured"),
            FallbackReason::Provider(e) => write!(f, "provider call failed: {}", e),
            FallbackReason::EmptyReply => write!(f, "provider returned an empty reply"),
            FallbackReason::Parse(e) => write!(f, "reply could not be parsed: {}", e),
        }
    }
}

/// A structurally valid result: either parsed from a live reply or the demo payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Live(T),
    Fallback { value: T, reason: FallbackReason },
}

impl<T> Outcome<T> {
    pub fn fallback(value: T, reason: FallbackReason) -> Self {
        Outcome::Fallback { value, reason }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Outcome::Live(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Outcome::Live(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Outcome::Live(_) => None,
            Outcome::Fallback { reason, .. } => Some(reason),
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Outcome::Live(value) | Outcome::Fallback { value, .. } => value,
        }
    }

    /// `"live"` or `"fallback"`.
    pub fn label(&self) -> &'static str {
        if self.is_live() { "live" } else { "fallback" }
    }
}
