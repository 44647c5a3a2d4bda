//! Mock account records: sessions and the local user directory.

use serde::{Deserialize, Serialize};

/// Display name used for guest sessions.
pub const GUEST_NAME: &str = "게스트";
/// Contact identifier used for guest sessions.
pub const GUEST_EMAIL: &str = "guest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Member,
    Guest,
}

/// The signed-in user as seen by request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub name: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

impl Session {
    pub fn member(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            kind: AccountKind::Member,
        }
    }

    pub fn guest() -> Self {
        Self {
            name: GUEST_NAME.to_string(),
            email: GUEST_EMAIL.to_string(),
            kind: AccountKind::Guest,
        }
    }

    pub fn is_member(&self) -> bool {
        self.kind == AccountKind::Member
    }
}

/// Entry in the mock user directory.
///
/// Holds a keyed digest of the password, never the password itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
}

impl StoredUser {
    pub fn session(&self) -> Session {
        Session {
            name: self.name.clone(),
            email: self.email.clone(),
            kind: self.kind,
        }
    }
}
