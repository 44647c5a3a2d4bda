//! Mock account service: signup, login, guest access and sessions.
//!
//! This is a convenience directory for keeping per-user history apart, not a
//! real authentication backend.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::entities::{AccountKind, Session, StoredUser};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;
use crate::utils::token::generate_token;

type HmacSha256 = Hmac<Sha256>;

/// Handles the account lifecycle on top of the user and session repositories.
///
/// Passwords are stored as HMAC-SHA256 digests keyed by `credential_secret`.
/// Only member sessions are persisted; guests never receive a token.
pub struct AccountService<U: UserRepository, S: SessionRepository> {
    users: Arc<U>,
    sessions: Arc<S>,
    credential_secret: String,
}

impl<U: UserRepository, S: SessionRepository> AccountService<U, S> {
    pub fn new(users: Arc<U>, sessions: Arc<S>, credential_secret: String) -> Self {
        Self {
            users,
            sessions,
            credential_secret,
        }
    }

    fn mac(&self, email: &str, password: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.credential_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(email.as_bytes());
        mac.update(b"\0");
        mac.update(password.as_bytes());
        mac
    }

    /// Returns a 64-character lowercase hex digest of the credentials.
    fn hash_password(&self, email: &str, password: &str) -> String {
        hex::encode(self.mac(email, password).finalize().into_bytes())
    }

    fn verify_password(&self, user: &StoredUser, password: &str) -> bool {
        let Ok(expected) = hex::decode(&user.password_hash) else {
            return false;
        };
        self.mac(&user.email, password)
            .verify_slice(&expected)
            .is_ok()
    }

    async fn open_session(&self, session: Session) -> Result<(String, Session), AppError> {
        let token = generate_token().map_err(|e| {
            error!("Token generation failed: {}", e);
            AppError::internal("Could not create session", json!({}))
        })?;

        self.sessions.save(&token, &session).await?;
        Ok((token, session))
    }

    /// Registers a member and signs them in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is blank.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(String, Session), AppError> {
        let name = name.trim();
        let email = email.trim();

        let mut missing = Vec::new();
        if name.is_empty() {
            missing.push("name");
        }
        if email.is_empty() {
            missing.push("email");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "All fields are required",
                json!({ "missing": missing }),
            ));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": email }),
            ));
        }

        let user = StoredUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: self.hash_password(email, password),
            kind: AccountKind::Member,
        };
        let session = user.session();
        self.users.insert(user).await?;

        info!("New member registered: {}", email);
        self.open_session(session).await
    }

    /// Signs in an existing member.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when the email is unknown or the password
    /// does not match. The message is the same in both cases.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, Session), AppError> {
        let email = email.trim();
        let user = self.users.find_by_email(email).await?;

        match user {
            Some(user) if self.verify_password(&user, password) => {
                self.open_session(user.session()).await
            }
            _ => Err(AppError::unauthorized(
                "Invalid email or password",
                json!({}),
            )),
        }
    }

    /// Guest access. Nothing is stored and no token is issued.
    pub fn guest(&self) -> Session {
        Session::guest()
    }

    /// Resolves a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown or ended sessions.
    pub async fn session(&self, token: &str) -> Result<Session, AppError> {
        self.sessions.get(token).await?.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid or expired session" }),
            )
        })
    }

    /// Ends a session. Unknown tokens are ignored.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.sessions.delete(token).await
    }

    /// Renames the signed-in member in both the session and the directory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name and
    /// [`AppError::Unauthorized`] for an unknown token.
    pub async fn update_name(&self, token: &str, name: &str) -> Result<Session, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Name must not be empty",
                json!({ "field": "name" }),
            ));
        }

        let mut session = self.session(token).await?;
        session.name = name.to_string();

        self.sessions.save(token, &session).await?;
        self.users.rename(&session.email, name).await?;

        Ok(session)
    }
}
