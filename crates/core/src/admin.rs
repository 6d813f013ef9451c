//! Single-admin login and the capability that gates edits.
//!
//! There is exactly one admin account, configured at startup. A successful
//! [`AdminCredentials::authenticate`] yields an [`AdminCapability`]; every
//! mutating operation takes one by reference, so code without it cannot
//! call them.

use crate::error::CoreError;

/// Default username when none is configured.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default password when none is configured.
pub const DEFAULT_ADMIN_PASSWORD: &str = "clms2024";

/// The configured admin login.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
    }
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive match on both fields.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<AdminCapability> {
        (username == self.username && password == self.password).then(|| AdminCapability {
            username: self.username.clone(),
        })
    }

    /// Like [`authenticate`](Self::authenticate) but with an error suitable
    /// for returning to a client.
    pub fn login(&self, username: &str, password: &str) -> Result<AdminCapability, CoreError> {
        self.authenticate(username, password)
            .ok_or_else(|| CoreError::Unauthorized("Invalid username or password".to_string()))
    }

    /// Re-issue the capability for a session whose token has already been
    /// verified. Fails if the session names a different user.
    pub fn resume_session(&self, username: &str) -> Result<AdminCapability, CoreError> {
        if username == self.username {
            Ok(AdminCapability {
                username: self.username.clone(),
            })
        } else {
            Err(CoreError::Forbidden(
                "Session does not belong to the admin account".to_string(),
            ))
        }
    }
}

/// Proof of admin rights. Only obtainable from [`AdminCredentials`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCapability {
    username: String,
}

impl AdminCapability {
    pub fn username(&self) -> &str {
        &self.username
    }
}
