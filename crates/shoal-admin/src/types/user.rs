//! User accounts and their mutation payloads.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use shoal_core::{Error, Result};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

/// Access role assigned to a user account.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
pub enum UserRole {
    /// Read-only access to bucket contents.
    Reader,
    /// Read and write access to bucket contents.
    Writer,
    /// Full administrative access, including this API.
    SuperUser,
}

/// A user account as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Stable account identifier.
    pub id: Uuid,
    /// Login name, unique across the service.
    pub username: String,
    /// Assigned access role.
    pub role: UserRole,
    /// Access key of the account's S3 credentials, if any are issued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    /// When the account was created.
    pub created_at: Timestamp,
    /// When the account was last modified.
    pub updated_at: Timestamp,
    /// Whether the account may sign in.
    pub is_active: bool,
}

impl User {
    /// Returns true if S3 credentials are currently issued for this account.
    pub fn has_credentials(&self) -> bool {
        self.access_key.is_some()
    }
}

/// Payload for creating a user account.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Login name for the new account.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Access role to assign.
    pub role: UserRole,
}

impl NewUser {
    /// Creates a new user payload.
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: UserRole) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
        }
    }

    /// Validates the payload before it is sent.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::invalid_request().with_message("username must not be empty"));
        }
        if self.password.is_empty() {
            return Err(Error::invalid_request().with_message("password must not be empty"));
        }
        Ok(())
    }
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("password", &"***")
            .field("role", &self.role)
            .finish()
    }
}

/// Payload for updating a user account.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    /// Access role to assign.
    pub role: UserRole,
    /// Whether the account may sign in.
    pub is_active: bool,
    /// New password; omitted from the request when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserUpdate {
    /// Creates an update that keeps the password unchanged.
    pub fn new(role: UserRole, is_active: bool) -> Self {
        Self {
            role,
            is_active,
            password: None,
        }
    }

    /// Also resets the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

impl std::fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdate")
            .field("role", &self.role)
            .field("is_active", &self.is_active)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Wire envelope for the user listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersResponse {
    /// Every known user account.
    pub users: Vec<User>,
}
