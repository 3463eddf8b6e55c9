//! User and credential administration operations.

use std::time::Instant;

use reqwest::Method;
use shoal_core::Result;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::types::{NewUser, S3Credentials, User, UserUpdate, UsersResponse};
use crate::{AdminClient, TRACING_TARGET_USERS};

/// User administration with a required admin client.
#[derive(Debug, Clone)]
pub struct UserAdmin {
    client: AdminClient,
}

impl UserAdmin {
    /// Creates new user administration operations.
    pub fn new(client: AdminClient) -> Self {
        Self { client }
    }

    /// Lists every user account.
    #[instrument(skip(self), target = TRACING_TARGET_USERS)]
    pub async fn list(&self) -> Result<Vec<User>> {
        debug!(target: TRACING_TARGET_USERS, "Listing users");

        let url = self.client.endpoint_url(["admin", "users"])?;

        let start = Instant::now();
        let result = self.client.send_json::<UsersResponse>(Method::GET, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(response) => {
                info!(
                    target: TRACING_TARGET_USERS,
                    users = response.users.len(),
                    elapsed = ?elapsed,
                    "Users listed successfully"
                );
                Ok(response.users)
            }
            Err(e) => {
                error!(target: TRACING_TARGET_USERS, error = %e, elapsed = ?elapsed, "Failed to list users");
                Err(e)
            }
        }
    }

    /// Creates a user account.
    #[instrument(skip(self, new_user), target = TRACING_TARGET_USERS, fields(username = %new_user.username, role = %new_user.role))]
    pub async fn create(&self, new_user: &NewUser) -> Result<()> {
        new_user.validate()?;

        debug!(target: TRACING_TARGET_USERS, "Creating user");

        let url = self.client.endpoint_url(["admin", "users"])?;

        let start = Instant::now();
        let result = self.client.send_payload(Method::POST, url, new_user).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!(target: TRACING_TARGET_USERS, elapsed = ?elapsed, "User created successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_USERS, error = %e, elapsed = ?elapsed, "Failed to create user");
                Err(e)
            }
        }
    }

    /// Updates a user's role, activation state, or password.
    #[instrument(skip(self, update), target = TRACING_TARGET_USERS, fields(user_id = %id))]
    pub async fn update(&self, id: Uuid, update: &UserUpdate) -> Result<()> {
        debug!(target: TRACING_TARGET_USERS, role = %update.role, is_active = update.is_active, "Updating user");

        let id = id.to_string();
        let url = self.client.endpoint_url(["admin", "users", id.as_str()])?;

        let start = Instant::now();
        let result = self.client.send_payload(Method::PUT, url, update).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!(target: TRACING_TARGET_USERS, elapsed = ?elapsed, "User updated successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_USERS, error = %e, elapsed = ?elapsed, "Failed to update user");
                Err(e)
            }
        }
    }

    /// Deletes a user account.
    #[instrument(skip(self), target = TRACING_TARGET_USERS, fields(user_id = %id))]
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        debug!(target: TRACING_TARGET_USERS, "Deleting user");

        let id = id.to_string();
        let url = self.client.endpoint_url(["admin", "users", id.as_str()])?;

        let start = Instant::now();
        let result = self.client.send_empty(Method::DELETE, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!(target: TRACING_TARGET_USERS, elapsed = ?elapsed, "User deleted successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_USERS, error = %e, elapsed = ?elapsed, "Failed to delete user");
                Err(e)
            }
        }
    }

    /// Issues fresh S3 credentials for a user.
    ///
    /// Any previously issued credentials are replaced. The secret key is only
    /// ever returned by this call, so the caller must show or store it
    /// immediately.
    #[instrument(skip(self), target = TRACING_TARGET_USERS, fields(user_id = %id))]
    pub async fn issue_credentials(&self, id: Uuid) -> Result<S3Credentials> {
        debug!(target: TRACING_TARGET_USERS, "Issuing S3 credentials");

        let id = id.to_string();
        let url = self
            .client
            .endpoint_url(["admin", "users", id.as_str(), "credentials"])?;

        let start = Instant::now();
        let result = self.client.send_json::<S3Credentials>(Method::POST, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(credentials) => {
                info!(
                    target: TRACING_TARGET_USERS,
                    access_key = %credentials.access_key,
                    elapsed = ?elapsed,
                    "S3 credentials issued successfully"
                );
                Ok(credentials)
            }
            Err(e) => {
                error!(target: TRACING_TARGET_USERS, error = %e, elapsed = ?elapsed, "Failed to issue S3 credentials");
                Err(e)
            }
        }
    }

    /// Revokes a user's S3 credentials.
    #[instrument(skip(self), target = TRACING_TARGET_USERS, fields(user_id = %id))]
    pub async fn revoke_credentials(&self, id: Uuid) -> Result<()> {
        debug!(target: TRACING_TARGET_USERS, "Revoking S3 credentials");

        let id = id.to_string();
        let url = self
            .client
            .endpoint_url(["admin", "users", id.as_str(), "credentials"])?;

        let start = Instant::now();
        let result = self.client.send_empty(Method::DELETE, url).await;
        let elapsed = start.elapsed();

        match result {
            Ok(()) => {
                info!(target: TRACING_TARGET_USERS, elapsed = ?elapsed, "S3 credentials revoked successfully");
                Ok(())
            }
            Err(e) => {
                error!(target: TRACING_TARGET_USERS, error = %e, elapsed = ?elapsed, "Failed to revoke S3 credentials");
                Err(e)
            }
        }
    }
}
