//! Session guard trait for authenticated API access.
//!
//! The console core never stores or refreshes credentials itself. Every
//! authenticated operation asks a [`SessionGuard`] for the current bearer
//! token, and reports a rejected session back through
//! [`SessionGuard::on_unauthorized`] so the host application can end the
//! session and prompt for a new login.

use std::sync::Arc;

use crate::Result;

/// Trait for supplying session tokens to authenticated operations.
///
/// Implementations decide where tokens live (memory, keychain, browser
/// storage) and what ending a session means (redirect to login, drop
/// cached state). The console core only consumes the trait.
#[async_trait::async_trait]
pub trait SessionGuard: Send + Sync {
    /// Returns the bearer token to attach to the next request.
    ///
    /// `None` means the request is sent unauthenticated. Returning an
    /// error aborts the operation before any request is issued.
    async fn token(&self) -> Result<Option<String>>;

    /// Called when the service rejects the session token.
    ///
    /// Invoked at most once per failed operation, before the error is
    /// returned to the caller.
    async fn on_unauthorized(&self);
}

/// Type alias for a shared, dynamically dispatched session guard.
pub type SharedSessionGuard = Arc<dyn SessionGuard>;

/// A session guard holding a fixed token for the lifetime of the process.
///
/// Suitable for scripts and tests. Expiry notifications are ignored; the
/// next operation fails the same way until the guard is replaced.
#[derive(Clone, Default)]
pub struct StaticSessionGuard {
    token: Option<String>,
}

impl StaticSessionGuard {
    /// Creates a guard that always presents the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Creates a guard that sends requests unauthenticated.
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl std::fmt::Debug for StaticSessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSessionGuard")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[async_trait::async_trait]
impl SessionGuard for StaticSessionGuard {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    async fn on_unauthorized(&self) {}
}
