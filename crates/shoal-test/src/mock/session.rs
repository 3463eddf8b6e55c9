//! Session guards with observable behavior.

use std::sync::atomic::{AtomicUsize, Ordering};

use shoal_core::session::SessionGuard;
use shoal_core::{Error, Result};

/// A session guard that counts expiry notifications.
///
/// Tests hold their own `Arc` to the guard and assert on
/// [`unauthorized_count`](CountingSessionGuard::unauthorized_count)
/// after driving the client.
#[derive(Debug, Default)]
pub struct CountingSessionGuard {
    token: Option<String>,
    unauthorized: AtomicUsize,
}

impl CountingSessionGuard {
    /// Creates a guard presenting the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            unauthorized: AtomicUsize::new(0),
        }
    }

    /// Creates a guard that sends requests unauthenticated.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns how many times the session was reported rejected.
    pub fn unauthorized_count(&self) -> usize {
        self.unauthorized.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl SessionGuard for CountingSessionGuard {
    async fn token(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    async fn on_unauthorized(&self) {
        self.unauthorized.fetch_add(1, Ordering::SeqCst);
    }
}

/// A session guard that refuses to produce a token.
///
/// Operations using this guard must fail before any request is sent.
#[derive(Debug, Default)]
pub struct FailingSessionGuard;

#[async_trait::async_trait]
impl SessionGuard for FailingSessionGuard {
    async fn token(&self) -> Result<Option<String>> {
        Err(Error::unauthorized().with_message("no session available"))
    }

    async fn on_unauthorized(&self) {}
}
