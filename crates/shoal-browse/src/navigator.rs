//! Prefix navigation with superseding request generations.

use std::sync::{Mutex, MutexGuard, PoisonError};

use shoal_core::listing::{ListObjectsRequest, ListingPage, SharedObjectLister};
use shoal_core::types::{Breadcrumb, Prefix};
use shoal_core::{Error, Result};
use tracing::{debug, info, warn};

use crate::TRACING_TARGET_NAVIGATOR;
use crate::config::BrowseConfig;
use crate::state::BrowseState;

/// How a navigation or load-more call concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The response was applied to the current view.
    Applied,
    /// A newer navigation superseded this request; its response was
    /// discarded without touching the view.
    Superseded,
    /// A request for this view is already in flight; nothing was issued.
    AlreadyLoading,
    /// The listing is already complete; nothing was issued.
    NothingToLoad,
}

struct Shared {
    bucket: String,
    state: BrowseState,
    generation: u64,
}

impl Shared {
    // Takes the state out for a consuming transition. The placeholder
    // is overwritten before the lock is released.
    fn take_state(&mut self) -> BrowseState {
        std::mem::replace(&mut self.state, BrowseState::reset(Prefix::root()))
    }
}

/// Drives directory navigation for one bucket view.
///
/// The navigator owns the authoritative [`BrowseState`] and hands out
/// clones through [`snapshot`](Navigator::snapshot). Listing requests
/// run without the lock held; a response is admitted back only if the
/// generation minted when it was issued is still current. Every
/// navigation mints a new generation, so the latest navigation wins no
/// matter the order responses arrive in.
///
/// A freshly created navigator is loading the bucket root but has not
/// issued a request yet; call [`refresh`](Navigator::refresh) or any
/// navigation method to populate the view.
pub struct Navigator {
    lister: SharedObjectLister,
    config: BrowseConfig,
    shared: Mutex<Shared>,
}

impl Navigator {
    /// Creates a navigator for the given bucket.
    pub fn new(
        lister: SharedObjectLister,
        bucket: impl Into<String>,
        config: BrowseConfig,
    ) -> Self {
        Self {
            lister,
            config,
            shared: Mutex::new(Shared {
                bucket: bucket.into(),
                state: BrowseState::reset(Prefix::root()),
                generation: 0,
            }),
        }
    }

    /// Returns a snapshot of the current view state.
    pub fn snapshot(&self) -> BrowseState {
        self.shared().state.clone()
    }

    /// Returns the bucket currently being browsed.
    pub fn bucket(&self) -> String {
        self.shared().bucket.clone()
    }

    /// Returns the breadcrumb trail for the current prefix.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.shared().state.breadcrumbs()
    }

    /// Points the navigator at a different bucket.
    ///
    /// The view resets to a loading root and every in-flight response
    /// is superseded; call [`refresh`](Navigator::refresh) to populate
    /// the new view. Re-opening the current bucket is a no-op.
    pub fn open_bucket(&self, bucket: impl Into<String>) {
        let bucket = bucket.into();
        let mut shared = self.shared();
        if shared.bucket == bucket {
            return;
        }

        debug!(
            target: TRACING_TARGET_NAVIGATOR,
            from = %shared.bucket,
            to = %bucket,
            "Switching bucket"
        );

        shared.bucket = bucket;
        shared.generation += 1;
        shared.state = BrowseState::reset(Prefix::root());
    }

    /// Navigates to a virtual directory and fetches its first page.
    ///
    /// The view resets to a loading state immediately, so contents of
    /// the previous prefix never linger while the request runs. Any
    /// response still in flight for an earlier navigation is superseded.
    ///
    /// # Errors
    ///
    /// Returns the listing error after recording its kind in the view
    /// state. Errors belonging to a superseded request are swallowed;
    /// the call reports [`BrowseOutcome::Superseded`] instead.
    pub async fn navigate_to(&self, prefix: Prefix) -> Result<BrowseOutcome> {
        let (generation, request) = {
            let mut shared = self.shared();
            shared.generation += 1;
            shared.state = BrowseState::reset(prefix.clone());

            let request = ListObjectsRequest::new(shared.bucket.clone())
                .with_prefix(prefix)
                .with_page_size(self.config.effective_page_size());
            (shared.generation, request)
        };

        debug!(
            target: TRACING_TARGET_NAVIGATOR,
            bucket = %request.bucket,
            prefix = %request.prefix,
            generation,
            "Navigating to prefix"
        );

        let result = self.lister.list_objects(&request).await;
        self.admit(generation, &request, result, true)
    }

    /// Navigates to the root of the current bucket.
    pub async fn navigate_to_root(&self) -> Result<BrowseOutcome> {
        self.navigate_to(Prefix::root()).await
    }

    /// Navigates to one of the current breadcrumbs by index.
    ///
    /// Index 0 is the shallowest crumb below the root; use
    /// [`navigate_to_root`](Navigator::navigate_to_root) for the root
    /// itself.
    ///
    /// # Errors
    ///
    /// Returns an invalid request error when the index lies outside the
    /// current trail; no request is issued and the view is untouched.
    pub async fn navigate_to_segment(&self, index: usize) -> Result<BrowseOutcome> {
        let mut crumbs = self.breadcrumbs();
        if index >= crumbs.len() {
            return Err(Error::invalid_request().with_message(format!(
                "breadcrumb index {index} out of range for depth {}",
                crumbs.len()
            )));
        }

        let crumb = crumbs.swap_remove(index);
        self.navigate_to(crumb.prefix).await
    }

    /// Re-fetches the current prefix from the first page.
    ///
    /// Supersedes any response still in flight, exactly like an
    /// explicit navigation to the same prefix.
    pub async fn refresh(&self) -> Result<BrowseOutcome> {
        let prefix = self.shared().state.prefix().clone();
        self.navigate_to(prefix).await
    }

    /// Fetches the next page of the current listing.
    ///
    /// Returns [`BrowseOutcome::AlreadyLoading`] while another request
    /// for this view is in flight and [`BrowseOutcome::NothingToLoad`]
    /// once the listing is complete; neither issues a request.
    ///
    /// # Errors
    ///
    /// Returns the listing error after recording its kind. The
    /// accumulated entries and the continuation cursor are preserved,
    /// so calling again retries the same page.
    pub async fn load_more(&self) -> Result<BrowseOutcome> {
        let (generation, request) = {
            let mut shared = self.shared();
            if shared.state.is_loading() {
                return Ok(BrowseOutcome::AlreadyLoading);
            }
            if !shared.state.can_load_more() {
                return Ok(BrowseOutcome::NothingToLoad);
            }
            let Some(cursor) = shared.state.cursor().map(str::to_owned) else {
                return Ok(BrowseOutcome::NothingToLoad);
            };

            let request = ListObjectsRequest::new(shared.bucket.clone())
                .with_prefix(shared.state.prefix().clone())
                .with_page_size(self.config.effective_page_size())
                .with_cursor(cursor);
            shared.state = shared.take_state().begin_load_more();
            (shared.generation, request)
        };

        debug!(
            target: TRACING_TARGET_NAVIGATOR,
            bucket = %request.bucket,
            prefix = %request.prefix,
            generation,
            "Loading next listing page"
        );

        let result = self.lister.list_objects(&request).await;
        self.admit(generation, &request, result, false)
    }

    /// Admits a listing response if its generation is still current.
    fn admit(
        &self,
        generation: u64,
        request: &ListObjectsRequest,
        result: Result<ListingPage>,
        first_page: bool,
    ) -> Result<BrowseOutcome> {
        let mut shared = self.shared();
        if shared.generation != generation {
            debug!(
                target: TRACING_TARGET_NAVIGATOR,
                bucket = %request.bucket,
                prefix = %request.prefix,
                generation,
                current_generation = shared.generation,
                "Discarding superseded listing response"
            );
            return Ok(BrowseOutcome::Superseded);
        }

        match result {
            Ok(page) => {
                info!(
                    target: TRACING_TARGET_NAVIGATOR,
                    bucket = %request.bucket,
                    prefix = %request.prefix,
                    objects = page.objects.len(),
                    common_prefixes = page.common_prefixes.len(),
                    is_truncated = page.is_truncated,
                    "Listing page applied"
                );
                shared.state = shared.take_state().apply_page(page, first_page);
                Ok(BrowseOutcome::Applied)
            }
            Err(e) => {
                warn!(
                    target: TRACING_TARGET_NAVIGATOR,
                    bucket = %request.bucket,
                    prefix = %request.prefix,
                    error = %e,
                    "Listing request failed"
                );
                shared.state = shared.take_state().fail(e.kind());
                Err(e)
            }
        }
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        // State is only ever replaced wholesale under the lock, so a
        // poisoned lock still holds a coherent value.
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
