//! Accumulated view of one virtual directory.

use shoal_core::ErrorKind;
use shoal_core::listing::ListingPage;
use shoal_core::types::{Breadcrumb, ObjectEntry, Prefix};

/// The dominant signal a view should render for a [`BrowseState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowsePhase {
    /// A listing request for this view is in flight.
    Loading,
    /// At least one entry is available to show.
    Ready,
    /// The last request failed and nothing is on screen.
    Failed,
    /// The listing completed and the directory is genuinely empty.
    Empty,
}

/// Everything the console knows about the current directory view.
///
/// A state is created by [`reset`](BrowseState::reset) when a prefix is
/// chosen and then advanced by [`apply_page`](BrowseState::apply_page)
/// and [`fail`](BrowseState::fail). Transitions consume the old state
/// and return the new one; holders of a clone never observe partial
/// mutation. Entries accumulate strictly in service order: the first
/// page replaces, later pages append, nothing is ever re-sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    prefix: Prefix,
    objects: Vec<ObjectEntry>,
    common_prefixes: Vec<Prefix>,
    is_truncated: bool,
    cursor: Option<String>,
    loading: bool,
    error: Option<ErrorKind>,
}

impl BrowseState {
    /// Creates the state for a freshly chosen prefix.
    ///
    /// The new state is loading and empty: contents listed under any
    /// previous prefix never bleed into the new view, even briefly.
    pub fn reset(prefix: Prefix) -> Self {
        Self {
            prefix,
            objects: Vec::new(),
            common_prefixes: Vec::new(),
            is_truncated: false,
            cursor: None,
            loading: true,
            error: None,
        }
    }

    /// Folds one listing page into the view.
    ///
    /// The first page replaces current contents; every later page
    /// appends after what is already shown. Pagination bookkeeping is
    /// taken from the page verbatim, the loading flag clears, and any
    /// prior error marker is removed.
    pub fn apply_page(mut self, page: ListingPage, first_page: bool) -> Self {
        if first_page {
            self.objects = page.objects;
            self.common_prefixes = page.common_prefixes;
        } else {
            self.objects.extend(page.objects);
            self.common_prefixes.extend(page.common_prefixes);
        }

        self.is_truncated = page.is_truncated;
        self.cursor = page.next_cursor;
        self.loading = false;
        self.error = None;
        self
    }

    /// Records a failed listing request.
    ///
    /// Already accumulated entries are kept, so a failed load-more does
    /// not blank the screen. The loading flag clears and the error kind
    /// is retained for display.
    pub fn fail(mut self, kind: ErrorKind) -> Self {
        self.loading = false;
        self.error = Some(kind);
        self
    }

    /// Marks a load-more request as in flight.
    ///
    /// Contents stay visible; only the loading flag changes.
    pub fn begin_load_more(mut self) -> Self {
        self.loading = true;
        self
    }

    /// Returns the prefix this view lists.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// Returns the accumulated objects, in service order.
    pub fn objects(&self) -> &[ObjectEntry] {
        &self.objects
    }

    /// Returns the accumulated virtual subdirectories, in service order.
    pub fn common_prefixes(&self) -> &[Prefix] {
        &self.common_prefixes
    }

    /// Returns true if the service reported more results past the
    /// accumulated pages.
    pub fn is_truncated(&self) -> bool {
        self.is_truncated
    }

    /// Returns the continuation cursor for the next page, if any.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// Returns true while a request for this view is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the kind of the last failed request, if it has not been
    /// cleared by a later success.
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Returns the number of entries on screen, folders included.
    pub fn entry_count(&self) -> usize {
        self.objects.len() + self.common_prefixes.len()
    }

    /// Returns true if nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.common_prefixes.is_empty()
    }

    /// Returns true if a load-more request would fetch anything.
    ///
    /// Requires a truncated listing with a cursor and no request
    /// already in flight.
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.is_truncated && self.cursor.is_some()
    }

    /// Returns the breadcrumb trail for the current prefix.
    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.prefix.breadcrumbs()
    }

    /// Returns the dominant signal for rendering this state.
    ///
    /// Precedence: an in-flight request wins, then visible entries,
    /// then a recorded failure. [`BrowsePhase::Empty`] is therefore
    /// only reported when a listing genuinely completed with nothing
    /// under the prefix; it is never conflated with "still loading" or
    /// "failed before anything arrived". A failed load-more keeps the
    /// view [`Ready`](BrowsePhase::Ready), with [`error`](Self::error)
    /// set for a secondary notice.
    pub fn phase(&self) -> BrowsePhase {
        if self.loading {
            BrowsePhase::Loading
        } else if !self.is_empty() {
            BrowsePhase::Ready
        } else if self.error.is_some() {
            BrowsePhase::Failed
        } else {
            BrowsePhase::Empty
        }
    }
}
