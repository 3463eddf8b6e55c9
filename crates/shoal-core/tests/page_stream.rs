//! Stream adapter tests for exhaustive page traversal.
//!
//! These live as integration tests rather than unit tests in
//! `listing::stream`: the mocks come from `shoal-test`, which depends on
//! `shoal-core`, and a lib test would link a second copy of this crate
//! with incompatible types.

use std::sync::Arc;

use futures::TryStreamExt;
use shoal_core::{Error, ListObjectsRequest, ListingPage, Result, SharedObjectLister, page_stream};
use shoal_test::{ListingPageExt, MockLister, page_with_keys};

#[tokio::test]
async fn follows_cursors_until_terminal_page() {
    let lister = MockLister::new();
    lister.push_page(page_with_keys(&["a", "b"]).truncated("cur-1"));
    lister.push_page(page_with_keys(&["c"]).truncated("cur-2"));
    lister.push_page(page_with_keys(&["d"]));

    let shared: SharedObjectLister = Arc::new(lister);
    let request = ListObjectsRequest::new("media");
    let pages: Vec<ListingPage> = page_stream(Arc::clone(&shared), request)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 3);
    assert!(!pages[2].is_truncated);

    let keys: Vec<&str> = pages
        .iter()
        .flat_map(|p| p.objects.iter().map(|o| o.key.as_str()))
        .collect();
    assert_eq!(keys, ["a", "b", "c", "d"]);
}

#[tokio::test]
async fn later_requests_carry_previous_cursor() {
    let lister = Arc::new(MockLister::new());
    lister.push_page(page_with_keys(&["a"]).truncated("cur-1"));
    lister.push_page(page_with_keys(&["b"]));

    let shared: SharedObjectLister = lister.clone();
    let request = ListObjectsRequest::new("media").with_page_size(1);
    let _: Vec<ListingPage> = page_stream(shared, request).try_collect().await.unwrap();

    let calls = lister.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].cursor, None);
    assert_eq!(calls[1].cursor.as_deref(), Some("cur-1"));
    assert_eq!(calls[1].page_size, 1);
}

#[tokio::test]
async fn truncated_page_without_cursor_is_an_error() {
    let lister = MockLister::new();
    let mut page = page_with_keys(&["a"]);
    page.is_truncated = true;
    lister.push_page(page);

    let shared: SharedObjectLister = Arc::new(lister);
    let result: Result<Vec<ListingPage>> =
        page_stream(shared, ListObjectsRequest::new("media"))
            .try_collect()
            .await;

    let err = result.unwrap_err();
    assert!(err.is_unreachable());
}

#[tokio::test]
async fn failure_ends_the_stream() {
    let lister = MockLister::new();
    lister.push_page(page_with_keys(&["a"]).truncated("cur-1"));
    lister.push_error(Error::not_found().with_message("bucket removed"));

    let shared: SharedObjectLister = Arc::new(lister);
    let mut stream = Box::pin(page_stream(shared, ListObjectsRequest::new("media")));

    assert!(stream.try_next().await.is_ok());
    assert!(stream.try_next().await.is_err());
}
