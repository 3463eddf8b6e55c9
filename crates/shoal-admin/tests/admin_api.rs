//! Integration tests against an in-process HTTP server.
//!
//! Each test stands up a small axum router on an ephemeral port and drives
//! the client against it, asserting on the requests the client sends and on
//! how responses map into the shared error taxonomy.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use futures::TryStreamExt;
use serde_json::{Value, json};
use shoal_admin::{AdminClient, AdminConfig, NewUser, UserRole, UserUpdate};
use shoal_core::listing::ListObjectsRequest;
use shoal_core::{Prefix, SharedSessionGuard, StaticSessionGuard};
use shoal_test::{CountingSessionGuard, FailingSessionGuard};

/// Binds the router to an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve test router");
    });
    format!("http://{addr}")
}

fn admin_client(base_url: &str, guard: SharedSessionGuard) -> AdminClient {
    let config = AdminConfig::new(base_url.parse().expect("test endpoint URL"));
    AdminClient::new(config, guard).expect("client construction")
}

fn static_guard(token: &str) -> SharedSessionGuard {
    Arc::new(StaticSessionGuard::new(token))
}

#[tokio::test]
async fn listing_sends_credentials_and_query_parameters() {
    type Captured = (Option<String>, HashMap<String, String>);
    let captured: Arc<Mutex<Vec<Captured>>> = Arc::default();

    let router = {
        let captured = captured.clone();
        Router::new().route(
            "/admin/buckets/{bucket}/objects",
            get(
                move |Path(bucket): Path<String>,
                      Query(params): Query<HashMap<String, String>>,
                      headers: HeaderMap| {
                    let captured = captured.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|value| value.to_str().ok())
                            .map(str::to_owned);
                        captured.lock().unwrap().push((auth, params));

                        assert_eq!(bucket, "media");
                        Json(json!({
                            "objects": [{
                                "key": "summer photos/beach.jpg",
                                "size": 2048,
                                "content_type": "image/jpeg",
                                "last_modified": 1767052800000000000_i64,
                                "etag": "etag-1"
                            }],
                            "common_prefixes": ["summer photos/2026/"],
                            "is_truncated": false
                        }))
                    }
                },
            ),
        )
    };

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    // The space in the prefix must survive query encoding both ways.
    let request = ListObjectsRequest::new("media")
        .with_prefix(Prefix::new("summer photos/").unwrap())
        .with_page_size(25);
    let page = client.objects().list(&request).await.unwrap();

    assert_eq!(page.objects.len(), 1);
    assert_eq!(page.objects[0].key, "summer photos/beach.jpg");
    assert_eq!(page.common_prefixes, ["summer photos/2026/"]);
    assert!(!page.is_truncated);

    let captured = captured.lock().unwrap();
    let (auth, params) = &captured[0];
    assert_eq!(auth.as_deref(), Some("Bearer token-1"));
    assert_eq!(
        params.get("prefix").map(String::as_str),
        Some("summer photos/")
    );
    assert_eq!(params.get("max-keys").map(String::as_str), Some("25"));
    assert!(!params.contains_key("continuation-token"));
}

#[tokio::test]
async fn root_listing_omits_the_prefix_parameter() {
    let captured: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::default();

    let router = {
        let captured = captured.clone();
        Router::new().route(
            "/admin/buckets/{bucket}/objects",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let captured = captured.clone();
                async move {
                    captured.lock().unwrap().push(params);
                    Json(json!({"objects": [], "common_prefixes": [], "is_truncated": false}))
                }
            }),
        )
    };

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let request = ListObjectsRequest::new("media").with_cursor("tok-9");
    client.objects().list(&request).await.unwrap();

    let captured = captured.lock().unwrap();
    assert!(!captured[0].contains_key("prefix"));
    assert_eq!(
        captured[0].get("continuation-token").map(String::as_str),
        Some("tok-9")
    );
}

#[tokio::test]
async fn expired_session_notifies_the_guard() {
    let router = Router::new().route(
        "/admin/buckets/{bucket}/objects",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "token expired"})),
            )
        }),
    );

    let base = serve(router).await;
    let guard = Arc::new(CountingSessionGuard::new("stale-token"));
    let client = admin_client(&base, guard.clone());

    let error = client
        .objects()
        .list(&ListObjectsRequest::new("media"))
        .await
        .unwrap_err();

    assert!(error.is_unauthorized());
    assert_eq!(error.to_string(), "Unauthorized: token expired");
    assert_eq!(guard.unauthorized_count(), 1);
}

#[tokio::test]
async fn guard_failure_short_circuits_before_any_request() {
    let hits = Arc::new(AtomicUsize::new(0));

    let router = {
        let hits = hits.clone();
        Router::new().route(
            "/admin/buckets/{bucket}/objects",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({"objects": [], "common_prefixes": [], "is_truncated": false}))
                }
            }),
        )
    };

    let base = serve(router).await;
    let client = admin_client(&base, Arc::new(FailingSessionGuard));

    let error = client
        .objects()
        .list(&ListObjectsRequest::new("media"))
        .await
        .unwrap_err();

    assert!(error.is_unauthorized());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_bucket_maps_to_not_found() {
    let router = Router::new().route(
        "/admin/buckets/{bucket}/objects",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "bucket not found"})),
            )
        }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let error = client
        .objects()
        .list(&ListObjectsRequest::new("missing"))
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "NotFound: bucket not found");
}

#[tokio::test]
async fn server_errors_map_to_unreachable() {
    let router = Router::new().route(
        "/stats",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let error = client.stats().overview().await.unwrap_err();
    assert!(error.is_unreachable());
}

#[tokio::test]
async fn bucket_create_and_delete_use_the_admin_paths() {
    let log: Arc<Mutex<Vec<String>>> = Arc::default();

    let recorder = {
        let log = log.clone();
        move |method: Method, uri: Uri| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(format!("{method} {}", uri.path()));
                StatusCode::OK
            }
        }
    };

    let router = Router::new().route(
        "/admin/buckets/{name}",
        put(recorder.clone()).delete(recorder),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    client.buckets().create("fresh-bucket").await.unwrap();
    client.buckets().delete("fresh-bucket").await.unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        [
            "PUT /admin/buckets/fresh-bucket",
            "DELETE /admin/buckets/fresh-bucket"
        ]
    );
}

#[tokio::test]
async fn invalid_bucket_name_fails_without_a_request() {
    let hits = Arc::new(AtomicUsize::new(0));

    let router = {
        let hits = hits.clone();
        Router::new().route(
            "/admin/buckets/{name}",
            put(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    StatusCode::OK
                }
            }),
        )
    };

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let error = client.buckets().create("Bad_Name").await.unwrap_err();
    assert_eq!(error.kind_str(), "invalid_request");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn bucket_delete_conflict_surfaces_the_service_message() {
    let router = Router::new().route(
        "/admin/buckets/{name}",
        delete(|| async {
            (
                StatusCode::CONFLICT,
                Json(json!({"error": "bucket is not empty"})),
            )
        }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let error = client.buckets().delete("media").await.unwrap_err();
    assert_eq!(error.to_string(), "InvalidRequest: bucket is not empty");
}

#[tokio::test]
async fn bucket_stats_parse_with_the_aggregate_total() {
    let router = Router::new().route(
        "/admin/bucket-stats",
        get(|| async {
            Json(json!({
                "buckets": [
                    {
                        "name": "media",
                        "objects_count": 3,
                        "storage_used_bytes": 3072,
                        "created_at": 1767052800000000000_i64
                    },
                    {
                        "name": "logs",
                        "objects_count": 10,
                        "storage_used_bytes": 1024,
                        "created_at": 1767052800000000000_i64
                    }
                ],
                "total_storage_bytes": 4096
            }))
        }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let stats = client.buckets().stats().await.unwrap();
    assert_eq!(stats.buckets.len(), 2);
    assert_eq!(stats.buckets[0].name, "media");
    assert_eq!(stats.total_storage_bytes, 4096);
    assert_eq!(stats.formatted_total_storage(), "4 KB");
}

#[tokio::test]
async fn user_create_sends_the_full_payload() {
    let bodies: Arc<Mutex<Vec<Value>>> = Arc::default();

    let router = {
        let bodies = bodies.clone();
        Router::new().route(
            "/admin/users",
            post(move |Json(body): Json<Value>| {
                let bodies = bodies.clone();
                async move {
                    bodies.lock().unwrap().push(body);
                    StatusCode::CREATED
                }
            }),
        )
    };

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let new_user = NewUser::new("ops", "initial-password", UserRole::Writer);
    client.users().create(&new_user).await.unwrap();

    let bodies = bodies.lock().unwrap();
    assert_eq!(
        bodies[0],
        json!({"username": "ops", "password": "initial-password", "role": "Writer"})
    );
}

#[tokio::test]
async fn user_update_omits_an_unchanged_password() {
    let bodies: Arc<Mutex<Vec<Value>>> = Arc::default();

    let router = {
        let bodies = bodies.clone();
        Router::new().route(
            "/admin/users/{id}",
            put(move |Json(body): Json<Value>| {
                let bodies = bodies.clone();
                async move {
                    bodies.lock().unwrap().push(body);
                    StatusCode::OK
                }
            }),
        )
    };

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let id = uuid::Uuid::new_v4();
    let update = UserUpdate::new(UserRole::Reader, false);
    client.users().update(id, &update).await.unwrap();

    let bodies = bodies.lock().unwrap();
    assert_eq!(bodies[0], json!({"role": "Reader", "is_active": false}));
}

#[tokio::test]
async fn user_listing_parses_accounts() {
    let router = Router::new().route(
        "/admin/users",
        get(|| async {
            Json(json!({
                "users": [
                    {
                        "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                        "username": "ops",
                        "role": "SuperUser",
                        "access_key": "AKIAEXAMPLE",
                        "created_at": "2026-01-10T09:30:00Z",
                        "updated_at": "2026-02-01T12:00:00Z",
                        "is_active": true
                    },
                    {
                        "id": "57a439d7-35a2-4b4f-9f07-9d4877021f84",
                        "username": "viewer",
                        "role": "Reader",
                        "created_at": "2026-01-12T08:00:00Z",
                        "updated_at": "2026-01-12T08:00:00Z",
                        "is_active": false
                    }
                ]
            }))
        }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let users = client.users().list().await.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].role, UserRole::SuperUser);
    assert!(users[0].has_credentials());
    assert!(!users[1].has_credentials());
    assert!(!users[1].is_active);
}

#[tokio::test]
async fn credentials_issue_and_revoke_round_trip() {
    let log: Arc<Mutex<Vec<String>>> = Arc::default();

    let issue = {
        let log = log.clone();
        move |method: Method, uri: Uri| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(format!("{method} {}", uri.path()));
                Json(json!({"access_key": "AKIAFRESH", "secret_key": "swordfish"}))
            }
        }
    };
    let revoke = {
        let log = log.clone();
        move |method: Method, uri: Uri| {
            let log = log.clone();
            async move {
                log.lock().unwrap().push(format!("{method} {}", uri.path()));
                StatusCode::NO_CONTENT
            }
        }
    };

    let router = Router::new().route(
        "/admin/users/{id}/credentials",
        post(issue).delete(revoke),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let id: uuid::Uuid = "7c9e6679-7425-40de-944b-e07fc1f90ae7".parse().unwrap();
    let credentials = client.users().issue_credentials(id).await.unwrap();
    assert_eq!(credentials.access_key, "AKIAFRESH");
    assert_eq!(credentials.secret_key, "swordfish");

    client.users().revoke_credentials(id).await.unwrap();

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        [
            "POST /admin/users/7c9e6679-7425-40de-944b-e07fc1f90ae7/credentials",
            "DELETE /admin/users/7c9e6679-7425-40de-944b-e07fc1f90ae7/credentials"
        ]
    );
}

#[tokio::test]
async fn service_overview_parses() {
    let router = Router::new().route(
        "/stats",
        get(|| async {
            Json(json!({
                "uptime_seconds": 93784,
                "buckets_count": 4,
                "objects_count": 1200,
                "storage_used_bytes": 5368709120_u64,
                "dedup_unique_blobs": 900,
                "dedup_total_references": 1500,
                "dedup_ratio": 0.4
            }))
        }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let stats = client.stats().overview().await.unwrap();
    assert_eq!(stats.buckets_count, 4);
    assert_eq!(stats.formatted_uptime(), "1d 2h 3m");
    assert_eq!(stats.formatted_dedup_ratio(), "40.0%");
}

#[tokio::test]
async fn page_stream_follows_continuation_tokens() {
    let router = Router::new().route(
        "/admin/buckets/{bucket}/objects",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            match params.get("continuation-token").map(String::as_str) {
                None => Json(json!({
                    "objects": [{
                        "key": "a.txt",
                        "size": 1,
                        "content_type": "text/plain",
                        "last_modified": 0,
                        "etag": "etag-a"
                    }],
                    "common_prefixes": [],
                    "is_truncated": true,
                    "next_continuation_token": "tok-2"
                })),
                Some("tok-2") => Json(json!({
                    "objects": [{
                        "key": "b.txt",
                        "size": 1,
                        "content_type": "text/plain",
                        "last_modified": 0,
                        "etag": "etag-b"
                    }],
                    "common_prefixes": [],
                    "is_truncated": false
                })),
                Some(other) => panic!("unexpected continuation token {other}"),
            }
        }),
    );

    let base = serve(router).await;
    let client = admin_client(&base, static_guard("token-1"));

    let pages: Vec<_> = client
        .objects()
        .pages(ListObjectsRequest::new("media"))
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    let keys: Vec<&str> = pages
        .iter()
        .flat_map(|page| page.objects.iter().map(|entry| entry.key.as_str()))
        .collect();
    assert_eq!(keys, ["a.txt", "b.txt"]);
}
