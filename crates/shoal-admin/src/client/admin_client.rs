//! Administrative API client implementation using reqwest.

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shoal_core::listing::{ListObjectsRequest, ListingPage, ObjectLister};
use shoal_core::{Error, Result, SharedSessionGuard};
use url::Url;

use crate::TRACING_TARGET_CLIENT;
use crate::client::AdminConfig;
use crate::error::{status_error, transport_error};
use crate::operations::{BucketAdmin, ObjectListing, ServiceStats, UserAdmin};

/// Inner client that holds the HTTP client, configuration, and guard.
struct AdminClientInner {
    http: Client,
    config: AdminConfig,
    guard: SharedSessionGuard,
}

impl std::fmt::Debug for AdminClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClientInner")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Client for the storage service's administrative HTTP API.
///
/// Every request is authenticated through the injected [`SessionGuard`]:
/// its token is attached as a bearer credential, and the guard is notified
/// whenever the service answers with `401 Unauthorized`.
///
/// The client is cheap to clone and can be shared across tasks.
///
/// [`SessionGuard`]: shoal_core::SessionGuard
#[derive(Clone, Debug)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

impl AdminClient {
    /// Creates a new client from the given configuration and session guard.
    pub fn new(config: AdminConfig, guard: SharedSessionGuard) -> Result<Self> {
        tracing::debug!(
            target: TRACING_TARGET_CLIENT,
            endpoint = %config.endpoint,
            timeout_ms = config.timeout().as_millis(),
            "Creating admin client"
        );

        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.effective_user_agent())
            .build()
            .map_err(|error| {
                Error::configuration()
                    .with_message("failed to build HTTP client")
                    .with_source(error)
            })?;

        let inner = AdminClientInner {
            http,
            config,
            guard,
        };

        tracing::info!(target: TRACING_TARGET_CLIENT, "Admin client created successfully");

        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Returns the object listing operations.
    pub fn objects(&self) -> ObjectListing {
        ObjectListing::new(self.clone())
    }

    /// Returns the bucket administration operations.
    pub fn buckets(&self) -> BucketAdmin {
        BucketAdmin::new(self.clone())
    }

    /// Returns the user administration operations.
    pub fn users(&self) -> UserAdmin {
        UserAdmin::new(self.clone())
    }

    /// Returns the service statistics operations.
    pub fn stats(&self) -> ServiceStats {
        ServiceStats::new(self.clone())
    }

    /// Builds an endpoint URL from the configured base and path segments.
    pub(crate) fn endpoint_url<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.inner.config.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::configuration().with_message("endpoint URL cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request without a body and decodes the JSON response.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
    ) -> Result<T> {
        let body = self.execute(method, url, None).await?;
        serde_json::from_str(&body).map_err(|error| {
            Error::serialization()
                .with_message("failed to decode response body")
                .with_source(error)
        })
    }

    /// Sends a JSON payload and discards the response body.
    pub(crate) async fn send_payload<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        payload: &B,
    ) -> Result<()> {
        let body = serde_json::to_vec(payload).map_err(|error| {
            Error::serialization()
                .with_message("failed to encode request body")
                .with_source(error)
        })?;
        self.execute(method, url, Some(body)).await?;
        Ok(())
    }

    /// Sends a request without a body and discards the response body.
    pub(crate) async fn send_empty(&self, method: Method, url: Url) -> Result<()> {
        self.execute(method, url, None).await?;
        Ok(())
    }

    /// Executes one authenticated request and returns the response body.
    ///
    /// A `401 Unauthorized` answer notifies the session guard before the
    /// error is returned, so the application can drop the expired session.
    async fn execute(&self, method: Method, url: Url, body: Option<Vec<u8>>) -> Result<String> {
        let token = self.inner.guard.token().await?;

        let mut request = self.inner.http.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.inner.guard.on_unauthorized().await;
        }

        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            return Err(status_error(status, &text));
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl ObjectLister for AdminClient {
    async fn list_objects(&self, request: &ListObjectsRequest) -> Result<ListingPage> {
        self.objects().list(request).await
    }
}
