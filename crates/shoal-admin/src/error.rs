//! Mapping of transport and HTTP failures into the shared error taxonomy.

use reqwest::StatusCode;
use serde::Deserialize;
use shoal_core::Error;

/// Error payload returned by the administrative API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Converts a transport-level failure into an [`Error`].
///
/// Timeouts and connection failures both mean the service could not be
/// reached; everything else from the HTTP stack is treated the same way.
pub(crate) fn transport_error(error: reqwest::Error) -> Error {
    if error.is_timeout() {
        Error::unreachable()
            .with_message("request timed out")
            .with_source(error)
    } else if error.is_connect() {
        Error::unreachable()
            .with_message("connection failed")
            .with_source(error)
    } else {
        let message = error.to_string();
        Error::unreachable().with_message(message).with_source(error)
    }
}

/// Converts a non-success HTTP status into an [`Error`].
///
/// The service reports failures as `{"error": "..."}`; when the body does
/// not parse, the status line's canonical reason is used instead.
pub(crate) fn status_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|body| body.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        });

    let error = if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Error::unauthorized()
    } else if status == StatusCode::NOT_FOUND {
        Error::not_found()
    } else if status.is_server_error() {
        Error::unreachable()
    } else {
        Error::invalid_request()
    };

    error.with_message(message)
}
