//! Administrative API client and its configuration.

mod admin_client;
mod admin_config;

pub use admin_client::AdminClient;
pub use admin_config::{AdminConfig, DEFAULT_TIMEOUT};
