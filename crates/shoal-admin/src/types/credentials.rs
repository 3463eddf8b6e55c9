//! Issued S3 credential pairs.

use serde::{Deserialize, Serialize};

/// An S3 credential pair issued for a user account.
///
/// The secret key is shown exactly once by the service. It is masked in
/// debug output and never serialized back out.
#[derive(Clone, Serialize, Deserialize)]
pub struct S3Credentials {
    /// Public access key, also listed on the user record.
    pub access_key: String,
    /// Private secret key.
    #[serde(skip_serializing)]
    pub secret_key: String,
}

impl std::fmt::Debug for S3Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"***")
            .finish()
    }
}
