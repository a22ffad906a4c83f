//! AWS credential material.
//!
//! A single credential shape covers both the caller's own base identity (a
//! static key pair from the environment) and the temporary session credentials
//! STS hands back for an assumed role. Session credentials always carry a
//! token; static key pairs never do.

use std::env;
use std::fmt;

/// An AWS access key pair, optionally with an STS session token.
///
/// Credentials are scoped to the request signer that receives them and are
/// never persisted. Session expiry is enforced by AWS, not tracked here.
#[derive(Clone)]
pub struct AwsCredentials {
    /// Access key ID (`AKIA..` / `ASIA..`).
    pub access_key_id: String,
    /// Secret access key. Redacted from `Debug` output.
    pub secret_access_key: String,
    /// Session token, present for STS-issued credentials. Redacted from `Debug` output.
    pub session_token: Option<String>,
}

impl AwsCredentials {
    /// Create credentials from their raw parts.
    #[must_use]
    pub const fn new(
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            session_token,
        }
    }

    /// Load the caller's base identity from the standard AWS environment
    /// variables (`AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY`, and optionally
    /// `AWS_SESSION_TOKEN`).
    ///
    /// Returns `None` when either required variable is unset or empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let access_key_id = env::var("AWS_ACCESS_KEY_ID").ok().filter(|v| !v.is_empty())?;
        let secret_access_key = env::var("AWS_SECRET_ACCESS_KEY")
            .ok()
            .filter(|v| !v.is_empty())?;
        let session_token = env::var("AWS_SESSION_TOKEN").ok().filter(|v| !v.is_empty());

        Some(Self {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }

    /// Whether the key material is unusable (either half of the key pair missing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.access_key_id.is_empty() || self.secret_access_key.is_empty()
    }
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
