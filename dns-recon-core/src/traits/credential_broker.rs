//! Cross-account credential acquisition abstract Trait

use async_trait::async_trait;
use dns_recon_aws::AwsCredentials;

use crate::error::CoreResult;

/// Broker of short-lived per-account credentials.
#[async_trait]
pub trait CredentialBroker: Send + Sync {
    /// Assume `role_name` in `account_id` and return the temporary
    /// credentials issued for it.
    ///
    /// # Arguments
    /// * `account_id` - Target member account
    /// * `role_name` - Name of the role to assume in that account
    async fn assume_role(&self, account_id: &str, role_name: &str)
        -> CoreResult<AwsCredentials>;
}
