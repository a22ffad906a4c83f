//! Zone record listing abstract Trait

use async_trait::async_trait;
use dns_recon_aws::AwsCredentials;

use crate::types::ARecord;

/// Lister of the type-"A" records in whatever account `credentials` unlock.
///
/// Infallible by contract: provider failures are logged by the
/// implementation and surface as missing records, never as an error.
#[async_trait]
pub trait RecordLister: Send + Sync {
    /// Collect every A record reachable with `credentials`.
    ///
    /// Empty credentials short-circuit to an empty listing without touching
    /// the provider.
    async fn list_a_records(&self, credentials: &AwsCredentials) -> Vec<ARecord>;
}
