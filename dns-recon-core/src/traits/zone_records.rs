//! Narrow zone/record read surface of the DNS provider

use async_trait::async_trait;
use dns_recon_aws::{HostedZone, RecordSet};

/// The two read calls the zone walk needs, split out so its skip-and-continue
/// semantics can be driven by mocks.
#[async_trait]
pub trait ZoneRecordsClient: Send + Sync {
    /// List all hosted zones visible to this client.
    async fn list_hosted_zones(&self) -> dns_recon_aws::Result<Vec<HostedZone>>;

    /// List all record sets in one zone.
    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
    ) -> dns_recon_aws::Result<Vec<RecordSet>>;
}
