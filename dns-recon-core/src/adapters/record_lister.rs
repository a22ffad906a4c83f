//! Route 53-backed record listing

use async_trait::async_trait;
use dns_recon_aws::{AwsCredentials, HostedZone, RecordSet, Route53Client};

use crate::traits::{RecordLister, ZoneRecordsClient};
use crate::types::ARecord;

/// Lists A records through Route 53, one short-lived client per credential
/// set so nothing leaks across accounts.
pub struct Route53RecordLister;

impl Route53RecordLister {
    /// Create a lister instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Route53RecordLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordLister for Route53RecordLister {
    async fn list_a_records(&self, credentials: &AwsCredentials) -> Vec<ARecord> {
        if credentials.is_empty() {
            return Vec::new();
        }

        let client = Route53Client::new(credentials.clone());
        let records = collect_zone_a_records(&client).await;
        log::info!("Retrieved {} A records from account", records.len());
        records
    }
}

#[async_trait]
impl ZoneRecordsClient for Route53Client {
    async fn list_hosted_zones(&self) -> dns_recon_aws::Result<Vec<HostedZone>> {
        self.list_hosted_zones().await
    }

    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
    ) -> dns_recon_aws::Result<Vec<RecordSet>> {
        self.list_resource_record_sets(zone_id).await
    }
}

/// Walk every hosted zone and keep the type-"A" record sets that carry
/// inline values.
///
/// A zone-listing failure empties the whole account; a record-listing
/// failure skips that one zone and keeps walking. Alias records carry no
/// inline values and are dropped like any other non-A record.
pub async fn collect_zone_a_records(client: &dyn ZoneRecordsClient) -> Vec<ARecord> {
    let zones = match client.list_hosted_zones().await {
        Ok(zones) => zones,
        Err(e) => {
            log::error!("Failed to list hosted zones: {e}");
            return Vec::new();
        }
    };

    let mut a_records = Vec::new();
    for zone in zones {
        match client.list_resource_record_sets(&zone.id).await {
            Ok(record_sets) => {
                a_records.extend(record_sets.into_iter().filter_map(into_a_record));
            }
            Err(e) => {
                log::error!("Failed to list records for hosted zone {}: {e}", zone.id);
            }
        }
    }
    a_records
}

/// Keep a record set only if it is type "A" with at least one value.
fn into_a_record(record: RecordSet) -> Option<ARecord> {
    if record.record_type != "A" || record.values.is_empty() {
        return None;
    }
    Some(ARecord {
        name: record.name,
        values: record.values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockZoneRecordsClient;

    fn record(name: &str, record_type: &str, values: &[&str]) -> RecordSet {
        RecordSet {
            name: name.to_string(),
            record_type: record_type.to_string(),
            values: values.iter().map(ToString::to_string).collect(),
        }
    }

    #[tokio::test]
    async fn collects_only_a_records_with_values() {
        let client = MockZoneRecordsClient::new()
            .with_zone(
                "Z1",
                "example.com.",
                vec![
                    record("www.example.com.", "A", &["192.0.2.10", "192.0.2.11"]),
                    record("ipv6.example.com.", "AAAA", &["2001:db8::1"]),
                    record("mail.example.com.", "CNAME", &["mx.example.net."]),
                    // Alias record: type A, no inline values.
                    record("cdn.example.com.", "A", &[]),
                ],
            )
            .with_zone("Z2", "example.net.", vec![record("example.net.", "A", &["198.51.100.7"])]);

        let records = collect_zone_a_records(&client).await;

        assert_eq!(
            records,
            vec![
                ARecord {
                    name: "www.example.com.".to_string(),
                    values: vec!["192.0.2.10".to_string(), "192.0.2.11".to_string()],
                },
                ARecord {
                    name: "example.net.".to_string(),
                    values: vec!["198.51.100.7".to_string()],
                },
            ]
        );
    }

    #[tokio::test]
    async fn failing_zone_is_skipped_not_fatal() {
        let client = MockZoneRecordsClient::new()
            .with_failing_zone("Z1", "broken.example.")
            .with_zone("Z2", "example.net.", vec![record("example.net.", "A", &["198.51.100.7"])]);

        let records = collect_zone_a_records(&client).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "example.net.");
    }

    #[tokio::test]
    async fn zone_listing_failure_yields_empty() {
        let client = MockZoneRecordsClient::failing();

        let records = collect_zone_a_records(&client).await;

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn account_without_zones_yields_empty() {
        let client = MockZoneRecordsClient::new();

        let records = collect_zone_a_records(&client).await;

        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn empty_credentials_short_circuit_the_lister() {
        let lister = Route53RecordLister::new();
        let credentials = AwsCredentials::new(String::new(), String::new(), None);

        let records = lister.list_a_records(&credentials).await;

        assert!(records.is_empty());
    }
}
