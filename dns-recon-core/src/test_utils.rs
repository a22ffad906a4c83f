//! Test helper module
//!
//! Mock implementations of the component traits plus a context factory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use dns_recon_aws::{AwsCredentials, AwsError, HostedZone, RecordSet};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{AccountSource, CredentialBroker, RecordLister, ZoneRecordsClient};
use crate::types::ARecord;

/// Build a service context from concrete mocks.
pub fn test_context(
    account_source: MockAccountSource,
    credential_broker: MockCredentialBroker,
    record_lister: MockRecordLister,
) -> Arc<ServiceContext> {
    Arc::new(ServiceContext::new(
        Arc::new(account_source),
        Arc::new(credential_broker),
        Arc::new(record_lister),
    ))
}

// ===== Log capture =====

/// Sink for log records emitted while a test runs, so assertions can check
/// what was logged and at which level.
struct CaptureLogger;

static CAPTURED_LOGS: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;
static LOGGER_INIT: Once = Once::new();

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut captured) = CAPTURED_LOGS.lock() {
            captured.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Install the capturing logger. Process-wide; safe to call from every test
/// that asserts on log output.
pub fn install_capture_logger() {
    LOGGER_INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Debug);
        }
    });
}

/// Records captured so far. All tests in the process feed the same sink, so
/// assert on message content, not on the full sequence.
pub fn captured_logs() -> Vec<(log::Level, String)> {
    CAPTURED_LOGS
        .lock()
        .map(|captured| captured.clone())
        .unwrap_or_default()
}

// ===== MockAccountSource =====

pub struct MockAccountSource {
    account_ids: Vec<String>,
}

impl MockAccountSource {
    pub fn new(account_ids: &[&str]) -> Self {
        Self {
            account_ids: account_ids.iter().map(ToString::to_string).collect(),
        }
    }
}

#[async_trait]
impl AccountSource for MockAccountSource {
    async fn list_active_accounts(&self) -> Vec<String> {
        self.account_ids.clone()
    }
}

// ===== MockCredentialBroker =====

/// Issues fake credentials whose access key id is the account id, so a
/// downstream mock can tell which account's credentials it was handed.
pub struct MockCredentialBroker {
    failing_accounts: Vec<String>,
}

impl MockCredentialBroker {
    pub fn new() -> Self {
        Self {
            failing_accounts: Vec::new(),
        }
    }

    /// Fail role assumption for the listed accounts.
    pub fn failing_for(accounts: &[&str]) -> Self {
        Self {
            failing_accounts: accounts.iter().map(ToString::to_string).collect(),
        }
    }
}

#[async_trait]
impl CredentialBroker for MockCredentialBroker {
    async fn assume_role(
        &self,
        account_id: &str,
        role_name: &str,
    ) -> CoreResult<AwsCredentials> {
        if self.failing_accounts.iter().any(|a| a == account_id) {
            return Err(CoreError::RoleAssumption {
                account_id: account_id.to_string(),
                source: AwsError::ApiError {
                    service: "sts".to_string(),
                    status: 403,
                    aws_code: Some("AccessDenied".to_string()),
                    message: format!("not authorized to assume {role_name}"),
                },
            });
        }
        Ok(AwsCredentials::new(
            account_id.to_string(),
            "mock-secret-key".to_string(),
            Some("mock-session-token".to_string()),
        ))
    }
}

// ===== MockRecordLister =====

/// Returns canned records keyed by the account id baked into the mock
/// credentials' access key id.
pub struct MockRecordLister {
    records: HashMap<String, Vec<ARecord>>,
    panicking_accounts: Vec<String>,
}

impl MockRecordLister {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            panicking_accounts: Vec::new(),
        }
    }

    pub fn with_account_records(mut self, account_id: &str, records: Vec<ARecord>) -> Self {
        self.records.insert(account_id.to_string(), records);
        self
    }

    /// Panic inside the listing call for this account, to exercise task
    /// fault containment.
    pub fn panicking_for(mut self, account_id: &str) -> Self {
        self.panicking_accounts.push(account_id.to_string());
        self
    }
}

#[async_trait]
impl RecordLister for MockRecordLister {
    async fn list_a_records(&self, credentials: &AwsCredentials) -> Vec<ARecord> {
        let account_id = credentials.access_key_id.as_str();
        assert!(
            !self.panicking_accounts.iter().any(|a| a == account_id),
            "synthetic lister panic for account {account_id}"
        );
        self.records.get(account_id).cloned().unwrap_or_default()
    }
}

// ===== MockZoneRecordsClient =====

/// Scriptable zone/record surface for zone-walk tests.
pub struct MockZoneRecordsClient {
    zones_fail: bool,
    zones: Vec<HostedZone>,
    records: HashMap<String, Vec<RecordSet>>,
    failing_zones: Vec<String>,
}

impl MockZoneRecordsClient {
    pub fn new() -> Self {
        Self {
            zones_fail: false,
            zones: Vec::new(),
            records: HashMap::new(),
            failing_zones: Vec::new(),
        }
    }

    /// Fail the zone listing itself.
    pub fn failing() -> Self {
        Self {
            zones_fail: true,
            ..Self::new()
        }
    }

    pub fn with_zone(mut self, zone_id: &str, name: &str, records: Vec<RecordSet>) -> Self {
        self.zones.push(HostedZone {
            id: format!("/hostedzone/{zone_id}"),
            name: name.to_string(),
        });
        self.records
            .insert(format!("/hostedzone/{zone_id}"), records);
        self
    }

    /// A zone that shows up in the listing but whose record call fails.
    pub fn with_failing_zone(mut self, zone_id: &str, name: &str) -> Self {
        self.zones.push(HostedZone {
            id: format!("/hostedzone/{zone_id}"),
            name: name.to_string(),
        });
        self.failing_zones.push(format!("/hostedzone/{zone_id}"));
        self
    }
}

#[async_trait]
impl ZoneRecordsClient for MockZoneRecordsClient {
    async fn list_hosted_zones(&self) -> dns_recon_aws::Result<Vec<HostedZone>> {
        if self.zones_fail {
            return Err(AwsError::ApiError {
                service: "route53".to_string(),
                status: 403,
                aws_code: Some("AccessDenied".to_string()),
                message: "not authorized to list hosted zones".to_string(),
            });
        }
        Ok(self.zones.clone())
    }

    async fn list_resource_record_sets(
        &self,
        zone_id: &str,
    ) -> dns_recon_aws::Result<Vec<RecordSet>> {
        if self.failing_zones.iter().any(|z| z == zone_id) {
            return Err(AwsError::ApiError {
                service: "route53".to_string(),
                status: 400,
                aws_code: Some("Throttling".to_string()),
                message: "Rate exceeded".to_string(),
            });
        }
        Ok(self.records.get(zone_id).cloned().unwrap_or_default())
    }
}
