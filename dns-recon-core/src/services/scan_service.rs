//! Whole-organization scan orchestration

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::services::ServiceContext;
use crate::types::{ARecord, ARecordEntry};

/// Role assumed in every member account.
const ASSUME_ROLE_NAME: &str = "OrganizationAccountAccessRole";
/// Upper bound on concurrently scanned accounts.
const MAX_CONCURRENT_SCANS: usize = 10;

/// Scan orchestrator: fans the per-account work out over a bounded pool and
/// collects the A-record entries as accounts complete.
pub struct ScanService {
    ctx: Arc<ServiceContext>,
}

impl ScanService {
    /// Create a scan service instance
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Scan every ACTIVE member account and return its A records.
    ///
    /// Entries arrive in completion order, so ordering across accounts is
    /// not stable between runs. Per-account failures (role assumption,
    /// listing, even a panicking task) cost only that account's entries;
    /// the run itself always completes.
    pub async fn run(&self) -> Vec<ARecordEntry> {
        let account_ids = self.ctx.account_source.list_active_accounts().await;

        // Each stream element spawns its account task on first poll, so
        // `buffer_unordered` caps live tasks at the pool size while the
        // spawn keeps a panicking account from taking down the run.
        let mut completions = stream::iter(account_ids.iter().cloned())
            .map(|account_id| {
                let ctx = Arc::clone(&self.ctx);
                async move {
                    let handle = tokio::spawn(scan_account(ctx, account_id.clone()));
                    (account_id, handle.await)
                }
            })
            .buffer_unordered(MAX_CONCURRENT_SCANS);

        let mut entries = Vec::new();
        while let Some((account_id, joined)) = completions.next().await {
            match joined {
                Ok(records) => {
                    for record in records {
                        log::info!(
                            "Account {account_id}: Processed domain {} with IPs {:?}",
                            record.name,
                            record.values
                        );
                        entries.push(ARecordEntry {
                            account_id: account_id.clone(),
                            domain: record.name,
                            ips: record.values,
                        });
                    }
                }
                Err(e) => {
                    log::error!("Account {account_id} generated an exception: {e}");
                }
            }
        }

        log::info!("Completed processing {} accounts", account_ids.len());
        entries
    }
}

/// Per-account worker: assume the scan role, then list A records with the
/// assumed credentials. No credentials means no records, never an error.
async fn scan_account(ctx: Arc<ServiceContext>, account_id: String) -> Vec<ARecord> {
    let credentials = match ctx
        .credential_broker
        .assume_role(&account_id, ASSUME_ROLE_NAME)
        .await
    {
        Ok(credentials) => credentials,
        Err(e) => {
            log::error!("{e}");
            return Vec::new();
        }
    };

    ctx.record_lister.list_a_records(&credentials).await
}
