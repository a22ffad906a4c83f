//! Account enumeration abstract Trait

use async_trait::async_trait;

/// Source of the member accounts to scan.
///
/// Infallible by contract: enumeration failure is logged by the
/// implementation and surfaces as a shorter (possibly empty) list, never as
/// an error.
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// List the ids of all ACTIVE member accounts.
    async fn list_active_accounts(&self) -> Vec<String>;
}
