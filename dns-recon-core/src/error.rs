//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export wire-layer error type
pub use dns_recon_aws::AwsError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Role assumption failed for a member account
    #[error("Failed to assume role in account {account_id}: {source}")]
    RoleAssumption {
        account_id: String,
        #[source]
        source: AwsError,
    },
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
