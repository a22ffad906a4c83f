//! # dns-recon-aws
//!
//! Hand-rolled AWS clients for cross-account DNS reconnaissance: just the
//! three services the scan needs, signed with Signature Version 4, no SDK.
//!
//! ## Supported Services
//!
//! | Service | Protocol | Operations |
//! |---------|----------|------------|
//! | STS | Query (form POST / XML) | `AssumeRole` |
//! | Organizations | JSON 1.1 | `ListAccounts` |
//! | Route 53 | REST-XML | `ListHostedZones`, `ListResourceRecordSets` |
//!
//! All three are global services; requests go to the well-known endpoints
//! and are signed with a `us-east-1` credential scope.
//!
//! ## Feature Flags
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dns-recon-aws = { version = "0.1" }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_recon_aws::{AwsCredentials, Route53Client, StsClient, role_arn};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Base identity from the environment
//!     let base = AwsCredentials::from_env().ok_or("missing AWS credentials")?;
//!
//!     // 2. Assume the audit role in a member account
//!     let sts = StsClient::new(base);
//!     let arn = role_arn("123456789012", "OrganizationAccountAccessRole");
//!     let assumed = sts.assume_role(&arn, "CrossAccountSession").await?;
//!
//!     // 3. Walk the account's zones
//!     let route53 = Route53Client::new(assumed);
//!     for zone in route53.list_hosted_zones().await? {
//!         for record in route53.list_resource_record_sets(&zone.id).await? {
//!             println!("{} {} {:?}", record.name, record.record_type, record.values);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, AwsError>`](AwsError). The error enum
//! provides structured variants for common failure modes:
//!
//! - [`AwsError::ApiError`] — the service rejected the call (carries the
//!   HTTP status and, when the envelope was parseable, the AWS error code)
//! - [`AwsError::NetworkError`] — network connectivity issue
//! - [`AwsError::Timeout`] — request exceeded the client timeout
//! - [`AwsError::ParseError`] — response body did not match the wire shape
//!
//! Errors are returned as-is; this crate does not retry. Callers decide
//! whether a failure is worth logging, skipping, or aborting over.

mod credentials;
mod error;
mod http;
mod services;
mod sign;
mod utils;

// Re-export credential type
pub use credentials::AwsCredentials;

// Re-export error types
pub use error::{AwsError, Result};

// Re-export service clients and their public wire views
pub use services::{
    HostedZone, ListAccountsPage, OrgAccount, OrganizationsClient, RecordSet, Route53Client,
    StsClient, role_arn,
};
