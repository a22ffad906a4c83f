//! DNS Recon Core Library
//!
//! Core scan logic for the cross-account DNS A-record inventory:
//! - Account enumeration (Account Source)
//! - Per-account role assumption (Credential Broker)
//! - Hosted zone / A-record listing (Record Lister)
//! - Bounded-concurrency orchestration (Scan Service)
//!
//! The three leaf components are trait seams with AWS-backed
//! implementations in [`adapters`]; the entry-point binary wires them into
//! a [`ServiceContext`] and hands it to [`ScanService`].

pub mod adapters;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{ScanService, ServiceContext};
pub use traits::{AccountSource, CredentialBroker, RecordLister, ZoneRecordsClient};
pub use types::{ARecord, ARecordEntry};
