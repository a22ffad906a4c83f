//! Business logic service layer

mod scan_service;

pub use scan_service::ScanService;

use std::sync::Arc;

use crate::traits::{AccountSource, CredentialBroker, RecordLister};

/// Service context - holds all dependencies
///
/// The platform layer creates this context, injecting its implementations
/// of the three component traits.
pub struct ServiceContext {
    /// Account enumerator
    pub account_source: Arc<dyn AccountSource>,
    /// Credential broker
    pub credential_broker: Arc<dyn CredentialBroker>,
    /// Record lister
    pub record_lister: Arc<dyn RecordLister>,
}

impl ServiceContext {
    /// Create a service context
    #[must_use]
    pub fn new(
        account_source: Arc<dyn AccountSource>,
        credential_broker: Arc<dyn CredentialBroker>,
        record_lister: Arc<dyn RecordLister>,
    ) -> Self {
        Self {
            account_source,
            credential_broker,
            record_lister,
        }
    }
}
