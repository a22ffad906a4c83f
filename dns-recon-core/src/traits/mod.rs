//! Scan component abstraction trait definitions

mod account_source;
mod credential_broker;
mod record_lister;
mod zone_records;

pub use account_source::AccountSource;
pub use credential_broker::CredentialBroker;
pub use record_lister::RecordLister;
pub use zone_records::ZoneRecordsClient;
