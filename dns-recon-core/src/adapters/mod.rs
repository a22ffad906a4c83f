//! AWS-backed implementations of the scan component traits

mod account_source;
mod credential_broker;
mod record_lister;

pub use account_source::OrganizationsAccountSource;
pub use credential_broker::StsCredentialBroker;
pub use record_lister::{Route53RecordLister, collect_zone_a_records};
