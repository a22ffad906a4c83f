//! AWS service clients

/// Shared error-envelope handling used by the XML-protocol clients.
pub(crate) mod common;

mod organizations;
mod route53;
mod sts;

pub use organizations::{ListAccountsPage, OrgAccount, OrganizationsClient};
pub use route53::{HostedZone, RecordSet, Route53Client};
pub use sts::{StsClient, role_arn};
