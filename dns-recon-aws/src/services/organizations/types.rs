//! Wire types for the Organizations JSON 1.1 protocol.

use serde::{Deserialize, Serialize};

/// Request body for `ListAccounts`.
///
/// Serializes to `{}` on the first page; page size is left to the service
/// default.
#[derive(Serialize)]
pub(crate) struct ListAccountsRequest<'a> {
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<&'a str>,
}

/// One page of the organization's account listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListAccountsPage {
    /// Accounts on this page, in service order.
    #[serde(rename = "Accounts", default)]
    pub accounts: Vec<OrgAccount>,
    /// Continuation token, absent on the last page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}

/// A member account as reported by Organizations.
///
/// Only the fields the enumeration needs are decoded; the service also
/// returns `Arn`, `Email`, `Name` and join metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct OrgAccount {
    /// Twelve-digit account id.
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    /// Lifecycle status: `ACTIVE`, `SUSPENDED` or `PENDING_CLOSURE`.
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

impl OrgAccount {
    /// Whether the account is live and worth scanning.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("ACTIVE")
    }
}

/// JSON 1.1 error envelope.
#[derive(Deserialize)]
pub(crate) struct JsonErrorResponse {
    /// Error code, often namespaced as `com.amazonaws.<service>#<Code>`.
    #[serde(rename = "__type", default)]
    pub error_type: Option<String>,
    /// Human-readable detail; the key's casing varies by service.
    #[serde(rename = "Message", alias = "message", default)]
    pub message: Option<String>,
}
