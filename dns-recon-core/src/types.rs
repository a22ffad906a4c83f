//! Domain types carried through the scan

use serde::Serialize;

/// One type-"A" record set: a domain name with its address values.
///
/// Names and value order are kept exactly as the provider returns them
/// (trailing dot included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ARecord {
    /// Fully qualified record name.
    pub name: String,
    /// IPv4 addresses in provider order.
    pub values: Vec<String>,
}

/// The unit of scan output: one A record attributed to its owning account.
///
/// Serialized field names match the inventory's established JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ARecordEntry {
    /// Owning member account.
    #[serde(rename = "AccountID")]
    pub account_id: String,
    /// Record name.
    #[serde(rename = "Domain")]
    pub domain: String,
    /// IPv4 addresses in provider order.
    #[serde(rename = "IPs")]
    pub ips: Vec<String>,
}
