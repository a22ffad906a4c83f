//! Wire types for the Route 53 REST-XML protocol.
//!
//! The raw XML shapes stay private; callers get the flattened
//! [`HostedZone`] and [`RecordSet`] views.

use serde::Deserialize;

// ============================================================================
// Public views
// ============================================================================

/// A hosted zone, reduced to what the record walk needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    /// Zone id as returned by the API, usually `/hostedzone/Z...`.
    pub id: String,
    /// Zone apex name, with trailing dot.
    pub name: String,
}

/// One resource record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    /// Fully qualified record name, with trailing dot.
    pub name: String,
    /// Record type: `A`, `AAAA`, `CNAME`, ...
    pub record_type: String,
    /// Record values. Empty for alias records, which carry an
    /// `AliasTarget` instead of resource records.
    pub values: Vec<String>,
}

// ============================================================================
// XML shapes
// ============================================================================

#[derive(Deserialize)]
pub(crate) struct ListHostedZonesResponse {
    #[serde(rename = "HostedZones", default)]
    pub hosted_zones: HostedZoneList,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextMarker", default)]
    pub next_marker: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct HostedZoneList {
    #[serde(rename = "HostedZone", default)]
    pub items: Vec<HostedZoneXml>,
}

#[derive(Deserialize)]
pub(crate) struct HostedZoneXml {
    #[serde(rename = "Id", default)]
    pub id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
}

impl From<HostedZoneXml> for HostedZone {
    fn from(xml: HostedZoneXml) -> Self {
        Self {
            id: xml.id,
            name: xml.name,
        }
    }
}

#[derive(Deserialize)]
pub(crate) struct ListResourceRecordSetsResponse {
    #[serde(rename = "ResourceRecordSets", default)]
    pub record_sets: RecordSetList,
    #[serde(rename = "IsTruncated", default)]
    pub is_truncated: bool,
    #[serde(rename = "NextRecordName", default)]
    pub next_record_name: Option<String>,
    #[serde(rename = "NextRecordType", default)]
    pub next_record_type: Option<String>,
    #[serde(rename = "NextRecordIdentifier", default)]
    pub next_record_identifier: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct RecordSetList {
    #[serde(rename = "ResourceRecordSet", default)]
    pub items: Vec<RecordSetXml>,
}

#[derive(Deserialize)]
pub(crate) struct RecordSetXml {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub record_type: String,
    /// Absent on alias records.
    #[serde(rename = "ResourceRecords", default)]
    pub resource_records: Option<ResourceRecordList>,
}

#[derive(Deserialize, Default)]
pub(crate) struct ResourceRecordList {
    #[serde(rename = "ResourceRecord", default)]
    pub items: Vec<ResourceRecordXml>,
}

#[derive(Deserialize)]
pub(crate) struct ResourceRecordXml {
    #[serde(rename = "Value", default)]
    pub value: String,
}

impl From<RecordSetXml> for RecordSet {
    fn from(xml: RecordSetXml) -> Self {
        Self {
            name: xml.name,
            record_type: xml.record_type,
            values: xml
                .resource_records
                .map(|list| list.items.into_iter().map(|r| r.value).collect())
                .unwrap_or_default(),
        }
    }
}
