//! Route 53 client.
//!
//! Read-only REST-XML calls against the global endpoint: zone listing and
//! record-set listing, both drained to completion across continuation pages
//! before returning.

mod types;

use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::credentials::AwsCredentials;
use crate::error::Result;
use crate::http::{HttpUtils, create_http_client};
use crate::services::common::api_error_from_xml;
use crate::sign::{SigningInput, sign_request};

use self::types::{ListHostedZonesResponse, ListResourceRecordSetsResponse};
pub use self::types::{HostedZone, RecordSet};

/// Route 53 API endpoint. Global service, signed as `us-east-1`.
const ROUTE53_HOST: &str = "route53.amazonaws.com";
/// Route 53 API version, the first path segment of every request.
const ROUTE53_API_VERSION: &str = "2013-04-01";
/// Service name for signing and log attribution.
const SERVICE: &str = "route53";

/// Route 53 client bound to one set of (typically assumed-role) credentials.
pub struct Route53Client {
    client: Client,
    credentials: AwsCredentials,
}

impl Route53Client {
    /// Create a client that signs requests with `credentials`.
    #[must_use]
    pub fn new(credentials: AwsCredentials) -> Self {
        Self {
            client: create_http_client(),
            credentials,
        }
    }

    /// List every hosted zone in the account, following `NextMarker` pages.
    pub async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        let path = format!("/{ROUTE53_API_VERSION}/hostedzone");
        let mut zones = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let query = match &marker {
                Some(m) => format!("marker={}", urlencoding::encode(m)),
                None => String::new(),
            };
            let page: ListHostedZonesResponse =
                self.get(&path, &query, "ListHostedZones").await?;

            zones.extend(page.hosted_zones.items.into_iter().map(HostedZone::from));

            if !page.is_truncated {
                break;
            }
            match page.next_marker {
                Some(m) => marker = Some(m),
                // Truncated page without a marker; stop rather than loop.
                None => break,
            }
        }

        Ok(zones)
    }

    /// List every record set in a zone, following name/type continuation
    /// pages. Accepts zone ids with or without the `/hostedzone/` prefix.
    pub async fn list_resource_record_sets(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        let path = format!(
            "/{ROUTE53_API_VERSION}/hostedzone/{}/rrset",
            strip_zone_prefix(zone_id)
        );
        let mut records = Vec::new();
        let mut continuation: Option<(String, String, Option<String>)> = None;

        loop {
            let query = match &continuation {
                Some((name, record_type, identifier)) => {
                    let mut q = format!(
                        "name={}&type={}",
                        urlencoding::encode(name),
                        urlencoding::encode(record_type)
                    );
                    if let Some(id) = identifier {
                        q.push_str("&identifier=");
                        q.push_str(&urlencoding::encode(id));
                    }
                    q
                }
                None => String::new(),
            };
            let page: ListResourceRecordSetsResponse =
                self.get(&path, &query, "ListResourceRecordSets").await?;

            records.extend(page.record_sets.items.into_iter().map(RecordSet::from));

            if !page.is_truncated {
                break;
            }
            match (page.next_record_name, page.next_record_type) {
                (Some(name), Some(record_type)) => {
                    continuation = Some((name, record_type, page.next_record_identifier));
                }
                _ => break,
            }
        }

        Ok(records)
    }

    /// Signed GET returning the decoded XML body.
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        method_name: &str,
    ) -> Result<T> {
        let signing = SigningInput {
            method: "GET",
            host: ROUTE53_HOST,
            uri: path,
            query,
            payload: "",
            service: SERVICE,
            timestamp: Utc::now(),
        };
        let signed_headers = sign_request(&self.credentials, &signing);

        let url = if query.is_empty() {
            format!("https://{ROUTE53_HOST}{path}")
        } else {
            format!("https://{ROUTE53_HOST}{path}?{query}")
        };
        let mut request = self.client.get(&url);
        for (name, value) in &signed_headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let (status, response_text) =
            HttpUtils::execute_request(request, SERVICE, "GET", method_name).await?;
        if !(200..300).contains(&status) {
            return Err(api_error_from_xml(SERVICE, status, &response_text));
        }

        HttpUtils::parse_xml(&response_text, SERVICE)
    }
}

/// Zone ids come back from `ListHostedZones` as `/hostedzone/Z...`; the
/// record-set path wants the bare id.
fn strip_zone_prefix(zone_id: &str) -> &str {
    zone_id.strip_prefix("/hostedzone/").unwrap_or(zone_id)
}
