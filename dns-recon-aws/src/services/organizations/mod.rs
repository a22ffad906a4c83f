//! AWS Organizations client.
//!
//! One operation: `ListAccounts` over the JSON 1.1 protocol, exposed page by
//! page — the caller drives the `NextToken` loop, so an enumeration that dies
//! mid-flight keeps the pages it already has.

mod types;

use chrono::Utc;
use reqwest::Client;

use crate::credentials::AwsCredentials;
use crate::error::{AwsError, Result};
use crate::http::{HttpUtils, create_http_client};
use crate::sign::{SigningInput, sign_request};
use crate::utils::log_sanitizer::truncate_for_log;

use self::types::{JsonErrorResponse, ListAccountsRequest};
pub use self::types::{ListAccountsPage, OrgAccount};

/// Organizations API endpoint. The service is homed in `us-east-1`.
const ORGANIZATIONS_HOST: &str = "organizations.us-east-1.amazonaws.com";
/// JSON 1.1 target for the account listing.
const TARGET_LIST_ACCOUNTS: &str = "AWSOrganizationsV20161128.ListAccounts";
/// Content type for the JSON 1.1 protocol.
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";
/// Service name for signing and log attribution.
const SERVICE: &str = "organizations";

/// Organizations client, signing with a fixed base identity.
pub struct OrganizationsClient {
    client: Client,
    credentials: AwsCredentials,
}

impl OrganizationsClient {
    /// Create a client that signs `ListAccounts` calls with `credentials`.
    #[must_use]
    pub fn new(credentials: AwsCredentials) -> Self {
        Self {
            client: create_http_client(),
            credentials,
        }
    }

    /// Fetch one page of the organization's member accounts.
    ///
    /// Pass the previous page's `next_token` to continue; `None` starts over.
    pub async fn list_accounts(&self, next_token: Option<&str>) -> Result<ListAccountsPage> {
        let body = ListAccountsRequest { next_token };
        let payload =
            serde_json::to_string(&body).map_err(|e| AwsError::SerializationError {
                service: SERVICE.to_string(),
                detail: e.to_string(),
            })?;

        let signing = SigningInput {
            method: "POST",
            host: ORGANIZATIONS_HOST,
            uri: "/",
            query: "",
            payload: &payload,
            service: SERVICE,
            timestamp: Utc::now(),
        };
        let signed_headers = sign_request(&self.credentials, &signing);

        let url = format!("https://{ORGANIZATIONS_HOST}/");
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", CONTENT_TYPE)
            .header("X-Amz-Target", TARGET_LIST_ACCOUNTS);
        for (name, value) in &signed_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, SERVICE, "POST", TARGET_LIST_ACCOUNTS).await?;
        if !(200..300).contains(&status) {
            return Err(api_error_from_json(status, &response_text));
        }

        HttpUtils::parse_json(&response_text, SERVICE)
    }
}

/// Map a non-2xx `(status, body)` from the JSON 1.1 protocol to [`AwsError::ApiError`].
///
/// JSON 1.1 reports the error code in `__type`, sometimes namespaced
/// (`com.amazonaws.organizations#AccessDeniedException`).
fn api_error_from_json(status: u16, body: &str) -> AwsError {
    let (aws_code, message) = match serde_json::from_str::<JsonErrorResponse>(body) {
        Ok(envelope) => {
            let code = envelope
                .error_type
                .map(|t| t.rsplit('#').next().unwrap_or_default().to_string());
            (code, envelope.message.unwrap_or_default())
        }
        Err(_) => (None, truncate_for_log(body)),
    };

    AwsError::ApiError {
        service: SERVICE.to_string(),
        status,
        aws_code,
        message,
    }
}
