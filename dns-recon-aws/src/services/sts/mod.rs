//! AWS Security Token Service client.
//!
//! One operation: `AssumeRole` over the Query protocol — a form-encoded POST
//! against the global endpoint, answered in XML. Requests are signed with the
//! caller's base identity; the returned session credentials are what the rest
//! of the system signs with inside the target account.

mod types;

use chrono::Utc;
use reqwest::Client;

use crate::credentials::AwsCredentials;
use crate::error::{AwsError, Result};
use crate::http::{HttpUtils, create_http_client};
use crate::services::common::api_error_from_xml;
use crate::sign::{SigningInput, sign_request};

use self::types::AssumeRoleResponse;

/// STS API endpoint (global).
const STS_HOST: &str = "sts.amazonaws.com";
/// Query protocol API version.
const STS_API_VERSION: &str = "2011-06-15";
/// Service name for signing and log attribution.
const SERVICE: &str = "sts";

/// Format the canonical IAM role reference for a cross-account role.
#[must_use]
pub fn role_arn(account_id: &str, role_name: &str) -> String {
    format!("arn:aws:iam::{account_id}:role/{role_name}")
}

/// STS client, signing with a fixed base identity.
pub struct StsClient {
    client: Client,
    credentials: AwsCredentials,
}

impl StsClient {
    /// Create a client that signs `AssumeRole` calls with `credentials`.
    #[must_use]
    pub fn new(credentials: AwsCredentials) -> Self {
        Self {
            client: create_http_client(),
            credentials,
        }
    }

    /// Assume `role_arn` under `session_name`, returning the temporary
    /// session credentials AWS issues for it.
    ///
    /// Session duration is left to the service default; expiry is enforced by
    /// AWS and not tracked on this side.
    pub async fn assume_role(&self, role_arn: &str, session_name: &str) -> Result<AwsCredentials> {
        let payload = format!(
            "Action=AssumeRole&Version={STS_API_VERSION}&RoleArn={}&RoleSessionName={}",
            urlencoding::encode(role_arn),
            urlencoding::encode(session_name),
        );

        let signing = SigningInput {
            method: "POST",
            host: STS_HOST,
            uri: "/",
            query: "",
            payload: &payload,
            service: SERVICE,
            timestamp: Utc::now(),
        };
        let signed_headers = sign_request(&self.credentials, &signing);

        let url = format!("https://{STS_HOST}/");
        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded");
        for (name, value) in &signed_headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let request = request.body(payload);

        let (status, response_text) =
            HttpUtils::execute_request(request, SERVICE, "POST", "AssumeRole").await?;
        if !(200..300).contains(&status) {
            return Err(api_error_from_xml(SERVICE, status, &response_text));
        }

        let response: AssumeRoleResponse = HttpUtils::parse_xml(&response_text, SERVICE)?;
        let issued = response.result.credentials;
        if issued.access_key_id.is_empty() || issued.secret_access_key.is_empty() {
            return Err(AwsError::ParseError {
                service: SERVICE.to_string(),
                detail: "AssumeRoleResponse carried empty credential fields".to_string(),
            });
        }

        Ok(AwsCredentials::new(
            issued.access_key_id,
            issued.secret_access_key,
            Some(issued.session_token),
        ))
    }
}
