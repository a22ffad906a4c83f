//! Shared HTTP transport for the AWS service clients.
//!
//! Each service client builds and signs its own `RequestBuilder` (the three
//! services speak three different protocols: Query, JSON 1.1, REST-XML), then
//! hands it here for the uniform send/log/read flow and body decoding.
//!
//! There is intentionally no retry layer: every caller of this crate treats a
//! failed call as "log and move on", so a request gets exactly one attempt.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::AwsError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Default connect timeout in seconds.
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default whole-request timeout in seconds.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Create an HTTP client with the crate's timeout configuration.
///
/// The request timeout is the only stall bound in the system; a hung call
/// costs at most `DEFAULT_REQUEST_TIMEOUT_SECS` of one worker's time.
#[must_use]
pub fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Perform an HTTP request and return the raw response.
    ///
    /// Unified processing: sending the request, debug logging, error mapping.
    /// Non-2xx statuses are NOT an error here — each service parses its own
    /// error envelope from the `(status, body)` pair.
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body, signature)
    /// * `service` - AWS service name (for logging and error attribution)
    /// * `method_name` - HTTP method or action name (for logging)
    /// * `target` - URL or API action (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` on any completed exchange
    /// * `Err(AwsError::Timeout | AwsError::NetworkError)` when the exchange itself failed
    pub async fn execute_request(
        request_builder: RequestBuilder,
        service: &str,
        method_name: &str,
        target: &str,
    ) -> Result<(u16, String), AwsError> {
        log::debug!("[{service}] {method_name} {target}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                AwsError::Timeout {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            } else {
                AwsError::NetworkError {
                    service: service.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{service}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| AwsError::NetworkError {
            service: service.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{service}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    pub fn parse_json<T>(response_text: &str, service: &str) -> Result<T, AwsError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{service}] JSON parse failed: {e}");
            log::error!("[{service}] Raw response: {}", truncate_for_log(response_text));
            AwsError::ParseError {
                service: service.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse an XML response body (STS Query protocol, Route 53 REST-XML).
    pub fn parse_xml<T>(response_text: &str, service: &str) -> Result<T, AwsError>
    where
        T: DeserializeOwned,
    {
        quick_xml::de::from_str(response_text).map_err(|e| {
            log::error!("[{service}] XML parse failed: {e}");
            log::error!("[{service}] Raw response: {}", truncate_for_log(response_text));
            AwsError::ParseError {
                service: service.to_string(),
                detail: e.to_string(),
            }
        })
    }
}
