//! Wire scraps shared by the XML-speaking services.
//!
//! STS (Query protocol) and Route 53 (REST-XML) reject requests with the same
//! `<ErrorResponse>` envelope, so its decoding lives here once.

use serde::Deserialize;

use crate::error::AwsError;
use crate::utils::log_sanitizer::truncate_for_log;

/// `<ErrorResponse><Error>..</Error></ErrorResponse>` rejection envelope.
#[derive(Deserialize)]
pub(crate) struct XmlErrorResponse {
    #[serde(rename = "Error")]
    pub error: XmlError,
}

#[derive(Deserialize)]
pub(crate) struct XmlError {
    #[serde(rename = "Code")]
    pub code: Option<String>,
    #[serde(rename = "Message")]
    pub message: Option<String>,
}

/// Map a non-2xx `(status, body)` from an XML service to [`AwsError::ApiError`].
///
/// Falls back to the raw (truncated) body when the envelope does not parse —
/// load-balancer error pages are HTML, not XML.
pub(crate) fn api_error_from_xml(service: &str, status: u16, body: &str) -> AwsError {
    match quick_xml::de::from_str::<XmlErrorResponse>(body) {
        Ok(envelope) => AwsError::ApiError {
            service: service.to_string(),
            status,
            aws_code: envelope.error.code,
            message: envelope.error.message.unwrap_or_default(),
        },
        Err(_) => AwsError::ApiError {
            service: service.to_string(),
            status,
            aws_code: None,
            message: truncate_for_log(body),
        },
    }
}
