use serde::{Deserialize, Serialize};

/// Unified error type for all AWS API operations in this crate.
///
/// Each variant includes a `service` field identifying which AWS service produced
/// the error (`"sts"`, `"organizations"`, `"route53"`), plus variant-specific
/// context. All variants are serializable for structured error reporting.
///
/// Failures are deliberately coarse: callers of this crate log and skip, they do
/// not branch on error codes, so API-level rejections collapse into a single
/// [`ApiError`](Self::ApiError) variant instead of a per-code taxonomy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum AwsError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        service: String,
        /// Error details.
        detail: String,
    },

    /// The service rejected the request (non-2xx response).
    ApiError {
        /// Service that produced the error.
        service: String,
        /// HTTP status of the response.
        status: u16,
        /// AWS error code extracted from the response body, if available.
        aws_code: Option<String>,
        /// Error message extracted from the response body.
        message: String,
    },

    /// Failed to parse the service's response body.
    ParseError {
        /// Service that produced the error.
        service: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Service that produced the error.
        service: String,
        /// Details about the serialization failure.
        detail: String,
    },
}

impl std::fmt::Display for AwsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { service, detail } => {
                write!(f, "[{service}] Network error: {detail}")
            }
            Self::Timeout { service, detail } => {
                write!(f, "[{service}] Request timeout: {detail}")
            }
            Self::ApiError {
                service,
                status,
                aws_code,
                message,
            } => {
                if let Some(code) = aws_code {
                    write!(f, "[{service}] API error {status} ({code}): {message}")
                } else {
                    write!(f, "[{service}] API error {status}: {message}")
                }
            }
            Self::ParseError { service, detail } => {
                write!(f, "[{service}] Parse error: {detail}")
            }
            Self::SerializationError { service, detail } => {
                write!(f, "[{service}] Serialization error: {detail}")
            }
        }
    }
}

impl std::error::Error for AwsError {}

/// Convenience type alias for `Result<T, AwsError>`.
pub type Result<T> = std::result::Result<T, AwsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = AwsError::NetworkError {
            service: "sts".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[sts] Network error: connection refused");
    }

    #[test]
    fn display_timeout() {
        let e = AwsError::Timeout {
            service: "route53".to_string(),
            detail: "30s elapsed".to_string(),
        };
        assert_eq!(e.to_string(), "[route53] Request timeout: 30s elapsed");
    }

    #[test]
    fn display_api_error_with_code() {
        let e = AwsError::ApiError {
            service: "sts".to_string(),
            status: 403,
            aws_code: Some("AccessDenied".to_string()),
            message: "not authorized".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[sts] API error 403 (AccessDenied): not authorized"
        );
    }

    #[test]
    fn display_api_error_without_code() {
        let e = AwsError::ApiError {
            service: "organizations".to_string(),
            status: 500,
            aws_code: None,
            message: "internal failure".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[organizations] API error 500: internal failure"
        );
    }

    #[test]
    fn display_parse_error() {
        let e = AwsError::ParseError {
            service: "route53".to_string(),
            detail: "bad xml".to_string(),
        };
        assert_eq!(e.to_string(), "[route53] Parse error: bad xml");
    }

    #[test]
    fn display_serialization_error() {
        let e = AwsError::SerializationError {
            service: "organizations".to_string(),
            detail: "failed".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[organizations] Serialization error: failed"
        );
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = AwsError::ApiError {
            service: "sts".to_string(),
            status: 403,
            aws_code: Some("AccessDenied".to_string()),
            message: "denied".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"ApiError\""));
        assert!(json.contains("\"status\":403"));
    }

    #[test]
    fn deserialize_all_variants() {
        let variants: Vec<AwsError> = vec![
            AwsError::NetworkError {
                service: "t".into(),
                detail: "d".into(),
            },
            AwsError::Timeout {
                service: "t".into(),
                detail: "30s".into(),
            },
            AwsError::ApiError {
                service: "t".into(),
                status: 404,
                aws_code: None,
                message: "missing".into(),
            },
            AwsError::ParseError {
                service: "t".into(),
                detail: "bad".into(),
            },
            AwsError::SerializationError {
                service: "t".into(),
                detail: "fail".into(),
            },
        ];

        for v in &variants {
            let json = serde_json::to_string(v).unwrap();
            let back: AwsError = serde_json::from_str(&json).unwrap();
            assert_eq!(back.to_string(), v.to_string());
        }
    }
}
