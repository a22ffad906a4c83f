//! AWS Signature Version 4
//!
//! One signer covers all three service clients: STS, Organizations, and
//! Route 53 all accept SigV4 over their global endpoints with a `us-east-1`
//! credential scope.
//! Reference: <https://docs.aws.amazon.com/IAM/latest/UserGuide/reference_sigv.html>

use std::fmt::Write;

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::credentials::AwsCredentials;
use crate::utils::log_sanitizer::truncate_for_log;

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithm label used in the string-to-sign and Authorization header.
const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Credential-scope region for the global endpoints this crate talks to.
pub(crate) const SIGNING_REGION: &str = "us-east-1";

/// Signing inputs for a single request.
///
/// `query` is the raw query string (without `?`), with values already
/// percent-encoded the way they go on the wire — the canonical form sorts it
/// but does not re-encode it.
pub(crate) struct SigningInput<'a> {
    pub method: &'a str,
    pub host: &'a str,
    pub uri: &'a str,
    pub query: &'a str,
    pub payload: &'a str,
    pub service: &'a str,
    pub timestamp: DateTime<Utc>,
}

/// HMAC-SHA256 primitive shared by the key-derivation chain.
fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Sign one request.
///
/// Returns the headers the caller must attach: `x-amz-date`,
/// `x-amz-security-token` when the credentials carry a session token, and
/// `authorization`. The signed-header set is exactly `host` + those amz
/// headers, so the returned list and the canonical form cannot drift apart.
pub(crate) fn sign_request(
    credentials: &AwsCredentials,
    input: &SigningInput<'_>,
) -> Vec<(String, String)> {
    let amz_date = input.timestamp.format("%Y%m%dT%H%M%SZ").to_string();
    let date = input.timestamp.format("%Y%m%d").to_string();

    // 1. Canonical headers: lowercase names, trimmed values, sorted by name.
    let mut headers: Vec<(String, String)> = vec![
        ("host".to_string(), input.host.trim().to_string()),
        ("x-amz-date".to_string(), amz_date.clone()),
    ];
    if let Some(token) = &credentials.session_token {
        headers.push(("x-amz-security-token".to_string(), token.trim().to_string()));
    }
    headers.sort_by(|a, b| a.0.cmp(&b.0));

    let canonical_headers: String = headers.iter().fold(String::new(), |mut acc, (k, v)| {
        let _ = writeln!(acc, "{k}:{v}");
        acc
    });
    let signed_headers = headers
        .iter()
        .map(|(k, _)| k.as_str())
        .collect::<Vec<_>>()
        .join(";");

    // 2. Query string sorted ascending by parameter name.
    let canonical_query = if input.query.is_empty() {
        String::new()
    } else {
        let mut params: Vec<&str> = input.query.split('&').collect();
        params.sort_unstable();
        params.join("&")
    };

    // 3. URI: as-is, except the empty path is "/". No forced trailing slash.
    let canonical_uri = if input.uri.is_empty() { "/" } else { input.uri };

    // 4. Payload hash.
    let hashed_payload = hex::encode(Sha256::digest(input.payload.as_bytes()));

    // 5. Canonical request.
    let canonical_request = format!(
        "{}\n{canonical_uri}\n{canonical_query}\n{canonical_headers}\n{signed_headers}\n{hashed_payload}",
        input.method
    );

    log::debug!("CanonicalRequest:\n{}", truncate_for_log(&canonical_request));

    // 6. String to sign.
    let credential_scope = format!("{date}/{SIGNING_REGION}/{}/aws4_request", input.service);
    let hashed_canonical_request = hex::encode(Sha256::digest(canonical_request.as_bytes()));
    let string_to_sign =
        format!("{ALGORITHM}\n{amz_date}\n{credential_scope}\n{hashed_canonical_request}");

    log::debug!("StringToSign:\n{string_to_sign}");

    // 7. Derive the signing key: AWS4{secret} -> date -> region -> service -> aws4_request.
    let secret_date = hmac_sha256(
        format!("AWS4{}", credentials.secret_access_key).as_bytes(),
        date.as_bytes(),
    );
    let secret_region = hmac_sha256(&secret_date, SIGNING_REGION.as_bytes());
    let secret_service = hmac_sha256(&secret_region, input.service.as_bytes());
    let secret_signing = hmac_sha256(&secret_service, b"aws4_request");
    let signature = hex::encode(hmac_sha256(&secret_signing, string_to_sign.as_bytes()));

    // 8. Authorization header plus the amz headers that went into the signature.
    let authorization = format!(
        "{ALGORITHM} Credential={}/{credential_scope}, SignedHeaders={signed_headers}, Signature={signature}",
        credentials.access_key_id
    );

    let mut out = vec![("x-amz-date".to_string(), amz_date)];
    if let Some(token) = &credentials.session_token {
        out.push(("x-amz-security-token".to_string(), token.clone()));
    }
    out.push(("authorization".to_string(), authorization));
    out
}
