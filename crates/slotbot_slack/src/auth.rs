// --- File: crates/slotbot_slack/src/auth.rs ---

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_HEADER: &str = "X-Slack-Request-Timestamp";
pub const SIGNATURE_HEADER: &str = "X-Slack-Signature";
/// Requests signed longer ago than this are treated as replays.
pub const MAX_TIMESTAMP_AGE_SECS: i64 = 300;
/// Slash command payloads are small form bodies.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
const SIGNATURE_VERSION: &str = "v0";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing timestamp")]
    MissingTimestamp,
    #[error("Invalid timestamp")]
    InvalidTimestamp,
    #[error("Timestamp too old")]
    StaleTimestamp,
    #[error("Missing signature")]
    MissingSignature,
    #[error("Invalid signature")]
    SignatureMismatch,
    #[error("Failed to read body: {0}")]
    BodyReadFailure(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::BodyReadFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

/// State for the verification middleware: the signing secret, loaded once at start-up.
#[derive(Clone)]
pub struct SlackAuthState {
    signing_secret: Arc<[u8]>,
}

impl SlackAuthState {
    pub fn new(signing_secret: &str) -> Self {
        Self {
            signing_secret: Arc::from(signing_secret.as_bytes()),
        }
    }

    pub fn signing_secret(&self) -> &[u8] {
        &self.signing_secret
    }
}

impl std::fmt::Debug for SlackAuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackAuthState")
            .field("signing_secret", &"<redacted>")
            .finish()
    }
}

/// Timestamp and signature taken from a request that passed the freshness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub timestamp: String,
    pub signature: String,
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
}

/// Checks presence of both headers, then timestamp format and age.
///
/// Only age in the past is bounded; a timestamp ahead of `now` passes.
pub fn check_headers(headers: &HeaderMap, now: i64) -> Result<SignedHeaders, AuthError> {
    let timestamp = header(headers, TIMESTAMP_HEADER).ok_or(AuthError::MissingTimestamp)?;
    let signature = header(headers, SIGNATURE_HEADER).ok_or(AuthError::MissingSignature)?;

    let sent_at: i64 = timestamp
        .parse()
        .map_err(|_| AuthError::InvalidTimestamp)?;
    if now - sent_at > MAX_TIMESTAMP_AGE_SECS {
        return Err(AuthError::StaleTimestamp);
    }

    Ok(SignedHeaders {
        timestamp: timestamp.to_string(),
        signature: signature.to_string(),
    })
}

/// `v0=` + hex(HMAC-SHA256(secret, "v0:{timestamp}:{body}")).
pub fn compute_signature(secret: &[u8], timestamp: &str, body: &[u8]) -> Result<String, AuthError> {
    // HMAC accepts keys of any length; the error arm is unreachable in practice.
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| AuthError::SignatureMismatch)?;
    mac.update(SIGNATURE_VERSION.as_bytes());
    mac.update(b":");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    let digest = mac.finalize().into_bytes();
    Ok(format!("{SIGNATURE_VERSION}={}", hex::encode(digest)))
}

/// Recomputes the signature over the raw body and compares in constant time.
pub fn verify_signature(
    secret: &[u8],
    signed: &SignedHeaders,
    body: &[u8],
) -> Result<(), AuthError> {
    let expected = compute_signature(secret, &signed.timestamp, body)?;
    if constant_time_eq(expected.as_bytes(), signed.signature.as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::SignatureMismatch)
    }
}

/// Buffers the body, verifies the request and hands back a request whose body holds
/// the same bytes.
pub async fn authenticate(
    auth: &SlackAuthState,
    request: Request,
    now: i64,
) -> Result<Request, AuthError> {
    let signed = check_headers(request.headers(), now)?;

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|err| AuthError::BodyReadFailure(err.to_string()))?;

    verify_signature(auth.signing_secret(), &signed, &bytes)?;

    Ok(Request::from_parts(parts, Body::from(bytes)))
}

/// Axum middleware rejecting any request that is not signed by Slack.
///
/// 401 for authentication failures, 500 when the body cannot be read. The next
/// handler only runs for verified requests.
pub async fn verify_slack_signature(
    State(auth): State<Arc<SlackAuthState>>,
    request: Request,
    next: Next,
) -> Response {
    match authenticate(&auth, request, Utc::now().timestamp()).await {
        Ok(request) => {
            debug!("Slack signature verified");
            next.run(request).await
        }
        Err(err @ AuthError::BodyReadFailure(_)) => {
            error!("Failed to read request body: {err}");
            err.into_response()
        }
        Err(err) => {
            warn!("Slack signature verification failed: {err}");
            err.into_response()
        }
    }
}
