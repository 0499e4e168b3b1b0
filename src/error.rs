//! Error taxonomy for API and protocol failures.
//!
//! Every external call surfaces its failure as an [`ApiError`] value instead
//! of logging and swallowing it. The CLI layer decides what to print and
//! whether to continue; library code only classifies and propagates.

use thiserror::Error;

/// Failures that can occur during the auth flow or Spotify API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, connection reset, body decode).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP status from a Spotify endpoint.
    #[error("HTTP {status}: {reason}")]
    Http { status: u16, reason: String },

    /// The OAuth callback arrived but no code verifier was stored for
    /// this login attempt.
    #[error("callback received with no stored code verifier")]
    MissingVerifier,

    /// An audio feature kept by the filter has no corresponding track in
    /// the loaded playlist. Indicates the track list and feature list have
    /// diverged; the partition would be unsound if this were ignored.
    #[error("audio feature {0} has no matching track")]
    UnmatchedFeature(String),

    /// Requested PKCE verifier length outside the RFC 7636 bounds.
    #[error("code verifier length {0} outside valid range 43..=128")]
    InvalidVerifierLength(usize),
}

impl ApiError {
    /// Classifies a response: a 2xx passes through, anything else becomes
    /// an `Http` error carrying status and canonical reason.
    pub fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Http {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            })
        }
    }
}
