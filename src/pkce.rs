//! PKCE code verifier and challenge generation (RFC 7636).

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::error::ApiError;

/// Default verifier length; the maximum the protocol allows.
pub const VERIFIER_LENGTH: usize = 128;

/// Generates a random PKCE code verifier of the given length.
///
/// The verifier is drawn from the alphanumeric alphabet using the thread-local
/// CSPRNG. Lengths outside the protocol range 43..=128 are rejected.
pub fn generate_code_verifier(length: usize) -> Result<String, ApiError> {
    if !(43..=128).contains(&length) {
        return Err(ApiError::InvalidVerifierLength(length));
    }

    Ok(rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect())
}

/// Derives the code challenge for a verifier.
///
/// SHA-256 over the UTF-8 bytes of the verifier, base64url-encoded without
/// padding. Deterministic and pure.
pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}
