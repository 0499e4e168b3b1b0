use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{
    error::ApiError,
    spotify,
    types::PkceSession,
    warning,
};

/// Handles the OAuth redirect from Spotify.
///
/// Reads the `code` query parameter, reads the stored code verifier from the
/// shared session and performs the PKCE token exchange. On success the token
/// is placed into the session for the waiting auth flow to pick up and the
/// verifier slot is cleared; a failed exchange keeps the verifier so the
/// login attempt can be retried from the browser.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceSession>>>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut session) = state.as_mut() else {
        warning!("{}", ApiError::MissingVerifier);
        return Html("<h4>No login attempt in progress.</h4>");
    };

    let Some(verifier) = session.code_verifier.clone() else {
        warning!("{}", ApiError::MissingVerifier);
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    match spotify::auth::exchange_code_pkce(code, &verifier).await {
        Ok(token) => {
            // The verifier is single-use; drop it once the exchange succeeds.
            session.code_verifier = None;
            session.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
