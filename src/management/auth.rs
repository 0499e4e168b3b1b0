use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify, types::Token};

/// Persists and refreshes the Spotify access token.
///
/// The token is cached as JSON in the platform data directory. Access goes
/// through [`TokenManager::get_valid_token`], which transparently refreshes
/// the token shortly before expiry and re-persists it.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(Self::token_path(), json)
            .await
            .map_err(|e| e.to_string())
    }

    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = spotify::auth::refresh_token(&self.token.refresh_token).await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    /// Whether the token should be refreshed before use.
    ///
    /// Treats the token as expired 4 minutes early to avoid mid-request
    /// expiry. Saturating arithmetic keeps a short-lived token
    /// (`expires_in` below the margin) from underflowing.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= self
            .token
            .obtained_at
            .saturating_add(self.token.expires_in)
            .saturating_sub(240)
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("dancify/cache/token.json");
        path
    }
}
