//! Configuration management for dancify.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! callback server address, and the numeric filter bounds.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (filter bounds only)

use dotenv;
use std::{env, path::PathBuf};

/// Default minimum number of tracks a playlist must have to be eligible.
pub const DEFAULT_MIN_PLAYLIST_LENGTH: u32 = 10;
/// Default maximum number of tracks a playlist may have to be eligible.
pub const DEFAULT_MAX_PLAYLIST_LENGTH: u32 = 50;
/// Default lower danceability bound (inclusive).
pub const DEFAULT_MIN_DANCEABILITY: f64 = 0.3;
/// Default upper danceability bound (inclusive).
pub const DEFAULT_MAX_DANCEABILITY: f64 = 0.7;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `dancify/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/dancify/.env`
/// - macOS: `~/Library/Application Support/dancify/.env`
/// - Windows: `%LOCALAPPDATA%/dancify/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an
/// error string if directory creation or file loading fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("dancify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).map_err(|e| {
        format!(
            "Failed to load .env file from {}: {}",
            path.display(),
            e
        )
    })?;
    Ok(())
}

/// Returns the server address for the local OAuth callback server.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID for authentication.
///
/// The client ID is obtained when registering the application with
/// Spotify's developer platform. PKCE needs no client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI.
///
/// This must match the redirect URI registered in the Spotify application
/// settings, e.g. `http://localhost:3000/callback`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions.
///
/// The scope must cover profile read, playlist read/modify, and top-tracks
/// read, e.g.:
/// `user-read-private user-read-email playlist-read-private
/// playlist-modify-public playlist-modify-private user-top-read`
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Numeric bounds applied during playlist selection and track filtering.
///
/// Playlists are only offered for selection when their track count lies in
/// `[min_playlist_length, max_playlist_length]`; tracks are kept when their
/// danceability lies in `[min_danceability, max_danceability]`. Both ranges
/// are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterBounds {
    pub min_playlist_length: u32,
    pub max_playlist_length: u32,
    pub min_danceability: f64,
    pub max_danceability: f64,
}

impl Default for FilterBounds {
    fn default() -> Self {
        FilterBounds {
            min_playlist_length: DEFAULT_MIN_PLAYLIST_LENGTH,
            max_playlist_length: DEFAULT_MAX_PLAYLIST_LENGTH,
            min_danceability: DEFAULT_MIN_DANCEABILITY,
            max_danceability: DEFAULT_MAX_DANCEABILITY,
        }
    }
}

impl FilterBounds {
    /// Builds the bounds from the environment, falling back to defaults for
    /// any variable that is unset or does not parse.
    ///
    /// Recognized variables: `DANCIFY_MIN_PLAYLIST_LENGTH`,
    /// `DANCIFY_MAX_PLAYLIST_LENGTH`, `DANCIFY_MIN_DANCEABILITY`,
    /// `DANCIFY_MAX_DANCEABILITY`.
    pub fn from_env() -> Self {
        FilterBounds {
            min_playlist_length: env_or("DANCIFY_MIN_PLAYLIST_LENGTH", DEFAULT_MIN_PLAYLIST_LENGTH),
            max_playlist_length: env_or("DANCIFY_MAX_PLAYLIST_LENGTH", DEFAULT_MAX_PLAYLIST_LENGTH),
            min_danceability: env_or("DANCIFY_MIN_DANCEABILITY", DEFAULT_MIN_DANCEABILITY),
            max_danceability: env_or("DANCIFY_MAX_DANCEABILITY", DEFAULT_MAX_DANCEABILITY),
        }
    }

    /// Checks that the danceability range is usable: both ends inside the
    /// score domain [0, 1] and min not above max. An inverted or
    /// out-of-domain range would silently keep nothing.
    pub fn validate_danceability(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_danceability)
            || !(0.0..=1.0).contains(&self.max_danceability)
        {
            return Err(format!(
                "danceability bounds {} - {} must lie in 0..=1",
                self.min_danceability, self.max_danceability
            ));
        }
        if self.min_danceability > self.max_danceability {
            return Err(format!(
                "minimum danceability {} is above maximum {}",
                self.min_danceability, self.max_danceability
            ));
        }
        Ok(())
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
