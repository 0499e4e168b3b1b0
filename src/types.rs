use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Wire shape of the token endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Shared state for one PKCE login attempt.
///
/// The verifier is written before the browser redirect and taken exactly once
/// by the callback handler; it is cleared on a successful exchange so no PKCE
/// material outlives the handshake.
#[derive(Debug, Clone)]
pub struct PkceSession {
    pub code_verifier: Option<String>,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: TracksRef,
}

/// Track-count stub embedded in playlist listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksRef {
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlaylistTracksResponse {
    pub items: Vec<PlaylistTrackItem>,
}

/// Playlist entries wrap the actual track object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
}

/// The batch endpoint returns a null slot for ids it cannot resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeature>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeature {
    pub id: String,
    pub danceability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u32,
    pub id: String,
}

#[derive(Tabled)]
pub struct DroppedTrackRow {
    pub name: String,
    pub album: String,
    pub danceability: String,
}
