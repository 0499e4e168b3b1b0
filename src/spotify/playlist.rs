use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{
        AddTracksToPlaylistRequest, AddTracksToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse,
    },
};

/// Creates a playlist owned by the given user.
///
/// POSTs `{name, public}` to `/users/{id}/playlists`. The new playlist is
/// public by default, matching the generated-playlist contract.
pub async fn create(
    user_id: &str,
    name: String,
    token: &str,
) -> Result<CreatePlaylistResponse, ApiError> {
    let api_url = format!(
        "{uri}/users/{id}/playlists",
        uri = &config::spotify_apiurl(),
        id = user_id
    );

    let body = CreatePlaylistRequest { name, public: true };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    let json = ApiError::check(response)?
        .json::<CreatePlaylistResponse>()
        .await?;

    Ok(json)
}

/// Adds tracks to a playlist by URI.
///
/// The endpoint accepts at most 100 URIs per request; callers chunk before
/// invoking.
pub async fn add_tracks(
    playlist_id: &str,
    uris: Vec<String>,
    token: &str,
) -> Result<AddTracksToPlaylistResponse, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let body = AddTracksToPlaylistRequest { uris };

    let client = Client::new();
    let response = client
        .post(&api_url)
        .bearer_auth(token)
        .json(&body)
        .send()
        .await?;
    let json = ApiError::check(response)?
        .json::<AddTracksToPlaylistResponse>()
        .await?;

    Ok(json)
}
