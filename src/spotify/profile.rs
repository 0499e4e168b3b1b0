use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{GetUserPlaylistsResponse, Playlist, Profile},
};

/// Retrieves the authenticated user's profile.
///
/// Uses Spotify's `/me` endpoint with bearer authentication. The profile id
/// is needed later as the owner of the generated playlist.
pub async fn get_profile(token: &str) -> Result<Profile, ApiError> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let profile = ApiError::check(response)?.json::<Profile>().await?;

    Ok(profile)
}

/// Retrieves the authenticated user's playlists.
///
/// First page only (limit 50); pagination is out of scope. Length-based
/// eligibility filtering is applied by the caller, not here.
pub async fn get_playlists(token: &str) -> Result<Vec<Playlist>, ApiError> {
    let api_url = format!("{uri}/me/playlists?limit=50", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let json = ApiError::check(response)?
        .json::<GetUserPlaylistsResponse>()
        .await?;

    Ok(json.items)
}
