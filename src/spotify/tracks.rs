use reqwest::Client;

use crate::{
    config,
    error::ApiError,
    types::{AudioFeature, GetAudioFeaturesResponse, GetPlaylistTracksResponse, Track},
};

/// Maximum number of ids per audio-features request (Spotify API limit).
pub const AUDIO_FEATURES_CHUNK: usize = 100;

/// Retrieves the tracks of a playlist.
///
/// First page only (limit 100); pagination is out of scope. Playlist entries
/// wrap the track object, so the items are unwrapped here.
pub async fn get_playlist_tracks(playlist_id: &str, token: &str) -> Result<Vec<Track>, ApiError> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit=100",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client.get(&api_url).bearer_auth(token).send().await?;
    let json = ApiError::check(response)?
        .json::<GetPlaylistTracksResponse>()
        .await?;

    Ok(json.items.into_iter().map(|item| item.track).collect())
}

/// Retrieves audio features for a set of track ids.
///
/// Ids are joined with commas and fetched in batches of
/// [`AUDIO_FEATURES_CHUNK`]; the endpoint rejects larger requests. Null
/// slots in the response (ids Spotify could not resolve) are skipped, so
/// the result can be shorter than the input.
pub async fn get_audio_features(
    track_ids: &[String],
    token: &str,
) -> Result<Vec<AudioFeature>, ApiError> {
    let client = Client::new();
    let mut features = Vec::with_capacity(track_ids.len());

    for chunk in track_ids.chunks(AUDIO_FEATURES_CHUNK) {
        let api_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = &config::spotify_apiurl(),
            ids = chunk.join(",")
        );

        let response = client.get(&api_url).bearer_auth(token).send().await?;
        let json = ApiError::check(response)?
            .json::<GetAudioFeaturesResponse>()
            .await?;

        features.extend(json.audio_features.into_iter().flatten());
    }

    Ok(features)
}
