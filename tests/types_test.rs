use dancify::types::{
    GetAudioFeaturesResponse, GetPlaylistTracksResponse, GetUserPlaylistsResponse, TokenResponse,
};

#[test]
fn test_playlists_response_parses_track_totals() {
    let json = r#"{
        "items": [
            {"id": "p1", "name": "Road Trip", "tracks": {"total": 23}},
            {"id": "p2", "name": "Focus", "tracks": {"total": 7}}
        ]
    }"#;

    let response: GetUserPlaylistsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].tracks.total, 23);
    assert_eq!(response.items[1].name, "Focus");
}

#[test]
fn test_playlist_tracks_response_unwraps_items() {
    let json = r#"{
        "items": [
            {"track": {
                "id": "t1",
                "uri": "spotify:track:t1",
                "name": "Song",
                "album": {"name": "Album", "images": [{"url": "https://img"}]}
            }}
        ]
    }"#;

    let response: GetPlaylistTracksResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].track.uri, "spotify:track:t1");
    assert_eq!(response.items[0].track.album.images[0].url, "https://img");
}

#[test]
fn test_audio_features_response_tolerates_null_slots() {
    // The batch endpoint returns null for ids it cannot resolve
    let json = r#"{
        "audio_features": [
            {"id": "t1", "danceability": 0.42},
            null,
            {"id": "t3", "danceability": 0.77}
        ]
    }"#;

    let response: GetAudioFeaturesResponse = serde_json::from_str(json).unwrap();
    let features: Vec<_> = response.audio_features.into_iter().flatten().collect();
    assert_eq!(features.len(), 2);
    assert_eq!(features[0].id, "t1");
    assert_eq!(features[1].danceability, 0.77);
}

#[test]
fn test_token_response_defaults_optional_fields() {
    // A refresh response may omit refresh_token and scope
    let json = r#"{"access_token": "abc"}"#;

    let response: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.access_token, "abc");
    assert_eq!(response.refresh_token, "");
    assert_eq!(response.scope, "");
    assert_eq!(response.expires_in, 3600);
}

#[test]
fn test_token_response_requires_access_token() {
    let json = r#"{"refresh_token": "only-this"}"#;
    let result: Result<TokenResponse, _> = serde_json::from_str(json);
    assert!(result.is_err());
}
