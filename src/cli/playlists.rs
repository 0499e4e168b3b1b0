use tabled::Table;

use crate::{
    config::FilterBounds,
    error, filter, info,
    management::TokenManager,
    spotify,
    types::{Playlist, PlaylistTableRow, Profile},
    warning,
};

/// Lists the playlists eligible for filtering.
///
/// Fetches the profile and the playlist listing concurrently, applies the
/// length bounds, and prints the eligible playlists as a table.
pub async fn list_playlists() {
    let bounds = FilterBounds::from_env();

    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run dancify auth\n Error: {}",
                e
            );
        }
    };
    let token = token_mgr.get_valid_token().await;

    let (profile, playlists) = match fetch_profile_and_playlists(&token).await {
        Ok(result) => result,
        Err(e) => {
            warning!("Failed to fetch profile and playlists: {}", e);
            return;
        }
    };

    let eligible = filter::eligible_playlists(playlists, &bounds);

    info!("Logged in as {}", profile.display_name);
    if eligible.is_empty() {
        warning!(
            "No playlists with {} to {} tracks found.",
            bounds.min_playlist_length,
            bounds.max_playlist_length
        );
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = eligible
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            tracks: p.tracks.total,
            id: p.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

/// Fetches profile and playlists with one valid token.
///
/// The two requests are independent and issued concurrently; the playlist
/// listing is not length-filtered here.
pub(crate) async fn fetch_profile_and_playlists(
    token: &str,
) -> Result<(Profile, Vec<Playlist>), error::ApiError> {
    let (profile, playlists) = tokio::join!(
        spotify::profile::get_profile(token),
        spotify::profile::get_playlists(token)
    );

    Ok((profile?, playlists?))
}
