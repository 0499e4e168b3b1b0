use std::{collections::HashMap, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::FilterBounds,
    error, filter, info,
    management::TokenManager,
    spotify, success,
    types::{DroppedTrackRow, Playlist, Track},
    warning,
};

/// Tracks-per-request limit of the add-tracks endpoint.
const ADD_TRACKS_CHUNK: usize = 100;

/// Runs the full filter pipeline for one playlist.
///
/// Resolves the playlist among the eligible set, fetches its tracks and
/// their audio features, partitions the tracks by danceability, creates
/// `"<name> - Filtered"` under the authenticated user and fills it with the
/// kept tracks. The dropped tracks are reported as a table either way; a
/// failed playlist write does not suppress that report.
pub async fn generate(selector: String, min: Option<f64>, max: Option<f64>) {
    let mut bounds = FilterBounds::from_env();
    if let Some(min) = min {
        bounds.min_danceability = min;
    }
    if let Some(max) = max {
        bounds.max_danceability = max;
    }
    if let Err(e) = bounds.validate_danceability() {
        error!("Invalid danceability range: {}", e);
    }

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

    let (profile, playlists) = match super::playlists::fetch_profile_and_playlists(&token).await {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to fetch profile and playlists: {}", e);
        }
    };

    let eligible = filter::eligible_playlists(playlists, &bounds);
    let playlist = match resolve_playlist(&eligible, &selector) {
        Some(playlist) => playlist.clone(),
        None => {
            error!(
                "No eligible playlist matches '{}'. Run dancify playlists to list candidates.",
                selector
            );
        }
    };

    info!(
        "Filtering '{}' to danceability {} - {}",
        playlist.name, bounds.min_danceability, bounds.max_danceability
    );

    let tracks = match spotify::tracks::get_playlist_tracks(&playlist.id, &token).await {
        Ok(tracks) => tracks,
        Err(e) => {
            error!("Failed to fetch playlist tracks: {}", e);
        }
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching audio features...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let track_ids: Vec<String> = tracks.iter().map(|t| t.id.clone()).collect();
    let features = match spotify::tracks::get_audio_features(&track_ids, &token).await {
        Ok(features) => {
            pb.finish_and_clear();
            features
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch audio features: {}", e);
        }
    };

    if features.len() < tracks.len() {
        warning!(
            "Audio features missing for {} of {} tracks; those tracks will be dropped.",
            tracks.len() - features.len(),
            tracks.len()
        );
    }

    // id -> danceability over all features, for the dropped-tracks report
    let danceability: HashMap<String, f64> = features
        .iter()
        .map(|f| (f.id.clone(), f.danceability))
        .collect();

    let kept_features = filter::features_in_range(features, &bounds);
    let partition = match filter::partition_tracks(&tracks, &kept_features) {
        Ok(partition) => partition,
        Err(e) => {
            error!("Track/feature mismatch: {}", e);
        }
    };

    info!(
        "Keeping {} of {} tracks",
        partition.kept.len(),
        tracks.len()
    );

    if partition.kept.is_empty() {
        warning!("No tracks fall inside the danceability range; nothing to generate.");
        report_dropped(&partition.dropped, &danceability);
        return;
    }

    let new_name = format!("{} - Filtered", playlist.name);
    match spotify::playlist::create(&profile.id, new_name, &token).await {
        Ok(created) => {
            let uris: Vec<String> = partition.kept.iter().map(|t| t.uri.clone()).collect();
            let mut add_failed = false;
            for chunk in uris.chunks(ADD_TRACKS_CHUNK) {
                if let Err(e) =
                    spotify::playlist::add_tracks(&created.id, chunk.to_vec(), &token).await
                {
                    warning!("Failed to add tracks to the new playlist: {}", e);
                    add_failed = true;
                    break;
                }
            }

            if !add_failed {
                success!(
                    "New filtered playlist created: https://open.spotify.com/playlist/{}",
                    created.id
                );
            }
        }
        Err(e) => {
            warning!("Failed to create new playlist: {}", e);
        }
    }

    report_dropped(&partition.dropped, &danceability);
}

/// Resolves the selector against the eligible playlists, by id first, then
/// by case-insensitive name.
fn resolve_playlist<'a>(playlists: &'a [Playlist], selector: &str) -> Option<&'a Playlist> {
    playlists
        .iter()
        .find(|p| p.id == selector)
        .or_else(|| {
            playlists
                .iter()
                .find(|p| p.name.to_lowercase() == selector.to_lowercase())
        })
}

fn report_dropped(dropped: &[Track], danceability: &HashMap<String, f64>) {
    if dropped.is_empty() {
        success!("No tracks were dropped.");
        return;
    }

    info!("Dropped {} tracks:", dropped.len());
    let table_rows: Vec<DroppedTrackRow> = dropped
        .iter()
        .map(|t| DroppedTrackRow {
            name: t.name.clone(),
            album: t.album.name.clone(),
            danceability: danceability
                .get(&t.id)
                .map(|d| format!("{:.2}", d))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
