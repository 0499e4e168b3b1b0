//! Pure filtering and partition logic.
//!
//! Everything here is free of I/O: the CLI layer fetches playlists, tracks
//! and audio features, then hands them to these functions. Keeping the
//! set logic pure makes the partition invariants directly testable.

use std::collections::{HashMap, HashSet};

use crate::{
    config::FilterBounds,
    error::ApiError,
    types::{AudioFeature, Playlist, Track},
};

/// The split of a playlist's tracks into the subset to carry over into the
/// generated playlist and the subset left behind.
///
/// By construction `kept` and `dropped` are disjoint by track id and their
/// union is the original track list.
#[derive(Debug, Clone)]
pub struct TrackPartition {
    pub kept: Vec<Track>,
    pub dropped: Vec<Track>,
}

/// Retains only playlists whose track count lies within the configured
/// length bounds, inclusive on both ends.
pub fn eligible_playlists(playlists: Vec<Playlist>, bounds: &FilterBounds) -> Vec<Playlist> {
    playlists
        .into_iter()
        .filter(|p| {
            p.tracks.total >= bounds.min_playlist_length
                && p.tracks.total <= bounds.max_playlist_length
        })
        .collect()
}

/// Retains only features whose danceability lies within the configured
/// range, inclusive on both ends.
pub fn features_in_range(features: Vec<AudioFeature>, bounds: &FilterBounds) -> Vec<AudioFeature> {
    features
        .into_iter()
        .filter(|f| {
            f.danceability >= bounds.min_danceability && f.danceability <= bounds.max_danceability
        })
        .collect()
}

/// Partitions the loaded tracks against the kept features.
///
/// Tracks are resolved by id through a map built once from the track list,
/// and the dropped set is the id-based complement of the kept set. A kept
/// feature whose id matches no loaded track makes the partition unsound and
/// is reported as [`ApiError::UnmatchedFeature`] instead of being skipped.
pub fn partition_tracks(
    tracks: &[Track],
    kept_features: &[AudioFeature],
) -> Result<TrackPartition, ApiError> {
    let by_id: HashMap<&str, &Track> = tracks.iter().map(|t| (t.id.as_str(), t)).collect();

    let mut kept = Vec::with_capacity(kept_features.len());
    for feature in kept_features {
        match by_id.get(feature.id.as_str()) {
            Some(track) => kept.push((*track).clone()),
            None => return Err(ApiError::UnmatchedFeature(feature.id.clone())),
        }
    }

    let kept_ids: HashSet<&str> = kept.iter().map(|t| t.id.as_str()).collect();
    let dropped = tracks
        .iter()
        .filter(|t| !kept_ids.contains(t.id.as_str()))
        .cloned()
        .collect();

    Ok(TrackPartition { kept, dropped })
}
