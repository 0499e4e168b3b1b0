use std::collections::HashSet;

use dancify::config::FilterBounds;
use dancify::error::ApiError;
use dancify::filter::{eligible_playlists, features_in_range, partition_tracks};
use dancify::types::{AlbumImage, AudioFeature, Playlist, Track, TrackAlbum, TracksRef};

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str, total: u32) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        tracks: TracksRef { total },
    }
}

// Helper function to create a test track
fn create_test_track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: name.to_string(),
        album: TrackAlbum {
            name: format!("{} album", name),
            images: vec![AlbumImage {
                url: format!("https://img.example/{}", id),
            }],
        },
    }
}

fn create_test_feature(id: &str, danceability: f64) -> AudioFeature {
    AudioFeature {
        id: id.to_string(),
        danceability,
    }
}

#[test]
fn test_eligible_playlists_bounds_are_inclusive() {
    let playlists = vec![
        create_test_playlist("p1", "Tiny", 5),
        create_test_playlist("p2", "Lower bound", 10),
        create_test_playlist("p3", "Upper bound", 50),
        create_test_playlist("p4", "Too long", 51),
    ];

    let eligible = eligible_playlists(playlists, &FilterBounds::default());

    let ids: Vec<&str> = eligible.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p2", "p3"]);
}

#[test]
fn test_eligible_playlists_custom_bounds() {
    let playlists = vec![
        create_test_playlist("p1", "One", 1),
        create_test_playlist("p2", "Two", 2),
        create_test_playlist("p3", "Three", 3),
    ];

    let bounds = FilterBounds {
        min_playlist_length: 2,
        max_playlist_length: 2,
        ..FilterBounds::default()
    };
    let eligible = eligible_playlists(playlists, &bounds);

    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].id, "p2");
}

#[test]
fn test_features_in_range_boundaries_are_inclusive() {
    let features = vec![
        create_test_feature("t1", 0.1),
        create_test_feature("t2", 0.3),
        create_test_feature("t3", 0.5),
        create_test_feature("t4", 0.7),
        create_test_feature("t5", 0.9),
    ];

    let kept = features_in_range(features, &FilterBounds::default());

    let scores: Vec<f64> = kept.iter().map(|f| f.danceability).collect();
    assert_eq!(scores, vec![0.3, 0.5, 0.7]);
}

#[test]
fn test_partition_covers_all_tracks_exactly_once() {
    let tracks = vec![
        create_test_track("t1", "Alpha"),
        create_test_track("t2", "Beta"),
        create_test_track("t3", "Gamma"),
        create_test_track("t4", "Delta"),
    ];
    let kept_features = vec![create_test_feature("t2", 0.5), create_test_feature("t4", 0.6)];

    let partition = partition_tracks(&tracks, &kept_features).unwrap();

    assert_eq!(partition.kept.len(), 2);
    assert_eq!(partition.dropped.len(), 2);

    // kept ∪ dropped equals the original track set, by id
    let mut all_ids: Vec<&str> = partition
        .kept
        .iter()
        .chain(partition.dropped.iter())
        .map(|t| t.id.as_str())
        .collect();
    all_ids.sort();
    assert_eq!(all_ids, vec!["t1", "t2", "t3", "t4"]);

    // kept ∩ dropped is empty, by id
    let kept_ids: HashSet<&str> = partition.kept.iter().map(|t| t.id.as_str()).collect();
    assert!(
        partition
            .dropped
            .iter()
            .all(|t| !kept_ids.contains(t.id.as_str()))
    );
}

#[test]
fn test_partition_uses_id_equality_not_structure() {
    // Two tracks with identical fields except the id
    let mut twin_a = create_test_track("t1", "Twin");
    let mut twin_b = create_test_track("t2", "Twin");
    twin_a.uri = "spotify:track:same".to_string();
    twin_b.uri = "spotify:track:same".to_string();
    twin_a.album.name = "Same album".to_string();
    twin_b.album.name = "Same album".to_string();
    let tracks = vec![twin_a, twin_b];

    // Only t1 is kept; t2 must land in dropped despite identical fields
    let kept_features = vec![create_test_feature("t1", 0.5)];
    let partition = partition_tracks(&tracks, &kept_features).unwrap();

    assert_eq!(partition.kept.len(), 1);
    assert_eq!(partition.kept[0].id, "t1");
    assert_eq!(partition.dropped.len(), 1);
    assert_eq!(partition.dropped[0].id, "t2");
}

#[test]
fn test_partition_rejects_unmatched_feature() {
    let tracks = vec![create_test_track("t1", "Alpha")];
    let kept_features = vec![create_test_feature("ghost", 0.5)];

    let result = partition_tracks(&tracks, &kept_features);

    assert!(matches!(
        result,
        Err(ApiError::UnmatchedFeature(id)) if id == "ghost"
    ));
}

#[test]
fn test_partition_empty_features_drops_everything() {
    let tracks = vec![
        create_test_track("t1", "Alpha"),
        create_test_track("t2", "Beta"),
    ];

    let partition = partition_tracks(&tracks, &[]).unwrap();

    assert!(partition.kept.is_empty());
    assert_eq!(partition.dropped.len(), 2);
}

#[test]
fn test_partition_empty_tracks() {
    let partition = partition_tracks(&[], &[]).unwrap();
    assert!(partition.kept.is_empty());
    assert!(partition.dropped.is_empty());
}

#[test]
fn test_validate_danceability_accepts_sane_ranges() {
    assert!(FilterBounds::default().validate_danceability().is_ok());

    let full_domain = FilterBounds {
        min_danceability: 0.0,
        max_danceability: 1.0,
        ..FilterBounds::default()
    };
    assert!(full_domain.validate_danceability().is_ok());
}

#[test]
fn test_validate_danceability_rejects_inverted_range() {
    let inverted = FilterBounds {
        min_danceability: 0.9,
        max_danceability: 0.2,
        ..FilterBounds::default()
    };
    let err = inverted.validate_danceability().unwrap_err();
    assert!(err.contains("above maximum"));
}

#[test]
fn test_validate_danceability_rejects_out_of_domain_bounds() {
    let below = FilterBounds {
        min_danceability: -0.1,
        ..FilterBounds::default()
    };
    assert!(below.validate_danceability().is_err());

    let above = FilterBounds {
        max_danceability: 1.5,
        ..FilterBounds::default()
    };
    assert!(above.validate_danceability().is_err());
}

#[test]
fn test_default_bounds_match_documented_values() {
    let bounds = FilterBounds::default();
    assert_eq!(bounds.min_playlist_length, 10);
    assert_eq!(bounds.max_playlist_length, 50);
    assert_eq!(bounds.min_danceability, 0.3);
    assert_eq!(bounds.max_danceability, 0.7);
}
