//! Test utilities and fixtures for soundshelf tests.
//!
//! This module provides common mock factories to reduce boilerplate in
//! tests.
//!
//! # Example
//!
//! ```ignore
//! use soundshelf::test_utils::{mock_track, mock_session};
//!
//! let track = mock_track(7);
//! let custom = Track { title: "Custom".to_string(), ..mock_track(7) };
//! ```

use chrono::Utc;

use crate::model::{Playlist, Role, Track, UserSession};

/// Install a tracing subscriber for a test, honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call wins.
pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a mock Track with sensible defaults.
///
/// The audio URL is derived from the id so source-equality checks work.
pub fn mock_track(id: i64) -> Track {
    Track {
        id,
        title: format!("Track {}", id),
        artist: "Test Artist".to_string(),
        album: Some("Test Album".to_string()),
        duration: Some(180.0),
        audio_url: format!("https://cdn.example.com/audio/{}.mp3", id),
        cover_image: None,
    }
}

/// Creates `n` mock tracks with ids `0..n`.
pub fn mock_tracks(n: i64) -> Vec<Track> {
    (0..n).map(mock_track).collect()
}

/// Creates an empty mock Playlist with the given id and name.
pub fn mock_playlist(id: i64, name: &str) -> Playlist {
    let now = Utc::now();
    Playlist {
        id,
        name: name.to_string(),
        description: None,
        track_count: 0,
        tracks: Vec::new(),
        created_at: now,
        updated_at: now,
    }
}

/// Creates a mock member session.
pub fn mock_session() -> UserSession {
    UserSession {
        user_id: "user-1".to_string(),
        role: Role::Member,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_track_defaults() {
        let track = mock_track(7);
        assert_eq!(track.id, 7);
        assert_eq!(track.title, "Track 7");
        assert!(track.audio_url.contains("/7.mp3"));
    }

    #[test]
    fn test_mock_tracks_ids() {
        let tracks = mock_tracks(3);
        let ids: Vec<i64> = tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_mock_playlist_is_empty() {
        let playlist = mock_playlist(1, "Morning");
        assert_eq!(playlist.track_count, 0);
        assert!(playlist.tracks.is_empty());
    }
}
