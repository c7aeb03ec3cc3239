//! Catalog API Data Transfer Objects
//!
//! These types match EXACTLY what the catalog endpoints return.
//! DO NOT use these types outside the catalog module.
//!
//! Example tracks response:
//! ```json
//! {
//!   "tracks": [{
//!     "id": 7,
//!     "title": "Night Drive",
//!     "artist": "The Commuters",
//!     "audioUrl": "https://cdn.example.com/audio/7.mp3"
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// A track as the catalog serializes it
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    pub audio_url: String,
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// An album as the catalog serializes it
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: i64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub track_count: u32,
}

/// Tracks response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TracksResponse {
    pub tracks: Vec<TrackDto>,
}

/// Albums response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumsResponse {
    pub albums: Vec<AlbumDto>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_tracks_response() {
        let json = r#"{
            "tracks": [{
                "id": 7,
                "title": "Night Drive",
                "artist": "The Commuters",
                "album": "City Lights",
                "duration": 213.5,
                "audioUrl": "https://cdn.example.com/audio/7.mp3",
                "coverImage": "https://cdn.example.com/covers/7.jpg"
            }]
        }"#;

        let response: TracksResponse =
            serde_json::from_str(json).expect("Should parse tracks response");

        assert_eq!(response.tracks.len(), 1);
        assert_eq!(response.tracks[0].album.as_deref(), Some("City Lights"));
    }

    #[test]
    fn test_parse_albums_response() {
        let json = r#"{
            "albums": [{
                "id": 2,
                "title": "City Lights",
                "artist": "The Commuters",
                "trackCount": 11
            }]
        }"#;

        let response: AlbumsResponse =
            serde_json::from_str(json).expect("Should parse albums response");

        assert_eq!(response.albums[0].track_count, 11);
        assert!(response.albums[0].cover_image.is_none());
    }

    #[test]
    fn test_parse_sparse_track() {
        let json = r#"{
            "tracks": [{
                "id": 1,
                "title": "Untitled",
                "artist": "Unknown",
                "audioUrl": "https://cdn.example.com/audio/1.mp3"
            }]
        }"#;

        let response: TracksResponse = serde_json::from_str(json).unwrap();
        let track = &response.tracks[0];
        assert!(track.album.is_none());
        assert!(track.duration.is_none());
        assert!(track.cover_image.is_none());
    }
}
