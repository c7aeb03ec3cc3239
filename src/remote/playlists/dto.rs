//! Playlist API Data Transfer Objects
//!
//! These types match EXACTLY what the playlist endpoints return.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the playlists module - convert to domain
//! types via the adapter.
//!
//! Entities are wrapped: list responses under `playlists`, item responses
//! under `playlist`. Example item response:
//! ```json
//! {
//!   "playlist": {
//!     "id": 3,
//!     "name": "Morning",
//!     "trackCount": 2,
//!     "createdAt": "2024-03-01T12:00:00Z",
//!     "updatedAt": "2024-03-02T08:30:00Z"
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playlist as the backend serializes it
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub track_count: u32,
    /// Present on detail responses only
    #[serde(default)]
    pub tracks: Vec<TrackDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A track as the playlist endpoints serialize it
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

/// List response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListResponse {
    pub playlists: Vec<PlaylistDto>,
}

/// Single-entity response wrapper
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemResponse {
    pub playlist: PlaylistDto,
}

/// Create/update request body
#[derive(Debug, Clone, Serialize)]
pub struct SaveRequest<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
}

/// Track add request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrackRequest {
    pub track_id: i64,
}

/// Track add response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTrackResponse {
    #[serde(default)]
    pub already_exists: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Track reorder request body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub track_ids: Vec<i64>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
