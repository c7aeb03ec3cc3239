//! Core data models shared by the playback engine and the sync layer.
//!
//! Defines the primary entities: [`Track`], [`Album`], [`Playlist`], and
//! the [`UserSession`] identity delivered by the external auth provider.
//! All of them are owned by the remote services and arrive as JSON; the
//! client never invents or mutates them locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playable track from the remote catalog.
///
/// Immutable once fetched; the playback engine borrows tracks and never
/// writes back to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Remote identifier
    pub id: i64,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Album title (optional)
    #[serde(default)]
    pub album: Option<String>,
    /// Duration in seconds; authoritative once the audio resource reports it
    #[serde(default)]
    pub duration: Option<f64>,
    /// The single playable source address
    pub audio_url: String,
    /// Cover image URL (optional)
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// An album grouping tracks in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    /// Remote identifier
    pub id: i64,
    /// Album title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Cover image URL (optional)
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Number of tracks on the album
    #[serde(default)]
    pub track_count: u32,
}

/// A user-owned playlist persisted by the remote service.
///
/// The client holds a read-through cache of these; every mutation is a
/// network round trip and local state is updated only from the server's
/// response (see `store::PlaylistStore`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Remote identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Server-authoritative track count, mirrored locally for optimistic UI
    #[serde(default)]
    pub track_count: u32,
    /// Track list; populated on detail fetches, empty on list responses
    #[serde(default)]
    pub tracks: Vec<Track>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Role attached to an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Admin,
}

/// Identity delivered by the external auth provider.
///
/// The core performs a single role check and nothing more; authorization
/// proper lives server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    /// Opaque user identifier
    pub user_id: String,
    /// Session role
    pub role: Role,
}

impl UserSession {
    /// Whether this session may use admin-only surfaces.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Night Drive",
            "artist": "The Commuters",
            "audioUrl": "https://cdn.example.com/audio/7.mp3",
            "coverImage": "https://cdn.example.com/covers/7.jpg"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id, 7);
        assert_eq!(track.audio_url, "https://cdn.example.com/audio/7.mp3");
        assert!(track.album.is_none());
        assert!(track.duration.is_none());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        let role: Role = serde_json::from_str(r#""member""#).unwrap();
        assert_eq!(role, Role::Member);
    }

    #[test]
    fn test_session_role_check() {
        let member = UserSession {
            user_id: "u1".to_string(),
            role: Role::Member,
        };
        let admin = UserSession {
            user_id: "u2".to_string(),
            role: Role::Admin,
        };
        assert!(!member.is_admin());
        assert!(admin.is_admin());
    }
}
