//! Adapter layer: Convert playlist DTOs to domain models.
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! This isolates API changes - if the backend changes its response format,
//! only this file and dto.rs need to change.

use super::dto;
use crate::model::{Playlist, Track};
use crate::remote::domain::AddTrackOutcome;

/// Convert a playlist DTO to the domain entity.
pub fn to_playlist(dto: dto::PlaylistDto) -> Playlist {
    Playlist {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        track_count: dto.track_count,
        tracks: dto.tracks.into_iter().map(to_track).collect(),
        created_at: dto.created_at,
        updated_at: dto.updated_at,
    }
}

/// Convert a track DTO to the domain entity.
pub fn to_track(dto: dto::TrackDto) -> Track {
    Track {
        id: dto.id,
        title: dto.title,
        artist: dto.artist,
        album: dto.album,
        duration: dto.duration,
        audio_url: dto.audio_url,
        cover_image: dto.cover_image,
    }
}

/// Convert an add-track response to the domain outcome.
pub fn to_outcome(dto: dto::AddTrackResponse) -> AddTrackOutcome {
    AddTrackOutcome {
        already_exists: dto.already_exists,
        message: dto.message,
    }
}
