//! Trait definitions for the backend API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute the mocks below. The stores in `crate::store` only ever see
//! these traits.

use std::collections::HashMap;

use async_trait::async_trait;

use super::domain::{AddTrackOutcome, RemoteError};
use crate::model::{Album, Playlist, Track};

/// Trait for the bookmark endpoints.
#[async_trait]
pub trait BookmarkApi: Send + Sync {
    /// Check bookmark state for a batch of book ids in one request.
    async fn batch_check(&self, book_ids: &[i64]) -> Result<HashMap<i64, bool>, RemoteError>;

    /// Toggle a bookmark; returns the server-reported new state.
    async fn toggle(&self, book_id: i64) -> Result<bool, RemoteError>;
}

/// Trait for the playlist endpoints.
#[async_trait]
pub trait PlaylistApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Playlist>, RemoteError>;
    async fn get(&self, id: i64) -> Result<Playlist, RemoteError>;
    async fn create(&self, name: &str, description: Option<&str>)
    -> Result<Playlist, RemoteError>;
    async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError>;
    async fn delete(&self, id: i64) -> Result<(), RemoteError>;
    async fn add_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<AddTrackOutcome, RemoteError>;
    async fn remove_track(&self, playlist_id: i64, track_id: i64)
    -> Result<Playlist, RemoteError>;
    async fn reorder(&self, playlist_id: i64, track_ids: &[i64])
    -> Result<Playlist, RemoteError>;
}

/// Trait for the catalog endpoints.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_tracks(&self) -> Result<Vec<Track>, RemoteError>;
    async fn list_albums(&self) -> Result<Vec<Album>, RemoteError>;
    async fn album_tracks(&self, album_id: i64) -> Result<Vec<Track>, RemoteError>;
}

// Implement traits for real clients

#[async_trait]
impl BookmarkApi for super::bookmarks::BookmarkClient {
    async fn batch_check(&self, book_ids: &[i64]) -> Result<HashMap<i64, bool>, RemoteError> {
        self.batch_check(book_ids).await
    }

    async fn toggle(&self, book_id: i64) -> Result<bool, RemoteError> {
        self.toggle(book_id).await
    }
}

#[async_trait]
impl PlaylistApi for super::playlists::PlaylistClient {
    async fn list(&self) -> Result<Vec<Playlist>, RemoteError> {
        self.list().await
    }

    async fn get(&self, id: i64) -> Result<Playlist, RemoteError> {
        self.get(id).await
    }

    async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError> {
        self.create(name, description).await
    }

    async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError> {
        self.update(id, name, description).await
    }

    async fn delete(&self, id: i64) -> Result<(), RemoteError> {
        self.delete(id).await
    }

    async fn add_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<AddTrackOutcome, RemoteError> {
        self.add_track(playlist_id, track_id).await
    }

    async fn remove_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<Playlist, RemoteError> {
        self.remove_track(playlist_id, track_id).await
    }

    async fn reorder(
        &self,
        playlist_id: i64,
        track_ids: &[i64],
    ) -> Result<Playlist, RemoteError> {
        self.reorder(playlist_id, track_ids).await
    }
}

#[async_trait]
impl CatalogApi for super::catalog::CatalogClient {
    async fn list_tracks(&self) -> Result<Vec<Track>, RemoteError> {
        self.list_tracks().await
    }

    async fn list_albums(&self) -> Result<Vec<Album>, RemoteError> {
        self.list_albums().await
    }

    async fn album_tracks(&self, album_id: i64) -> Result<Vec<Track>, RemoteError> {
        self.album_tracks(album_id).await
    }
}
