//! Read-through cache of the user's persisted playlists.
//!
//! Every mutation is a single network round trip; the local list is
//! updated only from the round trip's response. The one exception is the
//! track-count increment on add, which is applied locally but gated on the
//! server reporting that the track was newly added (`already_exists ==
//! false`). All operations fail `Unauthenticated` without a session, and
//! session loss clears the whole list.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::model::{Playlist, UserSession};
use crate::remote::{AddTrackOutcome, PlaylistApi, RemoteError};

/// Client-side cache of the user's playlists.
pub struct PlaylistStore {
    api: Arc<dyn PlaylistApi>,
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    session: Option<UserSession>,
    playlists: Vec<Playlist>,
    loading: bool,
    /// Most recent failure, for UI retry affordances
    last_error: Option<String>,
}

impl PlaylistStore {
    pub fn new(api: Arc<dyn PlaylistApi>) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Push the auth provider's session state into the cache. Losing the
    /// session clears the list, mirroring the bookmark cache's reset rule.
    pub fn set_session(&self, session: Option<UserSession>) {
        let mut inner = self.inner.write();
        if session.is_none() {
            inner.playlists.clear();
            inner.last_error = None;
        }
        inner.session = session;
    }

    /// Snapshot of the cached list.
    pub fn playlists(&self) -> Vec<Playlist> {
        self.inner.read().playlists.clone()
    }

    /// Cached entry for one playlist, if present.
    pub fn get_cached(&self, id: i64) -> Option<Playlist> {
        self.inner
            .read()
            .playlists
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    /// Whether a list fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.read().loading
    }

    /// Most recent failure message, if any.
    pub fn last_error(&self) -> Option<String> {
        self.inner.read().last_error.clone()
    }

    /// Fetch the full playlist list from the server.
    pub async fn fetch(&self) -> Result<Vec<Playlist>, RemoteError> {
        self.require_session()?;
        self.inner.write().loading = true;

        let result = self.api.list().await;

        let mut inner = self.inner.write();
        inner.loading = false;
        match result {
            Ok(playlists) => {
                if inner.session.is_some() {
                    inner.playlists = playlists.clone();
                }
                inner.last_error = None;
                Ok(playlists)
            }
            Err(e) => {
                tracing::warn!("playlist fetch failed: {e}");
                inner.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Fetch one playlist with its tracks, refreshing the cached entry.
    pub async fn get(&self, id: i64) -> Result<Playlist, RemoteError> {
        self.require_session()?;
        match self.api.get(id).await {
            Ok(playlist) => {
                self.adopt(playlist.clone());
                Ok(playlist)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Create a playlist and append the server's entity to the list.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError> {
        self.require_session()?;
        match self.api.create(name, description).await {
            Ok(playlist) => {
                let mut inner = self.inner.write();
                inner.playlists.push(playlist.clone());
                inner.last_error = None;
                Ok(playlist)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Rename or re-describe a playlist from the server's response.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError> {
        self.require_session()?;
        match self.api.update(id, name, description).await {
            Ok(playlist) => {
                self.adopt(playlist.clone());
                Ok(playlist)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Delete a playlist, dropping it from the list on acknowledgment.
    pub async fn delete(&self, id: i64) -> Result<(), RemoteError> {
        self.require_session()?;
        match self.api.delete(id).await {
            Ok(()) => {
                let mut inner = self.inner.write();
                inner.playlists.retain(|p| p.id != id);
                inner.last_error = None;
                Ok(())
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Add a track to a playlist.
    ///
    /// The cached track count is incremented optimistically, but only when
    /// the server reports the track was newly added - an `already_exists`
    /// answer leaves the count alone.
    pub async fn add_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<AddTrackOutcome, RemoteError> {
        self.require_session()?;
        match self.api.add_track(playlist_id, track_id).await {
            Ok(outcome) => {
                let mut inner = self.inner.write();
                if !outcome.already_exists {
                    if let Some(playlist) =
                        inner.playlists.iter_mut().find(|p| p.id == playlist_id)
                    {
                        playlist.track_count += 1;
                    }
                }
                inner.last_error = None;
                Ok(outcome)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Remove a track, adopting the server's updated playlist.
    pub async fn remove_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<Playlist, RemoteError> {
        self.require_session()?;
        match self.api.remove_track(playlist_id, track_id).await {
            Ok(playlist) => {
                self.adopt(playlist.clone());
                Ok(playlist)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    /// Reorder a playlist's tracks, adopting the server's updated playlist.
    pub async fn reorder(
        &self,
        playlist_id: i64,
        track_ids: &[i64],
    ) -> Result<Playlist, RemoteError> {
        self.require_session()?;
        match self.api.reorder(playlist_id, track_ids).await {
            Ok(playlist) => {
                self.adopt(playlist.clone());
                Ok(playlist)
            }
            Err(e) => Err(self.record(e)),
        }
    }

    fn require_session(&self) -> Result<(), RemoteError> {
        let inner = self.inner.read();
        if inner.session.is_none() {
            return Err(RemoteError::Unauthenticated);
        }
        Ok(())
    }

    /// Replace (or insert) the cached entry with a server-acknowledged one.
    fn adopt(&self, playlist: Playlist) {
        let mut inner = self.inner.write();
        match inner.playlists.iter_mut().find(|p| p.id == playlist.id) {
            Some(slot) => *slot = playlist,
            None => inner.playlists.push(playlist),
        }
        inner.last_error = None;
    }

    fn record(&self, e: RemoteError) -> RemoteError {
        tracing::warn!("playlist operation failed: {e}");
        self.inner.write().last_error = Some(e.to_string());
        e
    }
}
