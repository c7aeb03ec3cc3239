//! Client-side consistency layer over the remote API.
//!
//! Conceptually each cache moves through `Unauthenticated → Idle → Loading
//! → Ready`, re-entering `Loading` on every batch fetch and collapsing back
//! to `Unauthenticated` on session loss. Loading never blocks reads of
//! already-resolved state: cache reads are served locally regardless of
//! in-flight fetches for other keys.

pub mod bookmarks;
pub mod playlists;

pub use bookmarks::BookmarkStore;
pub use playlists::PlaylistStore;

use std::sync::Arc;

use crate::model::UserSession;
use crate::remote::{BookmarkApi, PlaylistApi};

/// Bundle of the caches whose lifetime follows the authenticated session.
///
/// The embedding shell watches its auth provider and pushes every session
/// change through [`Stores::set_session`]; a `None` discards all cached
/// user state at once.
pub struct Stores {
    pub bookmarks: BookmarkStore,
    pub playlists: PlaylistStore,
}

impl Stores {
    pub fn new(bookmark_api: Arc<dyn BookmarkApi>, playlist_api: Arc<dyn PlaylistApi>) -> Self {
        Self {
            bookmarks: BookmarkStore::new(bookmark_api),
            playlists: PlaylistStore::new(playlist_api),
        }
    }

    /// Fan a session change out to every cache.
    pub fn set_session(&self, session: Option<UserSession>) {
        self.bookmarks.set_session(session.clone());
        self.playlists.set_session(session);
    }
}
