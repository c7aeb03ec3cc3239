//! SoundShelf client core - playback and library sync for the SoundShelf
//! reader/streaming front-end.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     UI shell (out of scope)                     │
//! │        dispatches intents, renders read-only snapshots          │
//! └───────────────┬─────────────────────────────┬───────────────────┘
//!                 ▼                             ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────────┐
//! │      Playback Engine      │   │       Consistency Layer         │
//! │  player::Player + queue   │   │  store::{BookmarkStore,         │
//! │  drives one MediaSink     │   │          PlaylistStore}         │
//! └───────────────┬───────────┘   └───────────────┬─────────────────┘
//!                 │ sink events                   │ reqwest
//!                 ▼                               ▼
//! ┌───────────────────────────┐   ┌─────────────────────────────────┐
//! │   Audio resource (media   │   │   Backend REST services         │
//! │   element / native out)   │   │   bookmarks, playlists, catalog │
//! └───────────────────────────┘   └─────────────────────────────────┘
//! ```
//!
//! The [`player::Player`] owns the single audio output resource and the
//! transient play queue; the [`store`] caches minimize redundant network
//! reads and keep optimistic writes consistent with server acknowledgments.
//! Session identity comes from an external auth provider and is pushed in
//! via [`store::Stores::set_session`].
//!
//! # Usage
//!
//! ```ignore
//! use soundshelf::{config, remote::Clients, store::Stores};
//! use std::sync::Arc;
//!
//! let config = config::load();
//! let clients = Clients::from_config(&config);
//! let stores = Stores::new(Arc::new(clients.bookmarks), Arc::new(clients.playlists));
//!
//! stores.set_session(auth.current_session());
//! stores.bookmarks.batch_check(&visible_book_ids, Some("books:page:1")).await?;
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod player;
pub mod remote;
pub mod store;
#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
