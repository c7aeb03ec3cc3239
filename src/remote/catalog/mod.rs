//! Catalog endpoints: read-only track and album listings that feed the
//! playback queue.

mod client;
mod dto;

pub use client::CatalogClient;
