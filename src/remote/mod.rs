//! Remote API layer - typed clients for the backend REST services.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`, `crate::model`) - Internal types that
//!   represent our business logic
//! - **API DTOs** (`bookmarks/dto.rs`, `playlists/dto.rs`, `catalog/dto.rs`)
//!   - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Clients** - HTTP clients for the backend endpoints
//! - **Traits** (`traits.rs`) - Seams for dependency injection and mocking
//!
//! This decoupling means:
//! 1. Backend changes don't ripple through the caches or the engine
//! 2. We can test the wire contracts independently
//! 3. The stores are tested against mocks, not a live server

pub mod bookmarks;
pub mod catalog;
pub mod domain;
pub mod playlists;
pub mod traits;

pub use bookmarks::BookmarkClient;
pub use catalog::CatalogClient;
pub use domain::{AddTrackOutcome, RemoteError};
pub use playlists::PlaylistClient;
pub use traits::{BookmarkApi, CatalogApi, PlaylistApi};

use serde::Deserialize;

use crate::config::{ApiConfig, Config};

/// User agent string sent with every backend request
const USER_AGENT: &str = concat!("SoundShelf/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client, attaching the bearer token when present.
pub(crate) fn http_client(token: Option<&str>) -> reqwest::Client {
    let mut headers = reqwest::header::HeaderMap::new();
    if let Some(token) = token {
        match reqwest::header::HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("API token is not a valid header value, sending without it"),
        }
    }

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .expect("Failed to build HTTP client")
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Convert a non-2xx response into the error taxonomy, preserving the
/// server-provided message when there is one.
pub(crate) async fn error_from_response(response: reqwest::Response) -> RemoteError {
    let status = response.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return RemoteError::Unauthenticated;
    }
    if status == reqwest::StatusCode::NOT_FOUND {
        return RemoteError::NotFound(response.url().path().to_string());
    }
    if let Ok(body) = response.json::<ErrorBody>().await {
        return RemoteError::Api(body.message);
    }
    RemoteError::Network(format!(
        "HTTP {}: {}",
        status,
        status.canonical_reason().unwrap_or("Unknown")
    ))
}

/// All backend clients, built from one configuration.
pub struct Clients {
    pub bookmarks: BookmarkClient,
    pub playlists: PlaylistClient,
    pub catalog: CatalogClient,
}

impl Clients {
    /// Build every client against the given API settings.
    pub fn new(config: &ApiConfig, token: Option<&str>) -> Self {
        Self {
            bookmarks: BookmarkClient::new(&config.base_url, token),
            playlists: PlaylistClient::new(&config.base_url, token),
            catalog: CatalogClient::new(&config.base_url, token),
        }
    }

    /// Build every client from the loaded application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api, config.credentials.api_token.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("SoundShelf/"));
    }

    #[test]
    fn test_error_body_accepts_both_keys() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "broken"}"#).unwrap();
        assert_eq!(body.message, "broken");

        let body: ErrorBody = serde_json::from_str(r#"{"error": "also broken"}"#).unwrap();
        assert_eq!(body.message, "also broken");
    }

    #[test]
    fn test_clients_from_config() {
        let clients = Clients::from_config(&Config::default());
        assert_eq!(clients.bookmarks.base_url(), "http://localhost:3000/api");
        assert_eq!(clients.playlists.base_url(), "http://localhost:3000/api");
        assert_eq!(clients.catalog.base_url(), "http://localhost:3000/api");
    }
}
