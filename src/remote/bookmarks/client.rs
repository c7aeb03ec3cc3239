//! Bookmark HTTP client.
//!
//! Two endpoints: a batched status check (one POST per dedup key, see
//! `store::BookmarkStore`) and a toggle whose response carries the
//! server-authoritative new state.

use std::collections::HashMap;

use super::{adapter, dto};
use crate::remote::domain::RemoteError;

/// Bookmark API client
pub struct BookmarkClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl BookmarkClient {
    /// Create a new client against `base_url`.
    pub fn new(base_url: impl Into<String>, token: Option<&str>) -> Self {
        Self {
            http_client: crate::remote::http_client(token),
            base_url: base_url.into(),
        }
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check bookmark state for a batch of book ids in one request.
    pub async fn batch_check(&self, book_ids: &[i64]) -> Result<HashMap<i64, bool>, RemoteError> {
        let url = format!("{}/bookmarks/check", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&dto::CheckRequest {
                book_ids: book_ids.to_vec(),
            })
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(crate::remote::error_from_response(response).await);
        }

        let body = response
            .json::<dto::CheckResponse>()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;
        adapter::to_states(body)
    }

    /// Toggle a bookmark. Returns the server-reported new state.
    pub async fn toggle(&self, book_id: i64) -> Result<bool, RemoteError> {
        let url = format!("{}/bookmarks/toggle", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&dto::ToggleRequest { book_id })
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(crate::remote::error_from_response(response).await);
        }

        let body = response
            .json::<dto::ToggleResponse>()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))?;
        Ok(body.bookmarked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BookmarkClient::new("http://localhost:3000/api", None);
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }
}
