//! Playlist HTTP client.
//!
//! REST resource at `{base}/playlists`, track membership as a sub-resource
//! under the playlist id. Mutating endpoints answer with the updated
//! entity so callers can adopt server state instead of guessing.

use super::{adapter, dto};
use crate::model::Playlist;
use crate::remote::domain::{AddTrackOutcome, RemoteError};

/// Playlist API client
pub struct PlaylistClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl PlaylistClient {
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

    /// Fetch every playlist the user owns.
    pub async fn list(&self) -> Result<Vec<Playlist>, RemoteError> {
        let url = format!("{}/playlists", self.base_url);
        let response = self.send(self.http_client.get(&url)).await?;
        let body = parse::<dto::ListResponse>(response).await?;
        Ok(body.playlists.into_iter().map(adapter::to_playlist).collect())
    }

    /// Fetch one playlist with its tracks.
    pub async fn get(&self, id: i64) -> Result<Playlist, RemoteError> {
        let url = format!("{}/playlists/{}", self.base_url, id);
        let response = self.send(self.http_client.get(&url)).await?;
        let body = parse::<dto::ItemResponse>(response).await?;
        Ok(adapter::to_playlist(body.playlist))
    }

    /// Create a playlist.
    pub async fn create(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError> {
        let url = format!("{}/playlists", self.base_url);
        let request = self
            .http_client
            .post(&url)
            .json(&dto::SaveRequest { name, description });
        let response = self.send(request).await?;
        let body = parse::<dto::ItemResponse>(response).await?;
        Ok(adapter::to_playlist(body.playlist))
    }

    /// Rename or re-describe a playlist.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<Playlist, RemoteError> {
        let url = format!("{}/playlists/{}", self.base_url, id);
        let request = self
            .http_client
            .put(&url)
            .json(&dto::SaveRequest { name, description });
        let response = self.send(request).await?;
        let body = parse::<dto::ItemResponse>(response).await?;
        Ok(adapter::to_playlist(body.playlist))
    }

    /// Delete a playlist.
    pub async fn delete(&self, id: i64) -> Result<(), RemoteError> {
        let url = format!("{}/playlists/{}", self.base_url, id);
        self.send(self.http_client.delete(&url)).await?;
        Ok(())
    }

    /// Add a track to a playlist. The response reports whether it was
    /// already a member.
    pub async fn add_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<AddTrackOutcome, RemoteError> {
        let url = format!("{}/playlists/{}/tracks", self.base_url, playlist_id);
        let request = self
            .http_client
            .post(&url)
            .json(&dto::AddTrackRequest { track_id });
        let response = self.send(request).await?;
        let body = parse::<dto::AddTrackResponse>(response).await?;
        Ok(adapter::to_outcome(body))
    }

    /// Remove a track from a playlist. Returns the updated playlist.
    pub async fn remove_track(
        &self,
        playlist_id: i64,
        track_id: i64,
    ) -> Result<Playlist, RemoteError> {
        let url = format!(
            "{}/playlists/{}/tracks/{}",
            self.base_url, playlist_id, track_id
        );
        let response = self.send(self.http_client.delete(&url)).await?;
        let body = parse::<dto::ItemResponse>(response).await?;
        Ok(adapter::to_playlist(body.playlist))
    }

    /// Reorder a playlist's tracks. Returns the updated playlist.
    pub async fn reorder(
        &self,
        playlist_id: i64,
        track_ids: &[i64],
    ) -> Result<Playlist, RemoteError> {
        let url = format!("{}/playlists/{}/tracks", self.base_url, playlist_id);
        let request = self.http_client.put(&url).json(&dto::ReorderRequest {
            track_ids: track_ids.to_vec(),
        });
        let response = self.send(request).await?;
        let body = parse::<dto::ItemResponse>(response).await?;
        Ok(adapter::to_playlist(body.playlist))
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, RemoteError> {
        let response = request
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;
        if !response.status().is_success() {
            return Err(crate::remote::error_from_response(response).await);
        }
        Ok(response)
    }
}

async fn parse<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, RemoteError> {
    response
        .json::<T>()
        .await
        .map_err(|e| RemoteError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = PlaylistClient::new("http://localhost:3000/api", None);
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }
}
