//! Catalog HTTP client.

use super::dto;
use crate::model::{Album, Track};
use crate::remote::domain::RemoteError;

/// Catalog API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
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

    /// Fetch the full track listing.
    pub async fn list_tracks(&self) -> Result<Vec<Track>, RemoteError> {
        let url = format!("{}/tracks", self.base_url);
        let body = self.fetch::<dto::TracksResponse>(&url).await?;
        Ok(body.tracks.into_iter().map(to_track).collect())
    }

    /// Fetch the album listing.
    pub async fn list_albums(&self) -> Result<Vec<Album>, RemoteError> {
        let url = format!("{}/albums", self.base_url);
        let body = self.fetch::<dto::AlbumsResponse>(&url).await?;
        Ok(body.albums.into_iter().map(to_album).collect())
    }

    /// Fetch one album's tracks, in album order.
    pub async fn album_tracks(&self, album_id: i64) -> Result<Vec<Track>, RemoteError> {
        let url = format!("{}/albums/{}/tracks", self.base_url, album_id);
        let body = self.fetch::<dto::TracksResponse>(&url).await?;
        Ok(body.tracks.into_iter().map(to_track).collect())
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RemoteError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(crate::remote::error_from_response(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}

fn to_track(dto: dto::TrackDto) -> Track {
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

fn to_album(dto: dto::AlbumDto) -> Album {
    Album {
        id: dto.id,
        title: dto.title,
        artist: dto.artist,
        cover_image: dto.cover_image,
        track_count: dto.track_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new("http://localhost:3000/api", None);
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }
}
