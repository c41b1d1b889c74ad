use crate::{
    api::traits::{ImageSource, SessionStore},
    error::{Result, RoomGenError},
    models::GenerationSession,
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct GalleryClient {
    client: Client,
    base_url: String,
}

impl GalleryClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl SessionStore for GalleryClient {
    async fn fetch_sessions(&self) -> Result<Vec<GenerationSession>> {
        let response = self
            .client
            .get(&format!("{}/gallery/sessions", self.base_url))
            .send()
            .await
            .map_err(RoomGenError::from_transport)?;

        if !response.status().is_success() {
            return Err(RoomGenError::ApiError(format!(
                "Session fetch failed with status {}",
                response.status()
            )));
        }

        response
            .json::<Vec<GenerationSession>>()
            .await
            .map_err(|e| RoomGenError::ResponseError(e.to_string()))
    }
}

#[async_trait]
impl ImageSource for GalleryClient {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RoomGenError::from_transport)?;

        if !response.status().is_success() {
            return Err(RoomGenError::ApiError(format!(
                "Image fetch failed with status {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(RoomGenError::from_transport)?;
        Ok(bytes.to_vec())
    }
}

