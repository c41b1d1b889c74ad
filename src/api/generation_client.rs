use crate::{
    api::traits::GenerationService,
    error::{Result, RoomGenError},
    models::{GenerateRequest, GenerationResponse},
};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

#[derive(Clone)]
pub struct GenerationClient {
    client: Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl GenerationService for GenerationClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResponse> {
        log::info!(
            "Requesting generation for room types: {:?}",
            request.room_type_ids
        );

        let response = self
            .client
            .post(&format!("{}/generate", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(RoomGenError::from_transport)?;

        if !response.status().is_success() {
            // Non-2xx responses carry a JSON error with a human-readable
            // `detail` field.
            let status = response.status();
            let detail = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.get("detail")
                        .and_then(|d| d.as_str())
                        .map(String::from)
                })
                .unwrap_or_else(|| format!("Generation failed with status {}", status));
            return Err(RoomGenError::ApiError(detail));
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|e| RoomGenError::ResponseError(e.to_string()))
    }
}
