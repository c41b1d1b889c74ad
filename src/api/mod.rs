pub mod catalog_client;
pub mod gallery_client;
pub mod generation_client;
pub mod traits;

use crate::{config::ApiConfig, error::Result, error::RoomGenError};
use std::time::Duration;

pub use catalog_client::CatalogClient;
pub use gallery_client::GalleryClient;
pub use generation_client::GenerationClient;
pub use traits::{CatalogService, GenerationService, ImageSource, SessionStore};

/// Aggregate API client: one HTTP client shared across the catalog,
/// generation, and gallery surfaces.
#[derive(Clone)]
pub struct RoomGenApi {
    catalog_client: CatalogClient,
    generation_client: GenerationClient,
    gallery_client: GalleryClient,
}

impl RoomGenApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RoomGenError::ConfigError(format!("HTTP client build failed: {}", e)))?;

        let base_url = config.resolved_base_url();

        Ok(Self {
            catalog_client: CatalogClient::new(client.clone(), base_url.clone()),
            generation_client: GenerationClient::new(client.clone(), base_url.clone()),
            gallery_client: GalleryClient::new(client, base_url),
        })
    }

    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog_client
    }

    pub fn generation(&self) -> &GenerationClient {
        &self.generation_client
    }

    pub fn gallery(&self) -> &GalleryClient {
        &self.gallery_client
    }
}
