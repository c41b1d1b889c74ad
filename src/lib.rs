pub mod api;
pub mod archive;
pub mod config;
pub mod engine;
pub mod error;
pub mod logger;
pub mod models;

use std::sync::Arc;

pub use api::{CatalogClient, GalleryClient, GenerationClient, RoomGenApi};
pub use api::{CatalogService, GenerationService, ImageSource, SessionStore};
pub use archive::{ArchiveSink, FileArchiveSink};
pub use config::{ApiConfig, Config, DownloadConfig};
pub use engine::{
    ActiveFilters, DateRange, DownloadJob, DownloadReport, FilterFacets, GalleryEngine,
    GenerationOrchestrator, Lightbox,
};
pub use error::{Result, RoomGenError};
pub use models::*;

/// Fully wired client: the API surface plus both engines sharing it.
pub struct RoomGenClient {
    api: RoomGenApi,
    orchestrator: Arc<GenerationOrchestrator>,
    gallery: GalleryEngine,
}

impl RoomGenClient {
    pub fn new(config: Config) -> Result<Self> {
        let api = RoomGenApi::new(config.api.clone())?;

        let orchestrator = Arc::new(GenerationOrchestrator::new(Arc::new(
            api.generation().clone(),
        )));
        let gallery = GalleryEngine::new(
            Arc::new(api.gallery().clone()),
            Arc::new(api.gallery().clone()),
            Arc::new(FileArchiveSink::new(config.download.resolved_output_dir())),
            orchestrator.clone(),
            config.api.resolved_base_url(),
        );

        Ok(Self {
            api,
            orchestrator,
            gallery,
        })
    }

    pub fn api(&self) -> &RoomGenApi {
        &self.api
    }

    pub fn catalog(&self) -> &CatalogClient {
        self.api.catalog()
    }

    pub fn generator(&self) -> &GenerationOrchestrator {
        &self.orchestrator
    }

    pub fn gallery(&self) -> &GalleryEngine {
        &self.gallery
    }
}
