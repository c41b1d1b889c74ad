use crate::{
    error::Result,
    models::{
        Architect, Designer, DesignStyle, GenerateRequest, GenerationResponse, GenerationSession,
        GlobalOptions,
    },
};
use async_trait::async_trait;

/// Static reference data provider.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_options(&self) -> Result<GlobalOptions>;
    async fn get_styles(&self) -> Result<Vec<DesignStyle>>;
    async fn get_architects(&self, style_id: Option<&str>) -> Result<Vec<Architect>>;
    async fn get_designers(&self, style_id: Option<&str>) -> Result<Vec<Designer>>;
}

/// The image generation backend.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResponse>;
}

/// Read access to persisted generation sessions.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn fetch_sessions(&self) -> Result<Vec<GenerationSession>>;
}

/// Binary content fetch for archive entries.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}
