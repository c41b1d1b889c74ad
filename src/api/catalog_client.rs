use crate::{
    api::traits::CatalogService,
    error::{Result, RoomGenError},
    models::{Architect, Catalog, Designer, DesignStyle, GlobalOptions},
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RoomGenError::from_transport)?;

        if !response.status().is_success() {
            return Err(RoomGenError::ApiError(format!(
                "GET {} failed with status {}",
                path,
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RoomGenError::ResponseError(e.to_string()))
    }

    fn scoped_path(path: &str, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => format!("{}?styleId={}", path, id),
            None => path.to_string(),
        }
    }

    /// Load the full reference pool; the four fetches run concurrently
    /// and fail as a unit.
    pub async fn load_catalog(&self) -> Result<Catalog> {
        let (options, design_styles, architects, designers) = tokio::try_join!(
            self.get_options(),
            self.get_styles(),
            self.get_architects(None),
            self.get_designers(None)
        )?;

        log::info!(
            "Catalog loaded: {} room types, {} styles, {} architects, {} designers",
            options.room_types.len(),
            design_styles.len(),
            architects.len(),
            designers.len()
        );

        Ok(Catalog {
            options,
            design_styles,
            architects,
            designers,
        })
    }
}

#[async_trait]
impl CatalogService for CatalogClient {
    async fn get_options(&self) -> Result<GlobalOptions> {
        self.get_json("/options").await
    }

    async fn get_styles(&self) -> Result<Vec<DesignStyle>> {
        self.get_json("/styles").await
    }

    async fn get_architects(&self, style_id: Option<&str>) -> Result<Vec<Architect>> {
        self.get_json(&Self::scoped_path("/architects", style_id))
            .await
    }

    async fn get_designers(&self, style_id: Option<&str>) -> Result<Vec<Designer>> {
        self.get_json(&Self::scoped_path("/designers", style_id))
            .await
    }
}
