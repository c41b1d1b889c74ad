use serde::{Deserialize, Serialize};

use crate::error::{Result, RoomGenError};

/// Caller-facing batch request: one or more room types under one shared
/// parameter combination.
#[derive(Debug, Clone, Default)]
pub struct BatchRequest {
    pub room_type_ids: Vec<String>,
    pub design_style_id: String,
    pub architect_id: String,
    pub designer_id: String,
    pub color_wheel_id: String,
    pub aspect_ratio_id: String,
    pub image_quality_id: String,
    pub flooring_type_id: Option<String>,
    pub floor_board_width_id: Option<String>,
}

impl BatchRequest {
    pub fn validate(&self) -> Result<()> {
        if self.room_type_ids.is_empty() || self.room_type_ids.iter().any(|id| id.is_empty()) {
            return Err(RoomGenError::ValidationError(
                "At least one room type is required".into(),
            ));
        }

        let required = [
            ("design style", &self.design_style_id),
            ("architect", &self.architect_id),
            ("designer", &self.designer_id),
            ("color wheel", &self.color_wheel_id),
            ("aspect ratio", &self.aspect_ratio_id),
            ("image quality", &self.image_quality_id),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(RoomGenError::ValidationError(format!(
                    "Missing required field: {}",
                    field
                )));
            }
        }

        Ok(())
    }

    /// Wire request for a single room carrying this batch's shared
    /// parameters.
    pub fn single_room(&self, room_type_id: &str) -> GenerateRequest {
        GenerateRequest {
            room_type_ids: vec![room_type_id.to_string()],
            design_style_id: self.design_style_id.clone(),
            architect_id: self.architect_id.clone(),
            designer_id: self.designer_id.clone(),
            color_wheel_id: self.color_wheel_id.clone(),
            aspect_ratio_id: self.aspect_ratio_id.clone(),
            image_quality_id: self.image_quality_id.clone(),
            flooring_type_id: self.flooring_type_id.clone(),
            floor_board_width_id: self.floor_board_width_id.clone(),
        }
    }
}

/// Body of `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub room_type_ids: Vec<String>,
    pub design_style_id: String,
    pub architect_id: String,
    pub designer_id: String,
    pub color_wheel_id: String,
    pub aspect_ratio_id: String,
    pub image_quality_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flooring_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_board_width_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<GenerationResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub room_type_id: String,
    pub result: RoomResult,
}

/// Per-room outcome inside a generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationResponse {
    /// Whether the single-room call this response answers succeeded.
    pub fn first_room_succeeded(&self) -> bool {
        self.success && self.results.first().map_or(false, |r| r.result.success)
    }

    pub fn first_room_error(&self) -> Option<&str> {
        self.results
            .first()
            .and_then(|r| r.result.error.as_deref())
    }
}

/// Outcome of a completed batch, returned to the caller so it can move
/// to the results view.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    pub completed: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.completed + self.failed
    }
}
