use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::catalog::{CatalogOption, DesignStyle};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: String,
    pub room_type: CatalogOption,
    /// Absolute HTTP(S) reference, relative reference, or inline
    /// `data:` payload. Relative references are resolved at load time.
    pub url: String,
}

/// The persisted record of one completed batch and its images. Created
/// server-side per generation call; the client never mutates it except
/// by re-fetching after a regenerate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub design_style: DesignStyle,
    pub architect: CatalogOption,
    pub designer: CatalogOption,
    /// Historical records carry free-form labels; `ColorWheel::parse`
    /// is the normalization boundary.
    pub color_wheel: String,
    pub aspect_ratio: String,
    pub image_quality: String,
    #[serde(default)]
    pub images: Vec<GeneratedImage>,
}

impl GenerationSession {
    pub fn image(&self, image_id: &str) -> Option<&GeneratedImage> {
        self.images.iter().find(|img| img.id == image_id)
    }

    pub fn image_ids(&self) -> Vec<String> {
        self.images.iter().map(|img| img.id.clone()).collect()
    }
}

/// Canonical color-wheel enumeration accepted by the generation
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWheel {
    Light,
    Medium,
    Dark,
}

impl ColorWheel {
    /// Case/whitespace-insensitive parse of a stored label.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(ColorWheel::Light),
            "medium" => Some(ColorWheel::Medium),
            "dark" => Some(ColorWheel::Dark),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ColorWheel::Light => "light",
            ColorWheel::Medium => "medium",
            ColorWheel::Dark => "dark",
        }
    }
}

/// Canonical quality enumeration accepted by the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageQuality {
    OneK,
    TwoK,
    FourK,
    Standard,
    High,
}

impl ImageQuality {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "1k" => Some(ImageQuality::OneK),
            "2k" => Some(ImageQuality::TwoK),
            "4k" => Some(ImageQuality::FourK),
            "standard" => Some(ImageQuality::Standard),
            "high" => Some(ImageQuality::High),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            ImageQuality::OneK => "1k",
            ImageQuality::TwoK => "2k",
            ImageQuality::FourK => "4k",
            ImageQuality::Standard => "standard",
            ImageQuality::High => "high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_wheel_parse_is_lenient() {
        assert_eq!(ColorWheel::parse("Light"), Some(ColorWheel::Light));
        assert_eq!(ColorWheel::parse("  dark  "), Some(ColorWheel::Dark));
        assert_eq!(ColorWheel::parse("MEDIUM"), Some(ColorWheel::Medium));
        assert_eq!(ColorWheel::parse("vivid"), None);
    }

    #[test]
    fn test_image_quality_parse_is_lenient() {
        assert_eq!(ImageQuality::parse("2K"), Some(ImageQuality::TwoK));
        assert_eq!(ImageQuality::parse(" standard"), Some(ImageQuality::Standard));
        assert_eq!(ImageQuality::parse("ultra"), None);
    }

    #[test]
    fn test_session_wire_shape() {
        let json = r#"{
            "id": "s1",
            "createdAt": "2026-08-01T10:00:00Z",
            "designStyle": {"id": "modern", "name": "Modern"},
            "architect": {"id": "a1", "name": "A One"},
            "designer": {"id": "d1", "name": "D One"},
            "colorWheel": "Light",
            "aspectRatio": "16:9",
            "imageQuality": "2K",
            "images": [
                {"id": "img-1", "roomType": {"id": "kitchen", "name": "Kitchen"}, "url": "/images/s1/kitchen.jpg"}
            ]
        }"#;

        let session: GenerationSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.design_style.id, "modern");
        assert_eq!(session.images.len(), 1);
        assert!(session.image("img-1").is_some());
        assert!(session.image("img-2").is_none());
        assert_eq!(ColorWheel::parse(&session.color_wheel), Some(ColorWheel::Light));
    }
}
