use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::percent_decode_str;

use crate::{
    api::traits::ImageSource,
    error::{Result, RoomGenError},
    models::{GeneratedImage, GenerationSession},
};

/// Transient state of the one batch-download job allowed in flight.
#[derive(Debug, Clone, Default)]
pub struct DownloadJob {
    pub is_open: bool,
    pub target_name: String,
    pub is_downloading: bool,
    pub last_error: Option<String>,
}

/// Deterministic, unique archive entry name for one image.
pub fn entry_name(session: &GenerationSession, image: &GeneratedImage) -> String {
    let id_prefix: String = image.id.chars().take(4).collect();
    format!(
        "{}-{}-{}.jpg",
        session.design_style.id, image.room_type.id, id_prefix
    )
}

/// Decode an inline `data:[mime][;base64],payload` reference. The
/// `;base64` marker selects binary decoding; otherwise the payload is
/// percent-encoded text.
pub fn decode_data_url(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| RoomGenError::ResponseError("Not a data URL".into()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| RoomGenError::ResponseError("Malformed data URL: no payload".into()))?;

    if header.ends_with(";base64") {
        BASE64
            .decode(payload)
            .map_err(|e| RoomGenError::ResponseError(format!("Invalid base64 payload: {}", e)))
    } else {
        Ok(percent_decode_str(payload).collect())
    }
}

/// Resolve one image's binary content: inline payloads decode locally,
/// everything else goes through the image source.
pub async fn resolve_content(source: &dyn ImageSource, url: &str) -> Result<Vec<u8>> {
    if url.starts_with("data:") {
        decode_data_url(url)
    } else {
        source.fetch_bytes(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CatalogOption, DesignStyle};
    use chrono::Utc;

    #[test]
    fn test_entry_name_uses_style_room_and_id_prefix() {
        let session = GenerationSession {
            id: "s1".into(),
            created_at: Utc::now(),
            design_style: DesignStyle {
                id: "modern".into(),
                name: "Modern".into(),
            },
            architect: CatalogOption {
                id: "a1".into(),
                name: "A".into(),
            },
            designer: CatalogOption {
                id: "d1".into(),
                name: "D".into(),
            },
            color_wheel: "Light".into(),
            aspect_ratio: "1:1".into(),
            image_quality: "2K".into(),
            images: vec![],
        };
        let image = GeneratedImage {
            id: "abcdef-123".into(),
            room_type: CatalogOption {
                id: "kitchen".into(),
                name: "Kitchen".into(),
            },
            url: String::new(),
        };

        assert_eq!(entry_name(&session, &image), "modern-kitchen-abcd.jpg");
    }

    #[test]
    fn test_decode_base64_data_url() {
        let url = format!("data:image/jpeg;base64,{}", BASE64.encode([0xff, 0xd8, 0xff]));
        assert_eq!(decode_data_url(&url).unwrap(), vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn test_decode_text_data_url() {
        let bytes = decode_data_url("data:text/plain,hello%20world").unwrap();
        assert_eq!(bytes, b"hello world");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode_data_url("data:image/jpegAAAA").is_err());
        assert!(decode_data_url("data:image/jpeg;base64,!!!").is_err());
    }
}
