use serde::{Deserialize, Serialize};

/// Immutable reference entity: room type, color-wheel option, aspect
/// ratio, quality tier, flooring type, floor-board width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStyle {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Architect {
    pub id: String,
    pub name: String,
    #[serde(rename = "styleIds", default)]
    pub style_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designer {
    pub id: String,
    pub name: String,
    #[serde(rename = "styleIds", default)]
    pub style_ids: Vec<String>,
}

impl Architect {
    pub fn supports_style(&self, style_id: &str) -> bool {
        self.style_ids.iter().any(|id| id == style_id)
    }
}

impl Designer {
    pub fn supports_style(&self, style_id: &str) -> bool {
        self.style_ids.iter().any(|id| id == style_id)
    }
}

/// Static reference data returned by `GET /options`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalOptions {
    #[serde(default)]
    pub room_types: Vec<CatalogOption>,
    #[serde(default)]
    pub color_wheel_options: Vec<CatalogOption>,
    #[serde(default)]
    pub aspect_ratios: Vec<CatalogOption>,
    #[serde(default)]
    pub image_quality_options: Vec<CatalogOption>,
    #[serde(default)]
    pub flooring_types: Vec<CatalogOption>,
    #[serde(default)]
    pub floor_board_widths: Vec<CatalogOption>,
}

impl GlobalOptions {
    pub fn room_type_name(&self, room_type_id: &str) -> String {
        self.room_types
            .iter()
            .find(|r| r.id == room_type_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| room_type_id.to_string())
    }
}

/// The full catalog pool loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub options: GlobalOptions,
    pub design_styles: Vec<DesignStyle>,
    pub architects: Vec<Architect>,
    pub designers: Vec<Designer>,
}

impl Catalog {
    /// Architects compatible with the selected style.
    pub fn architects_for_style(&self, style_id: &str) -> Vec<&Architect> {
        self.architects
            .iter()
            .filter(|a| a.supports_style(style_id))
            .collect()
    }

    /// Designers compatible with the selected style.
    pub fn designers_for_style(&self, style_id: &str) -> Vec<&Designer> {
        self.designers
            .iter()
            .filter(|d| d.supports_style(style_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_compatibility_filters_pool() {
        let catalog = Catalog {
            architects: vec![
                Architect {
                    id: "a1".into(),
                    name: "A One".into(),
                    style_ids: vec!["modern".into(), "rustic".into()],
                },
                Architect {
                    id: "a2".into(),
                    name: "A Two".into(),
                    style_ids: vec!["rustic".into()],
                },
            ],
            ..Default::default()
        };

        let eligible = catalog.architects_for_style("modern");
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id, "a1");
    }

    #[test]
    fn test_room_type_name_falls_back_to_id() {
        let options = GlobalOptions {
            room_types: vec![CatalogOption {
                id: "living-room".into(),
                name: "Living Room".into(),
            }],
            ..Default::default()
        };
        assert_eq!(options.room_type_name("living-room"), "Living Room");
        assert_eq!(options.room_type_name("attic"), "attic");
    }
}
