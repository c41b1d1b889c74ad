use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::models::{CatalogOption, DesignStyle, GenerationSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    Today,
    ThisWeek,
    ThisMonth,
    AllTime,
}

impl DateRange {
    /// Maximum whole-day age a session may have to pass the filter.
    fn max_age_days(&self) -> Option<i64> {
        match self {
            DateRange::Today => Some(0),
            DateRange::ThisWeek => Some(7),
            DateRange::ThisMonth => Some(30),
            DateRange::AllTime => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActiveFilters {
    pub room_type_ids: HashSet<String>,
    pub design_style_ids: HashSet<String>,
    pub date_range: DateRange,
}

impl Default for ActiveFilters {
    fn default() -> Self {
        ActiveFilters {
            room_type_ids: HashSet::new(),
            design_style_ids: HashSet::new(),
            date_range: DateRange::AllTime,
        }
    }
}

/// Filter options derived from the currently loaded sessions.
#[derive(Debug, Clone, Default)]
pub struct FilterFacets {
    pub room_types: Vec<CatalogOption>,
    pub design_styles: Vec<DesignStyle>,
}

/// Pure two-stage filter: session-level inclusion, then image-level
/// narrowing for the room-type facet. `now` is injected so the date
/// filter is deterministic under test.
pub fn filter_sessions(
    sessions: &[GenerationSession],
    filters: &ActiveFilters,
    now: DateTime<Utc>,
) -> Vec<GenerationSession> {
    sessions
        .iter()
        .filter(|session| {
            if let Some(max_days) = filters.date_range.max_age_days() {
                let age_days = (now - session.created_at).num_days();
                if age_days > max_days {
                    return false;
                }
            }

            if !filters.design_style_ids.is_empty()
                && !filters.design_style_ids.contains(&session.design_style.id)
            {
                return false;
            }

            if !filters.room_type_ids.is_empty() {
                let has_matching_room = session
                    .images
                    .iter()
                    .any(|img| filters.room_type_ids.contains(&img.room_type.id));
                if !has_matching_room {
                    return false;
                }
            }

            true
        })
        .map(|session| {
            if filters.room_type_ids.is_empty() {
                session.clone()
            } else {
                let mut narrowed = session.clone();
                narrowed
                    .images
                    .retain(|img| filters.room_type_ids.contains(&img.room_type.id));
                narrowed
            }
        })
        .collect()
}

/// Distinct room types and design styles present in the loaded data.
pub fn derive_facets(sessions: &[GenerationSession]) -> FilterFacets {
    let mut room_types: HashMap<String, CatalogOption> = HashMap::new();
    let mut design_styles: HashMap<String, DesignStyle> = HashMap::new();

    for session in sessions {
        design_styles
            .entry(session.design_style.id.clone())
            .or_insert_with(|| session.design_style.clone());
        for image in &session.images {
            room_types
                .entry(image.room_type.id.clone())
                .or_insert_with(|| image.room_type.clone());
        }
    }

    let mut room_types: Vec<_> = room_types.into_values().collect();
    room_types.sort_by(|a, b| a.name.cmp(&b.name));
    let mut design_styles: Vec<_> = design_styles.into_values().collect();
    design_styles.sort_by(|a, b| a.name.cmp(&b.name));

    FilterFacets {
        room_types,
        design_styles,
    }
}
