use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl SegmentStatus {
    /// Transitions only move forward; a settled segment never regresses.
    pub fn can_transition_to(&self, next: SegmentStatus) -> bool {
        match (self, next) {
            (SegmentStatus::Pending, SegmentStatus::InProgress) => true,
            (SegmentStatus::InProgress, SegmentStatus::Completed) => true,
            (SegmentStatus::InProgress, SegmentStatus::Failed) => true,
            _ => false,
        }
    }
}

/// Per-room-type unit of progress tracking within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSegment {
    pub room_type_id: String,
    pub room_type_name: String,
    pub status: SegmentStatus,
}

/// Snapshot of a running batch; exists only while the batch runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationProgress {
    pub is_generating: bool,
    pub total_count: usize,
    pub completed_count: usize,
    pub current_room_type_name: String,
    pub segments: Vec<ProgressSegment>,
}

impl GenerationProgress {
    pub fn new(segments: Vec<ProgressSegment>) -> Self {
        let current = segments
            .first()
            .map(|s| s.room_type_name.clone())
            .unwrap_or_default();

        GenerationProgress {
            is_generating: true,
            total_count: segments.len(),
            completed_count: 0,
            current_room_type_name: current,
            segments,
        }
    }

    /// Advance one segment, enforcing forward-only transitions.
    pub fn transition(&mut self, index: usize, next: SegmentStatus) {
        let Some(segment) = self.segments.get_mut(index) else {
            return;
        };
        if segment.status == next {
            return;
        }
        if !segment.status.can_transition_to(next) {
            log::warn!(
                "Ignoring backward segment transition {:?} -> {:?} for {}",
                segment.status,
                next,
                segment.room_type_id
            );
            return;
        }
        segment.status = next;
        match next {
            SegmentStatus::InProgress => {
                self.current_room_type_name = segment.room_type_name.clone();
            }
            SegmentStatus::Completed => {
                self.completed_count += 1;
            }
            _ => {}
        }
    }
}
