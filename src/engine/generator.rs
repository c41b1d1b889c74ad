use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::{
    api::traits::GenerationService,
    error::{Result, RoomGenError},
    models::{
        BatchOutcome, BatchRequest, ColorWheel, GeneratedImage, GenerateRequest,
        GenerationProgress, GenerationSession, GlobalOptions, ImageQuality, ProgressSegment,
        SegmentStatus,
    },
};

/// Drives a multi-room generation request as N sequential single-room
/// calls, exposing live progress. One batch may run at a time; there is
/// no mid-flight cancel (the loop runs to completion or to the first
/// transport error).
pub struct GenerationOrchestrator {
    service: Arc<dyn GenerationService>,
    state: Mutex<OrchestratorState>,
}

struct OrchestratorState {
    progress: Option<GenerationProgress>,
    regenerating: HashSet<String>,
    subscribers: Vec<mpsc::UnboundedSender<GenerationProgress>>,
}

impl GenerationOrchestrator {
    pub fn new(service: Arc<dyn GenerationService>) -> Self {
        Self {
            service,
            state: Mutex::new(OrchestratorState {
                progress: None,
                regenerating: HashSet::new(),
                subscribers: Vec::new(),
            }),
        }
    }

    /// Snapshot of the running batch, if any.
    pub fn progress(&self) -> Option<GenerationProgress> {
        self.state.lock().unwrap().progress.clone()
    }

    /// Stream of progress snapshots. The final snapshot of a batch has
    /// `is_generating == false`.
    pub fn progress_updates(&self) -> UnboundedReceiverStream<GenerationProgress> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state.lock().unwrap().subscribers.push(tx);
        UnboundedReceiverStream::new(rx)
    }

    fn publish(state: &mut OrchestratorState, snapshot: GenerationProgress) {
        state.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
    }

    /// Submit a batch: one service call per room type, strictly in
    /// order. A failed room is recorded and skipped; a transport error
    /// aborts the remaining rooms. Completed rooms are never rolled
    /// back either way.
    pub async fn submit_batch(
        &self,
        request: &BatchRequest,
        options: &GlobalOptions,
    ) -> Result<BatchOutcome> {
        request.validate()?;

        {
            let mut state = self.state.lock().unwrap();
            if state.progress.is_some() {
                return Err(RoomGenError::BusyError(
                    "A generation batch is already running".into(),
                ));
            }

            let segments = request
                .room_type_ids
                .iter()
                .map(|id| ProgressSegment {
                    room_type_id: id.clone(),
                    room_type_name: options.room_type_name(id),
                    status: SegmentStatus::Pending,
                })
                .collect();

            let mut progress = GenerationProgress::new(segments);
            progress.transition(0, SegmentStatus::InProgress);
            Self::publish(&mut state, progress.clone());
            state.progress = Some(progress);
        }

        log::info!(
            "Starting generation batch for {} room types",
            request.room_type_ids.len()
        );

        for (index, room_type_id) in request.room_type_ids.iter().enumerate() {
            {
                let mut state = self.state.lock().unwrap();
                if let Some(progress) = state.progress.as_mut() {
                    progress.transition(index, SegmentStatus::InProgress);
                    let snapshot = progress.clone();
                    Self::publish(&mut state, snapshot);
                }
            }

            let single = request.single_room(room_type_id);
            match self.service.generate(&single).await {
                Ok(response) => {
                    let status = if response.first_room_succeeded() {
                        SegmentStatus::Completed
                    } else {
                        log::error!(
                            "Generation failed for {}: {}",
                            room_type_id,
                            response.first_room_error().unwrap_or("unknown error")
                        );
                        SegmentStatus::Failed
                    };

                    let mut state = self.state.lock().unwrap();
                    if let Some(progress) = state.progress.as_mut() {
                        progress.transition(index, status);
                        let snapshot = progress.clone();
                        Self::publish(&mut state, snapshot);
                    }
                }
                Err(e) => {
                    // Transport-level failure: abort the remaining
                    // rooms. Completed segments stand; the service is
                    // the source of truth for what was created.
                    log::error!("Generation batch aborted: {}", e);
                    self.clear_progress();
                    return Err(e);
                }
            }
        }

        let outcome = self.clear_progress().map(|progress| {
            let completed = progress
                .segments
                .iter()
                .filter(|s| s.status == SegmentStatus::Completed)
                .count();
            BatchOutcome {
                completed,
                failed: progress.segments.len() - completed,
            }
        });

        let outcome = outcome.unwrap_or(BatchOutcome {
            completed: 0,
            failed: 0,
        });
        log::info!(
            "Generation batch finished: {} completed, {} failed",
            outcome.completed,
            outcome.failed
        );
        Ok(outcome)
    }

    /// Regenerate a single image using its session's stored parameters
    /// narrowed to that image's room type. Returns `Ok(false)` when the
    /// image is already mid-regeneration (duplicate triggers no-op).
    pub async fn regenerate_one(
        &self,
        session: &GenerationSession,
        image: &GeneratedImage,
    ) -> Result<bool> {
        {
            let mut state = self.state.lock().unwrap();
            if !state.regenerating.insert(image.id.clone()) {
                log::debug!("Regeneration already in flight for image {}", image.id);
                return Ok(false);
            }
        }

        let result = self.regenerate_inner(session, image).await;

        // In-flight marker clears on every exit path.
        self.state.lock().unwrap().regenerating.remove(&image.id);

        result.map(|_| true)
    }

    async fn regenerate_inner(
        &self,
        session: &GenerationSession,
        image: &GeneratedImage,
    ) -> Result<()> {
        // Sessions created under an incompatible historical schema must
        // not corrupt a new request.
        let color_wheel = ColorWheel::parse(&session.color_wheel).ok_or_else(|| {
            log::warn!(
                "Session {} has unrecognized color wheel '{}', skipping regeneration",
                session.id,
                session.color_wheel
            );
            RoomGenError::SchemaError(format!(
                "Unrecognized color wheel value '{}'",
                session.color_wheel
            ))
        })?;
        let quality = ImageQuality::parse(&session.image_quality).ok_or_else(|| {
            log::warn!(
                "Session {} has unrecognized image quality '{}', skipping regeneration",
                session.id,
                session.image_quality
            );
            RoomGenError::SchemaError(format!(
                "Unrecognized image quality value '{}'",
                session.image_quality
            ))
        })?;

        let request = GenerateRequest {
            room_type_ids: vec![image.room_type.id.clone()],
            design_style_id: session.design_style.id.clone(),
            architect_id: session.architect.id.clone(),
            designer_id: session.designer.id.clone(),
            color_wheel_id: color_wheel.id().to_string(),
            aspect_ratio_id: session.aspect_ratio.clone(),
            image_quality_id: quality.id().to_string(),
            flooring_type_id: None,
            floor_board_width_id: None,
        };

        let response = self.service.generate(&request).await?;
        if response.first_room_succeeded() {
            log::info!("Regenerated image {} ({})", image.id, image.room_type.id);
            Ok(())
        } else {
            Err(RoomGenError::ApiError(
                response
                    .first_room_error()
                    .unwrap_or("Regeneration failed")
                    .to_string(),
            ))
        }
    }

    fn clear_progress(&self) -> Option<GenerationProgress> {
        let mut state = self.state.lock().unwrap();
        let mut finished = state.progress.take();
        if let Some(progress) = finished.as_mut() {
            progress.is_generating = false;
            let snapshot = progress.clone();
            Self::publish(&mut state, snapshot);
        }
        finished
    }
}
