use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use futures::future::join_all;
use reqwest::Url;

use crate::{
    api::traits::{ImageSource, SessionStore},
    archive::{build_archive, ArchiveEntry, ArchiveSink},
    engine::download::{entry_name, resolve_content, DownloadJob},
    engine::filter::{derive_facets, filter_sessions, ActiveFilters, FilterFacets},
    engine::generator::GenerationOrchestrator,
    error::{Result, RoomGenError},
    models::{ColorWheel, GenerationSession, ImageQuality},
};

/// Fullscreen viewer position over the flattened image list.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    pub is_open: bool,
    pub current_image_id: Option<String>,
}

/// Result of a successful batch download.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    pub archive_path: std::path::PathBuf,
    pub archived: usize,
    pub failed: usize,
}

struct GalleryState {
    sessions: Vec<GenerationSession>,
    selected: HashSet<String>,
    filters: ActiveFilters,
    job: DownloadJob,
    lightbox: Lightbox,
}

/// Owns the gallery's session list, selection set, filters, download
/// job, and lightbox. Callers receive cloned snapshots, never shared
/// references into the owned state.
pub struct GalleryEngine {
    store: Arc<dyn SessionStore>,
    images: Arc<dyn ImageSource>,
    sink: Arc<dyn ArchiveSink>,
    orchestrator: Arc<GenerationOrchestrator>,
    api_base: String,
    state: Mutex<GalleryState>,
}

/// Resolve a possibly-relative image reference against the API base.
/// Inline `data:` payloads and absolute URLs pass through.
pub fn resolve_image_url(api_base: &str, url: &str) -> Result<String> {
    if url.starts_with("data:") || url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url.to_string());
    }

    let base = Url::parse(api_base)
        .map_err(|e| RoomGenError::ConfigError(format!("Invalid API base URL: {}", e)))?;
    let resolved = base
        .join(url)
        .map_err(|e| RoomGenError::ResponseError(format!("Unresolvable image URL: {}", e)))?;
    Ok(resolved.to_string())
}

/// Default archive name offered when opening the download job.
pub fn default_archive_name(now: DateTime<Utc>) -> String {
    format!("room-designs-{}", now.format("%Y-%m-%d"))
}

impl GalleryEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        images: Arc<dyn ImageSource>,
        sink: Arc<dyn ArchiveSink>,
        orchestrator: Arc<GenerationOrchestrator>,
        api_base: String,
    ) -> Self {
        Self {
            store,
            images,
            sink,
            orchestrator,
            api_base,
            state: Mutex::new(GalleryState {
                sessions: Vec::new(),
                selected: HashSet::new(),
                filters: ActiveFilters::default(),
                job: DownloadJob::default(),
                lightbox: Lightbox::default(),
            }),
        }
    }

    /// Fetch and normalize the session list. Individual sessions that
    /// fail normalization are skipped; the rest still load. Selection
    /// entries whose image vanished on refetch are pruned.
    pub async fn refresh_sessions(&self) -> Result<usize> {
        let fetched = self.store.fetch_sessions().await?;

        let mut sessions = Vec::with_capacity(fetched.len());
        for mut session in fetched {
            match self.normalize_session(&mut session) {
                Ok(()) => sessions.push(session),
                Err(e) => {
                    log::warn!("Skipping session {}: {}", session.id, e);
                }
            }
        }
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let loaded = sessions.len();
        let mut state = self.state.lock().unwrap();
        let live_ids: HashSet<String> = sessions
            .iter()
            .flat_map(|s| s.images.iter().map(|img| img.id.clone()))
            .collect();
        state.selected.retain(|id| live_ids.contains(id));
        state.sessions = sessions;

        log::info!("Loaded {} gallery sessions", loaded);
        Ok(loaded)
    }

    fn normalize_session(&self, session: &mut GenerationSession) -> Result<()> {
        for image in &mut session.images {
            image.url = resolve_image_url(&self.api_base, &image.url)?;
        }

        // Historical records may carry enumeration values the service
        // no longer accepts; they still display, but regeneration will
        // re-validate.
        if ColorWheel::parse(&session.color_wheel).is_none() {
            log::warn!(
                "Session {} has unrecognized color wheel '{}'",
                session.id,
                session.color_wheel
            );
        }
        if ImageQuality::parse(&session.image_quality).is_none() {
            log::warn!(
                "Session {} has unrecognized image quality '{}'",
                session.id,
                session.image_quality
            );
        }
        Ok(())
    }

    pub fn sessions(&self) -> Vec<GenerationSession> {
        self.state.lock().unwrap().sessions.clone()
    }

    /// Sessions passing the active filters, with image lists narrowed
    /// by the room-type facet. Recomputed on every call.
    pub fn filtered_sessions(&self) -> Vec<GenerationSession> {
        let state = self.state.lock().unwrap();
        filter_sessions(&state.sessions, &state.filters, Utc::now())
    }

    pub fn facets(&self) -> FilterFacets {
        derive_facets(&self.state.lock().unwrap().sessions)
    }

    pub fn filters(&self) -> ActiveFilters {
        self.state.lock().unwrap().filters.clone()
    }

    pub fn set_filters(&self, filters: ActiveFilters) {
        self.state.lock().unwrap().filters = filters;
    }

    // --- selection ---

    pub fn toggle_image(&self, image_id: &str) {
        let mut state = self.state.lock().unwrap();
        if !state.selected.remove(image_id) {
            state.selected.insert(image_id.to_string());
        }
    }

    /// Select or deselect every image of one session. Set union and
    /// difference, so independently selected images survive a
    /// select-then-deselect of an overlapping session.
    pub fn select_session(&self, session_id: &str, selected: bool) {
        let mut state = self.state.lock().unwrap();
        let Some(session) = state.sessions.iter().find(|s| s.id == session_id) else {
            return;
        };
        let ids = session.image_ids();
        if selected {
            state.selected.extend(ids);
        } else {
            for id in &ids {
                state.selected.remove(id);
            }
        }
    }

    pub fn clear_selection(&self) {
        self.state.lock().unwrap().selected.clear();
    }

    pub fn selected_ids(&self) -> HashSet<String> {
        self.state.lock().unwrap().selected.clone()
    }

    // --- download job ---

    pub fn download_job(&self) -> DownloadJob {
        self.state.lock().unwrap().job.clone()
    }

    /// Open the download dialog for the current selection.
    pub fn open_download(&self) {
        let mut state = self.state.lock().unwrap();
        state.job = DownloadJob {
            is_open: true,
            target_name: default_archive_name(Utc::now()),
            is_downloading: false,
            last_error: None,
        };
    }

    /// Select a whole session and open the download dialog scoped to it.
    pub fn open_session_download(&self, session_id: &str) {
        self.select_session(session_id, true);
        let mut state = self.state.lock().unwrap();
        if !state.sessions.iter().any(|s| s.id == session_id) {
            return;
        }
        let prefix: String = session_id.chars().take(8).collect();
        state.job = DownloadJob {
            is_open: true,
            target_name: format!("session-{}", prefix),
            is_downloading: false,
            last_error: None,
        };
    }

    /// Cancel is honored only between attempts, never mid-download.
    pub fn cancel_download(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.job.is_downloading {
            return Err(RoomGenError::BusyError(
                "Cannot cancel while a download is running".into(),
            ));
        }
        state.job = DownloadJob::default();
        Ok(())
    }

    /// Best-effort batch download: resolve every selected image
    /// concurrently, archive whatever succeeded, and report the rest.
    /// The whole job fails only when every item failed.
    pub async fn confirm_download(&self, target_name: &str) -> Result<DownloadReport> {
        let work: Vec<(String, String)> = {
            let mut state = self.state.lock().unwrap();
            if state.selected.is_empty() {
                return Err(RoomGenError::ValidationError(
                    "No images selected for download".into(),
                ));
            }
            if state.job.is_downloading {
                return Err(RoomGenError::BusyError(
                    "A download is already running".into(),
                ));
            }
            state.job.is_open = true;
            state.job.is_downloading = true;
            state.job.target_name = target_name.to_string();
            state.job.last_error = None;

            state
                .sessions
                .iter()
                .flat_map(|session| {
                    session
                        .images
                        .iter()
                        .filter(|img| state.selected.contains(&img.id))
                        .map(move |img| (entry_name(session, img), img.url.clone()))
                })
                .collect()
        };

        let total = work.len();
        let resolutions = join_all(work.into_iter().map(|(name, url)| {
            let images = self.images.clone();
            async move {
                match resolve_content(images.as_ref(), &url).await {
                    Ok(bytes) => Ok(ArchiveEntry { name, bytes }),
                    Err(e) => Err((name, e)),
                }
            }
        }))
        .await;

        let mut entries = Vec::new();
        let mut failures = Vec::new();
        for resolution in resolutions {
            match resolution {
                Ok(entry) => entries.push(entry),
                Err(failure) => failures.push(failure),
            }
        }

        for (name, error) in &failures {
            log::warn!("Failed to resolve {}: {}", name, error);
        }

        if entries.is_empty() {
            let first = failures
                .into_iter()
                .next()
                .map(|(_, e)| e)
                .unwrap_or_else(|| {
                    RoomGenError::ArchiveError("No images could be resolved".into())
                });
            let mut state = self.state.lock().unwrap();
            state.job.is_downloading = false;
            state.job.last_error = Some(first.to_string());
            return Err(first);
        }

        let archived = entries.len();
        let persisted = async {
            let bytes = build_archive(target_name, &entries)?;
            self.sink.persist(target_name, bytes).await
        }
        .await;

        match persisted {
            Ok(archive_path) => {
                let mut state = self.state.lock().unwrap();
                state.job = DownloadJob::default();
                state.selected.clear();
                if !failures.is_empty() {
                    log::warn!(
                        "Archived {} of {} selected images; {} failed",
                        archived,
                        total,
                        failures.len()
                    );
                }
                Ok(DownloadReport {
                    archive_path,
                    archived,
                    failed: failures.len(),
                })
            }
            Err(e) => {
                // The dialog stays interactive so the user can retry or
                // cancel.
                let mut state = self.state.lock().unwrap();
                state.job.is_downloading = false;
                state.job.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // --- regeneration ---

    /// Regenerate one image via the orchestrator's single-call
    /// primitive, then re-fetch the session list; the backend is the
    /// source of truth for the new state.
    pub async fn regenerate_image(&self, session_id: &str, image_id: &str) -> Result<bool> {
        let found = {
            let state = self.state.lock().unwrap();
            state
                .sessions
                .iter()
                .find(|s| s.id == session_id)
                .and_then(|s| s.image(image_id).map(|img| (s.clone(), img.clone())))
        };
        let Some((session, image)) = found else {
            log::warn!(
                "Regeneration requested for unknown image {} in session {}",
                image_id,
                session_id
            );
            return Ok(false);
        };

        if self.orchestrator.regenerate_one(&session, &image).await? {
            self.refresh_sessions().await?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // --- lightbox ---

    pub fn lightbox(&self) -> Lightbox {
        self.state.lock().unwrap().lightbox.clone()
    }

    pub fn open_lightbox(&self, image_id: &str) {
        let mut state = self.state.lock().unwrap();
        state.lightbox = Lightbox {
            is_open: true,
            current_image_id: Some(image_id.to_string()),
        };
    }

    pub fn close_lightbox(&self) {
        self.state.lock().unwrap().lightbox.is_open = false;
    }

    pub fn lightbox_prev(&self) {
        self.step_lightbox(-1);
    }

    pub fn lightbox_next(&self) {
        self.step_lightbox(1);
    }

    fn step_lightbox(&self, step: isize) {
        let mut state = self.state.lock().unwrap();
        let Some(current) = state.lightbox.current_image_id.clone() else {
            return;
        };

        let all_ids: Vec<String> = state
            .sessions
            .iter()
            .flat_map(|s| s.images.iter().map(|img| img.id.clone()))
            .collect();
        let Some(index) = all_ids.iter().position(|id| *id == current) else {
            return;
        };

        let next = index as isize + step;
        if next >= 0 && (next as usize) < all_ids.len() {
            state.lightbox.current_image_id = Some(all_ids[next as usize].clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::traits::GenerationService;
    use crate::models::{
        CatalogOption, DesignStyle, GeneratedImage, GenerateRequest, GenerationResponse,
        GenerationResult, RoomResult,
    };
    use async_trait::async_trait;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use std::io::Read;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeStore {
        sessions: Mutex<Vec<GenerationSession>>,
        fetch_count: AtomicUsize,
    }

    #[async_trait]
    impl SessionStore for FakeStore {
        async fn fetch_sessions(&self) -> Result<Vec<GenerationSession>> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            Ok(self.sessions.lock().unwrap().clone())
        }
    }

    /// Serves bytes for known URLs, 404s the rest.
    struct FakeImages {
        missing: Vec<String>,
        delay: Option<std::time::Duration>,
    }

    #[async_trait]
    impl ImageSource for FakeImages {
        async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.missing.iter().any(|m| url.contains(m.as_str())) {
                Err(RoomGenError::ApiError(
                    "Image fetch failed with status 404".into(),
                ))
            } else {
                Ok(url.as_bytes().to_vec())
            }
        }
    }

    #[derive(Default)]
    struct FakeSink {
        persisted: Mutex<Option<(String, Vec<u8>)>>,
    }

    #[async_trait]
    impl ArchiveSink for FakeSink {
        async fn persist(&self, target_name: &str, bytes: Vec<u8>) -> Result<std::path::PathBuf> {
            let path = std::path::PathBuf::from(format!("{}.zip", target_name));
            *self.persisted.lock().unwrap() = Some((target_name.to_string(), bytes));
            Ok(path)
        }
    }

    struct FakeGen {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl GenerationService for FakeGen {
        async fn generate(&self, request: &GenerateRequest) -> Result<GenerationResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(GenerationResponse {
                success: true,
                results: vec![GenerationResult {
                    room_type_id: request.room_type_ids[0].clone(),
                    result: RoomResult {
                        success: true,
                        data: Some("/api/images/sessions/s1/new.jpg".into()),
                        error: None,
                    },
                }],
            })
        }
    }

    fn option(id: &str) -> CatalogOption {
        CatalogOption {
            id: id.to_string(),
            name: id.to_uppercase(),
        }
    }

    fn session(id: &str, images: Vec<GeneratedImage>) -> GenerationSession {
        GenerationSession {
            id: id.to_string(),
            created_at: Utc::now(),
            design_style: DesignStyle {
                id: "modern".into(),
                name: "Modern".into(),
            },
            architect: option("a1"),
            designer: option("d1"),
            color_wheel: "Light".into(),
            aspect_ratio: "16:9".into(),
            image_quality: "2K".into(),
            images,
        }
    }

    fn image(id: &str, room: &str, url: &str) -> GeneratedImage {
        GeneratedImage {
            id: id.to_string(),
            room_type: option(room),
            url: url.to_string(),
        }
    }

    fn engine_with(sessions: Vec<GenerationSession>, missing: Vec<String>) -> (Arc<GalleryEngine>, Arc<FakeSink>, Arc<FakeStore>) {
        let store = Arc::new(FakeStore {
            sessions: Mutex::new(sessions),
            fetch_count: AtomicUsize::new(0),
        });
        let sink = Arc::new(FakeSink::default());
        let orchestrator = Arc::new(GenerationOrchestrator::new(Arc::new(FakeGen {
            calls: AtomicUsize::new(0),
        })));
        let engine = Arc::new(GalleryEngine::new(
            store.clone(),
            Arc::new(FakeImages {
                missing,
                delay: None,
            }),
            sink.clone(),
            orchestrator,
            "http://localhost:8000/api".into(),
        ));
        (engine, sink, store)
    }

    #[tokio::test]
    async fn test_refresh_resolves_relative_urls() {
        let sessions = vec![session(
            "s1",
            vec![image("i1", "kitchen", "/api/images/sessions/s1/kitchen.jpg")],
        )];
        let (engine, _, _) = engine_with(sessions, vec![]);

        engine.refresh_sessions().await.unwrap();
        let loaded = engine.sessions();
        assert_eq!(
            loaded[0].images[0].url,
            "http://localhost:8000/api/images/sessions/s1/kitchen.jpg"
        );
    }

    #[tokio::test]
    async fn test_refresh_prunes_stale_selection() {
        let sessions = vec![session("s1", vec![image("i1", "kitchen", "http://x/1.jpg")])];
        let (engine, _, store) = engine_with(sessions, vec![]);

        engine.refresh_sessions().await.unwrap();
        engine.toggle_image("i1");
        assert!(engine.selected_ids().contains("i1"));

        store.sessions.lock().unwrap().clear();
        engine.refresh_sessions().await.unwrap();
        assert!(engine.selected_ids().is_empty());
    }

    #[tokio::test]
    async fn test_session_select_and_deselect_are_set_operations() {
        let sessions = vec![
            session(
                "s1",
                vec![
                    image("i1", "kitchen", "http://x/1.jpg"),
                    image("i2", "bedroom", "http://x/2.jpg"),
                ],
            ),
            session("s2", vec![image("i3", "attic", "http://x/3.jpg")]),
        ];
        let (engine, _, _) = engine_with(sessions, vec![]);
        engine.refresh_sessions().await.unwrap();

        // i3 selected independently before the session-level toggle
        engine.toggle_image("i3");
        engine.toggle_image("i1");
        engine.select_session("s1", true);
        let selected = engine.selected_ids();
        assert_eq!(selected.len(), 3);

        engine.select_session("s1", false);
        let selected = engine.selected_ids();
        assert_eq!(selected.len(), 1);
        assert!(selected.contains("i3"));
    }

    #[tokio::test]
    async fn test_confirm_download_rejects_empty_selection() {
        let (engine, _, _) = engine_with(vec![], vec![]);
        let result = engine.confirm_download("batch").await;
        assert!(matches!(result, Err(RoomGenError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_mixed_download_archives_successes_and_logs_failures() {
        let inline = format!("data:image/jpeg;base64,{}", BASE64.encode([1u8, 2, 3]));
        let sessions = vec![session(
            "s1",
            vec![
                image("aaaa-1", "kitchen", &inline),
                image("bbbb-2", "bedroom", "http://x/ok.jpg"),
                image("cccc-3", "attic", "http://x/gone.jpg"),
            ],
        )];
        let (engine, sink, _) = engine_with(sessions, vec!["gone".into()]);
        engine.refresh_sessions().await.unwrap();
        engine.select_session("s1", true);

        let report = engine.confirm_download("my-rooms").await.unwrap();
        assert_eq!(report.archived, 2);
        assert_eq!(report.failed, 1);

        // Job closed, whole selection cleared on partial success.
        assert!(!engine.download_job().is_open);
        assert!(engine.selected_ids().is_empty());

        let (name, bytes) = sink.persisted.lock().unwrap().clone().unwrap();
        assert_eq!(name, "my-rooms");
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        let mut entry = archive.by_name("my-rooms/modern-kitchen-aaaa.jpg").unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        assert_eq!(content, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_all_failed_download_keeps_job_open_and_selection() {
        let sessions = vec![session(
            "s1",
            vec![
                image("aaaa-1", "kitchen", "http://x/gone1.jpg"),
                image("bbbb-2", "bedroom", "http://x/gone2.jpg"),
            ],
        )];
        let (engine, sink, _) = engine_with(sessions, vec!["gone".into()]);
        engine.refresh_sessions().await.unwrap();
        engine.select_session("s1", true);
        engine.open_download();

        let result = engine.confirm_download("my-rooms").await;
        assert!(result.is_err());

        let job = engine.download_job();
        assert!(job.is_open);
        assert!(!job.is_downloading);
        assert!(job.last_error.is_some());
        assert_eq!(engine.selected_ids().len(), 2);
        assert!(sink.persisted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_download_rejected_while_running() {
        let store = Arc::new(FakeStore {
            sessions: Mutex::new(vec![session(
                "s1",
                vec![image("i1", "kitchen", "http://x/1.jpg")],
            )]),
            fetch_count: AtomicUsize::new(0),
        });
        let orchestrator = Arc::new(GenerationOrchestrator::new(Arc::new(FakeGen {
            calls: AtomicUsize::new(0),
        })));
        let engine = Arc::new(GalleryEngine::new(
            store,
            Arc::new(FakeImages {
                missing: vec![],
                delay: Some(std::time::Duration::from_millis(50)),
            }),
            Arc::new(FakeSink::default()),
            orchestrator,
            "http://localhost:8000/api".into(),
        ));
        engine.refresh_sessions().await.unwrap();
        engine.select_session("s1", true);

        let first = {
            let engine = engine.clone();
            tokio::spawn(async move { engine.confirm_download("batch").await })
        };
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;

        let second = engine.confirm_download("batch-again").await;
        assert!(matches!(second, Err(RoomGenError::BusyError(_))));
        assert!(first.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_cancel_only_when_idle() {
        let (engine, _, _) = engine_with(vec![], vec![]);
        engine.open_download();
        assert!(engine.download_job().is_open);
        engine.cancel_download().unwrap();
        assert!(!engine.download_job().is_open);
        assert!(engine.download_job().last_error.is_none());
    }

    #[tokio::test]
    async fn test_open_session_download_selects_and_names() {
        let sessions = vec![session(
            "0123456789ab",
            vec![image("i1", "kitchen", "http://x/1.jpg")],
        )];
        let (engine, _, _) = engine_with(sessions, vec![]);
        engine.refresh_sessions().await.unwrap();

        engine.open_session_download("0123456789ab");
        let job = engine.download_job();
        assert!(job.is_open);
        assert_eq!(job.target_name, "session-01234567");
        assert!(engine.selected_ids().contains("i1"));
    }

    #[tokio::test]
    async fn test_regenerate_triggers_session_refresh() {
        let sessions = vec![session("s1", vec![image("i1", "kitchen", "http://x/1.jpg")])];
        let (engine, _, store) = engine_with(sessions, vec![]);
        engine.refresh_sessions().await.unwrap();
        let before = store.fetch_count.load(Ordering::SeqCst);

        assert!(engine.regenerate_image("s1", "i1").await.unwrap());
        assert_eq!(store.fetch_count.load(Ordering::SeqCst), before + 1);
    }

    #[tokio::test]
    async fn test_regenerate_unknown_image_is_noop() {
        let (engine, _, store) = engine_with(vec![], vec![]);
        engine.refresh_sessions().await.unwrap();
        let before = store.fetch_count.load(Ordering::SeqCst);

        assert!(!engine.regenerate_image("s1", "missing").await.unwrap());
        assert_eq!(store.fetch_count.load(Ordering::SeqCst), before);
    }

    #[tokio::test]
    async fn test_lightbox_walks_flattened_images() {
        let sessions = vec![
            session("s1", vec![image("i1", "kitchen", "http://x/1.jpg")]),
            session("s2", vec![image("i2", "bedroom", "http://x/2.jpg")]),
        ];
        let (engine, _, _) = engine_with(sessions, vec![]);
        engine.refresh_sessions().await.unwrap();

        let first = engine.sessions()[0].images[0].id.clone();
        let second = engine.sessions()[1].images[0].id.clone();

        engine.open_lightbox(&first);
        engine.lightbox_next();
        assert_eq!(engine.lightbox().current_image_id, Some(second.clone()));
        engine.lightbox_next();
        assert_eq!(engine.lightbox().current_image_id, Some(second));
        engine.lightbox_prev();
        assert_eq!(engine.lightbox().current_image_id, Some(first));
        engine.close_lightbox();
        assert!(!engine.lightbox().is_open);
    }

    #[test]
    fn test_default_archive_name_stamps_date() {
        let now = "2026-08-06T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(default_archive_name(now), "room-designs-2026-08-06");
    }
}
