use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shortsgen_cli::app::{GenerateInteractor, InfoInteractor, WizardInteractor};
use shortsgen_cli::domain::model::{
    DownloadedVideo, GenerateRequest, ShortClip, VideoInfo, DEFAULT_VIDEO_PATH,
};
use shortsgen_cli::{BackendPort, DomainError, WizardStep};

/// Scripted backend double: pops canned responses and records every call
struct MockBackend {
    videos: Mutex<VecDeque<Result<VideoInfo, DomainError>>>,
    shorts: Mutex<VecDeque<Result<Vec<ShortClip>, DomainError>>>,
    downloads: Mutex<VecDeque<Result<DownloadedVideo, DomainError>>>,
    info_urls: Mutex<Vec<String>>,
    generate_requests: Mutex<Vec<GenerateRequest>>,
}

impl MockBackend {
    fn new() -> Self {
        Self {
            videos: Mutex::new(VecDeque::new()),
            shorts: Mutex::new(VecDeque::new()),
            downloads: Mutex::new(VecDeque::new()),
            info_urls: Mutex::new(Vec::new()),
            generate_requests: Mutex::new(Vec::new()),
        }
    }

    fn queue_video(self, video: VideoInfo) -> Self {
        self.videos.lock().unwrap().push_back(Ok(video));
        self
    }

    fn queue_video_error(self, status: u16, message: &str) -> Self {
        self.videos.lock().unwrap().push_back(Err(DomainError::Api {
            status,
            message: message.to_string(),
        }));
        self
    }

    fn queue_shorts(self, clips: Vec<ShortClip>) -> Self {
        self.shorts.lock().unwrap().push_back(Ok(clips));
        self
    }

    fn queue_shorts_error(self, status: u16, message: &str) -> Self {
        self.shorts.lock().unwrap().push_back(Err(DomainError::Api {
            status,
            message: message.to_string(),
        }));
        self
    }

    fn queue_download(self, downloaded: DownloadedVideo) -> Self {
        self.downloads.lock().unwrap().push_back(Ok(downloaded));
        self
    }

    fn info_urls(&self) -> Vec<String> {
        self.info_urls.lock().unwrap().clone()
    }

    fn generate_requests(&self) -> Vec<GenerateRequest> {
        self.generate_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BackendPort for MockBackend {
    async fn video_info(&self, url: &str) -> Result<VideoInfo, DomainError> {
        self.info_urls.lock().unwrap().push(url.to_string());
        self.videos
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::Transport("unscripted video-info call".into())))
    }

    async fn generate_shorts(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<ShortClip>, DomainError> {
        self.generate_requests.lock().unwrap().push(request.clone());
        self.shorts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::Transport("unscripted generate call".into())))
    }

    async fn download_video(
        &self,
        _url: &str,
        _format_id: &str,
    ) -> Result<DownloadedVideo, DomainError> {
        self.downloads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(DomainError::Transport("unscripted download call".into())))
    }

    async fn download_short(&self, _short_id: &str) -> Result<Vec<u8>, DomainError> {
        Ok(b"clip-bytes".to_vec())
    }
}

fn sample_video(title: &str) -> VideoInfo {
    VideoInfo {
        id: Some("abc123".to_string()),
        title: title.to_string(),
        uploader: "Some Channel".to_string(),
        thumbnail: "https://i.ytimg.com/vi/abc123/hq720.jpg".to_string(),
        duration: 734,
        view_count: Some(1234567),
        description: None,
        upload_date: Some("20230512".to_string()),
        formats: Vec::new(),
    }
}

fn sample_clip(id: &str, start: u64, end: u64) -> ShortClip {
    ShortClip::new(id.to_string(), format!("Short {}", id), start, end).unwrap()
}

#[tokio::test]
async fn successful_fetch_advances_input_to_processing() {
    let backend = Arc::new(MockBackend::new().queue_video(sample_video("A Video")));
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    assert_eq!(session.step(), WizardStep::Input);

    interactor
        .submit_url(&mut session, "https://www.youtube.com/watch?v=abc123")
        .await
        .unwrap();

    assert_eq!(session.step(), WizardStep::Processing);
    assert_eq!(session.video().unwrap().title, "A Video");
    assert!(!session.busy());
    assert_eq!(
        backend.info_urls(),
        vec!["https://www.youtube.com/watch?v=abc123".to_string()]
    );
}

#[tokio::test]
async fn empty_url_performs_no_network_call() {
    let backend = Arc::new(MockBackend::new().queue_video(sample_video("A Video")));
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    let result = interactor.submit_url(&mut session, "").await;

    assert!(matches!(result, Err(DomainError::EmptyUrl)));
    assert_eq!(session.step(), WizardStep::Input);
    assert!(backend.info_urls().is_empty());
}

#[tokio::test]
async fn failed_fetch_stays_on_input_and_surfaces_server_error() {
    let backend = Arc::new(MockBackend::new().queue_video_error(500, "URL is required"));
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    let result = interactor
        .submit_url(&mut session, "https://www.youtube.com/watch?v=abc123")
        .await;

    match result {
        Err(DomainError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "URL is required");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert_eq!(session.step(), WizardStep::Input);
    assert!(session.video().is_none());
    assert!(!session.busy());
}

#[tokio::test]
async fn transport_failure_stays_on_input() {
    // No scripted responses: the mock reports a transport error
    let backend = Arc::new(MockBackend::new());
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    let result = interactor
        .submit_url(&mut session, "https://www.youtube.com/watch?v=abc123")
        .await;

    assert!(matches!(result, Err(DomainError::Transport(_))));
    assert_eq!(session.step(), WizardStep::Input);
}

#[tokio::test]
async fn generate_holds_n_clips_in_server_order() {
    let clips = vec![
        sample_clip("short_1", 0, 60),
        sample_clip("short_2", 60, 120),
        sample_clip("short_3", 120, 165),
    ];
    let backend = Arc::new(
        MockBackend::new()
            .queue_video(sample_video("A Video"))
            .queue_shorts(clips),
    );
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    interactor
        .submit_url(&mut session, "https://youtu.be/abc123")
        .await
        .unwrap();
    interactor.generate(&mut session, 60, Vec::new()).await.unwrap();

    assert_eq!(session.step(), WizardStep::Editing);
    assert_eq!(session.shorts().len(), 3);

    let ids: Vec<&str> = session.shorts().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["short_1", "short_2", "short_3"]);

    assert_eq!(session.shorts()[0].time_range(), "0:00 - 1:00");
    assert_eq!(session.shorts()[2].time_range(), "2:00 - 2:45");
    assert_eq!(session.shorts()[2].duration_label(), "0:45");
}

#[tokio::test]
async fn generate_failure_stays_on_processing() {
    let backend = Arc::new(
        MockBackend::new()
            .queue_video(sample_video("A Video"))
            .queue_shorts_error(404, "Video file not found"),
    );
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    interactor
        .submit_url(&mut session, "https://youtu.be/abc123")
        .await
        .unwrap();
    let result = interactor.generate(&mut session, 60, Vec::new()).await;

    match result {
        Err(DomainError::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Video file not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert_eq!(session.step(), WizardStep::Processing);
    assert!(session.shorts().is_empty());
    assert!(!session.busy());
}

#[tokio::test]
async fn generate_before_fetch_is_rejected_without_network_call() {
    let backend = Arc::new(MockBackend::new());
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    let result = interactor.generate(&mut session, 60, Vec::new()).await;

    assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));
    assert_eq!(session.step(), WizardStep::Input);
    assert!(backend.generate_requests().is_empty());
}

#[tokio::test]
async fn default_generate_request_uses_placeholder_path_and_sixty_seconds() {
    let backend = Arc::new(
        MockBackend::new()
            .queue_video(sample_video("A Video"))
            .queue_shorts(vec![sample_clip("short_1", 0, 60)]),
    );
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    interactor
        .submit_url(&mut session, "https://youtu.be/abc123")
        .await
        .unwrap();
    interactor.generate(&mut session, 60, Vec::new()).await.unwrap();

    let requests = backend.generate_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].video_path, DEFAULT_VIDEO_PATH);
    assert_eq!(requests[0].max_duration, 60);
    assert!(requests[0].segments.is_empty());
}

#[tokio::test]
async fn downloaded_source_path_is_threaded_into_generation() {
    let backend = Arc::new(
        MockBackend::new()
            .queue_video(sample_video("A Video"))
            .queue_download(DownloadedVideo {
                file_path: "/srv/media/abc123.mp4".to_string(),
                title: Some("A Video".to_string()),
                duration: Some(734),
            })
            .queue_shorts(vec![sample_clip("short_1", 0, 60)]),
    );
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    interactor
        .submit_url(&mut session, "https://youtu.be/abc123")
        .await
        .unwrap();
    interactor.fetch_source(&mut session, "best").await.unwrap();

    assert_eq!(session.source_path(), Some("/srv/media/abc123.mp4"));
    assert_eq!(session.step(), WizardStep::Processing);

    interactor.generate(&mut session, 60, Vec::new()).await.unwrap();

    assert_eq!(
        backend.generate_requests()[0].video_path,
        "/srv/media/abc123.mp4"
    );
}

#[tokio::test]
async fn reset_returns_to_input_and_next_fetch_replaces_held_data() {
    let backend = Arc::new(
        MockBackend::new()
            .queue_video(sample_video("First Video"))
            .queue_shorts(vec![sample_clip("short_1", 0, 60)])
            .queue_video(sample_video("Second Video")),
    );
    let interactor = WizardInteractor::new(backend.clone());
    let mut session = interactor.start_session();

    interactor
        .submit_url(&mut session, "https://youtu.be/first")
        .await
        .unwrap();
    interactor.generate(&mut session, 60, Vec::new()).await.unwrap();
    assert_eq!(session.shorts().len(), 1);

    interactor.reset(&mut session);
    assert_eq!(session.step(), WizardStep::Input);

    interactor
        .submit_url(&mut session, "https://youtu.be/second")
        .await
        .unwrap();

    assert_eq!(session.step(), WizardStep::Processing);
    assert_eq!(session.video().unwrap().title, "Second Video");
    assert!(session.shorts().is_empty());
    assert_eq!(session.source_path(), None);
}

#[tokio::test]
async fn info_interactor_rejects_empty_url_without_network_call() {
    let backend = Arc::new(MockBackend::new());
    let interactor = InfoInteractor::new(backend.clone());

    let result = interactor.fetch("").await;

    assert!(matches!(result, Err(DomainError::EmptyUrl)));
    assert!(backend.info_urls().is_empty());
}

#[tokio::test]
async fn generate_interactor_passes_clips_through_unchanged() {
    let clips = vec![sample_clip("short_1", 10, 55), sample_clip("short_2", 70, 100)];
    let backend = Arc::new(MockBackend::new().queue_shorts(clips.clone()));
    let interactor = GenerateInteractor::new(backend.clone());

    let result = interactor
        .generate("/srv/media/abc123.mp4", 45, Vec::new())
        .await
        .unwrap();

    assert_eq!(result, clips);
    assert_eq!(backend.generate_requests()[0].max_duration, 45);
}

#[tokio::test]
async fn generate_interactor_rejects_empty_video_path() {
    let backend = Arc::new(MockBackend::new());
    let interactor = GenerateInteractor::new(backend.clone());

    let result = interactor.generate("", 60, Vec::new()).await;

    assert!(matches!(result, Err(DomainError::BadArgs(_))));
    assert!(backend.generate_requests().is_empty());
}
