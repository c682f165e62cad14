// HTTP backend adapter - BackendPort implementation over reqwest

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{
    ApiErrorBody, DownloadedVideo, GenerateRequest, ShortClip, ShortsResponse, VideoInfo,
};
use crate::ports::BackendPort;

/// Request body for the video-info endpoint
#[derive(Serialize)]
struct VideoInfoRequest<'a> {
    url: &'a str,
}

/// Request body for the download-video endpoint
#[derive(Serialize)]
struct DownloadVideoRequest<'a> {
    url: &'a str,
    format_id: &'a str,
}

/// Backend adapter speaking HTTP+JSON to the shorts service
pub struct HttpBackendAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackendAdapter {
    /// Create an adapter for the given base URL with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// Non-2xx responses are mapped to `DomainError::Api` carrying the
    /// server's `error` string unmodified; a body that does not parse as
    /// the error shape falls back to the HTTP status line.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| DomainError::Decode(e.to_string()))
        } else {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) if !body.error.is_empty() => body.error,
                _ => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            Err(DomainError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl BackendPort for HttpBackendAdapter {
    async fn video_info(&self, url: &str) -> Result<VideoInfo, DomainError> {
        self.post_json("/api/youtube/video-info", &VideoInfoRequest { url })
            .await
    }

    async fn generate_shorts(
        &self,
        request: &GenerateRequest,
    ) -> Result<Vec<ShortClip>, DomainError> {
        let response: ShortsResponse = self
            .post_json("/api/youtube/generate-shorts", request)
            .await?;
        Ok(response.shorts)
    }

    async fn download_video(
        &self,
        url: &str,
        format_id: &str,
    ) -> Result<DownloadedVideo, DomainError> {
        self.post_json(
            "/api/youtube/download-video",
            &DownloadVideoRequest { url, format_id },
        )
        .await
    }

    async fn download_short(&self, short_id: &str) -> Result<Vec<u8>, DomainError> {
        let url = self.endpoint(&format!("/api/video/download-short/{}", short_id));
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ApiErrorBody>().await {
                Ok(body) if !body.error.is_empty() => body.error,
                _ => status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string(),
            };
            return Err(DomainError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
