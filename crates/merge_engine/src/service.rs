use std::time::Duration;

use merge_core::{ArtifactId, MergeRequest, PreviewResult};
use merge_logging::{merge_debug, merge_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::wire::{error_body_message, WirePreview, WireRequest};
use crate::{FailureKind, ServiceError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub base_url: String,
    pub preview_path: String,
    pub generate_path: String,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
}

impl ServiceSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            preview_path: "/merge/preview".to_string(),
            generate_path: "/merge/generate".to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
        }
    }
}

/// Remote merge service. Token resolution and document generation happen on
/// the other side of this trait.
#[async_trait::async_trait]
pub trait MergeService: Send + Sync {
    async fn preview(&self, request: &MergeRequest) -> Result<PreviewResult, ServiceError>;

    async fn generate(&self, request: &MergeRequest) -> Result<Vec<ArtifactId>, ServiceError>;
}

#[derive(Debug, Clone)]
pub struct HttpMergeService {
    settings: ServiceSettings,
    client: reqwest::Client,
}

impl HttpMergeService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout())
            .timeout(settings.request_timeout())
            .build()
            .map_err(|err| ServiceError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ServiceError> {
        let raw = format!("{}{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&raw)
            .map_err(|err| ServiceError::new(FailureKind::InvalidUrl, format!("{raw}: {err}")))
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        request: &MergeRequest,
    ) -> Result<T, ServiceError> {
        let url = self.endpoint(path)?;
        let body = serde_json::to_vec(&WireRequest::from(request))
            .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))?;

        merge_debug!("POST {} preview_only={}", url, request.preview_only);
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(
                ServiceError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_body_message(error_body_message(&bytes)),
            );
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| ServiceError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl MergeService for HttpMergeService {
    async fn preview(&self, request: &MergeRequest) -> Result<PreviewResult, ServiceError> {
        let wire: WirePreview = self.post(&self.settings.preview_path, request).await?;
        let preview = PreviewResult::from(wire);
        merge_info!(
            "Preview rendered for source={} template={} tokens={}",
            request.source_id,
            request.template_id,
            preview.tokens.len()
        );
        Ok(preview)
    }

    async fn generate(&self, request: &MergeRequest) -> Result<Vec<ArtifactId>, ServiceError> {
        let ids: Vec<ArtifactId> = self.post(&self.settings.generate_path, request).await?;
        merge_info!(
            "Generated {} artifact(s) for source={} template={} delivery={}",
            ids.len(),
            request.source_id,
            request.template_id,
            request.delivery_mode
        );
        Ok(ids)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        return ServiceError::new(FailureKind::Timeout, err.to_string());
    }
    ServiceError::new(FailureKind::Network, err.to_string())
}
