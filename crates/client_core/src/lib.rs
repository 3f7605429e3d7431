use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use shared::{
    domain::RequestMode,
    protocol::{WorldCreateRequest, WorldRandomRequest, WorldRequest, WorldResult},
};
use tracing::debug;
use url::Url;

pub mod controller;
pub mod error;
pub mod form;
pub mod presenter;

pub use controller::{Outcome, WorldFormController};
pub use error::GenerationError;
pub use form::FormState;
pub use presenter::{present, ResultView, WorldCard};

/// Default base URL of the generation service when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[async_trait]
pub trait WorldGenerator: Send + Sync {
    async fn generate(&self, request: &WorldRequest) -> Result<WorldResult, GenerationError>;
}

/// HTTP client for the world generation service. One call per request, no
/// retries and no timeout.
#[derive(Debug, Clone)]
pub struct WorldClient {
    http: Client,
    base_url: Url,
}

impl WorldClient {
    pub fn new(base_url: &str) -> Result<Self, GenerationError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: &str) -> Result<Self, GenerationError> {
        let parsed = Url::parse(base_url.trim()).map_err(|err| GenerationError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(GenerationError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "expected an http(s) url".to_string(),
            });
        }
        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, mode: RequestMode) -> String {
        format!(
            "{}{}",
            self.base_url.as_str().trim_end_matches('/'),
            mode.endpoint_path()
        )
    }

    pub async fn create_world(
        &self,
        request: &WorldCreateRequest,
    ) -> Result<WorldResult, GenerationError> {
        self.post_world(RequestMode::Create, request).await
    }

    pub async fn random_world(
        &self,
        request: &WorldRandomRequest,
    ) -> Result<WorldResult, GenerationError> {
        self.post_world(RequestMode::Random, request).await
    }

    async fn post_world<B>(&self, mode: RequestMode, body: &B) -> Result<WorldResult, GenerationError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(mode);
        debug!(%url, "posting world request");
        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<WorldResult>(&bytes)
            .map_err(|err| GenerationError::MalformedResponse(err.to_string()))
    }
}

#[async_trait]
impl WorldGenerator for WorldClient {
    async fn generate(&self, request: &WorldRequest) -> Result<WorldResult, GenerationError> {
        match request {
            WorldRequest::Create(body) => self.create_world(body).await,
            WorldRequest::Random(body) => self.random_world(body).await,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
