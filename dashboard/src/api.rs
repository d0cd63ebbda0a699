use scopecore::error::FetchError;
use scopecore::model::{CustomTrack, PlatformCatalog, SensorConfig, Snapshot};
use serde_json::json;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const API_BASE_ENV: &str = "RADAR_API_BASE";

/// HTTP client for the simulation backend. Cloning shares the
/// underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        let base = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.into());
        Self::new(base)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn fetch_config(&self) -> Result<SensorConfig, FetchError> {
        self.get_json("/api/config").await
    }

    pub async fn fetch_platforms(&self) -> Result<PlatformCatalog, FetchError> {
        self.get_json("/api/platforms").await
    }

    pub async fn fetch_state(&self) -> Result<Snapshot, FetchError> {
        self.get_json("/api/state").await
    }

    /// Fire-and-forget: the response body is ignored, only transport or
    /// status failures surface (and callers swallow those too).
    pub async fn post_motion(&self, enabled: bool) -> Result<(), FetchError> {
        self.post_json("/api/motion", &json!({ "enabled": enabled }))
            .await
    }

    /// Mirrors the complete track list, which may be empty.
    pub async fn post_custom_tracks(&self, tracks: &[CustomTrack]) -> Result<(), FetchError> {
        self.post_json("/api/custom-tracks", &tracks).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, FetchError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError::Transport(format!(
                "{} from {path}",
                response.status()
            )));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn post_json<B>(&self, path: &str, body: &B) -> Result<(), FetchError>
    where
        B: serde::Serialize + ?Sized,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(FetchError::Transport(format!(
                "{} from {path}",
                response.status()
            )))
        }
    }
}
