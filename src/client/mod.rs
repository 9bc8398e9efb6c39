// src/client/mod.rs — Learning-companion API client

pub mod types;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::infra::errors::TutorError;
use crate::infra::identity::Identity;
use types::{
    AnalyticsSnapshot, ChatReply, ChatRequest, ProblemReply, ProblemRequest,
};

/// The remote operations the UI layer depends on. Kept behind a trait so the
/// chat screen can be driven by a stub in tests.
#[async_trait]
pub trait LearningApi: Send + Sync {
    async fn send_message(&self, text: &str) -> Result<ChatReply, TutorError>;
    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, TutorError>;
    async fn generate_problem(
        &self,
        topic: &str,
        problem_type: &str,
        difficulty: &str,
    ) -> Result<ProblemReply, TutorError>;
    async fn health_check(&self) -> Result<serde_json::Value, TutorError>;

    fn user_id(&self) -> String;

    /// Best-effort display hint: the last interaction count seen. Never
    /// authoritative; stubs may ignore it.
    fn cached_interactions(&self) -> Option<u64> {
        None
    }

    fn cache_interactions(&self, _count: u64) {}
}

/// HTTP implementation against the configured backend origin.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
    identity: std::sync::Mutex<Identity>,
    health_timeout: std::time::Duration,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, identity: Identity, health_timeout_secs: u64) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            identity: std::sync::Mutex::new(identity),
            health_timeout: std::time::Duration::from_secs(health_timeout_secs),
        }
    }

    /// Overwrite the local user id; persists immediately.
    pub fn set_user_id(&self, id: &str) -> std::io::Result<()> {
        self.identity.lock().expect("identity lock").set_user_id(id)
    }

    pub fn session_id(&self) -> String {
        self.identity.lock().expect("identity lock").session_id().to_string()
    }

    fn network_error(&self, e: reqwest::Error) -> TutorError {
        TutorError::Network {
            base_url: self.base_url.clone(),
            message: e.to_string(),
        }
    }

    /// Shared response handling: non-2xx becomes `Http`, a body that does
    /// not decode becomes `Protocol`.
    async fn read_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TutorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::Http {
                status: status.as_u16(),
                message: if body.is_empty() {
                    status.to_string()
                } else {
                    body
                },
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.network_error(e))?;
        serde_json::from_slice(&bytes).map_err(|e| TutorError::Protocol {
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl LearningApi for HttpApi {
    async fn send_message(&self, text: &str) -> Result<ChatReply, TutorError> {
        let body = {
            let identity = self.identity.lock().expect("identity lock");
            ChatRequest {
                message: text.to_string(),
                user_id: identity.user_id().to_string(),
                session_id: identity.session_id().to_string(),
            }
        };

        tracing::debug!(user_id = %body.user_id, "sending chat message");

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        self.read_json(response).await
    }

    async fn get_analytics(&self) -> Result<AnalyticsSnapshot, TutorError> {
        let user_id = self.user_id();
        let response = self
            .client
            .get(format!("{}/analytics/{}", self.base_url, user_id))
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        self.read_json(response).await
    }

    async fn generate_problem(
        &self,
        topic: &str,
        problem_type: &str,
        difficulty: &str,
    ) -> Result<ProblemReply, TutorError> {
        let body = ProblemRequest {
            topic: topic.to_string(),
            problem_type: problem_type.to_string(),
            difficulty: difficulty.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/generate_problem", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        self.read_json(response).await
    }

    async fn health_check(&self) -> Result<serde_json::Value, TutorError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| self.network_error(e))?;

        self.read_json(response).await
    }

    fn user_id(&self) -> String {
        self.identity.lock().expect("identity lock").user_id().to_string()
    }

    fn cached_interactions(&self) -> Option<u64> {
        self.identity.lock().expect("identity lock").cached_interactions()
    }

    fn cache_interactions(&self, count: u64) {
        self.identity
            .lock()
            .expect("identity lock")
            .cache_interactions(count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_api(dir: &std::path::Path) -> HttpApi {
        let identity = Identity::load_or_create_in(dir).unwrap();
        HttpApi::new("http://localhost:8000/", identity, 3)
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(dir.path());
        assert_eq!(api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_user_id_accessor_stable() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(dir.path());
        assert_eq!(api.user_id(), api.user_id());
    }

    #[test]
    fn test_set_user_id_visible_and_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(dir.path());
        api.set_user_id("user_custom").unwrap();
        assert_eq!(api.user_id(), "user_custom");

        // A fresh client over the same directory sees the overwrite.
        let again = test_api(dir.path());
        assert_eq!(again.user_id(), "user_custom");
    }

    #[tokio::test]
    async fn test_unreachable_backend_maps_to_network_error() {
        let dir = tempfile::tempdir().unwrap();
        let identity = Identity::load_or_create_in(dir.path()).unwrap();
        // Port 1 is never listening.
        let api = HttpApi::new("http://127.0.0.1:1", identity, 1);

        let err = api.send_message("hello").await.unwrap_err();
        assert!(err.is_unreachable(), "expected Network error, got {err}");
        assert!(err.to_string().contains("127.0.0.1:1"));
    }
}
