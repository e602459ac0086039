//! REST client for the showcase HTTP API.
//!
//! One method per endpoint. Every call is a single request: nothing is
//! retried or cached, and a failure is returned to the caller as-is.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use showcase_core::comment::CommentBody;
use showcase_core::scenario::CreateScenario;
use showcase_db::models::analytics::ScenarioAnalytics;
use showcase_db::models::comment::Comment;
use showcase_db::models::scenario::Scenario;
use showcase_db::models::scenario_view::ViewRecorded;

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// HTTP client for one showcase API origin. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ShowcaseClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShowcaseClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`] (shared connection pool).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// `GET /api/scenarios`
    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>, ClientError> {
        let response = self.client.get(self.url("/api/scenarios")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/scenarios/{id}`. A missing scenario is an
    /// [`ClientError::Api`] with status 404.
    pub async fn get_scenario(&self, id: &str) -> Result<Scenario, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/scenarios/{id}")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/scenarios`
    pub async fn create_scenario(&self, input: &CreateScenario) -> Result<Scenario, ClientError> {
        let response = self
            .client
            .post(self.url("/api/scenarios"))
            .json(input)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/scenarios/{id}/view`
    pub async fn record_view(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.url(&format!("/api/scenarios/{id}/view")))
            .send()
            .await?;
        let _: ViewRecorded = Self::parse_response(response).await?;
        Ok(())
    }

    /// Record a view without reporting the outcome.
    ///
    /// At most once and without guarantee: a failure only produces a debug
    /// log line and the page carries on. Under-counting is accepted.
    pub async fn track_view_best_effort(&self, id: &str) {
        if let Err(err) = self.record_view(id).await {
            tracing::debug!(scenario_id = %id, error = %err, "View tracking failed, ignoring");
        }
    }

    /// Spawn [`Self::track_view_best_effort`] on the current runtime and
    /// return immediately.
    pub fn spawn_view_tracking(&self, id: impl Into<String>) -> tokio::task::JoinHandle<()> {
        let client = self.clone();
        let id = id.into();
        tokio::spawn(async move { client.track_view_best_effort(&id).await })
    }

    /// `GET /api/analytics`
    pub async fn analytics(&self) -> Result<Vec<ScenarioAnalytics>, ClientError> {
        let response = self.client.get(self.url("/api/analytics")).send().await?;
        Self::parse_response(response).await
    }

    /// `GET /api/scenarios/{id}/comments`, newest first.
    pub async fn list_comments(&self, scenario_id: &str) -> Result<Vec<Comment>, ClientError> {
        let response = self
            .client
            .get(self.url(&format!("/api/scenarios/{scenario_id}/comments")))
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/scenarios/{id}/comments`
    pub async fn create_comment(
        &self,
        scenario_id: &str,
        body: &CommentBody,
    ) -> Result<Comment, ClientError> {
        let response = self
            .client
            .post(self.url(&format!("/api/scenarios/{scenario_id}/comments")))
            .json(body)
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `POST /api/upload`. Returns the URL the stored image is served from.
    pub async fn upload_image(
        &self,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String, ClientError> {
        let part = reqwest::multipart::Part::bytes(data)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        let uploaded: UploadResponse = Self::parse_response(response).await?;
        Ok(uploaded.url)
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Turn a non-2xx response into [`ClientError::Api`] carrying the body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
