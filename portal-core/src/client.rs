//! REST client for the portal persistence API.
//!
//! The services hand fully-serialized payloads to this client and only care
//! about success or failure: a 422 response is decoded into per-field
//! validation messages, anything else unsuccessful surfaces as a single
//! human-readable persistence error. No retries happen here.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, FieldErrors};

/// Error body shape returned by the portal API (Laravel-style 422 payloads).
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a resource with a POST to `path`.
    #[instrument(skip(self, payload), fields(path = %path))]
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<(), AppError> {
        let response = self.http.post(self.url(path)).json(payload).send().await?;
        Self::check(response).await
    }

    /// Update a resource with a PUT to `path`.
    #[instrument(skip(self, payload), fields(path = %path))]
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<(), AppError> {
        let response = self.http.put(self.url(path)).json(payload).send().await?;
        Self::check(response).await
    }

    /// Delete a resource with a DELETE to `path`.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn check(response: reqwest::Response) -> Result<(), AppError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body: Option<ApiErrorBody> = response.json().await.ok();

        if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
            if let Some(errors) = body.as_ref().and_then(|b| b.errors.clone()) {
                tracing::warn!(status = %status, "save rejected with field validation errors");
                return Err(AppError::FieldValidation(errors));
            }
        }

        let message = body
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("save failed with status {status}"));
        tracing::warn!(status = %status, message = %message, "save failed");
        Err(AppError::Persistence(message))
    }
}
