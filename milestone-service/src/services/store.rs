//! Persistence seam for milestone templates.
//!
//! The editor hands a fully-serialized snapshot over and only learns success
//! or failure; a failed save leaves the in-memory draft untouched, so the
//! caller can retry the same payload.

use std::time::Duration;

use async_trait::async_trait;
use portal_core::client::ApiClient;
use portal_core::error::AppError;
use validator::Validate;

use crate::config::MilestoneConfig;
use crate::dtos::TemplateData;

/// Persistence collaborator for templates.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn create(&self, data: &TemplateData) -> Result<(), AppError>;
    async fn update(&self, id: i64, data: &TemplateData) -> Result<(), AppError>;
}

/// Store backed by the portal REST API.
#[derive(Debug, Clone)]
pub struct HttpTemplateStore {
    client: ApiClient,
}

impl HttpTemplateStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &MilestoneConfig) -> Result<Self, AppError> {
        let client = ApiClient::new(
            &config.common.api_base_url,
            Duration::from_secs(config.common.request_timeout_secs),
        )?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl TemplateStore for HttpTemplateStore {
    async fn create(&self, data: &TemplateData) -> Result<(), AppError> {
        data.validate()?;
        tracing::info!(name = %data.name, steps = data.items.len(), "creating milestone template");
        self.client.post("milestone-templates", data).await
    }

    async fn update(&self, id: i64, data: &TemplateData) -> Result<(), AppError> {
        data.validate()?;
        tracing::info!(template_id = id, steps = data.items.len(), "updating milestone template");
        self.client.put(&format!("milestone-templates/{id}"), data).await
    }
}
