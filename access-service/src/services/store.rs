//! Persistence seam for roles and their permission grants.

use std::time::Duration;

use async_trait::async_trait;
use portal_core::client::ApiClient;
use portal_core::error::AppError;
use validator::Validate;

use crate::config::AccessConfig;
use crate::dtos::RoleData;
use crate::error::RoleError;
use crate::models::Role;

/// Persistence collaborator for roles.
#[async_trait]
pub trait RoleStore: Send + Sync {
    async fn create(&self, data: &RoleData) -> Result<(), AppError>;
    async fn update(&self, id: i64, data: &RoleData) -> Result<(), AppError>;
    async fn delete(&self, role: &Role) -> Result<(), AppError>;
}

/// Store backed by the portal REST API.
#[derive(Debug, Clone)]
pub struct HttpRoleStore {
    client: ApiClient,
}

impl HttpRoleStore {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &AccessConfig) -> Result<Self, AppError> {
        let client = ApiClient::new(
            &config.common.api_base_url,
            Duration::from_secs(config.common.request_timeout_secs),
        )?;
        Ok(Self::new(client))
    }
}

#[async_trait]
impl RoleStore for HttpRoleStore {
    async fn create(&self, data: &RoleData) -> Result<(), AppError> {
        data.validate()?;
        tracing::info!(name = %data.name, grants = data.permissions.len(), "creating role");
        self.client.post("roles", data).await
    }

    async fn update(&self, id: i64, data: &RoleData) -> Result<(), AppError> {
        data.validate()?;
        tracing::info!(role_id = id, grants = data.permissions.len(), "updating role");
        self.client.put(&format!("roles/{id}"), data).await
    }

    async fn delete(&self, role: &Role) -> Result<(), AppError> {
        if !role.is_deletable() {
            return Err(RoleError::SystemRoleImmutable.into());
        }
        tracing::info!(role_id = role.id, name = %role.name, "deleting role");
        self.client.delete(&format!("roles/{}", role.id)).await
    }
}
