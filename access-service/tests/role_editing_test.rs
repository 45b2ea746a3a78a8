//! End-to-end role editing session against the persistence seam.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use portal_core::error::AppError;

use access_service::dtos::RoleData;
use access_service::models::{Permission, PermissionCategory, PermissionScope, Role};
use access_service::services::{PermissionGrants, RoleDraft, RoleStore};

#[derive(Default)]
struct RecordingStore {
    created: Mutex<Vec<RoleData>>,
}

#[async_trait]
impl RoleStore for RecordingStore {
    async fn create(&self, data: &RoleData) -> Result<(), AppError> {
        self.created.lock().unwrap().push(data.clone());
        Ok(())
    }

    async fn update(&self, _id: i64, _data: &RoleData) -> Result<(), AppError> {
        Err(AppError::Persistence("unexpected update".into()))
    }

    async fn delete(&self, role: &Role) -> Result<(), AppError> {
        if !role.is_deletable() {
            return Err(AppError::Validation("System roles cannot be deleted".into()));
        }
        Ok(())
    }
}

fn permission(id: i64, code: &str, category: PermissionCategory) -> Permission {
    Permission {
        id,
        code: code.to_string(),
        description: None,
        category,
    }
}

#[tokio::test]
async fn role_editing_session_serializes_only_granted_rows() {
    let permissions = vec![
        permission(1, "projects.read", PermissionCategory::Projects),
        permission(2, "projects.update", PermissionCategory::Projects),
        permission(3, "users.read", PermissionCategory::Users),
        permission(4, "system.admin", PermissionCategory::System),
    ];

    let mut draft = RoleDraft::new();
    draft.name = "Department coordinator".to_string();
    draft.grants = PermissionGrants::new()
        .toggle_category(&permissions, PermissionCategory::Projects, true)
        .set_scope(1, PermissionScope::Department)
        .set_scope(3, PermissionScope::Own)
        .set_scope(2, PermissionScope::None);

    let state = draft
        .grants
        .category_state(&permissions, PermissionCategory::Projects);
    assert!(state.some_selected);
    assert!(!state.all_selected);

    let store = RecordingStore::default();
    store.create(&draft.to_payload().unwrap()).await.unwrap();

    let created = store.created.lock().unwrap();
    let payload = &created[0];
    assert_eq!(payload.name, "Department coordinator");
    assert_eq!(payload.permissions.len(), 2);
    assert!(payload.permissions.iter().all(|row| row.scope.is_granted()));

    let json = serde_json::to_value(payload).unwrap();
    assert!(json.get("description").is_none());
    assert_eq!(
        json["permissions"][0],
        serde_json::json!({ "permission_id": 1, "scope": "department" })
    );
}

#[tokio::test]
async fn system_roles_cannot_be_deleted() {
    let role = Role {
        id: 1,
        name: "admin".to_string(),
        description: None,
        is_system_role: true,
        user_count: 3,
        permission_count: 13,
        created_at: Utc::now(),
    };

    let store = RecordingStore::default();
    let err = store.delete(&role).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
