//! Step model - ordered template steps with a role/action permission matrix.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role that can be granted access to a step. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepRole {
    Admin,
    Faculty,
    Student,
}

impl StepRole {
    pub const ALL: [StepRole; 3] = [StepRole::Admin, StepRole::Faculty, StepRole::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepRole::Admin => "admin",
            StepRole::Faculty => "faculty",
            StepRole::Student => "student",
        }
    }
}

impl std::fmt::Display for StepRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action a role can be allowed to perform on a step. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Start,
    Pause,
    Extend,
    View,
    Edit,
    Complete,
}

impl StepAction {
    pub const ALL: [StepAction; 6] = [
        StepAction::Start,
        StepAction::Pause,
        StepAction::Extend,
        StepAction::View,
        StepAction::Edit,
        StepAction::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepAction::Start => "start",
            StepAction::Pause => "pause",
            StepAction::Extend => "extend",
            StepAction::View => "view",
            StepAction::Edit => "edit",
            StepAction::Complete => "complete",
        }
    }
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cell of the step permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StepPermission {
    pub role: StepRole,
    pub action: StepAction,
}

impl StepPermission {
    pub fn new(role: StepRole, action: StepAction) -> Self {
        Self { role, action }
    }
}

/// A committed step in a template's ordered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateStep {
    /// Client-side identity; stable across edits within one session.
    #[serde(default = "Uuid::new_v4")]
    pub temp_id: Uuid,
    /// Server id, present once the step has been persisted.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub estimated_days: u32,
    pub is_required: bool,
    /// Position in the template. Recomputed from the array index after every
    /// structural edit and again before persistence.
    pub order: usize,
    /// Projection of the permission matrix onto roles.
    #[serde(default)]
    pub allowed_roles: Vec<StepRole>,
    /// Projection of the permission matrix onto actions.
    #[serde(default)]
    pub allowed_actions: Vec<StepAction>,
}

impl TemplateStep {
    /// Pre-populated step used when seeding a brand-new template.
    pub(crate) fn seed(
        title: &str,
        roles: &[StepRole],
        actions: &[StepAction],
        order: usize,
    ) -> Self {
        Self {
            temp_id: Uuid::new_v4(),
            id: None,
            title: title.to_string(),
            description: None,
            estimated_days: 0,
            is_required: true,
            order,
            allowed_roles: roles.to_vec(),
            allowed_actions: actions.to_vec(),
        }
    }
}
