//! Template model - named, ordered collections of workflow steps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::step::{StepAction, StepRole, TemplateStep};

/// Persisted milestone template as returned by the portal API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneTemplate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub program_id: Option<i64>,
    #[serde(default)]
    pub department_id: Option<i64>,
    pub is_default: bool,
    #[serde(default)]
    pub items: Vec<TemplateStep>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// In-memory template under edit.
///
/// Discarding the draft abandons the edit; persistence only ever sees the
/// serialized snapshot produced by [`TemplateDraft::to_payload`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateDraft {
    /// Server id when editing an existing template.
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub program_id: Option<i64>,
    pub department_id: Option<i64>,
    pub is_default: bool,
    pub steps: Vec<TemplateStep>,
}

impl TemplateDraft {
    /// Empty draft for a brand-new template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh draft seeded with the standard three-step flow.
    pub fn with_default_steps() -> Self {
        let mut draft = Self::new();
        draft.steps = vec![
            TemplateStep::seed(
                "Start",
                &[StepRole::Admin, StepRole::Faculty, StepRole::Student],
                &[StepAction::Start, StepAction::View],
                0,
            ),
            TemplateStep::seed(
                "Submit",
                &[StepRole::Admin, StepRole::Faculty, StepRole::Student],
                &[StepAction::View, StepAction::Edit],
                1,
            ),
            TemplateStep::seed(
                "Review",
                &[StepRole::Admin, StepRole::Faculty],
                &[StepAction::View, StepAction::Edit, StepAction::Complete],
                2,
            ),
        ];
        draft
    }

    /// Draft loaded from a persisted template for editing.
    pub fn from_template(template: &MilestoneTemplate) -> Self {
        Self {
            id: Some(template.id),
            name: template.name.clone(),
            description: template.description.clone().unwrap_or_default(),
            program_id: template.program_id,
            department_id: template.department_id,
            is_default: template.is_default,
            steps: template.items.clone(),
        }
    }
}
