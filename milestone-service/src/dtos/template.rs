//! Persistence payloads for the milestone-template API.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{StepAction, StepRole};

/// Template create/update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TemplateData {
    #[validate(length(min = 1, message = "Template name is required"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    pub is_default: bool,
    #[validate(length(min = 1, message = "At least one step is required"), nested)]
    pub items: Vec<TemplateItemData>,
}

/// One step row in the template payload. `order` always carries the final
/// array index of the step, and the role/action arrays are omitted entirely
/// when no permissions were granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TemplateItemData {
    #[validate(length(min = 1, message = "Step title is required"))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub estimated_days: u32,
    pub is_required: bool,
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<Vec<StepRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_actions: Option<Vec<StepAction>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, order: usize) -> TemplateItemData {
        TemplateItemData {
            title: title.to_string(),
            description: None,
            estimated_days: 0,
            is_required: true,
            order,
            allowed_roles: None,
            allowed_actions: None,
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let data = TemplateData {
            name: String::new(),
            description: None,
            program_id: None,
            department_id: None,
            is_default: false,
            items: vec![item("Start", 0)],
        };
        let errs = data.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("name"));
    }

    #[test]
    fn test_empty_items_rejected() {
        let data = TemplateData {
            name: "Thesis flow".to_string(),
            description: None,
            program_id: None,
            department_id: None,
            is_default: false,
            items: vec![],
        };
        let errs = data.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("items"));
    }

    #[test]
    fn test_empty_arrays_are_omitted_from_json() {
        let data = TemplateData {
            name: "Thesis flow".to_string(),
            description: None,
            program_id: None,
            department_id: None,
            is_default: true,
            items: vec![item("Start", 0)],
        };
        let json = serde_json::to_value(&data).unwrap();
        let row = &json["items"][0];
        assert!(row.get("allowed_roles").is_none());
        assert!(row.get("allowed_actions").is_none());
        assert!(json.get("description").is_none());
        assert_eq!(row["order"], 0);
    }

    #[test]
    fn test_roles_and_actions_serialize_lowercase() {
        let mut row = item("Review", 2);
        row.allowed_roles = Some(vec![StepRole::Admin, StepRole::Faculty]);
        row.allowed_actions = Some(vec![StepAction::View, StepAction::Complete]);

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["allowed_roles"], serde_json::json!(["admin", "faculty"]));
        assert_eq!(
            json["allowed_actions"],
            serde_json::json!(["view", "complete"])
        );
    }
}
