//! End-to-end template editing session against the persistence seam.

use std::sync::Mutex;

use async_trait::async_trait;
use portal_core::error::AppError;

use milestone_service::dtos::TemplateData;
use milestone_service::models::{StepAction, StepRole, TemplateDraft};
use milestone_service::services::{StepForm, TemplateStore};

/// In-memory store capturing the payloads a real save would ship.
#[derive(Default)]
struct RecordingStore {
    created: Mutex<Vec<TemplateData>>,
}

#[async_trait]
impl TemplateStore for RecordingStore {
    async fn create(&self, data: &TemplateData) -> Result<(), AppError> {
        self.created.lock().unwrap().push(data.clone());
        Ok(())
    }

    async fn update(&self, _id: i64, _data: &TemplateData) -> Result<(), AppError> {
        Err(AppError::Persistence("unexpected update".into()))
    }
}

#[tokio::test]
async fn full_editing_session_produces_dense_ordered_payload() {
    let mut draft = TemplateDraft::with_default_steps();
    draft.name = "Capstone flow".to_string();

    // Leave completion of the Review step to faculty alone.
    let review_index = 2;
    let form = StepForm::from_step(&draft.steps[review_index])
        .toggle_permission(StepRole::Admin, StepAction::Complete, false);
    assert!(form.is_granted(StepRole::Faculty, StepAction::Complete));
    draft = draft.commit_step(form, Some(review_index)).unwrap();

    // Append a fourth step, then drag it to the front while Review is open.
    let mut defense = StepForm::new();
    defense.title = "Defense".to_string();
    defense.estimated_days = 14;
    draft = draft.commit_step(defense, None).unwrap();

    let (draft, editing) = draft.reorder_step(3, 0, Some(review_index));
    assert_eq!(editing, Some(3));
    assert_eq!(draft.steps[3].title, "Review");

    let store = RecordingStore::default();
    store.create(&draft.to_payload().unwrap()).await.unwrap();

    let created = store.created.lock().unwrap();
    let payload = &created[0];
    assert_eq!(payload.name, "Capstone flow");

    let titles: Vec<&str> = payload.items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, ["Defense", "Start", "Submit", "Review"]);

    let orders: Vec<usize> = payload.items.iter().map(|i| i.order).collect();
    assert_eq!(orders, [0, 1, 2, 3]);

    assert_eq!(payload.items[0].allowed_roles, None);
    assert_eq!(payload.items[0].allowed_actions, None);
    let review = &payload.items[3];
    assert!(review
        .allowed_actions
        .as_ref()
        .unwrap()
        .contains(&StepAction::Complete));
}

#[tokio::test]
async fn http_store_rejects_invalid_payload_before_any_io() {
    use milestone_service::services::HttpTemplateStore;
    use portal_core::client::ApiClient;
    use std::time::Duration;

    // Unroutable base url: validation must fail before a request is attempted.
    let client = ApiClient::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();
    let store = HttpTemplateStore::new(client);

    let data = TemplateData {
        name: String::new(),
        description: None,
        program_id: None,
        department_id: None,
        is_default: false,
        items: vec![],
    };

    let err = store.create(&data).await.unwrap_err();
    let fields = err.field_errors().expect("field validation errors");
    assert!(fields.contains_key("name"));
    assert!(fields.contains_key("items"));
}
