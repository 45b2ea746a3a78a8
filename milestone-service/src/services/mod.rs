pub mod editor;
pub mod store;

pub use editor::{MoveDirection, StepForm};
pub use store::{HttpTemplateStore, TemplateStore};
