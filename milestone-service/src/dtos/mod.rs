pub mod template;

pub use template::{TemplateData, TemplateItemData};
