pub mod step;
pub mod template;

pub use step::{StepAction, StepPermission, StepRole, TemplateStep};
pub use template::{MilestoneTemplate, TemplateDraft};
