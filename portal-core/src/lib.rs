//! portal-core: Shared infrastructure for portal services.
pub mod client;
pub mod config;
pub mod error;
pub mod observability;

pub use async_trait;
pub use serde;
pub use serde_json;
pub use tracing;
pub use validator;
