//! milestone-service: workflow step-template engine for the graduation portal.
//!
//! Owns the ordered-step template model, the per-step role/action permission
//! matrix, and the editor operations over both. The UI layer drives this crate
//! through plain values and hands the serialized payload to the portal API.
pub mod config;
pub mod dtos;
pub mod error;
pub mod models;
pub mod services;
