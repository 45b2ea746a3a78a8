//! access-service: scoped role-permission model for the graduation portal.
//!
//! Owns roles, the permission catalog, per-permission scope grants, and the
//! evaluation of a user's effective access across all of their roles. The UI
//! layer drives this crate through plain values and hands the serialized
//! payload to the portal API.
pub mod config;
pub mod dtos;
pub mod error;
pub mod models;
pub mod services;
