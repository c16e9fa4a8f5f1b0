//! Business logic
//!
//! Manifest resolution and fetch orchestration. Network and filesystem
//! access go through the [`crate::infra`] layer.

pub mod dataset;
pub mod fetch;
pub mod manifest;
