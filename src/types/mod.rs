//! Core types for the tool catalog.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: Strongly-typed identifiers (CategoryId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for catalog source and logging

mod config;
mod errors;
mod ids;

pub use config::{CatalogConfig, Config, ObservabilityConfig, ENV_LOG_LEVEL, ENV_NAMESPACE};
pub use errors::{Error, Result};
pub use ids::CategoryId;
