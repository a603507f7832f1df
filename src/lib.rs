//! # Tool Catalog - static tool classifier and search engine
//!
//! Rust implementation of the tool browser core providing:
//! - A fixed, ordered category registry with a designated fallback
//! - A static tool name → category index, validated against the registry
//! - Partitioning of a tool listing into per-category groups
//! - Case-insensitive substring search with per-category and total counts
//! - Display labels derived from snake_case tool names
//! - View state and a render-ready snapshot for a presentation layer
//!
//! ## Architecture
//!
//! ```text
//!   tool listing ──► Catalog::classify ──► ClassifiedTools
//!                      (registry+index)          │
//!                                                ▼
//!   ViewState ─────────────────────────► CatalogView::build
//!   (search text, active tab)             (counts, cards, labels)
//! ```
//!
//! Configuration errors (undeclared categories, missing fallback) surface
//! when the [`tools::Catalog`] is built. Everything after that is infallible.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod tools;
pub mod types;
pub mod view;

// Internal utilities
pub mod observability;
pub mod validation;

pub use tools::{Catalog, CatalogDefinition, ToolItem, ToolListing};
pub use types::{CategoryId, Config, Error, Result};
pub use view::{CatalogView, Selection, ViewState};
