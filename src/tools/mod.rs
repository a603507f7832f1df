//! Tool catalog core — registry, index, classification, search, labels.
//!
//! Everything here is pure and synchronous. A [`Catalog`] is validated once
//! at load time; classification, filtering, counting and label formatting
//! over it are total functions of their inputs.

pub mod builtin;
pub mod catalog;
pub mod classifier;
pub mod index;
pub mod label;
pub mod registry;
pub mod search;

pub use catalog::{Catalog, CatalogDefinition, CategorySpec, ToolItem, ToolListing};
pub use classifier::{classify, CategoryGroup, ClassifiedTools};
pub use index::ClassificationIndex;
pub use label::{display_reference, format_label, ACRONYM_FIXES};
pub use registry::{Category, CategoryRegistry, OVERVIEW_ID};
pub use search::{
    count_flat, count_matches, filter_group, matches, CategoryCount, MatchCounts, SearchQuery,
};
