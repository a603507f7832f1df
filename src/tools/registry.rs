//! Category registry — the fixed, ordered set of categories.
//!
//! Declaration order is display order. The registry always contains the
//! designated fallback category; construction fails otherwise.

use serde::Serialize;

use crate::types::{CategoryId, Error, Result};
use crate::validation::first_duplicate;

/// Selection name of the overview pseudo-category; never a category id.
pub const OVERVIEW_ID: &str = "overview";

/// A single category declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub description: String,
    /// Documented expected cardinality. Advisory only; live counts are
    /// always computed from the index and the item collection.
    pub nominal_count: usize,
    /// Opaque icon identifier for the presentation layer.
    pub icon: String,
    /// Opaque color class for the presentation layer.
    pub color: String,
}

/// Ordered category registry with a designated fallback.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
    fallback: CategoryId,
}

impl CategoryRegistry {
    /// Build a registry, rejecting empty or duplicate declarations and a
    /// fallback that is not itself declared.
    pub fn new(categories: Vec<Category>, fallback: CategoryId) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::configuration("category registry is empty"));
        }
        if let Some(dup) = first_duplicate(categories.iter().map(|c| &c.id)) {
            return Err(Error::configuration(format!(
                "category '{}' declared more than once",
                dup
            )));
        }
        if categories.iter().any(|c| c.id == OVERVIEW_ID) {
            return Err(Error::configuration(format!(
                "'{}' is reserved and cannot be a category id",
                OVERVIEW_ID
            )));
        }
        if !categories.iter().any(|c| c.id == fallback) {
            return Err(Error::configuration(format!(
                "fallback category '{}' is not declared in the registry",
                fallback
            )));
        }
        Ok(Self {
            categories,
            fallback,
        })
    }

    /// The catch-all category for unmapped tool names.
    pub fn fallback(&self) -> &CategoryId {
        &self.fallback
    }

    /// Get a category by id.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display position of a category.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// Category ids in display order.
    pub fn ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
