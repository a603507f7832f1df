//! Field validation utilities shared by the catalog loaders.

use std::collections::HashSet;
use std::hash::Hash;

use crate::types::{CategoryId, Error, Result};

/// Validate that a string is not empty or whitespace-only.
pub fn validate_non_empty(s: &str, field: &str) -> Result<()> {
    if s.trim().is_empty() {
        return Err(Error::configuration(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Parse a category id, reporting `field` on failure.
pub fn parse_category_id(s: &str, field: &str) -> Result<CategoryId> {
    validate_non_empty(s, field)?;
    CategoryId::from_string(s.to_string())
        .map_err(|e| Error::configuration(format!("{}: {}", field, e)))
}

/// Return the first value that appears more than once, if any.
pub fn first_duplicate<'a, T, I>(values: I) -> Option<&'a T>
where
    T: Eq + Hash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    values.into_iter().find(|v| !seen.insert(*v))
}
