//! Classification index — static tool name → category lookup.
//!
//! Loaded once into an immutable map. Names absent from the map resolve to
//! the fallback category, so lookups never fail.

use std::collections::HashMap;

use crate::types::{CategoryId, Error, Result};
use crate::validation::{first_duplicate, validate_non_empty};

/// Immutable tool name → category mapping with a fallback.
#[derive(Debug, Clone)]
pub struct ClassificationIndex {
    entries: HashMap<String, CategoryId>,
    fallback: CategoryId,
}

impl ClassificationIndex {
    /// Build an index from `(tool_name, category)` pairs.
    ///
    /// Rejects empty and duplicate tool names. Category references are
    /// checked separately by [`validate_against`](Self::validate_against).
    pub fn new<I>(entries: I, fallback: CategoryId) -> Result<Self>
    where
        I: IntoIterator<Item = (String, CategoryId)>,
    {
        let pairs: Vec<(String, CategoryId)> = entries.into_iter().collect();
        for (name, _) in &pairs {
            validate_non_empty(name, "index tool name")?;
        }
        if let Some(dup) = first_duplicate(pairs.iter().map(|(name, _)| name.as_str())) {
            return Err(Error::configuration(format!(
                "tool '{}' mapped more than once",
                dup
            )));
        }
        Ok(Self {
            entries: pairs.into_iter().collect(),
            fallback,
        })
    }

    /// Check that the fallback and every mapped category are declared.
    ///
    /// Reports the alphabetically first offending tool so errors are stable.
    pub fn validate_against(&self, categories: &[CategoryId]) -> Result<()> {
        if !categories.contains(&self.fallback) {
            return Err(Error::configuration(format!(
                "fallback category '{}' is not declared in the registry",
                self.fallback
            )));
        }
        let mut undeclared: Vec<(&String, &CategoryId)> = self
            .entries
            .iter()
            .filter(|(_, category)| !categories.contains(*category))
            .collect();
        undeclared.sort();
        if let Some((name, category)) = undeclared.first() {
            return Err(Error::configuration(format!(
                "tool '{}' is mapped to undeclared category '{}'",
                name, category
            )));
        }
        Ok(())
    }

    /// Explicit mapping for a tool name, if any.
    pub fn get(&self, tool_name: &str) -> Option<&CategoryId> {
        self.entries.get(tool_name)
    }

    /// Category for a tool name, falling back for unmapped names.
    pub fn resolve(&self, tool_name: &str) -> &CategoryId {
        self.entries.get(tool_name).unwrap_or(&self.fallback)
    }

    pub fn is_mapped(&self, tool_name: &str) -> bool {
        self.entries.contains_key(tool_name)
    }

    pub fn fallback(&self) -> &CategoryId {
        &self.fallback
    }

    /// Mapped tool names for a category, sorted.
    pub fn names_for(&self, category: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, c)| *c == category)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CategoryId {
        s.parse().unwrap()
    }

    fn sample_index() -> ClassificationIndex {
        ClassificationIndex::new(
            vec![
                ("put_secret".to_string(), id("security")),
                ("list_secrets".to_string(), id("security")),
            ],
            id("core"),
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_and_fallback() {
        let index = sample_index();
        assert_eq!(index.resolve("put_secret"), "security");
        assert_eq!(index.resolve("mystery_tool"), "core");
        assert!(index.get("mystery_tool").is_none());
        assert!(index.is_mapped("list_secrets"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_names_for_sorted() {
        let index = sample_index();
        assert_eq!(index.names_for("security"), vec!["list_secrets", "put_secret"]);
        assert!(index.names_for("core").is_empty());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = ClassificationIndex::new(
            vec![
                ("put_secret".to_string(), id("security")),
                ("put_secret".to_string(), id("core")),
            ],
            id("core"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("'put_secret' mapped more than once"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = ClassificationIndex::new(vec![(String::new(), id("core"))], id("core"));
        assert!(result.unwrap_err().is_configuration());
    }

    #[test]
    fn test_validate_against_undeclared() {
        let index = sample_index();
        let err = index.validate_against(&[id("core")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: tool 'list_secrets' is mapped to undeclared category 'security'"
        );
        assert!(index.validate_against(&[id("security"), id("core")]).is_ok());
    }

    #[test]
    fn test_validate_against_missing_fallback() {
        let index = sample_index();
        let err = index.validate_against(&[id("security")]).unwrap_err();
        assert!(err.to_string().contains("fallback category 'core'"));
    }
}
