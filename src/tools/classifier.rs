//! Classifier — partitions a tool listing into per-category groups.
//!
//! Every declared category gets a group, including empty ones. Items keep
//! their input order within a group, and each item lands in exactly one group.

use serde::Serialize;
use std::collections::HashMap;

use super::catalog::ToolItem;
use super::index::ClassificationIndex;
use crate::types::{CategoryId, Error, Result};
use crate::validation::first_duplicate;

/// Tools resolved into one category, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: CategoryId,
    pub tools: Vec<&'a ToolItem>,
}

/// Classification result: one group per declared category, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassifiedTools<'a> {
    groups: Vec<CategoryGroup<'a>>,
}

impl<'a> ClassifiedTools<'a> {
    /// Group for a category, `None` only for undeclared ids.
    pub fn get(&self, category: &str) -> Option<&[&'a ToolItem]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.tools.as_slice())
    }

    pub fn groups(&self) -> &[CategoryGroup<'a>] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'a>> {
        self.groups.iter()
    }

    /// All classified tools, group by group.
    pub fn tools(&self) -> impl Iterator<Item = &'a ToolItem> + '_ {
        self.groups.iter().flat_map(|g| g.tools.iter().copied())
    }

    /// Number of classified tools across all groups.
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.tools.len()).sum()
    }

    /// Number of category groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Classify `items` using `index` against the declared `categories`.
///
/// Fails with a configuration error when the index references an undeclared
/// category, the fallback is not declared, or `categories` repeats an id.
pub fn classify<'a>(
    items: &'a [ToolItem],
    index: &ClassificationIndex,
    categories: &[CategoryId],
) -> Result<ClassifiedTools<'a>> {
    if let Some(dup) = first_duplicate(categories.iter()) {
        return Err(Error::configuration(format!(
            "category '{}' declared more than once",
            dup
        )));
    }
    index.validate_against(categories)?;
    Ok(partition(items, index, categories))
}

/// Partition without re-validating. Callers must have run
/// [`ClassificationIndex::validate_against`] for `categories`.
pub(crate) fn partition<'a>(
    items: &'a [ToolItem],
    index: &ClassificationIndex,
    categories: &[CategoryId],
) -> ClassifiedTools<'a> {
    let slots: HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(pos, id)| (id.as_str(), pos))
        .collect();
    let fallback_slot = slots.get(index.fallback().as_str()).copied();

    let mut groups: Vec<CategoryGroup<'a>> = categories
        .iter()
        .map(|id| CategoryGroup {
            category: id.clone(),
            tools: Vec::new(),
        })
        .collect();

    let mut fallen_back = 0usize;
    for item in items {
        if !index.is_mapped(&item.name) {
            fallen_back += 1;
        }
        let slot = slots
            .get(index.resolve(&item.name).as_str())
            .copied()
            .or(fallback_slot);
        if let Some(slot) = slot {
            groups[slot].tools.push(item);
        }
    }

    tracing::debug!(
        items = items.len(),
        categories = groups.len(),
        fallback = fallen_back,
        "Classified tool listing"
    );

    ClassifiedTools { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn id(s: &str) -> CategoryId {
        s.parse().unwrap()
    }

    fn item(name: &str) -> ToolItem {
        ToolItem::new(name, format!("{} description", name))
    }

    fn names<'a>(tools: &[&'a ToolItem]) -> Vec<&'a str> {
        tools.iter().map(|t| t.name.as_str()).collect()
    }

    fn secret_index() -> ClassificationIndex {
        ClassificationIndex::new(vec![("put_secret".to_string(), id("security"))], id("core"))
            .unwrap()
    }

    #[test]
    fn test_scenario_security_and_fallback() {
        let items = vec![item("put_secret"), item("mystery_tool")];
        let classified =
            classify(&items, &secret_index(), &[id("security"), id("core")]).unwrap();

        assert_eq!(names(classified.get("security").unwrap()), vec!["put_secret"]);
        assert_eq!(names(classified.get("core").unwrap()), vec!["mystery_tool"]);
        assert_eq!(classified.total(), 2);
    }

    #[test]
    fn test_empty_categories_present() {
        let items = vec![item("mystery_tool")];
        let classified =
            classify(&items, &secret_index(), &[id("security"), id("core"), id("mlflow")])
                .unwrap();

        assert_eq!(classified.len(), 3);
        assert!(classified.get("security").unwrap().is_empty());
        assert!(classified.get("mlflow").unwrap().is_empty());
        assert!(classified.get("governance").is_none());
    }

    #[test]
    fn test_input_order_preserved_within_group() {
        let index = ClassificationIndex::new(
            vec![
                ("b_tool".to_string(), id("security")),
                ("a_tool".to_string(), id("security")),
            ],
            id("core"),
        )
        .unwrap();
        let items = vec![item("b_tool"), item("z_tool"), item("a_tool"), item("c_tool")];
        let classified = classify(&items, &index, &[id("core"), id("security")]).unwrap();

        assert_eq!(names(classified.get("security").unwrap()), vec!["b_tool", "a_tool"]);
        assert_eq!(names(classified.get("core").unwrap()), vec!["z_tool", "c_tool"]);
        let order: Vec<&str> = classified.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(order, vec!["core", "security"]);
    }

    #[test]
    fn test_undeclared_category_fails_fast() {
        let items = vec![item("put_secret")];
        let err = classify(&items, &secret_index(), &[id("core")]).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_missing_fallback_fails_fast() {
        let items: Vec<ToolItem> = Vec::new();
        let err = classify(&items, &secret_index(), &[id("security")]).unwrap_err();
        assert!(err.to_string().contains("fallback"));
    }

    #[test]
    fn test_duplicate_category_fails_fast() {
        let err = classify(&[], &secret_index(), &[id("security"), id("core"), id("core")])
            .unwrap_err();
        assert!(err.to_string().contains("'core' declared more than once"));
    }

    #[test]
    fn test_empty_listing() {
        let classified = classify(&[], &secret_index(), &[id("security"), id("core")]).unwrap();
        assert_eq!(classified.total(), 0);
        assert_eq!(classified.len(), 2);
    }
}
