//! Search filter — case-insensitive substring match over name and description.
//!
//! An empty query matches everything. Counts are computed per category and
//! in aggregate; the aggregate always equals the flat filtered count.

use serde::Serialize;

use super::catalog::ToolItem;
use super::classifier::ClassifiedTools;
use crate::types::CategoryId;

/// A search query, case-folded once up front.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_case(query),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when the query is a substring of the case-folded name or
    /// description.
    pub fn matches(&self, item: &ToolItem) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fold_case(&item.name).contains(&self.needle)
            || fold_case(&item.description).contains(&self.needle)
    }
}

/// Uppercasing first expands characters such as `ß` to `SS`, so both
/// spellings fold to the same text.
fn fold_case(text: &str) -> String {
    text.to_uppercase().to_lowercase()
}

/// Check a single item against a raw query string.
pub fn matches(item: &ToolItem, query: &str) -> bool {
    SearchQuery::new(query).matches(item)
}

/// Keep the items of `group` that match `query`, in order.
pub fn filter_group<'a>(group: &[&'a ToolItem], query: &str) -> Vec<&'a ToolItem> {
    let query = SearchQuery::new(query);
    group.iter().copied().filter(|t| query.matches(t)).collect()
}

/// Count of matching tools in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: CategoryId,
    pub count: usize,
}

/// Per-category and aggregate match counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub per_category: Vec<CategoryCount>,
    pub total: usize,
}

impl MatchCounts {
    /// Matching count for a category, `None` for undeclared ids.
    pub fn get(&self, category: &str) -> Option<usize> {
        self.per_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.count)
    }
}

/// Count matches per category; `total` is the sum of the per-category counts.
pub fn count_matches(classified: &ClassifiedTools<'_>, query: &str) -> MatchCounts {
    let query = SearchQuery::new(query);
    let per_category: Vec<CategoryCount> = classified
        .iter()
        .map(|group| CategoryCount {
            category: group.category.clone(),
            count: group.tools.iter().filter(|t| query.matches(t)).count(),
        })
        .collect();
    let total = per_category.iter().map(|c| c.count).sum();
    MatchCounts {
        per_category,
        total,
    }
}

/// Count matches directly over the unclassified listing.
///
/// Each element of `items` is a distinct item, so no deduplication is
/// needed; this must agree with [`count_matches`] for the same listing.
pub fn count_flat(items: &[ToolItem], query: &str) -> usize {
    let query = SearchQuery::new(query);
    items.iter().filter(|t| query.matches(t)).count()
}
