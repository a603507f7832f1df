//! View state and the presentation snapshot derived from it.
//!
//! [`ViewState`] is owned by the presentation shell and only changes through
//! its setters. [`CatalogView::build`] reads it together with a listing and
//! its classification and produces everything a renderer needs: tabs with counts, the
//! overview cards, and the entries (or empty-result message) of the active
//! category. Building a view never mutates the state.

use serde::{Deserialize, Serialize};

use crate::tools::{
    count_flat, count_matches, display_reference, format_label, Catalog, Category,
    ClassifiedTools, SearchQuery, ToolItem, OVERVIEW_ID,
};
use crate::types::CategoryId;

// =============================================================================
// View state
// =============================================================================

/// Active tab: the overview or a declared category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selection {
    #[default]
    Overview,
    Category(CategoryId),
}

impl Selection {
    pub fn as_str(&self) -> &str {
        match self {
            Selection::Overview => OVERVIEW_ID,
            Selection::Category(id) => id.as_str(),
        }
    }

    pub fn category(&self) -> Option<&CategoryId> {
        match self {
            Selection::Overview => None,
            Selection::Category(id) => Some(id),
        }
    }
}

impl TryFrom<String> for Selection {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == OVERVIEW_ID {
            return Ok(Selection::Overview);
        }
        CategoryId::from_string(s).map(Selection::Category)
    }
}

impl std::str::FromStr for Selection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        selection.as_str().to_string()
    }
}

impl From<CategoryId> for Selection {
    fn from(id: CategoryId) -> Self {
        Selection::Category(id)
    }
}

/// Session-local search text and tab selection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    search_text: String,
    active: Selection,
}

impl ViewState {
    /// Empty search, overview selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn active(&self) -> &Selection {
        &self.active
    }

    /// True when a non-empty search is in effect.
    pub fn is_searching(&self) -> bool {
        !self.search_text.is_empty()
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
    }

    pub fn select(&mut self, selection: Selection) {
        self.active = selection;
    }

    /// Select a category tab, e.g. from an overview card.
    pub fn select_category(&mut self, id: CategoryId) {
        self.active = Selection::Category(id);
    }

    pub fn select_overview(&mut self) {
        self.active = Selection::Overview;
    }
}

// =============================================================================
// Empty-result messages
// =============================================================================

/// Why a category tab has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmptyState {
    /// A search is active and nothing in the category matches it.
    NoMatch { query: String },
    /// The category has no tools at all.
    NoTools,
}

impl EmptyState {
    /// Empty state for a category tab showing `visible` tools, if any applies.
    pub fn for_tab(view: &ViewState, visible: usize) -> Option<Self> {
        if visible > 0 {
            return None;
        }
        if view.is_searching() {
            Some(EmptyState::NoMatch {
                query: view.search_text().to_string(),
            })
        } else {
            Some(EmptyState::NoTools)
        }
    }

    pub fn message(&self) -> String {
        match self {
            EmptyState::NoMatch { query } => {
                format!("No tools in this category match \"{}\"", query)
            }
            EmptyState::NoTools => "No tools available in this category".to_string(),
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// One category as shown on a tab or overview card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub nominal_count: usize,
    /// Tools in the category, ignoring the search.
    pub total: usize,
    /// Tools in the category matching the search.
    pub matches: usize,
}

impl CategorySummary {
    fn new(category: &Category, total: usize, matches: usize) -> Self {
        Self {
            id: category.id.clone(),
            description: category.description.clone(),
            icon: category.icon.clone(),
            color: category.color.clone(),
            nominal_count: category.nominal_count,
            total,
            matches,
        }
    }
}

/// A single tool row in a category tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub name: String,
    pub label: String,
    pub description: String,
    pub reference: String,
}

impl ToolEntry {
    fn new(tool: &ToolItem, namespace: &str) -> Self {
        Self {
            name: tool.name.clone(),
            label: format_label(&tool.name),
            description: tool.description.clone(),
            reference: display_reference(namespace, &tool.name),
        }
    }
}

/// Content of the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    /// Category cards; while searching, categories without matches are left out.
    Overview { cards: Vec<CategorySummary> },
    /// Filtered tools of one category, or why there are none.
    Category {
        category: CategorySummary,
        entries: Vec<ToolEntry>,
        #[serde(skip_serializing_if = "Option::is_none")]
        empty: Option<EmptyState>,
    },
}

/// Everything the presentation layer renders for one view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub search_text: String,
    pub active: Selection,
    pub namespace: String,
    /// Tools in the listing.
    pub total_tools: usize,
    /// Tools matching the search across all categories.
    pub total_matches: usize,
    pub tabs: Vec<CategorySummary>,
    pub panel: Panel,
}

impl CatalogView {
    pub fn build(
        catalog: &Catalog,
        listing: &[ToolItem],
        classified: &ClassifiedTools<'_>,
        view: &ViewState,
        namespace: &str,
    ) -> Self {
        let query = SearchQuery::new(view.search_text());
        let counts = count_matches(classified, view.search_text());

        let flat_matches = count_flat(listing, view.search_text());
        if flat_matches != counts.total {
            tracing::warn!(
                per_category = counts.total,
                flat = flat_matches,
                "Search totals diverged"
            );
        }

        let tabs: Vec<CategorySummary> = catalog
            .registry()
            .iter()
            .map(|category| {
                let id = category.id.as_str();
                let total = classified.get(id).map_or(0, <[_]>::len);
                let matches = counts.get(id).unwrap_or(0);
                CategorySummary::new(category, total, matches)
            })
            .collect();

        let active = match view.active() {
            Selection::Category(id) if !tabs.iter().any(|tab| tab.id == *id) => {
                tracing::warn!("Unknown category '{}' selected, showing overview", id);
                Selection::Overview
            }
            other => other.clone(),
        };
        let active_tab = active
            .category()
            .and_then(|id| tabs.iter().find(|tab| tab.id == *id));

        let panel = match active_tab {
            None => Panel::Overview {
                cards: tabs
                    .iter()
                    .filter(|tab| !view.is_searching() || tab.matches > 0)
                    .cloned()
                    .collect(),
            },
            Some(tab) => {
                let entries: Vec<ToolEntry> = classified
                    .get(tab.id.as_str())
                    .unwrap_or_default()
                    .iter()
                    .filter(|t| query.matches(t))
                    .map(|t| ToolEntry::new(t, namespace))
                    .collect();
                let empty = EmptyState::for_tab(view, entries.len());
                Panel::Category {
                    category: tab.clone(),
                    entries,
                    empty,
                }
            }
        };

        Self {
            search_text: view.search_text().to_string(),
            active,
            namespace: namespace.to_string(),
            total_tools: listing.len(),
            total_matches: counts.total,
            tabs,
            panel,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
