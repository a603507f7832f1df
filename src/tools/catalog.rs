//! Tool catalog — validated registry + index pair and tool listings.
//!
//! A [`Catalog`] is built once from a [`CatalogDefinition`] (the built-in
//! table or a JSON file) and is immutable afterwards. Construction performs
//! every configuration check, so classification through a catalog is total.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::builtin;
use super::classifier::{self, ClassifiedTools};
use super::index::ClassificationIndex;
use super::registry::{Category, CategoryRegistry};
use crate::types::{CategoryId, Error, Result};
use crate::validation::parse_category_id;

// =============================================================================
// Tool items
// =============================================================================

/// A named, described tool supplied by the tool-list provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ToolItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Accepted shapes for a provider's tool list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawListing {
    Bare(Vec<ToolItem>),
    Wrapped { tools: Vec<ToolItem> },
}

/// Ordered tool list as delivered by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ToolListing {
    tools: Vec<ToolItem>,
}

impl ToolListing {
    pub fn new(tools: Vec<ToolItem>) -> Self {
        Self { tools }
    }

    /// Parse a bare `[{name, description}]` array or an MCP `tools/list`
    /// result (`{"tools": [...]}`). Unknown fields are ignored.
    pub fn from_json(raw: &str) -> Result<Self> {
        let tools = match serde_json::from_str::<RawListing>(raw)? {
            RawListing::Bare(tools) | RawListing::Wrapped { tools } => tools,
        };
        Ok(Self { tools })
    }

    pub fn tools(&self) -> &[ToolItem] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

// =============================================================================
// Catalog definition (configuration artifact)
// =============================================================================

/// One category declaration in a catalog definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySpec {
    /// Category identifier, unique within the definition.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Advisory expected number of tools.
    #[serde(default)]
    pub nominal_count: usize,
    /// Icon identifier passed through to the presentation layer.
    #[serde(default)]
    pub icon: String,
    /// Color class passed through to the presentation layer.
    #[serde(default)]
    pub color: String,
}

/// Serializable registry + index, validated into a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogDefinition {
    /// Category receiving every tool absent from `index`.
    pub fallback: String,
    /// Categories in display order.
    pub categories: Vec<CategorySpec>,
    /// Tool name → category id.
    #[serde(default)]
    pub index: BTreeMap<String, String>,
}

impl CatalogDefinition {
    /// The built-in Databricks tool registry.
    pub fn builtin() -> Self {
        builtin::definition()
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// JSON schema describing the definition format.
    pub fn json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(CatalogDefinition)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Validated, immutable category registry and classification index.
#[derive(Debug, Clone)]
pub struct Catalog {
    registry: CategoryRegistry,
    index: ClassificationIndex,
    category_ids: Vec<CategoryId>,
}

impl Catalog {
    /// Assemble a catalog from already-built parts, checking the index
    /// against the registry.
    pub fn new(registry: CategoryRegistry, index: ClassificationIndex) -> Result<Self> {
        if index.fallback() != registry.fallback() {
            return Err(Error::configuration(format!(
                "index fallback '{}' differs from registry fallback '{}'",
                index.fallback(),
                registry.fallback()
            )));
        }
        let category_ids = registry.ids();
        index.validate_against(&category_ids)?;
        Ok(Self {
            registry,
            index,
            category_ids,
        })
    }

    /// Validate a definition. Any configuration error is logged and returned;
    /// no catalog exists until the definition is fixed.
    pub fn from_definition(definition: &CatalogDefinition) -> Result<Self> {
        Self::build(definition).map_err(|e| {
            tracing::error!("Catalog definition rejected: {}", e);
            e
        })
    }

    fn build(definition: &CatalogDefinition) -> Result<Self> {
        let fallback = parse_category_id(&definition.fallback, "fallback category")?;
        let categories = definition
            .categories
            .iter()
            .map(|spec| {
                Ok(Category {
                    id: parse_category_id(&spec.id, "category id")?,
                    description: spec.description.clone(),
                    nominal_count: spec.nominal_count,
                    icon: spec.icon.clone(),
                    color: spec.color.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let registry = CategoryRegistry::new(categories, fallback.clone())?;

        let entries = definition
            .index
            .iter()
            .map(|(tool, category)| {
                let id = parse_category_id(category, "index category")?;
                Ok((tool.clone(), id))
            })
            .collect::<Result<Vec<_>>>()?;
        let index = ClassificationIndex::new(entries, fallback)?;

        let catalog = Self::new(registry, index)?;
        tracing::debug!(
            categories = catalog.registry.len(),
            mapped_tools = catalog.index.len(),
            fallback = %catalog.registry.fallback(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// The built-in Databricks catalog.
    pub fn builtin() -> Result<Self> {
        Self::from_definition(&CatalogDefinition::builtin())
    }

    /// Load from a JSON definition file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Self::from_definition(&CatalogDefinition::from_file(path)?)
    }

    /// Partition a tool list into per-category groups. Never fails.
    pub fn classify<'a>(&self, tools: &'a [ToolItem]) -> ClassifiedTools<'a> {
        classifier::partition(tools, &self.index, &self.category_ids)
    }

    /// Category a tool name resolves to. Always `Some` for a validated
    /// catalog; unmapped names resolve to the fallback.
    pub fn category_for(&self, tool_name: &str) -> Option<&Category> {
        self.registry.get(self.index.resolve(tool_name).as_str())
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn index(&self) -> &ClassificationIndex {
        &self.index
    }

    /// Category ids in display order.
    pub fn category_ids(&self) -> &[CategoryId] {
        &self.category_ids
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn small_definition() -> CatalogDefinition {
        CatalogDefinition {
            fallback: "core".to_string(),
            categories: vec![
                CategorySpec {
                    id: "security".to_string(),
                    description: "Secrets".to_string(),
                    nominal_count: 3,
                    icon: "shield".to_string(),
                    color: "red".to_string(),
                },
                CategorySpec {
                    id: "core".to_string(),
                    description: "Core".to_string(),
                    nominal_count: 1,
                    icon: String::new(),
                    color: String::new(),
                },
            ],
            index: BTreeMap::from([("put_secret".to_string(), "security".to_string())]),
        }
    }

    #[test]
    fn test_from_definition_and_classify() {
        let catalog = Catalog::from_definition(&small_definition()).unwrap();
        let tools = vec![
            ToolItem::new("put_secret", "Put a secret"),
            ToolItem::new("mystery_tool", "Unknown"),
        ];
        let classified = catalog.classify(&tools);

        assert_eq!(classified.get("security").unwrap(), &[&tools[0]]);
        assert_eq!(classified.get("core").unwrap(), &[&tools[1]]);
        assert_eq!(catalog.category_for("mystery_tool").unwrap().id, "core");
        assert_eq!(catalog.category_for("put_secret").unwrap().icon, "shield");
    }

    #[test]
    fn test_undeclared_index_target_rejected() {
        let mut definition = small_definition();
        definition
            .index
            .insert("list_models".to_string(), "mlflow".to_string());
        let err = Catalog::from_definition(&definition).unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: tool 'list_models' is mapped to undeclared category 'mlflow'"
        );
    }

    #[test]
    #[traced_test]
    fn test_rejection_is_logged() {
        let mut definition = small_definition();
        definition.fallback = "misc".to_string();
        assert!(Catalog::from_definition(&definition).is_err());
        assert!(logs_contain("Catalog definition rejected"));
    }

    #[test]
    fn test_missing_fallback_rejected() {
        let mut definition = small_definition();
        definition.fallback = "misc".to_string();
        assert!(Catalog::from_definition(&definition).unwrap_err().is_configuration());
    }

    #[test]
    fn test_empty_category_id_rejected() {
        let mut definition = small_definition();
        definition.categories[0].id = String::new();
        assert!(Catalog::from_definition(&definition).is_err());
    }

    #[test]
    fn test_definition_json_defaults() {
        let raw = r#"{
            "fallback": "core",
            "categories": [{"id": "core", "description": "Everything"}]
        }"#;
        let definition = CatalogDefinition::from_json(raw).unwrap();
        assert!(definition.index.is_empty());
        assert_eq!(definition.categories[0].nominal_count, 0);

        let catalog = Catalog::from_definition(&definition).unwrap();
        assert_eq!(catalog.category_ids().len(), 1);
    }

    #[test]
    fn test_listing_shapes() {
        let bare = ToolListing::from_json(r#"[{"name": "health", "description": "ok"}]"#).unwrap();
        let wrapped = ToolListing::from_json(
            r#"{"tools": [{"name": "health", "description": "ok", "inputSchema": {}}]}"#,
        )
        .unwrap();
        assert_eq!(bare, wrapped);
        assert_eq!(bare.tools()[0], ToolItem::new("health", "ok"));

        let no_description = ToolListing::from_json(r#"[{"name": "health"}]"#).unwrap();
        assert_eq!(no_description.tools()[0].description, "");

        assert!(ToolListing::from_json(r#"{"items": []}"#).is_err());
    }

    #[test]
    fn test_schema_names_fields() {
        let schema = serde_json::to_value(CatalogDefinition::json_schema()).unwrap();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("fallback")));
        assert!(required.contains(&serde_json::json!("categories")));
    }
}
