//! Built-in Databricks tool registry and classification index.
//!
//! `health` is intentionally absent from the index and reaches `core`
//! through the fallback.

use std::collections::BTreeMap;

use super::catalog::{CatalogDefinition, CategorySpec};

/// Fallback category for unmapped tool names.
pub const FALLBACK_CATEGORY: &str = "core";

/// `(id, description, nominal_count, icon, color)` in display order.
const CATEGORIES: &[(&str, &str, usize, &str, &str)] = &[
    ("core", "Server health and basic connectivity", 1, "activity", "gray"),
    (
        "sql_operations",
        "SQL warehouse management and query execution",
        6,
        "database",
        "blue",
    ),
    (
        "unity_catalog",
        "Catalogs, schemas, tables, volumes and functions",
        10,
        "library",
        "purple",
    ),
    ("data_management", "DBFS files and external locations", 7, "hard-drive", "amber"),
    ("jobs_pipelines", "Jobs, job runs and DLT pipelines", 12, "workflow", "green"),
    ("dashboards", "Lakeview and legacy dashboards", 11, "layout-dashboard", "pink"),
    (
        "compute",
        "Clusters, instance pools, libraries and policies",
        25,
        "cpu",
        "orange",
    ),
    (
        "security",
        "Secrets, identities, tokens and IP access lists",
        35,
        "shield",
        "red",
    ),
    (
        "workspace",
        "Workspace objects, repos, permissions and settings",
        21,
        "folder",
        "cyan",
    ),
    (
        "mlflow",
        "MLflow experiments, runs and registered models",
        21,
        "flask",
        "indigo",
    ),
    (
        "governance",
        "Audit logs, lineage, usage and quality monitors",
        11,
        "scale",
        "teal",
    ),
];

const SQL_OPERATIONS: &[&str] = &[
    "execute_dbsql",
    "list_warehouses",
    "get_sql_warehouse",
    "start_sql_warehouse",
    "stop_sql_warehouse",
    "delete_sql_warehouse",
];

const UNITY_CATALOG: &[&str] = &[
    "list_uc_catalogs",
    "describe_uc_catalog",
    "list_uc_schemas",
    "describe_uc_schema",
    "list_uc_tables",
    "describe_uc_table",
    "list_uc_volumes",
    "describe_uc_volume",
    "list_uc_functions",
    "describe_uc_function",
];

const DATA_MANAGEMENT: &[&str] = &[
    "list_dbfs_files",
    "read_dbfs_file",
    "write_dbfs_file",
    "delete_dbfs_path",
    "get_dbfs_file_info",
    "move_dbfs_path",
    "list_external_locations",
];

const JOBS_PIPELINES: &[&str] = &[
    "list_jobs",
    "get_job",
    "create_job",
    "delete_job",
    "submit_job_run",
    "list_job_runs",
    "cancel_job_run",
    "list_pipelines",
    "get_pipeline",
    "delete_pipeline",
    "list_pipeline_runs",
    "stop_pipeline_update",
];

const DASHBOARDS: &[&str] = &[
    "list_lakeview_dashboards",
    "get_lakeview_dashboard",
    "create_lakeview_dashboard",
    "update_lakeview_dashboard",
    "delete_lakeview_dashboard",
    "share_lakeview_dashboard",
    "get_dashboard_permissions",
    "list_dashboards",
    "get_dashboard",
    "create_dashboard",
    "delete_dashboard",
];

const COMPUTE: &[&str] = &[
    "list_clusters",
    "get_cluster",
    "create_cluster",
    "start_cluster",
    "restart_cluster",
    "terminate_cluster",
    "delete_cluster",
    "edit_cluster",
    "get_cluster_events",
    "list_instance_pools",
    "get_instance_pool",
    "create_instance_pool",
    "edit_instance_pool",
    "delete_instance_pool",
    "list_cluster_libraries",
    "install_cluster_libraries",
    "uninstall_cluster_libraries",
    "list_all_cluster_libraries",
    "list_cluster_policies",
    "get_cluster_policy",
    "create_cluster_policy",
    "edit_cluster_policy",
    "delete_cluster_policy",
    "list_node_types",
    "list_spark_versions",
];

const SECURITY: &[&str] = &[
    "list_secret_scopes",
    "create_secret_scope",
    "delete_secret_scope",
    "list_secrets",
    "put_secret",
    "delete_secret",
    "get_secret_acl",
    "list_secret_acls",
    "put_secret_acl",
    "delete_secret_acl",
    "list_users",
    "get_user",
    "create_user",
    "update_user",
    "delete_user",
    "list_groups",
    "get_group",
    "create_group",
    "update_group",
    "delete_group",
    "list_service_principals",
    "get_service_principal",
    "create_service_principal",
    "update_service_principal",
    "delete_service_principal",
    "list_tokens",
    "create_token",
    "revoke_token",
    "list_ip_access_lists",
    "get_ip_access_list",
    "create_ip_access_list",
    "update_ip_access_list",
    "delete_ip_access_list",
    "get_workspace_conf",
    "set_workspace_conf",
];

const WORKSPACE: &[&str] = &[
    "list_workspace_objects",
    "get_workspace_object",
    "export_workspace_object",
    "import_workspace_object",
    "delete_workspace_object",
    "create_workspace_directory",
    "list_repos",
    "get_repo",
    "create_repo",
    "update_repo",
    "delete_repo",
    "get_repo_permissions",
    "set_repo_permissions",
    "update_repo_permissions",
    "get_workspace_permissions",
    "set_workspace_permissions",
    "update_workspace_permissions",
    "get_current_user",
    "get_workspace_settings",
    "update_token_management_settings",
    "update_ip_access_list_settings",
];

const MLFLOW: &[&str] = &[
    "list_models",
    "get_model",
    "create_model",
    "update_model",
    "delete_model",
    "list_model_versions",
    "get_model_version",
    "create_model_version",
    "update_model_version",
    "delete_model_version",
    "transition_model_version_stage",
    "list_experiments",
    "get_experiment",
    "create_experiment",
    "update_experiment",
    "delete_experiment",
    "restore_experiment",
    "search_runs",
    "get_run",
    "delete_run",
    "restore_run",
];

const GOVERNANCE: &[&str] = &[
    "list_system_schemas",
    "query_audit_logs",
    "query_table_lineage",
    "query_column_lineage",
    "query_table_usage",
    "query_workspace_objects",
    "query_permissions_changes",
    "query_compute_usage",
    "query_storage_usage",
    "list_quality_monitors",
    "get_quality_monitor_status",
];

/// Tool name tables keyed by category id.
const INDEX: &[(&str, &[&str])] = &[
    ("sql_operations", SQL_OPERATIONS),
    ("unity_catalog", UNITY_CATALOG),
    ("data_management", DATA_MANAGEMENT),
    ("jobs_pipelines", JOBS_PIPELINES),
    ("dashboards", DASHBOARDS),
    ("compute", COMPUTE),
    ("security", SECURITY),
    ("workspace", WORKSPACE),
    ("mlflow", MLFLOW),
    ("governance", GOVERNANCE),
];

pub(crate) fn definition() -> CatalogDefinition {
    let categories = CATEGORIES
        .iter()
        .map(|&(id, description, nominal_count, icon, color)| CategorySpec {
            id: id.to_string(),
            description: description.to_string(),
            nominal_count,
            icon: icon.to_string(),
            color: color.to_string(),
        })
        .collect();

    let index: BTreeMap<String, String> = INDEX
        .iter()
        .flat_map(|&(category, tools)| {
            tools
                .iter()
                .map(move |tool| (tool.to_string(), category.to_string()))
        })
        .collect();

    CatalogDefinition {
        fallback: FALLBACK_CATEGORY.to_string(),
        categories,
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::catalog::Catalog;

    #[test]
    fn test_builtin_validates() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.registry().len(), 11);
        assert_eq!(catalog.registry().fallback(), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_no_tool_listed_twice() {
        // BTreeMap collection would silently keep only one mapping.
        let mapped: usize = INDEX.iter().map(|(_, tools)| tools.len()).sum();
        assert_eq!(definition().index.len(), mapped);
    }

    #[test]
    fn test_health_falls_back_to_core() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.index().is_mapped("health"));
        assert_eq!(catalog.index().resolve("health"), "core");
    }

    #[test]
    fn test_nominal_counts_match_tables() {
        let definition = definition();
        for (category, tools) in INDEX {
            let spec = definition
                .categories
                .iter()
                .find(|c| c.id == *category)
                .unwrap();
            assert_eq!(spec.nominal_count, tools.len(), "category {}", category);
        }
    }
}
