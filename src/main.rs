//! Tool catalog CLI - main entry point.
//!
//! Usage:
//!   tool-catalog classify --tools tools.json --search secret
//!   tool-catalog classify --category security < tools.json
//!   tool-catalog categories
//!   tool-catalog label list_dbfs_files put_secret_acl
//!   tool-catalog schema
//!   tool-catalog --config catalog.json check

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use tool_catalog::view::Panel;
use tool_catalog::{
    Catalog, CatalogDefinition, CatalogView, Config, Error, Selection, ToolListing, ViewState,
};

#[derive(Parser, Debug)]
#[command(name = "tool-catalog")]
#[command(about = "Classify, search and label a static tool catalog")]
struct Cli {
    /// Optional JSON config file.
    #[arg(long, global = true, env = "TOOL_CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog definition overriding the config and the built-in registry.
    #[arg(long, global = true)]
    definition: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a tool listing and print the view for one tab.
    Classify {
        /// Tool listing JSON; reads stdin when omitted.
        #[arg(long)]
        tools: Option<PathBuf>,
        /// Search text applied to names and descriptions.
        #[arg(long, default_value = "")]
        search: String,
        /// Tab to show: `overview` or a category id.
        #[arg(long, default_value = "overview")]
        category: Selection,
        /// Namespace for tool references (defaults to the configured one).
        #[arg(long)]
        namespace: Option<String>,
        /// Print the view as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List categories in display order.
    Categories {
        #[arg(long)]
        json: bool,
    },
    /// Print display labels for tool names.
    Label {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Print the JSON schema of a catalog definition.
    Schema,
    /// Validate the configured catalog definition.
    Check,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.apply_env();
    if let Some(path) = cli.definition {
        config.catalog.definition = Some(path);
    }

    // Initialize observability
    tool_catalog::observability::init_tracing(&config.observability);

    match cli.command {
        Command::Classify {
            tools,
            search,
            category,
            namespace,
            json,
        } => {
            let catalog = load_catalog(&config)?;
            let listing = read_listing(tools.as_deref())?;

            if let Selection::Category(id) = &category {
                if !catalog.registry().contains(id.as_str()) {
                    return Err(Error::validation(format!("unknown category '{}'", id)).into());
                }
            }
            let mut state = ViewState::new();
            state.set_search_text(search);
            state.select(category);

            let namespace = namespace.unwrap_or_else(|| config.catalog.namespace.clone());
            let classified = catalog.classify(listing.tools());
            let view =
                CatalogView::build(&catalog, listing.tools(), &classified, &state, &namespace);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }
        Command::Categories { json } => {
            let catalog = load_catalog(&config)?;
            if json {
                let categories: Vec<_> = catalog.registry().iter().collect();
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                for category in catalog.registry().iter() {
                    let marker = if category.id == *catalog.registry().fallback() {
                        " (fallback)"
                    } else {
                        ""
                    };
                    println!(
                        "{:<18} {:>3}  {}{}",
                        category.id.as_str(),
                        category.nominal_count,
                        category.description,
                        marker
                    );
                }
            }
        }
        Command::Label { names } => {
            for name in names {
                println!("{}", tool_catalog::tools::format_label(&name));
            }
        }
        Command::Schema => {
            let schema = CatalogDefinition::json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Check => {
            let catalog = load_catalog(&config)?;
            println!(
                "ok: {} categories, {} mapped tools, fallback '{}'",
                catalog.registry().len(),
                catalog.index().len(),
                catalog.registry().fallback()
            );
        }
    }

    Ok(())
}

fn load_catalog(config: &Config) -> tool_catalog::Result<Catalog> {
    match &config.catalog.definition {
        Some(path) => {
            tracing::info!("Loading catalog definition from {}", path.display());
            Catalog::from_file(path)
        }
        None => Catalog::builtin(),
    }
}

fn read_listing(path: Option<&Path>) -> tool_catalog::Result<ToolListing> {
    let mut raw = String::new();
    match path {
        Some(path) => raw = std::fs::read_to_string(path)?,
        None => {
            std::io::stdin().read_to_string(&mut raw)?;
        }
    }
    ToolListing::from_json(&raw)
}

fn print_view(view: &CatalogView) {
    if view.search_text.is_empty() {
        println!("{} tools", view.total_tools);
    } else {
        println!(
            "{} of {} tools match \"{}\"",
            view.total_matches, view.total_tools, view.search_text
        );
    }
    println!();

    match &view.panel {
        Panel::Overview { cards } => {
            for card in cards {
                println!(
                    "{:<18} {:>3}  {}",
                    card.id.as_str(),
                    card.matches,
                    card.description
                );
            }
        }
        Panel::Category {
            category,
            entries,
            empty,
        } => {
            println!("{} - {}", category.id, category.description);
            if let Some(empty) = empty {
                println!("  {}", empty.message());
            }
            for entry in entries {
                println!("  {:<36} {}", entry.label, entry.reference);
                if !entry.description.is_empty() {
                    println!("      {}", entry.description);
                }
            }
        }
    }
}
