//! catalog-search CLI application entry point
//!
//! Drives the catalog search client from the command line: renders raw search
//! hits as a deduplicated result list, keeps per-resource-type tag filters and
//! active variants in a session file, and prints the navigation target of a
//! selected result.
//!
//! # Usage
//!
//! ```bash
//! # Render results for a query
//! catalog-search search hits.json --query age
//!
//! # Select the second result (records its variant, prints its path)
//! catalog-search search hits.json --query age --select 2
//!
//! # Toggle a tag filter, list filters, undo
//! catalog-search tags toggle feature pii
//! catalog-search tags list
//! catalog-search tags undo
//!
//! # Machine-readable output
//! catalog-search --format json types
//! ```
//!
//! # Configuration
//!
//! Configuration is read from the user's config directory
//! (`~/.config/catalog-search/config.toml` on Linux). Logging goes to stderr
//! and is controlled by `CATALOG_SEARCH_LOG` (e.g. `CATALOG_SEARCH_LOG=debug`).

use catalog_search::{
    CatalogError,
    cli::{Cli, Commands, ConfigCommands, split_setting},
    commands::{
        self, Context,
        search::{Pick, SearchArgs},
    },
    config::{self, CatalogConfig},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, CatalogError>;

/// Install the stderr log subscriber
fn init_tracing() {
    let filter = EnvFilter::try_from_env("CATALOG_SEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handle the config command - read, write and locate configuration
///
/// # Errors
///
/// Returns `CatalogError` if the setting is malformed, the key is unknown, or
/// the configuration cannot be saved.
fn handle_config_command(mut config: CatalogConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting).map_err(CatalogError::InvalidInput)?;
            config.set_value(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get_value(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(key)?);
        }
        ConfigCommands::Path => {
            println!("{}", CatalogConfig::config_path()?.display());
        }
        ConfigCommands::Init => {
            config::interactive_setup(config)?;
        }
    }
    Ok(())
}

/// Resolve the settings shared by every non-config command
///
/// # Errors
///
/// Returns `CatalogError` if a registry override names an unknown type or the
/// state file location cannot be determined.
fn context(config: &CatalogConfig, cli: &Cli, quiet: bool) -> Result<Context> {
    let ctx = Context {
        registry: config.registry()?,
        state_path: match &cli.state {
            Some(path) => path.clone(),
            None => config.state_path()?,
        },
        format: cli.format.unwrap_or(config.output_format),
        quiet,
    };
    tracing::debug!(state = %ctx.state_path.display(), "resolved session state path");
    Ok(ctx)
}

/// Main entry point for the catalog-search application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `CatalogError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<()> {
    init_tracing();

    let config = CatalogConfig::load()?;
    let cli = Cli::parse_args();
    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::Search {
            hits,
            query,
            input,
            no_filter,
            select,
            interactive,
        } => {
            let pick = match (select, interactive) {
                (Some(n), _) => Pick::Index(*n),
                (None, true) => Pick::Interactive,
                (None, false) => Pick::None,
            };
            let args = SearchArgs {
                hits,
                query,
                input: *input,
                apply_filters: !no_filter,
                pick,
            };
            commands::search(&context(&config, &cli, quiet)?, &args)
        }
        Commands::Tags { command } => commands::tags(&context(&config, &cli, quiet)?, command),
        Commands::Variants { command } => commands::variants(&context(&config, &cli, quiet)?, command),
        Commands::Types => commands::types(&context(&config, &cli, quiet)?),
        Commands::Config { command } => handle_config_command(config, command, quiet),
    }
}
