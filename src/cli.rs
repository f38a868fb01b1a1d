//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for catalog-search using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **search**: Render deduplicated results from a hits file, optionally
//!   selecting one
//! - **tags**: Toggle, list, undo and clear tag filters per resource type
//! - **variants**: Show active variants recorded by selections
//! - **types**: List the resource-type registry
//! - **config**: Read and write configuration values
//!
//! # Examples
//!
//! ```no_run
//! use catalog_search::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! if let Commands::Tags { .. } = cli.command {
//!     // ...
//! }
//! ```

use crate::config::OutputFormat;
use crate::resource::ResourceType;
use crate::search::HitFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalog search client
#[derive(Parser, Debug)]
#[command(name = "catalog-search")]
#[command(about = "Tag filters and deduplicated search results for a resource catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Output format (overrides config)
    #[arg(long = "format", value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Session state file (overrides config)
    #[arg(long = "state", value_name = "FILE", global = true)]
    pub state: Option<PathBuf>,
}

impl Cli {
    /// Parse process arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show deduplicated results from a file of raw search hits
    #[command(visible_alias = "s")]
    Search {
        /// File of raw hits (JSON array or CSV)
        #[arg(value_name = "HITS_FILE")]
        hits: PathBuf,

        /// Query the hits were returned for
        #[arg(short = 'Q', long = "query", default_value = "")]
        query: String,

        /// Input format (inferred from the file extension if omitted)
        #[arg(short = 'i', long = "input", value_enum)]
        input: Option<HitFormat>,

        /// Ignore active tag filters
        #[arg(long = "no-filter")]
        no_filter: bool,

        /// Select the N-th result (1-based) and print its navigation path
        #[arg(short = 's', long = "select", value_name = "N", conflicts_with = "interactive")]
        select: Option<usize>,

        /// Pick a result interactively
        #[arg(short = 'I', long = "interactive")]
        interactive: bool,
    },

    /// Manage tag filters
    #[command(visible_alias = "t")]
    Tags {
        #[command(subcommand)]
        command: TagsCommands,
    },

    /// Show active variants
    Variants {
        #[command(subcommand)]
        command: VariantsCommands,
    },

    /// List known resource types
    Types,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Tag filter subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum TagsCommands {
    /// Turn a tag filter on or off for a resource type
    Toggle {
        /// Resource type (e.g. feature, training-set)
        #[arg(value_parser = parse_resource_type)]
        resource_type: ResourceType,

        /// Tag to toggle
        tag: String,
    },

    /// List active tags
    #[command(visible_alias = "ls")]
    List {
        /// Only show this resource type
        #[arg(value_parser = parse_resource_type)]
        resource_type: Option<ResourceType>,
    },

    /// Revert the most recent toggle
    Undo,

    /// Turn off every tag filter
    Clear,
}

/// Variant subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum VariantsCommands {
    /// List all active variants
    #[command(visible_alias = "ls")]
    List,

    /// Show the active variant of one resource
    Get {
        #[arg(value_parser = parse_resource_type)]
        resource_type: ResourceType,

        /// Resource name
        name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., output_format)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file location
    Path,

    /// Interactively create or update the configuration
    Init,
}

fn parse_resource_type(value: &str) -> Result<ResourceType, String> {
    value.parse().map_err(|e: crate::resource::ResourceError| e.to_string())
}

/// Split a `key=value` setting
///
/// # Errors
///
/// Returns a message if `setting` has no `=`.
pub fn split_setting(setting: &str) -> Result<(&str, &str), String> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| "Invalid format. Use: catalog-search config set key=value".to_string())
}
