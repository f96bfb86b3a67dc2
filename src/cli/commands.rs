//! CLI commands and argument parsing

use crate::pagination::OffsetPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Browse a paginated books catalog
#[derive(Parser, Debug)]
#[command(name = "book-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pager configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Books per page
    #[arg(long, global = true)]
    pub limit: Option<u32>,

    /// Negative offset handling
    #[arg(long, global = true)]
    pub offset_policy: Option<OffsetPolicy>,

    /// Request bare author/category ids instead of embedded records
    #[arg(long, global = true)]
    pub no_expand: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and render a single page
    Show {
        /// Start index of the page
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i64,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Page through the catalog interactively
    Browse {
        /// Rewrite this HTML file after every page change
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Complete HTML document
    Html,
    /// Plain text table
    Text,
}
