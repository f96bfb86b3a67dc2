//! CLI module
//!
//! Command-line interface for the book pager.
//!
//! # Commands
//!
//! - `show` - Fetch one page and print it as text or HTML
//! - `browse` - Page through the catalog from stdin
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{format_status, format_text_table, BrowseCommand, Runner};
