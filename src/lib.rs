//! # book-pager
//!
//! Offset/limit pager for a REST books catalog: fetches one window of
//! books, renders it into an HTML table and moves between windows when a
//! "next" or "previous" link is activated.
//!
//! ## Features
//!
//! - **Typed catalog model**: books with embedded or id-only authors and categories
//! - **Single source of truth for position**: the cursor moves only when a page renders
//! - **Latest request wins**: responses to superseded requests are discarded
//! - **Links always recover**: an activated link is re-enabled on success and failure
//! - **Escaped HTML output**: maud templates for the table and navigation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use book_pager::{BooksApi, HtmlView, PagerConfig, PaginatedBookList, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = PagerConfig::new("http://localhost:8000");
//!     let list = PaginatedBookList::from_config(
//!         BooksApi::from_config(&config)?,
//!         HtmlView::default(),
//!         &config,
//!     );
//!
//!     list.init().await;
//!     list.next(0).await;
//!
//!     let html = list.with_view(|view| view.render("Books").into_string());
//!     println!("{html}");
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    PaginatedBookList                      │
//! │  init()  display_books(opts)  handle_link_click(link, n)  │
//! └───────────────────────────────────────────────────────────┘
//!               │                              │
//! ┌─────────────┴──────────────┐  ┌────────────┴─────────────┐
//! │  PageSource (BooksApi)     │  │  BookView (HtmlView)     │
//! │  HttpClient → Page<Book>   │  │  rows, link visibility,  │
//! │                            │  │  disabled links → maud   │
//! └────────────────────────────┘  └──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_possible_truncation)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Catalog records and pages
pub mod catalog;

/// HTTP transport
pub mod http;

/// Offset/limit pagination
pub mod pagination;

/// Page sources
pub mod api;

/// Table and navigation views
pub mod view;

/// Paginated list controller
pub mod controller;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::{BooksApi, PageSource};
pub use catalog::{Author, Book, Category, Expandable, Page};
pub use config::PagerConfig;
pub use controller::{DisplayOptions, DisplayOutcome, PaginatedBookList};
pub use error::{Error, Result};
pub use pagination::{OffsetPolicy, PageRequest, PaginationState};
pub use view::{BookRow, BookView, HtmlView, LinkId, LinkKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
