//! Pagination module
//!
//! Offset/limit windowing for the books collection.
//!
//! # Overview
//!
//! A page is identified by its start index (`offset`) and size (`limit`).
//! `PaginationState` is the single source of truth for the window that is
//! currently displayed; navigation computes the next target from it at the
//! moment the user asks, and only a successfully rendered page moves it.

mod types;

pub use types::{Direction, OffsetPolicy, PageRequest, PaginationState, DEFAULT_LIMIT};
