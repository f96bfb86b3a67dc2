//! List controller module
//!
//! `PaginatedBookList` ties a `PageSource` to a `BookView`:
//!
//! - `display_books` fetches one window and renders it
//! - `handle_link_click` disables the activated link for the duration of
//!   the request and re-enables it afterwards, whatever the outcome
//! - `next` / `previous` compute their target from the displayed offset at
//!   the moment they are called
//!
//! Requests are numbered as they are issued. Only the response to the most
//! recently issued request may touch the view or move the cursor; older
//! responses are dropped as stale.

mod list;

pub use list::{DisplayOptions, DisplayOutcome, PaginatedBookList};
