//! View module
//!
//! The `BookView` trait is everything the list controller needs from a
//! display surface: replace the table rows, show or hide a link set, and
//! mark a single link disabled. `HtmlView` keeps that state in memory and
//! renders it to HTML with maud.
//!
//! Rendered markup uses the class hooks the page script binds to:
//! `.js-book-list` (table body), `.js-next-page-link` and
//! `.js-prev-page-link` (navigation links).

mod html;
mod types;

pub use html::{HtmlView, BOOK_LIST_CLASS, NEXT_LINK_CLASS, PREV_LINK_CLASS};
pub use types::{BookRow, BookView, LinkId, LinkKind, LinkState};

#[cfg(test)]
mod tests;
