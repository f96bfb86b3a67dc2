//! Books API module
//!
//! The `PageSource` trait is the seam between the list controller and the
//! network: the controller asks for a window, a source returns a decoded
//! `Page<Book>` or a request failure. `BooksApi` is the HTTP source for the
//! catalog service.

mod source;

pub use source::{BooksApi, PageSource};
