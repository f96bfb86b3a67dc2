//! View types and the `BookView` trait

use crate::catalog::Book;

/// One rendered table row: `[title, author, categories]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub categories: String,
}

impl BookRow {
    /// Cell values in column order
    pub fn cells(&self) -> [&str; 3] {
        [&self.title, &self.author, &self.categories]
    }
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author_name(),
            categories: book.categories_label(),
        }
    }
}

/// Which navigation link set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    Next,
    Previous,
}

/// A single link within a set, addressed by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId {
    pub kind: LinkKind,
    pub index: usize,
}

impl LinkId {
    /// The `index`-th next link
    pub fn next(index: usize) -> Self {
        Self {
            kind: LinkKind::Next,
            index,
        }
    }

    /// The `index`-th previous link
    pub fn previous(index: usize) -> Self {
        Self {
            kind: LinkKind::Previous,
            index,
        }
    }
}

/// Display state of one link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkState {
    pub visible: bool,
    pub disabled: bool,
}

impl Default for LinkState {
    fn default() -> Self {
        Self {
            visible: true,
            disabled: false,
        }
    }
}

/// Display surface driven by the list controller
pub trait BookView: Send {
    /// Replace every table row
    fn replace_rows(&mut self, rows: Vec<BookRow>);

    /// Show or hide every link of a set
    fn set_links_visible(&mut self, kind: LinkKind, visible: bool);

    /// Mark a single link disabled or enabled
    fn set_link_disabled(&mut self, link: LinkId, disabled: bool);
}
