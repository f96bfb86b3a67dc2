//! Catalog record types
//!
//! Mirrors the JSON produced by the books endpoint. With `expand=true`
//! the author and categories are embedded objects, otherwise they are
//! plain numeric ids.

use serde::{Deserialize, Serialize};

// ============================================================================
// Related Records
// ============================================================================

/// A related record that the server either embeds or references by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expandable<T> {
    /// Bare primary key (request was made without `expand`)
    Id(u64),
    /// Embedded record
    Object(T),
}

impl<T> Expandable<T> {
    /// Get the embedded record, if any
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Object(value) => Some(value),
            Self::Id(_) => None,
        }
    }

    /// Check if the record was embedded
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

/// Book author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub family_name: Option<String>,

    /// Display name computed by the server
    #[serde(default)]
    pub full_name: String,

    #[serde(default)]
    pub about: Option<String>,
}

impl Author {
    /// Create an author with only a display name
    pub fn with_full_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Name shown in the book table.
    ///
    /// Falls back to `"<name> <family_name>"` when the server did not
    /// send `full_name`.
    pub fn display_name(&self) -> String {
        if !self.full_name.is_empty() {
            return self.full_name.clone();
        }
        match self.family_name.as_deref() {
            Some(family) if !family.is_empty() => format!("{} {family}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// Book category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<u64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

impl Category {
    /// Create a category with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Book
// ============================================================================

/// A single book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub id: Option<u64>,

    pub title: String,

    #[serde(default)]
    pub title_original: Option<String>,

    #[serde(default)]
    pub year_published: Option<u16>,

    #[serde(default)]
    pub description: Option<String>,

    pub author: Expandable<Author>,

    #[serde(default)]
    pub categories: Vec<Expandable<Category>>,
}

impl Book {
    /// Create a book with an embedded author and categories
    pub fn new(
        title: impl Into<String>,
        author: Author,
        categories: impl IntoIterator<Item = Category>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            title_original: None,
            year_published: None,
            description: None,
            author: Expandable::Object(author),
            categories: categories.into_iter().map(Expandable::Object).collect(),
        }
    }

    /// Author cell text; a non-expanded author renders as `#<id>`
    pub fn author_name(&self) -> String {
        match &self.author {
            Expandable::Object(author) => author.display_name(),
            Expandable::Id(id) => format!("#{id}"),
        }
    }

    /// Category names in server order
    pub fn category_names(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| match category {
                Expandable::Object(category) => category.name.clone(),
                Expandable::Id(id) => format!("#{id}"),
            })
            .collect()
    }

    /// Categories cell text
    pub fn categories_label(&self) -> String {
        self.category_names().join(", ")
    }
}

// ============================================================================
// Page
// ============================================================================

/// One window of an offset/limit paginated collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records, when the server reports it
    #[serde(default)]
    pub count: Option<u64>,

    /// Records in this window
    pub results: Vec<T>,

    /// URL of the following window
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the preceding window
    #[serde(default)]
    pub previous: Option<String>,
}

impl<T> Page<T> {
    /// Create a page without navigation links
    pub fn new(results: Vec<T>) -> Self {
        Self {
            count: None,
            results,
            next: None,
            previous: None,
        }
    }

    /// Whether a following window exists (an empty link counts as absent)
    pub fn has_next(&self) -> bool {
        is_present(self.next.as_deref())
    }

    /// Whether a preceding window exists (an empty link counts as absent)
    pub fn has_previous(&self) -> bool {
        is_present(self.previous.as_deref())
    }

    /// Number of records in this window
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

fn is_present(link: Option<&str>) -> bool {
    link.is_some_and(|s| !s.is_empty())
}
