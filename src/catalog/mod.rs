//! Catalog module
//!
//! Data model for the books collection served by the catalog API.
//!
//! # Overview
//!
//! - `Book`, `Author`, `Category` - records as the API serializes them
//! - `Expandable` - a related record that is either embedded or a bare id
//! - `Page` - one offset/limit window of results plus navigation links

mod types;

pub use types::{Author, Book, Category, Expandable, Page};

#[cfg(test)]
mod tests;
