//! Tests for the catalog module

use super::*;
use serde_json::json;

// ============================================================================
// Decoding Tests
// ============================================================================

#[test]
fn test_decode_expanded_page() {
    let body = json!({
        "count": 12,
        "next": "http://localhost/api/v1/books/?expand=true&limit=10&offset=10",
        "previous": null,
        "results": [
            {
                "id": 1,
                "title": "Master and Margarita",
                "title_original": "Мастер и Маргарита",
                "year_published": 1967,
                "description": null,
                "author": {
                    "id": 3,
                    "name": "Mikhail",
                    "family_name": "Bulgakov",
                    "full_name": "Mikhail Bulgakov",
                    "about": null
                },
                "categories": [
                    {"id": 1, "name": "Novel", "description": null},
                    {"id": 2, "name": "Satire", "description": "Sharp"}
                ]
            }
        ]
    });

    let page: Page<Book> = serde_json::from_value(body).unwrap();

    assert_eq!(page.count, Some(12));
    assert!(page.has_next());
    assert!(!page.has_previous());
    assert_eq!(page.len(), 1);

    let book = &page.results[0];
    assert_eq!(book.id, Some(1));
    assert_eq!(book.year_published, Some(1967));
    assert!(book.author.is_expanded());
    assert_eq!(book.author_name(), "Mikhail Bulgakov");
    assert_eq!(book.categories_label(), "Novel, Satire");
}

#[test]
fn test_decode_minimal_book() {
    let body = json!({
        "title": "Dune",
        "author": {"full_name": "Frank Herbert"},
        "categories": [{"name": "SF"}]
    });

    let book: Book = serde_json::from_value(body).unwrap();

    assert_eq!(book.title, "Dune");
    assert_eq!(book.id, None);
    assert_eq!(book.author_name(), "Frank Herbert");
    assert_eq!(book.category_names(), vec!["SF".to_string()]);
}

#[test]
fn test_decode_unexpanded_book() {
    let body = json!({
        "id": 9,
        "title": "Solaris",
        "author": 4,
        "categories": [2, 5]
    });

    let book: Book = serde_json::from_value(body).unwrap();

    assert_eq!(book.author, Expandable::Id(4));
    assert!(book.author.as_object().is_none());
    assert_eq!(book.author_name(), "#4");
    assert_eq!(book.categories_label(), "#2, #5");
}

#[test]
fn test_decode_missing_title_fails() {
    let body = json!({
        "author": {"full_name": "Nobody"},
        "categories": []
    });

    assert!(serde_json::from_value::<Book>(body).is_err());
}

#[test]
fn test_decode_page_without_links() {
    let page: Page<Book> = serde_json::from_value(json!({"results": []})).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_next());
    assert!(!page.has_previous());
    assert!(page.count.is_none());
}

// ============================================================================
// Display Tests
// ============================================================================

#[test]
fn test_author_display_name_fallback() {
    let author = Author {
        name: "Stanislaw".into(),
        family_name: Some("Lem".into()),
        ..Default::default()
    };
    assert_eq!(author.display_name(), "Stanislaw Lem");

    let author = Author {
        name: "Homer".into(),
        family_name: None,
        ..Default::default()
    };
    assert_eq!(author.display_name(), "Homer");

    let author = Author::with_full_name("Ursula K. Le Guin");
    assert_eq!(author.display_name(), "Ursula K. Le Guin");
}

#[test]
fn test_book_without_categories() {
    let book = Book::new("Untitled", Author::with_full_name("Anon"), []);
    assert_eq!(book.categories_label(), "");
}

#[test]
fn test_empty_link_is_absent() {
    let mut page = Page::new(vec![Book::new(
        "A",
        Author::with_full_name("B"),
        [Category::named("C")],
    )]);
    page.next = Some(String::new());
    page.previous = Some("http://localhost/api/v1/books/?limit=10".into());

    assert!(!page.has_next());
    assert!(page.has_previous());
}
