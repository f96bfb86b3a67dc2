//! Tests for the view module

use super::*;
use crate::catalog::{Author, Book, Category};

fn sample_rows() -> Vec<BookRow> {
    vec![
        BookRow::from(&Book::new(
            "Roadside Picnic",
            Author::with_full_name("Arkady Strugatsky"),
            [Category::named("SF"), Category::named("Novella")],
        )),
        BookRow::from(&Book::new(
            "Dune",
            Author::with_full_name("Frank Herbert"),
            [],
        )),
    ]
}

#[test]
fn test_book_row_from_book() {
    let rows = sample_rows();
    assert_eq!(
        rows[0].cells(),
        ["Roadside Picnic", "Arkady Strugatsky", "SF, Novella"]
    );
    assert_eq!(rows[1].cells(), ["Dune", "Frank Herbert", ""]);
}

#[test]
fn test_new_view_links_enabled_and_shown() {
    let view = HtmlView::new(2, 2);
    assert!(view.rows().is_empty());
    assert_eq!(view.links(LinkKind::Next).len(), 2);
    assert!(view.links_visible(LinkKind::Next));
    assert!(view.links_visible(LinkKind::Previous));
    assert_eq!(view.link(LinkId::next(1)), Some(LinkState::default()));
    assert_eq!(view.link(LinkId::next(2)), None);
}

#[test]
fn test_replace_rows() {
    let mut view = HtmlView::default();
    view.replace_rows(sample_rows());
    assert_eq!(view.rows().len(), 2);

    view.replace_rows(Vec::new());
    assert!(view.rows().is_empty());
}

#[test]
fn test_set_links_visible_affects_whole_set() {
    let mut view = HtmlView::new(2, 2);
    view.set_links_visible(LinkKind::Previous, false);

    assert!(!view.links_visible(LinkKind::Previous));
    assert!(view
        .links(LinkKind::Previous)
        .iter()
        .all(|link| !link.visible));
    assert!(view.links_visible(LinkKind::Next));
}

#[test]
fn test_set_link_disabled_single_link() {
    let mut view = HtmlView::new(2, 1);
    view.set_link_disabled(LinkId::next(1), true);

    assert!(view.link(LinkId::next(1)).unwrap().disabled);
    assert!(!view.link(LinkId::next(0)).unwrap().disabled);

    // Out of range is ignored
    view.set_link_disabled(LinkId::previous(5), true);
    assert!(!view.link(LinkId::previous(0)).unwrap().disabled);
}

#[test]
fn test_render_table_rows() {
    let mut view = HtmlView::default();
    view.replace_rows(sample_rows());

    let html = view.render_table().into_string();

    assert!(html.contains(r#"<tbody class="js-book-list">"#));
    assert_eq!(html.matches("<tr>").count(), 3); // header + 2 rows
    assert!(html.contains("<td>Roadside Picnic</td><td>Arkady Strugatsky</td><td>SF, Novella</td>"));
}

#[test]
fn test_render_links_state() {
    let mut view = HtmlView::default();
    view.set_links_visible(LinkKind::Previous, false);
    view.set_link_disabled(LinkId::next(0), true);

    let html = view.render_navigation(0).into_string();

    assert!(html.contains(r##"class="js-prev-page-link" href="#" hidden"##));
    assert!(html.contains(r##"class="js-next-page-link disabled" href="#">"##));
}

#[test]
fn test_render_document_bars() {
    let view = HtmlView::new(2, 2);
    let html = view.render("Books").into_string();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Books</title>"));
    assert_eq!(html.matches(NEXT_LINK_CLASS).count(), 2);
    assert_eq!(html.matches(PREV_LINK_CLASS).count(), 2);
    assert_eq!(html.matches(BOOK_LIST_CLASS).count(), 1);
}

#[test]
fn test_render_escapes_book_text() {
    let mut view = HtmlView::default();
    view.replace_rows(vec![BookRow {
        title: "<script>alert('xss')</script>".into(),
        author: "A & B".into(),
        categories: String::new(),
    }]);

    let html = view.render_rows().into_string();

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("A &amp; B"));
}
