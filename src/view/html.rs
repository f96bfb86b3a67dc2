//! In-memory HTML view
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! all book text is escaped on output.

use super::types::{BookRow, BookView, LinkId, LinkKind, LinkState};
use maud::{html, Markup, DOCTYPE};

/// Class of the table body holding book rows
pub const BOOK_LIST_CLASS: &str = "js-book-list";

/// Class of every "next page" link
pub const NEXT_LINK_CLASS: &str = "js-next-page-link";

/// Class of every "previous page" link
pub const PREV_LINK_CLASS: &str = "js-prev-page-link";

const CSS: &str = "\
table{border-collapse:collapse;width:100%}\
th,td{border:1px solid #ccc;padding:.4em .6em;text-align:left}\
nav.pager{display:flex;justify-content:space-between;margin:.6em 0}\
a.disabled{pointer-events:none;opacity:.5}";

/// Book table and navigation links kept in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlView {
    rows: Vec<BookRow>,
    next_links: Vec<LinkState>,
    prev_links: Vec<LinkState>,
}

impl Default for HtmlView {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl HtmlView {
    /// Create a view with the given number of next and previous links
    pub fn new(next_links: usize, prev_links: usize) -> Self {
        Self {
            rows: Vec::new(),
            next_links: vec![LinkState::default(); next_links],
            prev_links: vec![LinkState::default(); prev_links],
        }
    }

    /// Rows currently in the table body
    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    /// All links of a set
    pub fn links(&self, kind: LinkKind) -> &[LinkState] {
        match kind {
            LinkKind::Next => &self.next_links,
            LinkKind::Previous => &self.prev_links,
        }
    }

    /// State of a single link
    pub fn link(&self, link: LinkId) -> Option<LinkState> {
        self.links(link.kind).get(link.index).copied()
    }

    /// Whether every link of a set is shown (false for an empty set)
    pub fn links_visible(&self, kind: LinkKind) -> bool {
        let links = self.links(kind);
        !links.is_empty() && links.iter().all(|link| link.visible)
    }

    fn links_mut(&mut self, kind: LinkKind) -> &mut Vec<LinkState> {
        match kind {
            LinkKind::Next => &mut self.next_links,
            LinkKind::Previous => &mut self.prev_links,
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Table body rows
    pub fn render_rows(&self) -> Markup {
        html! {
            @for row in &self.rows {
                tr {
                    td { (row.title) }
                    td { (row.author) }
                    td { (row.categories) }
                }
            }
        }
    }

    /// Book table with the `.js-book-list` body
    pub fn render_table(&self) -> Markup {
        html! {
            table.books {
                thead {
                    tr {
                        th { "Title" }
                        th { "Author" }
                        th { "Categories" }
                    }
                }
                tbody class=(BOOK_LIST_CLASS) {
                    (self.render_rows())
                }
            }
        }
    }

    /// The `bar`-th navigation bar: previous and next link at that position
    pub fn render_navigation(&self, bar: usize) -> Markup {
        html! {
            nav.pager {
                @if let Some(link) = self.prev_links.get(bar) {
                    (render_link(PREV_LINK_CLASS, "← Previous", *link))
                }
                @if let Some(link) = self.next_links.get(bar) {
                    (render_link(NEXT_LINK_CLASS, "Next →", *link))
                }
            }
        }
    }

    /// Complete HTML document; the first navigation bar sits above the
    /// table, the rest below it
    pub fn render(&self, title: &str) -> Markup {
        let bars = self.next_links.len().max(self.prev_links.len());
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (title) }
                    style { (CSS) }
                }
                body {
                    h1 { (title) }
                    @if bars > 0 {
                        (self.render_navigation(0))
                    }
                    (self.render_table())
                    @for bar in 1..bars {
                        (self.render_navigation(bar))
                    }
                }
            }
        }
    }
}

fn render_link(class: &str, label: &str, state: LinkState) -> Markup {
    let classes = if state.disabled {
        format!("{class} disabled")
    } else {
        class.to_string()
    };
    html! {
        a class=(classes) href="#" hidden[!state.visible] { (label) }
    }
}

impl BookView for HtmlView {
    fn replace_rows(&mut self, rows: Vec<BookRow>) {
        self.rows = rows;
    }

    fn set_links_visible(&mut self, kind: LinkKind, visible: bool) {
        for link in self.links_mut(kind) {
            link.visible = visible;
        }
    }

    fn set_link_disabled(&mut self, link: LinkId, disabled: bool) {
        if let Some(state) = self.links_mut(link.kind).get_mut(link.index) {
            state.disabled = disabled;
        }
    }
}
