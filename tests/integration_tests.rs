//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: catalog API → list controller → HTML

use book_pager::{
    BooksApi, DisplayOptions, DisplayOutcome, HtmlView, LinkId, LinkKind, OffsetPolicy,
    PagerConfig, PaginatedBookList,
};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOOKS_PATH: &str = "/api/v1/books/";

fn books_page(titles: &[&str], next: Option<&str>, previous: Option<&str>) -> Value {
    let results: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "id": i + 1,
                "title": title,
                "title_original": title,
                "year_published": 1970,
                "description": null,
                "author": {
                    "id": 1,
                    "name": "Ivan",
                    "family_name": "Yefremov",
                    "full_name": "Ivan Yefremov",
                    "about": null
                },
                "categories": [
                    {"id": 1, "name": "SF", "description": null},
                    {"id": 2, "name": "Utopia", "description": null}
                ]
            })
        })
        .collect();

    json!({
        "count": 25,
        "next": next,
        "previous": previous,
        "results": results
    })
}

async fn mount_page(server: &MockServer, offset: &str, body: Value, delay: Option<Duration>) {
    let mut response = ResponseTemplate::new(200).set_body_json(body);
    if let Some(delay) = delay {
        response = response.set_delay(delay);
    }
    Mock::given(method("GET"))
        .and(path(BOOKS_PATH))
        .and(query_param("offset", offset))
        .and(query_param("limit", "10"))
        .and(query_param("expand", "true"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn list_for(server: &MockServer, view: HtmlView) -> PaginatedBookList<BooksApi, HtmlView> {
    let config = PagerConfig::new(server.uri());
    let api = BooksApi::from_config(&config).unwrap();
    PaginatedBookList::from_config(api, view, &config)
}

// ============================================================================
// Initial Load
// ============================================================================

#[tokio::test]
async fn test_first_page_end_to_end() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "0",
        books_page(
            &["The Andromeda Nebula", "The Bull's Hour"],
            Some("http://testserver/api/v1/books/?expand=true&limit=10&offset=10"),
            None,
        ),
        None,
    )
    .await;

    let list = list_for(&server, HtmlView::default());
    let outcome = list.init().await;

    assert_eq!(outcome, DisplayOutcome::Rendered { offset: 0, rows: 2 });
    list.with_view(|view| {
        assert_eq!(view.rows().len(), 2);
        assert_eq!(
            view.rows()[0].cells(),
            ["The Andromeda Nebula", "Ivan Yefremov", "SF, Utopia"]
        );
        assert!(!view.links_visible(LinkKind::Previous));
        assert!(view.links_visible(LinkKind::Next));
    });

    let html = list.with_view(|view| view.render("Books").into_string());
    assert!(html.contains("<td>The Bull's Hour</td>"));
    assert!(html.contains(r##"class="js-prev-page-link" href="#" hidden"##));
}

#[tokio::test]
async fn test_server_error_leaves_previous_page() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "0",
        books_page(&["Only Book"], Some("http://testserver/next"), None),
        None,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(BOOKS_PATH))
        .and(query_param("offset", "10"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server Error"))
        .expect(1)
        .mount(&server)
        .await;

    let list = list_for(&server, HtmlView::default());
    list.init().await;
    let before = list.with_view(|view| view.render_rows().into_string());

    let outcome = list.next(0).await;

    assert_eq!(outcome, DisplayOutcome::Failed);
    assert_eq!(list.with_view(|view| view.render_rows().into_string()), before);
    assert_eq!(list.current_offset(), 0);
    assert_eq!(list.state().failed_requests, 1);
    assert!(!list.with_view(|view| view.link(LinkId::next(0)).unwrap().disabled));
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_walk_forward_and_back() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "0",
        books_page(&["A"], Some("http://testserver/?offset=10"), None),
        None,
    )
    .await;
    mount_page(
        &server,
        "10",
        books_page(
            &["B"],
            Some("http://testserver/?offset=20"),
            Some("http://testserver/"),
        ),
        None,
    )
    .await;
    mount_page(
        &server,
        "20",
        books_page(&["C"], None, Some("http://testserver/?offset=10")),
        None,
    )
    .await;

    let list = list_for(&server, HtmlView::new(2, 2));
    list.init().await;

    list.next(0).await;
    list.next(1).await;
    assert_eq!(list.current_offset(), 20);
    list.with_view(|view| {
        assert_eq!(view.rows()[0].title, "C");
        assert!(!view.links_visible(LinkKind::Next));
        assert!(view.links_visible(LinkKind::Previous));
    });

    list.previous(0).await;
    assert_eq!(list.current_offset(), 10);
    list.with_view(|view| {
        assert_eq!(view.rows()[0].title, "B");
        assert!(view.links_visible(LinkKind::Next));
        assert!(view.links_visible(LinkKind::Previous));
    });

    let state = list.state();
    assert_eq!(state.pages_loaded, 4);
    assert_eq!(state.total, Some(25));
}

#[tokio::test]
async fn test_negative_offset_passed_to_server() {
    let server = MockServer::start().await;
    mount_page(&server, "0", books_page(&["A"], None, None), None).await;
    Mock::given(method("GET"))
        .and(path(BOOKS_PATH))
        .and(query_param("offset", "-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(books_page(&["A"], None, None)))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = PagerConfig::new(server.uri());
    config.offset_policy = OffsetPolicy::PassThrough;
    let api = BooksApi::from_config(&config).unwrap();
    let list = PaginatedBookList::from_config(api, HtmlView::default(), &config);
    list.init().await;

    let outcome = list.previous(0).await;

    assert_eq!(outcome, DisplayOutcome::Rendered { offset: -10, rows: 1 });
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_overlapping_clicks_render_latest() {
    let server = MockServer::start().await;
    mount_page(&server, "0", books_page(&["A"], Some("n"), None), None).await;
    mount_page(
        &server,
        "10",
        books_page(&["Slow"], Some("n"), Some("p")),
        Some(Duration::from_millis(300)),
    )
    .await;
    mount_page(&server, "20", books_page(&["Fast"], None, Some("p")), None).await;

    let list = Arc::new(list_for(&server, HtmlView::default()));
    list.init().await;

    let slow = {
        let list = list.clone();
        tokio::spawn(async move {
            list.display_books(DisplayOptions::new().offset(10)).await
        })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fast = list
        .display_books(DisplayOptions::new().offset(20))
        .await;

    assert!(fast.is_rendered());
    assert_eq!(slow.await.unwrap(), DisplayOutcome::Stale);
    assert_eq!(list.current_offset(), 20);
    list.with_view(|view| assert_eq!(view.rows()[0].title, "Fast"));
}

#[tokio::test]
async fn test_clicked_link_disabled_until_response() {
    let server = MockServer::start().await;
    mount_page(&server, "0", books_page(&["A"], Some("n"), None), None).await;
    mount_page(
        &server,
        "10",
        books_page(&["B"], None, Some("p")),
        Some(Duration::from_millis(300)),
    )
    .await;

    let list = Arc::new(list_for(&server, HtmlView::default()));
    list.init().await;

    let click = {
        let list = list.clone();
        tokio::spawn(async move { list.next(0).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let html = list.with_view(|view| view.render("Books").into_string());
    assert!(html.contains("js-next-page-link disabled"));

    assert!(click.await.unwrap().is_rendered());
    let html = list.with_view(|view| view.render("Books").into_string());
    assert!(!html.contains("js-next-page-link disabled"));
}
