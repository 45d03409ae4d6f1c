//! End-to-end tests of the HTTP fetcher and pagination client against a
//! mock page fetch service.

use readmore_core::{PageCursor, Settings};
use readmore_client::{HttpPageFetcher, LoadOutcome, NoticeKind, PaginationClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, max_page: usize) -> PaginationClient<HttpPageFetcher> {
    let fetcher = HttpPageFetcher::new(format!("{}/load-more", server.uri()))
        .expect("fetcher construction");
    PaginationClient::new(fetcher, PageCursor::new(1, max_page), &Settings::default(), "tok")
}

#[tokio::test]
async fn walks_pages_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/load-more"))
        .and(body_partial_json(json!({"page": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "fragments": ["<article>two</article>"],
            "maxPage": 3,
            "currentPage": 2,
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/load-more"))
        .and(body_partial_json(json!({"page": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "fragments": ["<article>three</article>"],
            "maxPage": 3,
            "currentPage": 3,
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server, 3);

    match client.load_next().await {
        LoadOutcome::Appended { exhausted, .. } => assert!(!exhausted),
        other => panic!("unexpected outcome: {other:?}"),
    }
    match client.load_next().await {
        LoadOutcome::Appended { exhausted, .. } => assert!(exhausted),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        client.loaded(),
        ["<article>two</article>", "<article>three</article>"]
    );
}

#[tokio::test]
async fn request_body_matches_contract() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/load-more"))
        .and(body_partial_json(json!({
            "page": 2,
            "pageSize": 10,
            "csrfToken": "tok",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "fragments": ["<article/>"],
            "maxPage": 2,
            "currentPage": 2,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server, 2);
    assert!(matches!(
        client.load_next().await,
        LoadOutcome::Appended { .. }
    ));
}

#[tokio::test]
async fn server_error_rolls_back_and_retry_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/load-more"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/load-more"))
        .and(body_partial_json(json!({"page": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "fragments": ["<article>two</article>"],
            "maxPage": 2,
            "currentPage": 2,
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server, 2);

    match client.load_next().await {
        LoadOutcome::Failed(notice) => assert_eq!(notice.kind, NoticeKind::Error),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(client.cursor().current_page(), 1);

    // User-initiated retry re-requests page 2 and succeeds
    match client.load_next().await {
        LoadOutcome::Appended { fragments, .. } => {
            assert_eq!(fragments, vec!["<article>two</article>"]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn failure_envelope_terminates_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/load-more"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": false,
            "message": "No more posts found",
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server, 4);

    match client.load_next().await {
        LoadOutcome::NoMorePages(notice) => {
            assert_eq!(notice.kind, NoticeKind::Info);
            assert_eq!(notice.message, "No more posts found");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(client.cursor().is_exhausted());
    assert!(client.trigger_view().is_none());
}
