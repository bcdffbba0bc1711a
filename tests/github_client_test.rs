//! Integration tests for the GitHub client's pagination behaviour.
//!
//! Uses a mockito HTTP server to verify:
//! - single-page collections issue exactly one request
//! - `Link: rel="next"` headers are followed and pages concatenated in order
//! - non-2xx responses fail with the exact request-failure message
//! - non-array bodies count as one-element pages
//! - the fixed header set is sent verbatim

use issuevault::{ArchiveError, GitHubClient};
use mockito::Server;
use serde_json::json;

fn client_for(server: &Server) -> GitHubClient {
    GitHubClient::with_base_url("test-token".to_string(), server.url())
}

#[tokio::test]
async fn single_page_issues_exactly_one_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/octo/widgets/issues")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"number": 1}, {"number": 2}]).to_string())
        .expect(1)
        .create_async()
        .await;

    let items = client_for(&server)
        .fetch_all_pages("/repos/octo/widgets/issues")
        .await
        .expect("fetch failed");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["number"], 1);
    assert_eq!(items[1]["number"], 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn next_link_is_followed_and_pages_concatenated_in_order() {
    let mut server = Server::new_async().await;
    let page_two_url = format!("{}/repos/octo/widgets/issues?page=2", server.url());

    let first = server
        .mock("GET", "/repos/octo/widgets/issues")
        .with_status(200)
        .with_header(
            "link",
            &format!("<{page_two_url}>; rel=\"next\", <{page_two_url}>; rel=\"last\""),
        )
        .with_body(json!([{"number": 1}]).to_string())
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/repos/octo/widgets/issues?page=2")
        .with_status(200)
        .with_body(json!([{"number": 2}, {"number": 3}]).to_string())
        .expect(1)
        .create_async()
        .await;

    let items = client_for(&server)
        .fetch_all_pages("/repos/octo/widgets/issues")
        .await
        .expect("fetch failed");

    let numbers: Vec<u64> = items.iter().map(|i| i["number"].as_u64().unwrap()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn non_next_relations_do_not_trigger_follow_up() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/octo/widgets/issues")
        .with_status(200)
        .with_header(
            "link",
            &format!("<{}/repos/octo/widgets/issues?page=5>; rel=\"last\"", server.url()),
        )
        .with_body(json!([{"number": 1}]).to_string())
        .expect(1)
        .create_async()
        .await;

    let items = client_for(&server)
        .fetch_all_pages("/repos/octo/widgets/issues")
        .await
        .expect("fetch failed");

    assert_eq!(items.len(), 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_fails_with_exact_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/octo/widgets/issues/99")
        .with_status(404)
        .with_body(json!({"message": "Not Found"}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch(reqwest::Method::GET, "/repos/octo/widgets/issues/99")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ArchiveError::RequestFailed { status: 404, .. }
    ));
    assert_eq!(
        err.to_string(),
        "HTTP request failed with status code 404: Not Found"
    );
}

#[tokio::test]
async fn server_errors_are_fatal_not_retried() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/octo/widgets/issues")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_all_pages("/repos/octo/widgets/issues")
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "HTTP request failed with status code 500: Internal Server Error"
    );
    // Exactly one request: no retry.
    mock.assert_async().await;
}

#[tokio::test]
async fn single_object_body_counts_as_one_element_page() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/octo/widgets/issues/5")
        .with_status(200)
        .with_body(json!({"number": 5, "title": "just one"}).to_string())
        .create_async()
        .await;

    let items = client_for(&server)
        .fetch_all_pages("/repos/octo/widgets/issues/5")
        .await
        .expect("fetch failed");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["number"], 5);
}

#[tokio::test]
async fn fixed_header_set_is_sent_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/octo/widgets/issues")
        .match_header("authorization", "token test-token")
        .match_header("user-agent", "issuevault")
        .match_header("accept", "application/vnd.github+json")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    client_for(&server)
        .fetch_all_pages("/repos/octo/widgets/issues")
        .await
        .expect("fetch failed");

    mock.assert_async().await;
}
