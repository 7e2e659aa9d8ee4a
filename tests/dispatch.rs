mod common;

use std::time::Duration;

use httpmock::prelude::*;
use postmark::{PostmarkClient, PostmarkError, with_cancellation};
use tokio_util::sync::CancellationToken;

use common::{ACCOUNT_TOKEN, SERVER_TOKEN, client_for};

fn server_body(id: i64, name: &str) -> String {
    format!(r#"{{"ID": {id}, "Name": "{name}"}}"#)
}

#[tokio::test]
async fn concurrent_calls_get_their_own_results() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/servers/1");
            then.status(200)
                .delay(Duration::from_millis(50))
                .body(server_body(1, "First"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/servers/2");
            then.status(200).body(server_body(2, "Second"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/servers/3");
            then.status(404)
                .body(r#"{"ErrorCode": 600, "Message": "Server not found."}"#);
        })
        .await;

    let client = client_for(&server);
    let (first, second, third) = tokio::join!(
        client.get_server("1"),
        client.get_server("2"),
        client.get_server("3"),
    );

    assert_eq!(first.unwrap().name, "First");
    assert_eq!(second.unwrap().name, "Second");
    assert_eq!(third.unwrap_err().api_error().map(|api| api.error_code), Some(600));
}

#[tokio::test]
async fn non_json_error_body_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/server");
            then.status(503)
                .header("content-type", "text/html")
                .body("<html>Service Unavailable</html>");
        })
        .await;

    let client = client_for(&server);
    let err = client.get_current_server().await.unwrap_err();

    assert!(matches!(err, PostmarkError::Decode { status: 503, .. }));
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/server");
            then.status(200)
                .delay(Duration::from_millis(500))
                .body(server_body(1, "Slow"));
        })
        .await;

    let client = PostmarkClient::builder(SERVER_TOKEN, ACCOUNT_TOKEN)
        .base_url(server.base_url())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let err = client.get_current_server().await.unwrap_err();

    assert!(matches!(err, PostmarkError::Transport(_)));
}

#[tokio::test]
async fn cancelling_an_in_flight_call() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/server");
            then.status(200)
                .delay(Duration::from_secs(5))
                .body(server_body(1, "Slow"));
        })
        .await;

    let client = client_for(&server);
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    let err = with_cancellation(&token, client.get_current_server())
        .await
        .unwrap_err();

    assert!(matches!(err, PostmarkError::Cancelled));
}

#[tokio::test]
async fn cancelled_token_sends_nothing() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/server");
            then.status(200).body(server_body(1, "Unused"));
        })
        .await;

    let client = client_for(&server);
    let token = CancellationToken::new();
    token.cancel();

    let err = with_cancellation(&token, client.get_current_server())
        .await
        .unwrap_err();

    assert!(matches!(err, PostmarkError::Cancelled));
    assert_eq!(mock.hits_async().await, 0);
}
