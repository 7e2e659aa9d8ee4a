mod common;

use httpmock::prelude::*;
use postmark::{OpenTrigger, PostmarkError, Trigger, Webhook, WebhookTriggers};

use common::{SERVER_HEADER, SERVER_TOKEN, client_for};

const WEBHOOK: &str = r#"{
  "ID": 1234567,
  "Url": "http://www.example.com/webhook-test-tracking",
  "MessageStream": "outbound",
  "HttpAuth": {"Username": "user", "Password": "pass"},
  "HttpHeaders": [{"Name": "name", "Value": "value"}],
  "Triggers": {
    "Open": {"Enabled": true, "PostFirstOpenOnly": false},
    "Click": {"Enabled": true},
    "Delivery": {"Enabled": true},
    "Bounce": {"Enabled": false, "IncludeContent": false},
    "SpamComplaint": {"Enabled": false, "IncludeContent": false},
    "SubscriptionChange": {"Enabled": false}
  }
}"#;

#[tokio::test]
async fn list_webhooks_without_stream_has_no_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/webhooks")
                .header(SERVER_HEADER, SERVER_TOKEN);
            then.status(200)
                .body(format!(r#"{{"Webhooks": [{WEBHOOK}]}}"#));
        })
        .await;

    let client = client_for(&server);
    let webhooks = client.list_webhooks(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(webhooks.len(), 1);
    assert_eq!(webhooks[0].id, 1234567);
    assert!(webhooks[0].triggers.delivery.enabled);
}

#[tokio::test]
async fn list_webhooks_filters_by_stream() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/webhooks")
                .query_param("MessageStream", "outbound");
            then.status(200).body(r#"{"Webhooks": []}"#);
        })
        .await;

    let client = client_for(&server);
    let webhooks = client.list_webhooks(Some("outbound")).await.unwrap();

    mock.assert_async().await;
    assert!(webhooks.is_empty());
}

#[tokio::test]
async fn get_webhook_decodes_auth_and_headers() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/webhooks/1234567");
            then.status(200).body(WEBHOOK);
        })
        .await;

    let client = client_for(&server);
    let webhook = client.get_webhook(1234567).await.unwrap();

    let auth = webhook.http_auth.unwrap();
    assert_eq!(auth.username, "user");
    assert_eq!(webhook.http_headers[0].name, "name");
    assert!(webhook.triggers.open.enabled);
}

#[tokio::test]
async fn create_and_edit_webhook() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/webhooks").json_body_partial(
                r#"{"Url": "http://www.example.com/webhook-test-tracking",
                    "MessageStream": "outbound",
                    "Triggers": {"Open": {"Enabled": true, "PostFirstOpenOnly": false}}}"#,
            );
            then.status(200).body(WEBHOOK);
        })
        .await;
    let edit = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/webhooks/1234567")
                .json_body_partial(r#"{"ID": 1234567, "Triggers": {"Click": {"Enabled": true}}}"#);
            then.status(200).body(WEBHOOK);
        })
        .await;

    let client = client_for(&server);
    let new_webhook = Webhook {
        url: "http://www.example.com/webhook-test-tracking".to_owned(),
        message_stream: "outbound".to_owned(),
        triggers: WebhookTriggers {
            open: OpenTrigger {
                enabled: true,
                post_first_open_only: false,
            },
            ..Default::default()
        },
        ..Default::default()
    };
    let mut created = client.create_webhook(&new_webhook).await.unwrap();
    created.triggers.click = Trigger { enabled: true };
    let edited = client.edit_webhook(created.id, &created).await.unwrap();

    create.assert_async().await;
    edit.assert_async().await;
    assert_eq!(edited.id, 1234567);
}

#[tokio::test]
async fn delete_webhook_succeeds_on_ok_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/webhooks/1234");
            then.status(200)
                .body(r#"{"ErrorCode": 0, "Message": "Webhook 1234 removed."}"#);
        })
        .await;

    let client = client_for(&server);
    client.delete_webhook(1234).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_webhook_fails_on_error_envelope() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/webhooks/1234");
            then.status(200)
                .body(r#"{"ErrorCode": 402, "Message": "Invalid JSON"}"#);
        })
        .await;

    let client = client_for(&server);
    let err = client.delete_webhook(1234).await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid JSON");
    assert_eq!(err.api_error().map(|api| api.error_code), Some(402));
    assert!(matches!(err, PostmarkError::Api(_)));
}
