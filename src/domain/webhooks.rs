use serde::{Deserialize, Serialize};

use crate::domain::email::Header;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// A webhook posting events for one message stream to `url`.
///
/// `id` is assigned by Postmark; leave it at 0 when creating.
pub struct Webhook {
    #[serde(rename = "ID", default, skip_serializing_if = "is_unassigned")]
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub message_stream: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_auth: Option<WebhookHttpAuth>,
    #[serde(default)]
    pub http_headers: Vec<Header>,
    #[serde(default)]
    pub triggers: WebhookTriggers,
}

fn is_unassigned(id: &i64) -> bool {
    *id == 0
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Basic auth credentials Postmark uses when calling the webhook.
pub struct WebhookHttpAuth {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WebhookTriggers {
    pub open: OpenTrigger,
    pub click: Trigger,
    pub delivery: Trigger,
    pub bounce: ContentTrigger,
    pub spam_complaint: ContentTrigger,
    pub subscription_change: Trigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Trigger {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OpenTrigger {
    pub enabled: bool,
    pub post_first_open_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// Trigger that can include the original message content in the payload.
pub struct ContentTrigger {
    pub enabled: bool,
    pub include_content: bool,
}
