use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::servers::LinkTracking;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// A name/value header, used for custom email headers and webhook request headers.
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Base64-encoded attachment.
pub struct Attachment {
    pub name: String,
    pub content: String,
    pub content_type: String,
    /// `cid:` reference for inline images.
    #[serde(rename = "ContentID", skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
/// A single outbound message.
///
/// `to`, `cc` and `bcc` take comma separated addresses. At least one of
/// `html_body` and `text_body` is required by Postmark.
pub struct Email {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    pub track_opens: bool,
    /// Falls back to the server's setting when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_links: Option<LinkTracking>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Defaults to the server's `outbound` stream when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_stream: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Postmark's answer for one submitted message.
///
/// Batch sends report per-message failures here (non-zero `error_code`) with a
/// successful HTTP status; `submitted_at` and `message_id` are absent then.
pub struct EmailResponse {
    #[serde(default)]
    pub to: String,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub submitted_at: Option<OffsetDateTime>,
    #[serde(rename = "MessageID", default)]
    pub message_id: Option<String>,
    pub error_code: i64,
    pub message: String,
}
