//! Typed async Rust client for the Postmark transactional email API.
//!
//! The crate has three layers: a domain layer of request/response types that
//! carry Postmark's exact wire names, a transport layer for the few wire-format
//! rules serde derives cannot express, and a client layer whose single
//! dispatcher authenticates, sends and decodes every call.
//!
//! ```rust,no_run
//! use postmark::{Email, PostmarkClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark::PostmarkError> {
//!     let client = PostmarkClient::new("server-token", "account-token");
//!     let email = Email {
//!         from: "no-reply@example.com".to_owned(),
//!         to: "tito@example.com".to_owned(),
//!         subject: "Reset your password".to_owned(),
//!         text_body: Some("...".to_owned()),
//!         ..Default::default()
//!     };
//!     let sent = client.send_email(&email).await?;
//!     println!("{:?}", sent.message_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiRequest, BoxError, BoxFuture, DEFAULT_BASE_URL, HttpRequest, HttpResponse, HttpTransport,
    PostmarkClient, PostmarkClientBuilder, PostmarkError, with_cancellation,
};
pub use domain::{
    AccountToken, ApiError, ArchivedMessageStream, Attachment, ContentTrigger,
    CreateDomainRequest, CreateMessageStreamRequest, DeliveryType, Domain, DomainDetail,
    DomainList, EditDomainRequest, EditMessageStreamRequest, Email, EmailResponse, Header,
    LinkTracking, MessageStream, MessageStreamType, MessageStreamTypeFilter, OpenTrigger, Server,
    ServerList, ServerToken, SubscriptionManagementConfiguration, Suppression, SuppressionEntry,
    SuppressionOrigin, SuppressionQuery, SuppressionReason, SuppressionResult, SuppressionStatus,
    TokenClass, Trigger, Webhook, WebhookHttpAuth, WebhookTriggers,
};
pub use reqwest::Method;
