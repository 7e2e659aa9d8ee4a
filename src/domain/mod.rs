//! Domain layer: request and response types with Postmark's wire names (no I/O).

mod api_error;
mod domains;
mod email;
mod message_streams;
mod servers;
mod suppressions;
mod value;
mod webhooks;

pub use api_error::ApiError;
pub use domains::{CreateDomainRequest, Domain, DomainDetail, DomainList, EditDomainRequest};
pub use email::{Attachment, Email, EmailResponse, Header};
pub use message_streams::{
    ArchivedMessageStream, CreateMessageStreamRequest, EditMessageStreamRequest, MessageStream,
    MessageStreamType, MessageStreamTypeFilter, SubscriptionManagementConfiguration,
};
pub use servers::{DeliveryType, LinkTracking, Server, ServerList};
pub use suppressions::{
    Suppression, SuppressionEntry, SuppressionOrigin, SuppressionQuery, SuppressionReason,
    SuppressionResult, SuppressionStatus,
};
pub use value::{AccountToken, ServerToken, TokenClass};
pub use webhooks::{
    ContentTrigger, OpenTrigger, Trigger, Webhook, WebhookHttpAuth, WebhookTriggers,
};
