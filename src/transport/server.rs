use serde::Serialize;

use crate::domain::{DeliveryType, LinkTracking, Server};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Outbound shape of a [`Server`].
///
/// Postmark rejects an empty `TrackLinks` or `DeliveryType`, so unset modes are
/// written as their documented defaults (`"None"` and `"Live"`). Decoding never
/// goes through this view.
pub struct ServerWire<'a> {
    #[serde(rename = "ID")]
    id: i64,
    name: &'a str,
    api_tokens: &'a [String],
    server_link: &'a str,
    color: &'a str,
    smtp_api_activated: bool,
    raw_email_enabled: bool,
    delivery_type: DeliveryType,
    inbound_address: &'a str,
    inbound_hook_url: &'a str,
    bounce_hook_url: &'a str,
    open_hook_url: &'a str,
    post_first_open_only: bool,
    track_opens: bool,
    track_links: LinkTracking,
    include_bounce_content_in_hook: bool,
    inbound_domain: &'a str,
    inbound_hash: &'a str,
    inbound_spam_threshold: i64,
    enable_smtp_api_error_hooks: bool,
}

impl<'a> From<&'a Server> for ServerWire<'a> {
    fn from(server: &'a Server) -> Self {
        Self {
            id: server.id,
            name: &server.name,
            api_tokens: &server.api_tokens,
            server_link: &server.server_link,
            color: &server.color,
            smtp_api_activated: server.smtp_api_activated,
            raw_email_enabled: server.raw_email_enabled,
            delivery_type: server.delivery_type.unwrap_or_default(),
            inbound_address: &server.inbound_address,
            inbound_hook_url: &server.inbound_hook_url,
            bounce_hook_url: &server.bounce_hook_url,
            open_hook_url: &server.open_hook_url,
            post_first_open_only: server.post_first_open_only,
            track_opens: server.track_opens,
            track_links: server.track_links.unwrap_or_default(),
            include_bounce_content_in_hook: server.include_bounce_content_in_hook,
            inbound_domain: &server.inbound_domain,
            inbound_hash: &server.inbound_hash,
            inbound_spam_threshold: server.inbound_spam_threshold,
            enable_smtp_api_error_hooks: server.enable_smtp_api_error_hooks,
        }
    }
}
