use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Link tracking mode for a server or a single message.
pub enum LinkTracking {
    #[default]
    None,
    HtmlAndText,
    HtmlOnly,
    TextOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Delivery environment of a server. Sandbox servers accept mail but never deliver it.
pub enum DeliveryType {
    #[default]
    Live,
    Sandbox,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// A server registered in a Postmark account.
///
/// `track_links` and `delivery_type` decode as `None` when Postmark leaves them
/// out. When a server is sent (create/edit) they default to
/// [`LinkTracking::None`] and [`DeliveryType::Live`].
pub struct Server {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    pub api_tokens: Vec<String>,
    pub server_link: String,
    /// Purple, Blue, Turquoise, Green, Red, Yellow or Grey.
    pub color: String,
    pub smtp_api_activated: bool,
    pub raw_email_enabled: bool,
    pub delivery_type: Option<DeliveryType>,
    pub inbound_address: String,
    pub inbound_hook_url: String,
    pub bounce_hook_url: String,
    pub open_hook_url: String,
    /// Only the first open by a recipient triggers the open webhook.
    pub post_first_open_only: bool,
    pub track_opens: bool,
    pub track_links: Option<LinkTracking>,
    pub include_bounce_content_in_hook: bool,
    pub inbound_domain: String,
    pub inbound_hash: String,
    pub inbound_spam_threshold: i64,
    pub enable_smtp_api_error_hooks: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One page of servers.
pub struct ServerList {
    pub total_count: i64,
    pub servers: Vec<Server>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_decodes_wire_names() {
        let json = r#"
        {
          "ID": 1,
          "Name": "Staging Testing",
          "ApiTokens": ["server token"],
          "ServerLink": "https://postmarkapp.com/servers/1/overview",
          "Color": "red",
          "SmtpApiActivated": true,
          "RawEmailEnabled": false,
          "DeliveryType": "Sandbox",
          "InboundAddress": "yourhash@inbound.postmarkapp.com",
          "InboundHookUrl": "https://hooks.example.com/inbound",
          "BounceHookUrl": "https://hooks.example.com/bounce",
          "OpenHookUrl": "https://hooks.example.com/open",
          "PostFirstOpenOnly": false,
          "TrackOpens": false,
          "TrackLinks": "HtmlOnly",
          "InboundDomain": "",
          "InboundHash": "yourhash",
          "InboundSpamThreshold": 5,
          "EnableSmtpApiErrorHooks": true
        }
        "#;

        let server: Server = serde_json::from_str(json).unwrap();
        assert_eq!(server.id, 1);
        assert_eq!(server.api_tokens, vec!["server token".to_owned()]);
        assert!(server.smtp_api_activated);
        assert_eq!(server.delivery_type, Some(DeliveryType::Sandbox));
        assert_eq!(server.inbound_hook_url, "https://hooks.example.com/inbound");
        assert_eq!(server.track_links, Some(LinkTracking::HtmlOnly));
        assert_eq!(server.inbound_spam_threshold, 5);
        assert!(server.enable_smtp_api_error_hooks);
    }

    #[test]
    fn absent_modes_stay_unset_on_decode() {
        let server: Server = serde_json::from_str(r#"{"ID": 2, "Name": "bare"}"#).unwrap();
        assert_eq!(server.track_links, None);
        assert_eq!(server.delivery_type, None);
    }
}
