use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageStreamType {
    Transactional,
    Inbound,
    Broadcasts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Stream type filter for listing message streams.
pub enum MessageStreamTypeFilter {
    #[default]
    All,
    Transactional,
    Inbound,
    Broadcasts,
}

impl MessageStreamTypeFilter {
    /// Query parameter value (`MessageStreamType=...`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Transactional => "Transactional",
            Self::Inbound => "Inbound",
            Self::Broadcasts => "Broadcasts",
        }
    }
}

impl From<MessageStreamType> for MessageStreamTypeFilter {
    fn from(value: MessageStreamType) -> Self {
        match value {
            MessageStreamType::Transactional => Self::Transactional,
            MessageStreamType::Inbound => Self::Inbound,
            MessageStreamType::Broadcasts => Self::Broadcasts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionManagementConfiguration {
    /// `None`, `Postmark` or `Custom`. Postmark is not consistent about casing,
    /// so the value is kept verbatim.
    pub unsubscribe_handling_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageStream {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub message_stream_type: MessageStreamType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub archived_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub expected_purge_date: Option<OffsetDateTime>,
    pub subscription_management_configuration: SubscriptionManagementConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Result of archiving a stream: it is purged after `expected_purge_date`
/// unless unarchived first.
pub struct ArchivedMessageStream {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "ServerID")]
    pub server_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub expected_purge_date: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateMessageStreamRequest {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub message_stream_type: MessageStreamType,
    pub subscription_management_configuration: SubscriptionManagementConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditMessageStreamRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subscription_management_configuration: SubscriptionManagementConfiguration,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::*;

    #[test]
    fn create_request_wire_names() {
        let request = CreateMessageStreamRequest {
            id: "transactional-dev".to_owned(),
            name: "My Dev Transactional Stream".to_owned(),
            description: Some("This is my second transactional stream".to_owned()),
            message_stream_type: MessageStreamType::Transactional,
            subscription_management_configuration: SubscriptionManagementConfiguration {
                unsubscribe_handling_type: "None".to_owned(),
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "ID": "transactional-dev",
                "Name": "My Dev Transactional Stream",
                "Description": "This is my second transactional stream",
                "MessageStreamType": "Transactional",
                "SubscriptionManagementConfiguration": {"UnsubscribeHandlingType": "None"}
            })
        );
    }

    #[test]
    fn edit_request_omits_unset_description() {
        let request = EditMessageStreamRequest {
            name: "Updated Dev Stream".to_owned(),
            description: None,
            subscription_management_configuration: SubscriptionManagementConfiguration {
                unsubscribe_handling_type: "none".to_owned(),
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "Name": "Updated Dev Stream",
                "SubscriptionManagementConfiguration": {"UnsubscribeHandlingType": "none"}
            })
        );
    }

    #[test]
    fn null_and_missing_timestamps_decode_as_none() {
        let json = r#"
        {
          "ID": "inbound",
          "ServerID": 123457,
          "Name": "Inbound Stream",
          "Description": null,
          "MessageStreamType": "Inbound",
          "CreatedAt": "2020-07-01T00:00:00-04:00",
          "UpdatedAt": null,
          "ArchivedAt": null,
          "SubscriptionManagementConfiguration": {"UnsubscribeHandlingType": "none"}
        }
        "#;

        let stream: MessageStream = serde_json::from_str(json).unwrap();
        assert_eq!(stream.created_at, datetime!(2020-07-01 0:00 -4));
        assert_eq!(stream.updated_at, None);
        assert_eq!(stream.archived_at, None);
        assert_eq!(stream.expected_purge_date, None);
        assert_eq!(stream.description, None);
        assert_eq!(stream.message_stream_type, MessageStreamType::Inbound);
    }

    #[test]
    fn filter_query_values() {
        assert_eq!(MessageStreamTypeFilter::default().as_str(), "All");
        assert_eq!(
            MessageStreamTypeFilter::from(MessageStreamType::Broadcasts).as_str(),
            "Broadcasts"
        );
    }
}
