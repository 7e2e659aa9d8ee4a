use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Why an address was added to the suppression list.
pub enum SuppressionReason {
    /// An email to the address hard bounced.
    HardBounce,
    /// The recipient marked an email as spam.
    SpamComplaint,
    /// The recipient unsubscribed, or the address was suppressed by hand.
    ManualSuppression,
}

impl SuppressionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HardBounce => "HardBounce",
            Self::SpamComplaint => "SpamComplaint",
            Self::ManualSuppression => "ManualSuppression",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Who added an address to the suppression list.
pub enum SuppressionOrigin {
    Recipient,
    Customer,
    Admin,
}

impl SuppressionOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recipient => "Recipient",
            Self::Customer => "Customer",
            Self::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuppressionStatus {
    Suppressed,
    Deleted,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// A suppressed address on one message stream.
pub struct Suppression {
    pub email_address: String,
    pub suppression_reason: SuppressionReason,
    pub origin: SuppressionOrigin,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Per-address outcome of a suppression create/delete call.
pub struct SuppressionResult {
    pub email_address: String,
    #[serde(default)]
    pub status: Option<SuppressionStatus>,
    /// Set when `status` is `Failed`.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
/// Address to suppress or reactivate.
pub struct SuppressionEntry {
    pub email_address: String,
}

impl SuppressionEntry {
    pub fn new(email_address: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Filters for the suppression dump. Unset fields are left out of the query.
pub struct SuppressionQuery {
    pub email_address: Option<String>,
    pub from_date: Option<Date>,
    pub to_date: Option<Date>,
    pub suppression_reason: Option<SuppressionReason>,
    pub origin: Option<SuppressionOrigin>,
}

impl SuppressionQuery {
    pub fn is_empty(&self) -> bool {
        self.email_address.is_none()
            && self.from_date.is_none()
            && self.to_date.is_none()
            && self.suppression_reason.is_none()
            && self.origin.is_none()
    }
}
