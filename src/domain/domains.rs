use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// Summary of a sender domain, as returned by the domain list.
pub struct Domain {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "SPFVerified")]
    pub spf_verified: bool,
    #[serde(rename = "DKIMVerified")]
    pub dkim_verified: bool,
    #[serde(rename = "WeakDKIM")]
    pub weak_dkim: bool,
    pub return_path_domain_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// Full domain record including the DNS values needed for verification.
///
/// Pending and revoked DKIM values are `None` unless a key rotation is in progress.
pub struct DomainDetail {
    #[serde(flatten)]
    pub domain: Domain,
    #[serde(rename = "SPFHost")]
    pub spf_host: Option<String>,
    #[serde(rename = "SPFTextValue")]
    pub spf_text_value: Option<String>,
    #[serde(rename = "DKIMHost")]
    pub dkim_host: Option<String>,
    #[serde(rename = "DKIMTextValue")]
    pub dkim_text_value: Option<String>,
    #[serde(rename = "DKIMPendingHost")]
    pub dkim_pending_host: Option<String>,
    #[serde(rename = "DKIMPendingTextValue")]
    pub dkim_pending_text_value: Option<String>,
    #[serde(rename = "DKIMRevokedHost")]
    pub dkim_revoked_host: Option<String>,
    #[serde(rename = "DKIMRevokedTextValue")]
    pub dkim_revoked_text_value: Option<String>,
    #[serde(rename = "SafeToRemoveRevokedKeyFromDNS")]
    pub safe_to_remove_revoked_key_from_dns: bool,
    #[serde(rename = "DKIMUpdateStatus")]
    pub dkim_update_status: Option<String>,
    pub return_path_domain: Option<String>,
    #[serde(rename = "ReturnPathDomainCNAMEValue")]
    pub return_path_domain_cname_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// One page of domains.
pub struct DomainList {
    pub total_count: i64,
    pub domains: Vec<Domain>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDomainRequest {
    pub name: String,
    /// Must be a subdomain of the From domain. Omitted from the body when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_path_domain: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditDomainRequest {
    pub return_path_domain: String,
}
