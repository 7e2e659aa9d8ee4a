use url::form_urlencoded;

use crate::domain::SuppressionQuery;

/// Append `pairs` to `path` as a URL-encoded query string.
///
/// The path is returned unchanged when there are no pairs.
pub fn with_query(path: impl Into<String>, pairs: &[(&str, String)]) -> String {
    let mut path = path.into();
    if pairs.is_empty() {
        return path;
    }

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(key, value)| (*key, value.as_str())))
        .finish();
    path.push('?');
    path.push_str(&query);
    path
}

pub fn encode_suppression_query(query: &SuppressionQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(email_address) = &query.email_address {
        pairs.push(("emailaddress", email_address.clone()));
    }
    if let Some(from_date) = query.from_date {
        pairs.push(("fromdate", from_date.to_string()));
    }
    if let Some(to_date) = query.to_date {
        pairs.push(("todate", to_date.to_string()));
    }
    if let Some(reason) = query.suppression_reason {
        pairs.push(("suppressionreason", reason.as_str().to_owned()));
    }
    if let Some(origin) = query.origin {
        pairs.push(("origin", origin.as_str().to_owned()));
    }
    pairs
}
