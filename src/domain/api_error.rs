use std::fmt;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
/// Postmark's error envelope: `{"ErrorCode": <int>, "Message": <string>}`.
///
/// Returned with every HTTP status >= 400, and as the acknowledgement body of
/// delete-style endpoints (where `ErrorCode` 0 means success). The code space is
/// owned by Postmark: <https://postmarkapp.com/developer/api/overview#error-codes>.
pub struct ApiError {
    pub error_code: i64,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}
