use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiRequest, PostmarkClient, PostmarkError};
use crate::domain::{Suppression, SuppressionEntry, SuppressionQuery, SuppressionResult, TokenClass};
use crate::transport::{encode_suppression_query, with_query};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SuppressionsResponse<T> {
    suppressions: Vec<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SuppressionsRequest<'a> {
    suppressions: &'a [SuppressionEntry],
}

impl PostmarkClient {
    /// Dump the suppression list of a message stream.
    ///
    /// <https://postmarkapp.com/developer/api/suppressions-api#suppression-dump>
    pub async fn get_suppressions(
        &self,
        stream_id: &str,
        query: &SuppressionQuery,
    ) -> Result<Vec<Suppression>, PostmarkError> {
        let path = with_query(
            format!("message-streams/{stream_id}/suppressions/dump"),
            &encode_suppression_query(query),
        );
        let response: SuppressionsResponse<Suppression> = self
            .dispatch(ApiRequest::new(Method::GET, path).token(TokenClass::Server))
            .await?;
        Ok(response.suppressions)
    }

    /// Suppress addresses on a message stream. Each address gets its own result;
    /// a `Failed` entry does not fail the call.
    pub async fn create_suppressions(
        &self,
        stream_id: &str,
        entries: &[SuppressionEntry],
    ) -> Result<Vec<SuppressionResult>, PostmarkError> {
        self.update_suppressions(format!("message-streams/{stream_id}/suppressions"), entries)
            .await
    }

    /// Reactivate suppressed addresses. `SpamComplaint` suppressions cannot be deleted.
    pub async fn delete_suppressions(
        &self,
        stream_id: &str,
        entries: &[SuppressionEntry],
    ) -> Result<Vec<SuppressionResult>, PostmarkError> {
        self.update_suppressions(
            format!("message-streams/{stream_id}/suppressions/delete"),
            entries,
        )
        .await
    }

    async fn update_suppressions(
        &self,
        path: String,
        entries: &[SuppressionEntry],
    ) -> Result<Vec<SuppressionResult>, PostmarkError> {
        let request = ApiRequest::new(Method::POST, path)
            .token(TokenClass::Server)
            .json(&SuppressionsRequest {
                suppressions: entries,
            })?;
        let response: SuppressionsResponse<SuppressionResult> = self.dispatch(request).await?;
        Ok(response.suppressions)
    }
}
