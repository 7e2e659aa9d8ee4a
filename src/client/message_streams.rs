use reqwest::Method;
use serde::Deserialize;

use super::{ApiRequest, PostmarkClient, PostmarkError};
use crate::domain::{
    ArchivedMessageStream, CreateMessageStreamRequest, EditMessageStreamRequest, MessageStream,
    MessageStreamTypeFilter, TokenClass,
};
use crate::transport::with_query;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MessageStreamsResponse {
    message_streams: Vec<MessageStream>,
}

impl PostmarkClient {
    /// List the server's message streams of the given type, in Postmark's order.
    pub async fn list_message_streams(
        &self,
        stream_type: MessageStreamTypeFilter,
        include_archived: bool,
    ) -> Result<Vec<MessageStream>, PostmarkError> {
        let path = with_query(
            "message-streams",
            &[
                ("MessageStreamType", stream_type.as_str().to_owned()),
                ("IncludeArchivedStreams", include_archived.to_string()),
            ],
        );
        let response: MessageStreamsResponse = self
            .dispatch(ApiRequest::new(Method::GET, path).token(TokenClass::Server))
            .await?;
        Ok(response.message_streams)
    }

    pub async fn get_message_stream(
        &self,
        stream_id: &str,
    ) -> Result<MessageStream, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::GET, format!("message-streams/{stream_id}"))
                .token(TokenClass::Server),
        )
        .await
    }

    pub async fn create_message_stream(
        &self,
        request: &CreateMessageStreamRequest,
    ) -> Result<MessageStream, PostmarkError> {
        let request = ApiRequest::new(Method::POST, "message-streams")
            .token(TokenClass::Server)
            .json(request)?;
        self.dispatch(request).await
    }

    pub async fn edit_message_stream(
        &self,
        stream_id: &str,
        request: &EditMessageStreamRequest,
    ) -> Result<MessageStream, PostmarkError> {
        let request = ApiRequest::new(Method::PATCH, format!("message-streams/{stream_id}"))
            .token(TokenClass::Server)
            .json(request)?;
        self.dispatch(request).await
    }

    /// Archive a stream. Postmark purges it after the returned date.
    pub async fn archive_message_stream(
        &self,
        stream_id: &str,
    ) -> Result<ArchivedMessageStream, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::POST, format!("message-streams/{stream_id}/archive"))
                .token(TokenClass::Server),
        )
        .await
    }

    pub async fn unarchive_message_stream(
        &self,
        stream_id: &str,
    ) -> Result<MessageStream, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::POST, format!("message-streams/{stream_id}/unarchive"))
                .token(TokenClass::Server),
        )
        .await
    }
}
