use reqwest::Method;
use serde::Deserialize;

use super::{ApiRequest, PostmarkClient, PostmarkError};
use crate::domain::{TokenClass, Webhook};
use crate::transport::with_query;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WebhooksResponse {
    webhooks: Vec<Webhook>,
}

impl PostmarkClient {
    /// List webhooks, optionally only those of one message stream.
    pub async fn list_webhooks(
        &self,
        message_stream: Option<&str>,
    ) -> Result<Vec<Webhook>, PostmarkError> {
        let query: Vec<(&str, String)> = message_stream
            .map(|stream| vec![("MessageStream", stream.to_owned())])
            .unwrap_or_default();
        let path = with_query("webhooks", &query);
        let response: WebhooksResponse = self
            .dispatch(ApiRequest::new(Method::GET, path).token(TokenClass::Server))
            .await?;
        Ok(response.webhooks)
    }

    pub async fn get_webhook(&self, webhook_id: i64) -> Result<Webhook, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::GET, format!("webhooks/{webhook_id}"))
                .token(TokenClass::Server),
        )
        .await
    }

    pub async fn create_webhook(&self, webhook: &Webhook) -> Result<Webhook, PostmarkError> {
        let request = ApiRequest::new(Method::POST, "webhooks")
            .token(TokenClass::Server)
            .json(webhook)?;
        self.dispatch(request).await
    }

    pub async fn edit_webhook(
        &self,
        webhook_id: i64,
        webhook: &Webhook,
    ) -> Result<Webhook, PostmarkError> {
        let request = ApiRequest::new(Method::PUT, format!("webhooks/{webhook_id}"))
            .token(TokenClass::Server)
            .json(webhook)?;
        self.dispatch(request).await
    }

    pub async fn delete_webhook(&self, webhook_id: i64) -> Result<(), PostmarkError> {
        self.dispatch_ack(
            ApiRequest::new(Method::DELETE, format!("webhooks/{webhook_id}"))
                .token(TokenClass::Server),
        )
        .await
    }
}
