use reqwest::Method;

use super::{ApiRequest, PostmarkClient, PostmarkError};
use crate::domain::{Email, EmailResponse, TokenClass};

impl PostmarkClient {
    /// Send a single message.
    pub async fn send_email(&self, email: &Email) -> Result<EmailResponse, PostmarkError> {
        let request = ApiRequest::new(Method::POST, "email")
            .token(TokenClass::Server)
            .json(email)?;
        self.dispatch(request).await
    }

    /// Send up to 500 messages in one call.
    ///
    /// The call succeeds as long as Postmark accepted the batch; check each
    /// [`EmailResponse::error_code`] for per-message failures.
    pub async fn send_email_batch(
        &self,
        emails: &[Email],
    ) -> Result<Vec<EmailResponse>, PostmarkError> {
        let request = ApiRequest::new(Method::POST, "email/batch")
            .token(TokenClass::Server)
            .json(emails)?;
        self.dispatch(request).await
    }
}
