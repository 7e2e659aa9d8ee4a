use reqwest::Method;

use super::{ApiRequest, PostmarkClient, PostmarkError};
use crate::domain::{CreateDomainRequest, DomainDetail, DomainList, EditDomainRequest, TokenClass};
use crate::transport::with_query;

impl PostmarkClient {
    /// List sender domains on the account, `count` at a time starting at `offset`.
    pub async fn list_domains(&self, count: u32, offset: u32) -> Result<DomainList, PostmarkError> {
        let path = with_query(
            "domains",
            &[("count", count.to_string()), ("offset", offset.to_string())],
        );
        self.dispatch(ApiRequest::new(Method::GET, path).token(TokenClass::Account))
            .await
    }

    pub async fn get_domain(&self, domain_id: i64) -> Result<DomainDetail, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::GET, format!("domains/{domain_id}")).token(TokenClass::Account),
        )
        .await
    }

    pub async fn create_domain(
        &self,
        request: &CreateDomainRequest,
    ) -> Result<DomainDetail, PostmarkError> {
        let request = ApiRequest::new(Method::POST, "domains")
            .token(TokenClass::Account)
            .json(request)?;
        self.dispatch(request).await
    }

    /// Change the return-path domain of an existing domain.
    pub async fn edit_domain(
        &self,
        domain_id: i64,
        request: &EditDomainRequest,
    ) -> Result<DomainDetail, PostmarkError> {
        let request = ApiRequest::new(Method::PUT, format!("domains/{domain_id}"))
            .token(TokenClass::Account)
            .json(request)?;
        self.dispatch(request).await
    }

    pub async fn delete_domain(&self, domain_id: i64) -> Result<(), PostmarkError> {
        self.dispatch_ack(
            ApiRequest::new(Method::DELETE, format!("domains/{domain_id}"))
                .token(TokenClass::Account),
        )
        .await
    }

    /// Ask Postmark to re-check the DKIM DNS record now.
    pub async fn verify_dkim(&self, domain_id: i64) -> Result<DomainDetail, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::PUT, format!("domains/{domain_id}/verifyDkim"))
                .token(TokenClass::Account),
        )
        .await
    }

    /// Ask Postmark to re-check the return-path CNAME record now.
    pub async fn verify_return_path(&self, domain_id: i64) -> Result<DomainDetail, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::PUT, format!("domains/{domain_id}/verifyReturnPath"))
                .token(TokenClass::Account),
        )
        .await
    }

    /// Start a DKIM key rotation. The new key shows up in the `dkim_pending_*` fields.
    pub async fn rotate_dkim(&self, domain_id: i64) -> Result<DomainDetail, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::POST, format!("domains/{domain_id}/rotatedkim"))
                .token(TokenClass::Account),
        )
        .await
    }
}
