use reqwest::Method;

use super::{ApiRequest, PostmarkClient, PostmarkError};
use crate::domain::{Server, ServerList, TokenClass};
use crate::transport::{ServerWire, with_query};

impl PostmarkClient {
    /// List servers on the account. `name` filters by server name when set.
    pub async fn list_servers(
        &self,
        count: u32,
        offset: u32,
        name: Option<&str>,
    ) -> Result<ServerList, PostmarkError> {
        let mut query = vec![("count", count.to_string()), ("offset", offset.to_string())];
        if let Some(name) = name {
            query.push(("name", name.to_owned()));
        }
        let path = with_query("servers", &query);
        self.dispatch(ApiRequest::new(Method::GET, path).token(TokenClass::Account))
            .await
    }

    pub async fn get_server(&self, server_id: &str) -> Result<Server, PostmarkError> {
        self.dispatch(
            ApiRequest::new(Method::GET, format!("servers/{server_id}")).token(TokenClass::Account),
        )
        .await
    }

    /// Create a server. Unset link tracking and delivery type are sent as `None` and `Live`.
    pub async fn create_server(&self, server: &Server) -> Result<Server, PostmarkError> {
        let request = ApiRequest::new(Method::POST, "servers")
            .token(TokenClass::Account)
            .json(&ServerWire::from(server))?;
        self.dispatch(request).await
    }

    pub async fn edit_server(
        &self,
        server_id: &str,
        server: &Server,
    ) -> Result<Server, PostmarkError> {
        let request = ApiRequest::new(Method::PUT, format!("servers/{server_id}"))
            .token(TokenClass::Account)
            .json(&ServerWire::from(server))?;
        self.dispatch(request).await
    }

    /// Delete a server. Postmark only allows this when enabled for the account.
    pub async fn delete_server(&self, server_id: &str) -> Result<(), PostmarkError> {
        self.dispatch_ack(
            ApiRequest::new(Method::DELETE, format!("servers/{server_id}"))
                .token(TokenClass::Account),
        )
        .await
    }

    /// Server that owns the configured server token.
    pub async fn get_current_server(&self) -> Result<Server, PostmarkError> {
        self.dispatch(ApiRequest::new(Method::GET, "server").token(TokenClass::Server))
            .await
    }

    pub async fn edit_current_server(&self, server: &Server) -> Result<Server, PostmarkError> {
        let request = ApiRequest::new(Method::PUT, "server")
            .token(TokenClass::Server)
            .json(&ServerWire::from(server))?;
        self.dispatch(request).await
    }
}
