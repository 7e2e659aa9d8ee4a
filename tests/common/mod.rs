#![allow(dead_code)]

use httpmock::MockServer;
use postmark::PostmarkClient;

pub const SERVER_TOKEN: &str = "server-token";
pub const ACCOUNT_TOKEN: &str = "account-token";

pub const SERVER_HEADER: &str = "x-postmark-server-token";
pub const ACCOUNT_HEADER: &str = "x-postmark-account-token";

/// Client pointed at a per-test mock server.
pub fn client_for(server: &MockServer) -> PostmarkClient {
    PostmarkClient::builder(SERVER_TOKEN, ACCOUNT_TOKEN)
        .base_url(server.base_url())
        .build()
        .unwrap()
}
