use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which of the two Postmark credentials authenticates a request.
///
/// Domain and server management is account-scoped; sending, message streams,
/// suppressions and webhooks are server-scoped.
pub enum TokenClass {
    #[default]
    Server,
    Account,
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Postmark server API token.
///
/// Found on the Credentials tab of a Postmark server. Not validated: an empty
/// token is sent as-is and rejected by Postmark.
pub struct ServerToken(String);

impl ServerToken {
    /// Header carrying the token (`X-Postmark-Server-Token`).
    pub const HEADER: &'static str = "X-Postmark-Server-Token";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ServerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ServerToken").field(&mask(&self.0)).finish()
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Postmark account API token.
///
/// Only the account owner can see it (Account tab). Not validated.
pub struct AccountToken(String);

impl AccountToken {
    /// Header carrying the token (`X-Postmark-Account-Token`).
    pub const HEADER: &'static str = "X-Postmark-Account-Token";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccountToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccountToken").field(&mask(&self.0)).finish()
    }
}

fn mask(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }
}
