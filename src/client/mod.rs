//! Client layer: owns configuration, dispatches requests, and maps responses to results.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::domain::{AccountToken, ApiError, ServerToken, TokenClass};

mod domains;
mod email;
mod message_streams;
mod servers;
mod suppressions;
mod webhooks;

/// Root of the Postmark REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.postmarkapp.com";

/// Boxed future returned by [`HttpTransport`] implementations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Boxed error produced by an [`HttpTransport`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A fully built HTTP request handed to an [`HttpTransport`].
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Look up a header value by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Status code and fully read body of an HTTP response.
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The HTTP exchange used by [`PostmarkClient`].
///
/// The default implementation wraps a `reqwest::Client`. Supply your own through
/// [`PostmarkClientBuilder::transport`] to route requests elsewhere (a recording
/// stub in tests, a proxying layer, ...). Implementations must be safe to share
/// between concurrent calls.
pub trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method, &request.url);
            for (name, value) in request.headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`PostmarkClient`].
///
/// Transport, encoding, API and decoding failures are kept apart so callers can
/// tell a documented Postmark rejection ([`PostmarkError::Api`]) from a contract
/// mismatch ([`PostmarkError::Decode`]).
pub enum PostmarkError {
    /// The request could not be built or sent, or the body could not be read.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The payload could not be serialized. Nothing was sent.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Postmark rejected the request with its error envelope.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body did not match the expected shape.
    #[error("failed to decode response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// The caller's cancellation token fired before the exchange completed.
    #[error("request cancelled")]
    Cancelled,

    /// The configured base URL is not an absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl PostmarkError {
    /// The Postmark error envelope, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One call to the Postmark API: method, relative path, optional JSON body, and
/// the credential that authenticates it.
///
/// The path is appended to the base URL after a `/` as-is, so it must not start
/// with a slash. The token class defaults to [`TokenClass::Server`].
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    token: TokenClass,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: TokenClass::default(),
        }
    }

    /// Authenticate with the given credential instead of the server token.
    pub fn token(mut self, token: TokenClass) -> Self {
        self.token = token;
        self
    }

    /// Serialize `payload` as the JSON request body.
    pub fn json<P: Serialize + ?Sized>(mut self, payload: &P) -> Result<Self, PostmarkError> {
        let body = serde_json::to_vec(payload).map_err(PostmarkError::Encode)?;
        self.body = Some(body);
        Ok(self)
    }

    /// HTTP method of the call.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the base URL, query string included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Which token authenticates the call.
    pub fn token_class(&self) -> TokenClass {
        self.token
    }
}

#[derive(Clone)]
/// Builder for [`PostmarkClient`].
///
/// Use this to point the client at another base URL (a local stand-in server),
/// to supply your own transport, or to set a timeout and user-agent.
pub struct PostmarkClientBuilder {
    server_token: ServerToken,
    account_token: AccountToken,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl PostmarkClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(server_token: impl Into<String>, account_token: impl Into<String>) -> Self {
        Self {
            server_token: ServerToken::new(server_token),
            account_token: AccountToken::new(account_token),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            http_client: None,
            transport: None,
        }
    }

    /// Override the API root. No trailing slash: paths are joined with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport or `reqwest::Client` is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport or `reqwest::Client` is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client` (proxies, TLS roots, pooling).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the HTTP transport entirely. Takes precedence over [`Self::http_client`].
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`PostmarkClient`].
    pub fn build(self) -> Result<PostmarkClient, PostmarkError> {
        url::Url::parse(&self.base_url)?;

        let http = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport { client }),
            (None, None) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| PostmarkError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(PostmarkClient {
            server_token: self.server_token,
            account_token: self.account_token,
            base_url: self.base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// Postmark API client.
///
/// Holds the server and account tokens, the base URL and a shared transport.
/// Nothing is mutated after construction, so one instance (or its clones) can
/// serve any number of concurrent calls.
///
/// Cancellation: dropping a call's future aborts the exchange. To cancel from
/// elsewhere, wrap the call in [`with_cancellation`].
pub struct PostmarkClient {
    server_token: ServerToken,
    account_token: AccountToken,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for PostmarkClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostmarkClient")
            .field("server_token", &self.server_token)
            .field("account_token", &self.account_token)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PostmarkClient {
    /// Create a client against the public Postmark API.
    ///
    /// Either token may be empty if you never call endpoints that need it.
    pub fn new(server_token: impl Into<String>, account_token: impl Into<String>) -> Self {
        Self {
            server_token: ServerToken::new(server_token),
            account_token: AccountToken::new(account_token),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(
        server_token: impl Into<String>,
        account_token: impl Into<String>,
    ) -> PostmarkClientBuilder {
        PostmarkClientBuilder::new(server_token, account_token)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and decode the response into `T`.
    ///
    /// Errors:
    /// - [`PostmarkError::Transport`] when the exchange itself fails,
    /// - [`PostmarkError::Api`] for HTTP status >= 400 with an error envelope,
    /// - [`PostmarkError::Decode`] when the body (success or error) has the wrong shape.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, PostmarkError> {
        let response = self.execute(request).await?;

        if response.status >= 400 {
            let envelope: ApiError = decode_body(&response)?;
            warn!(
                status = response.status,
                error_code = envelope.error_code,
                message = %envelope.message,
                "postmark rejected request"
            );
            return Err(PostmarkError::Api(envelope));
        }

        decode_body(&response)
    }

    /// Dispatch a call whose only response content is Postmark's
    /// `{"ErrorCode", "Message"}` acknowledgement.
    ///
    /// A non-zero `ErrorCode` in a successful response is still an API error.
    pub(crate) async fn dispatch_ack(&self, request: ApiRequest) -> Result<(), PostmarkError> {
        let ack: ApiError = self.dispatch(request).await?;
        if ack.error_code != 0 {
            warn!(
                error_code = ack.error_code,
                message = %ack.message,
                "postmark acknowledged with an error"
            );
            return Err(PostmarkError::Api(ack));
        }
        Ok(())
    }

    async fn execute(&self, request: ApiRequest) -> Result<HttpResponse, PostmarkError> {
        let (token_header, token_value) = match request.token {
            TokenClass::Account => (AccountToken::HEADER, self.account_token.as_str()),
            TokenClass::Server => (ServerToken::HEADER, self.server_token.as_str()),
        };

        debug!(
            method = %request.method,
            path = %request.path,
            token = ?request.token,
            has_body = request.body.is_some(),
            "sending postmark request"
        );

        let http_request = HttpRequest {
            url: format!("{}/{}", self.base_url, request.path),
            method: request.method,
            headers: vec![
                ("Accept", "application/json".to_owned()),
                ("Content-Type", "application/json".to_owned()),
                (token_header, token_value.to_owned()),
            ],
            body: request.body,
        };

        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(PostmarkError::Transport)?;

        debug!(
            status = response.status,
            bytes = response.body.len(),
            "received postmark response"
        );
        Ok(response)
    }
}

fn decode_body<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, PostmarkError> {
    serde_json::from_slice(&response.body).map_err(|source| PostmarkError::Decode {
        status: response.status,
        source,
    })
}

/// Run a client call until it completes or `token` is cancelled.
///
/// When the token fires first the call's future is dropped, which aborts the
/// in-flight exchange, and [`PostmarkError::Cancelled`] is returned. A token
/// that is already cancelled prevents the request from being sent.
///
/// ```rust,no_run
/// use postmark::{PostmarkClient, with_cancellation};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn run() -> Result<(), postmark::PostmarkError> {
/// let client = PostmarkClient::new("server-token", "account-token");
/// let token = CancellationToken::new();
/// let server = with_cancellation(&token, client.get_current_server()).await?;
/// println!("{}", server.name);
/// # Ok(())
/// # }
/// ```
pub async fn with_cancellation<T, F>(
    token: &CancellationToken,
    call: F,
) -> Result<T, PostmarkError>
where
    F: Future<Output = Result<T, PostmarkError>>,
{
    tokio::select! {
        biased;
        () = token.cancelled() => {
            debug!("postmark request cancelled by caller");
            Err(PostmarkError::Cancelled)
        }
        result = call => result,
    }
}
