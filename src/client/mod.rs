//! Client layer: dispatches form requests and maps responses to results.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    Action, AddOrder, ApiKey, Endpoint, JsonList, JsonObject, OrderId, Params, RefillId,
    ValidationError,
};
use crate::transport::{self, ResponseError};

/// Legacy browser User-Agent; some panels reject requests without a recognizable one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/4.0 (compatible; MSIE 5.01; Windows NT 5.0)";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    reason: Option<String>,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self
                .client
                .post(url)
                .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
                .form(&params)
                .send()
                .await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok(HttpResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().map(str::to_owned),
                body: body.to_vec(),
            })
        })
    }
}

/// Raw panel reply: HTTP status plus the fully read body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
/// Failure to get a usable HTTP reply from the panel.
pub enum TransportError {
    /// Request could not be built or sent, or the body could not be read
    /// (DNS, TLS, connection reset, timeout).
    #[error("transport error: {0}")]
    Request(#[source] Box<dyn StdError + Send + Sync>),

    /// The panel answered with HTTP status >= 400.
    #[error("HTTP error: {status} {}", .reason.as_deref().unwrap_or("Unknown Status"))]
    HttpStatus {
        status: u16,
        reason: Option<String>,
        body: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmmClient`].
///
/// Use [`SmmError::is_api_error`] to tell "the panel rejected my request" apart from
/// transport and shape problems.
pub enum SmmError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SmmError {
    /// Message the panel reported in its `error` field, if that is what failed.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Response(ResponseError::Api { message }) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        self.api_message().is_some()
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmmClient`].
///
/// Use this when you need a request timeout or a different user-agent.
pub struct SmmClientBuilder {
    endpoint: Endpoint,
    api_key: ApiKey,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmmClientBuilder {
    pub fn new(endpoint: Endpoint, api_key: ApiKey) -> Self {
        Self {
            endpoint,
            api_key,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header (defaults to [`DEFAULT_USER_AGENT`]).
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmmClient`].
    pub fn build(self) -> Result<SmmClient, SmmError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| TransportError::Request(Box::new(err)))?;

        Ok(SmmClient {
            endpoint: self.endpoint,
            api_key: self.api_key,
            http: Arc::new(ReqwestTransport {
                client,
                user_agent: self
                    .user_agent
                    .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            }),
        })
    }
}

#[derive(Clone)]
/// SMM panel client.
///
/// Holds only the endpoint and API key; every call builds its own request, so a
/// single client (or its clones) can be shared across tasks. Dropping a returned
/// future cancels the request in flight.
pub struct SmmClient {
    endpoint: Endpoint,
    api_key: ApiKey,
    http: Arc<dyn HttpTransport>,
}

impl SmmClient {
    /// Create a client with default settings.
    ///
    /// For a timeout or another user-agent, use [`SmmClient::builder`].
    pub fn new(endpoint: Endpoint, api_key: ApiKey) -> Self {
        Self {
            endpoint,
            api_key,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
                user_agent: DEFAULT_USER_AGENT.to_owned(),
            }),
        }
    }

    pub fn builder(endpoint: Endpoint, api_key: ApiKey) -> SmmClientBuilder {
        SmmClientBuilder::new(endpoint, api_key)
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// POST one form-encoded request and return the raw reply.
    ///
    /// The body is always read to the end. Statuses >= 400 become
    /// [`TransportError::HttpStatus`]; nothing else about the body is checked. No log
    /// records are emitted here.
    pub async fn invoke(
        &self,
        action: &str,
        params: &Params,
    ) -> Result<RawResponse, TransportError> {
        let form = transport::encode_form(&self.api_key, action, params);
        let response = self
            .http
            .post_form(self.endpoint.as_str(), form)
            .await
            .map_err(TransportError::Request)?;

        if response.status >= 400 {
            let body = String::from_utf8_lossy(&response.body);
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.into_owned())
            };
            return Err(TransportError::HttpStatus {
                status: response.status,
                reason: response.reason,
                body,
            });
        }

        Ok(RawResponse {
            status: response.status,
            body: response.body,
        })
    }

    /// Call an action that answers with a JSON object.
    pub async fn request_object(
        &self,
        action: &str,
        params: &Params,
    ) -> Result<JsonObject, SmmError> {
        let raw = self.invoke_logged(action, params).await?;
        Ok(transport::interpret_object(&raw.body)?)
    }

    /// Call an action that answers with a JSON array.
    pub async fn request_list(
        &self,
        action: &str,
        params: &Params,
    ) -> Result<JsonList, SmmError> {
        let raw = self.invoke_logged(action, params).await?;
        Ok(transport::interpret_list(&raw.body)?)
    }

    async fn invoke_logged(
        &self,
        action: &str,
        params: &Params,
    ) -> Result<RawResponse, TransportError> {
        log::debug!(
            "panel request: action={action}, params={}",
            params.present().count()
        );
        let result = self.invoke(action, params).await;
        match &result {
            Ok(raw) => log::debug!(
                "panel response: action={action}, status={}, body={} bytes",
                raw.status,
                raw.body.len()
            ),
            Err(err) => log::debug!("panel request failed: action={action}: {err}"),
        }
        result
    }

    /// List the services offered by the panel.
    pub async fn services(&self) -> Result<JsonList, SmmError> {
        self.request_list(Action::Services.as_str(), &Params::new()).await
    }

    /// Account balance, e.g. `{"balance": "100.84", "currency": "USD"}`.
    pub async fn balance(&self) -> Result<JsonObject, SmmError> {
        self.request_object(Action::Balance.as_str(), &Params::new()).await
    }

    /// Place a new order; the reply carries the new `order` id.
    pub async fn add_order(&self, request: &AddOrder) -> Result<JsonObject, SmmError> {
        let params = transport::encode_add_order_params(request);
        self.request_object(Action::Add.as_str(), &params).await
    }

    pub async fn order_status(&self, order: &OrderId) -> Result<JsonObject, SmmError> {
        let params = transport::encode_order_params(order);
        self.request_object(Action::Status.as_str(), &params).await
    }

    /// Status of several orders, keyed by order id.
    pub async fn multi_order_status(&self, orders: &[OrderId]) -> Result<JsonObject, SmmError> {
        ensure_not_empty(orders, OrderId::LIST_FIELD)?;
        let params = transport::encode_orders_params(orders);
        self.request_object(Action::Status.as_str(), &params).await
    }

    pub async fn refill(&self, order: &OrderId) -> Result<JsonObject, SmmError> {
        let params = transport::encode_order_params(order);
        self.request_object(Action::Refill.as_str(), &params).await
    }

    pub async fn multi_refill(&self, orders: &[OrderId]) -> Result<JsonList, SmmError> {
        ensure_not_empty(orders, OrderId::LIST_FIELD)?;
        let params = transport::encode_orders_params(orders);
        self.request_list(Action::Refill.as_str(), &params).await
    }

    pub async fn refill_status(&self, refill: &RefillId) -> Result<JsonObject, SmmError> {
        let params = transport::encode_refill_params(refill);
        self.request_object(Action::RefillStatus.as_str(), &params).await
    }

    pub async fn multi_refill_status(&self, refills: &[RefillId]) -> Result<JsonList, SmmError> {
        ensure_not_empty(refills, RefillId::LIST_FIELD)?;
        let params = transport::encode_refills_params(refills);
        self.request_list(Action::RefillStatus.as_str(), &params).await
    }

    /// Cancel orders; the reply has one entry per order, each with its own outcome.
    pub async fn cancel(&self, orders: &[OrderId]) -> Result<JsonList, SmmError> {
        ensure_not_empty(orders, OrderId::LIST_FIELD)?;
        let params = transport::encode_orders_params(orders);
        self.request_list(Action::Cancel.as_str(), &params).await
    }
}

fn ensure_not_empty<T>(ids: &[T], field: &'static str) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}
