use async_trait::async_trait;
use serde_json::Value;

use crate::domain::AuthToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
}

/// One HTTP exchange with the wemala server.
///
/// When a token is present it is sent as the `Authorization` header value
/// verbatim; the server does not expect a "Bearer " prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub token: Option<AuthToken>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>, token: Option<AuthToken>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            token,
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, token: Option<AuthToken>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            token,
            body: Some(body),
        }
    }

    pub fn patch(url: impl Into<String>, token: Option<AuthToken>) -> Self {
        Self {
            method: HttpMethod::Patch,
            url: url.into(),
            token,
            body: None,
        }
    }
}

/// Transport verdict for a single exchange, as a tagged variant rather than
/// an error to downcast.
///
/// `Rejected` is the 401 class that drives the register-then-retry path in
/// authentication; every other non-2xx lands in `Failed`.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiOutcome {
    /// Any 2xx response. Body is `Value::Null` when the server sent none.
    Success(Value),
    /// HTTP 401 unauthorized.
    Rejected,
    /// Any other status-carrying failure.
    Failed { code: u16, message: String },
    /// No response at all (connectivity, timeout).
    Unreachable(String),
}

impl ApiOutcome {
    /// Failure detail for log lines, mirroring status-carrying vs
    /// transport-level phrasing.
    pub fn failure_detail(&self) -> String {
        match self {
            ApiOutcome::Success(_) => "no failure".to_string(),
            ApiOutcome::Rejected => "code '401 UNAUTHORIZED'".to_string(),
            ApiOutcome::Failed { code, message } => {
                format!("code '{code}' and message '{message}'")
            }
            ApiOutcome::Unreachable(reason) => format!("message '{reason}'"),
        }
    }
}

/// Port to the HTTP transport executing exchanges against the server.
///
/// Implementations own connectivity policy (timeouts, TLS); the exchange
/// clients only ever see the tagged outcome.
#[async_trait]
pub trait ServerTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ApiOutcome;
}
