use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use wemala_core::transport::{ApiOutcome, ApiRequest, HttpMethod, ServerTransport};

/// reqwest-backed transport for the wemala REST API.
///
/// Owns the timeout policy; the exchange clients only see tagged outcomes.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(10))
    }
}

#[async_trait]
impl ServerTransport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> ApiOutcome {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
            HttpMethod::Patch => self.http.patch(&request.url),
        };

        if let Some(token) = &request.token {
            // Raw token, no "Bearer " prefix; the server expects it verbatim.
            builder = builder.header(header::AUTHORIZATION, token.0.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return ApiOutcome::Unreachable(e.to_string()),
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
            ApiOutcome::Success(body)
        } else if status == StatusCode::UNAUTHORIZED {
            ApiOutcome::Rejected
        } else {
            ApiOutcome::Failed {
                code: status.as_u16(),
                message: text.chars().take(200).collect(),
            }
        }
    }
}
