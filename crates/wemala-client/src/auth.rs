use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{error, info};

use wemala_core::{
    config::Config,
    domain::AuthToken,
    status::{BotStatus, StatusPublisher},
    transport::{ApiOutcome, ApiRequest, ServerTransport},
};

use crate::registration::RegistrationClient;

/// Obtains a bearer token from the wemala server.
///
/// A 401 on login means the bot is unknown: it registers itself once and
/// retries the login exactly once. Any other failure class, and any failure
/// of the retry, is terminal for the call and published as
/// [`BotStatus::AuthenticationFailed`]. A healthy login stays silent.
pub struct AuthenticationClient {
    cfg: Arc<Config>,
    transport: Arc<dyn ServerTransport>,
    status: StatusPublisher,
    registration: RegistrationClient,
}

impl AuthenticationClient {
    pub fn new(
        cfg: Arc<Config>,
        transport: Arc<dyn ServerTransport>,
        status: StatusPublisher,
        registration: RegistrationClient,
    ) -> Self {
        Self {
            cfg,
            transport,
            status,
            registration,
        }
    }

    pub async fn authenticate(&self) -> Option<AuthToken> {
        match self.login().await {
            ApiOutcome::Rejected => {
                info!("Wemala server rejected the bot credentials, registering bot");
                if !self.registration.register_bot().await {
                    self.status.publish(BotStatus::AuthenticationFailed);
                    return None;
                }
                // A second rejection here is terminal; registration runs once.
                let retry = self.login().await;
                self.complete(retry)
            }
            outcome => self.complete(outcome),
        }
    }

    /// Turn a login outcome into the token, or report the failure.
    fn complete(&self, outcome: ApiOutcome) -> Option<AuthToken> {
        if let ApiOutcome::Success(body) = &outcome {
            if let Some(token) = token_from(body) {
                return Some(token);
            }
            error!("Authenticate bot on wemala server returned no token in the response body");
        } else {
            error!(
                "Authenticate bot on wemala server failed with {}",
                outcome.failure_detail()
            );
        }
        self.status.publish(BotStatus::AuthenticationFailed);
        None
    }

    async fn login(&self) -> ApiOutcome {
        let url = format!("{}/api/auth/login", self.cfg.server_url);
        let body = json!({
            "identifier": self.cfg.bot.identifier,
            "password": self.cfg.bot.password,
        });
        self.transport.execute(ApiRequest::post(url, None, body)).await
    }
}

fn token_from(body: &Value) -> Option<AuthToken> {
    body.get("token")
        .and_then(|t| t.as_str())
        .filter(|t| !t.trim().is_empty())
        .map(|t| AuthToken(t.to_string()))
}
