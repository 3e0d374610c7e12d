use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use wemala_core::{
    config::Config,
    status::{BotStatus, StatusPublisher},
    transport::{ApiOutcome, ApiRequest, ServerTransport},
};

/// Registers the bot's credentials with the wemala server.
///
/// `register_bot` always resolves to a bool; a failure is logged, published
/// as [`BotStatus::RegistrationFailed`] and reported as `false`.
pub struct RegistrationClient {
    cfg: Arc<Config>,
    transport: Arc<dyn ServerTransport>,
    status: StatusPublisher,
}

impl RegistrationClient {
    pub fn new(
        cfg: Arc<Config>,
        transport: Arc<dyn ServerTransport>,
        status: StatusPublisher,
    ) -> Self {
        Self {
            cfg,
            transport,
            status,
        }
    }

    pub async fn register_bot(&self) -> bool {
        info!("Register new bot on wemala server");

        let url = format!("{}/api/user", self.cfg.server_url);
        let body = json!({
            "email": self.cfg.bot.identifier,
            "password": self.cfg.bot.password,
            "username": self.cfg.bot.username,
        });

        match self.transport.execute(ApiRequest::post(url, None, body)).await {
            ApiOutcome::Success(_) => true,
            outcome => {
                error!(
                    "Register bot on wemala server failed with {}",
                    outcome.failure_detail()
                );
                self.status.publish(BotStatus::RegistrationFailed);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{test_config, LastStatus, MockTransport};
    use serde_json::Value;
    use wemala_core::transport::HttpMethod;

    fn client(transport: &Arc<MockTransport>, status: &StatusPublisher) -> RegistrationClient {
        let transport: Arc<dyn ServerTransport> = transport.clone();
        RegistrationClient::new(test_config(), transport, status.clone())
    }

    #[tokio::test]
    async fn register_bot_on_wemala_server() {
        let transport = MockTransport::scripted(vec![ApiOutcome::Success(Value::Null)]);
        let status = StatusPublisher::new();
        let probe = LastStatus::subscribe_to(&status);

        assert!(client(&transport, &status).register_bot().await);
        assert_eq!(probe.last(), None);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://server.unit.test/api/user");
        assert_eq!(requests[0].token, None);
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["email"], "unit@test.bot");
        assert_eq!(body["password"], "unit-test-bot-password");
        assert_eq!(body["username"], "unit-test-bot-username");
    }

    #[tokio::test]
    async fn server_responds_bad_request() {
        let transport = MockTransport::scripted(vec![ApiOutcome::Failed {
            code: 400,
            message: "bad request".to_string(),
        }]);
        let status = StatusPublisher::new();
        let probe = LastStatus::subscribe_to(&status);

        assert!(!client(&transport, &status).register_bot().await);
        assert_eq!(probe.last(), Some(BotStatus::RegistrationFailed));
    }

    #[tokio::test]
    async fn server_responds_conflict() {
        let transport = MockTransport::scripted(vec![ApiOutcome::Failed {
            code: 409,
            message: "conflict".to_string(),
        }]);
        let status = StatusPublisher::new();
        let probe = LastStatus::subscribe_to(&status);

        assert!(!client(&transport, &status).register_bot().await);
        assert_eq!(probe.last(), Some(BotStatus::RegistrationFailed));
    }

    #[tokio::test]
    async fn server_is_unreachable() {
        let transport = MockTransport::scripted(vec![ApiOutcome::Unreachable(
            "connection refused".to_string(),
        )]);
        let status = StatusPublisher::new();
        let probe = LastStatus::subscribe_to(&status);

        assert!(!client(&transport, &status).register_bot().await);
        assert_eq!(probe.all(), vec![BotStatus::RegistrationFailed]);
    }
}
