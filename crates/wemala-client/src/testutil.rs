//! Shared test doubles for the exchange clients.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use wemala_core::{
    config::Config,
    domain::Credentials,
    status::{BotStatus, StatusListener, StatusPublisher},
    transport::{ApiOutcome, ApiRequest, ServerTransport},
};

use crate::{AuthenticationClient, MessageExchangeClient, RegistrationClient};

/// Scripted transport: hands out queued outcomes and records every request.
pub struct MockTransport {
    script: Mutex<VecDeque<ApiOutcome>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn scripted(outcomes: Vec<ApiOutcome>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ServerTransport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> ApiOutcome {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock transport script exhausted")
    }
}

/// Records every published status; `last` mirrors a last-value-wins observer.
#[derive(Default)]
pub struct LastStatus {
    seen: Mutex<Vec<BotStatus>>,
}

impl LastStatus {
    pub fn subscribe_to(publisher: &StatusPublisher) -> Arc<Self> {
        let probe = Arc::new(Self::default());
        publisher.subscribe(probe.clone());
        probe
    }

    pub fn last(&self) -> Option<BotStatus> {
        self.seen.lock().unwrap().last().copied()
    }

    pub fn all(&self) -> Vec<BotStatus> {
        self.seen.lock().unwrap().clone()
    }

    pub fn count_of(&self, status: BotStatus) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|s| **s == status)
            .count()
    }
}

impl StatusListener for LastStatus {
    fn notify(&self, status: BotStatus) {
        self.seen.lock().unwrap().push(status);
    }
}

pub fn test_config() -> Arc<Config> {
    Arc::new(Config {
        server_url: "http://server.unit.test".to_string(),
        bot: Credentials {
            identifier: "unit@test.bot".to_string(),
            password: "unit-test-bot-password".to_string(),
            username: "unit-test-bot-username".to_string(),
        },
        poll_interval: Duration::from_millis(5_000),
    })
}

pub fn auth_client(
    transport: &Arc<MockTransport>,
    status: &StatusPublisher,
) -> AuthenticationClient {
    let cfg = test_config();
    let transport: Arc<dyn ServerTransport> = transport.clone();
    let registration = RegistrationClient::new(cfg.clone(), transport.clone(), status.clone());
    AuthenticationClient::new(cfg, transport, status.clone(), registration)
}

pub fn exchange_client(
    transport: &Arc<MockTransport>,
    status: &StatusPublisher,
) -> MessageExchangeClient {
    let cfg = test_config();
    let auth = auth_client(transport, status);
    let transport: Arc<dyn ServerTransport> = transport.clone();
    MessageExchangeClient::new(cfg, transport, status.clone(), auth)
}
