use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use wemala_client::{
    http::HttpTransport, AuthenticationClient, MessageExchangeClient, RegistrationClient,
};
use wemala_core::{
    config::Config,
    status::{LogStatusListener, StatusPublisher},
    transport::ServerTransport,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    wemala_core::logging::init("wemala-bot")?;

    let cfg = Arc::new(Config::load().context("failed to load bot configuration")?);

    let transport: Arc<dyn ServerTransport> =
        Arc::new(HttpTransport::new(Duration::from_secs(10)));
    let status = StatusPublisher::new();
    status.subscribe(Arc::new(LogStatusListener));

    let registration = RegistrationClient::new(cfg.clone(), transport.clone(), status.clone());
    let auth = AuthenticationClient::new(cfg.clone(), transport.clone(), status.clone(), registration);
    let exchange = MessageExchangeClient::new(cfg.clone(), transport, status, auth);

    info!(
        "Polling wemala server at {} every {:?}",
        cfg.server_url, cfg.poll_interval
    );

    let mut ticker = tokio::time::interval(cfg.poll_interval);
    loop {
        ticker.tick().await;
        for message in exchange.retrieve_messages().await {
            info!(
                "Received message '{}' in channel '{}' from '{}' at '{}': {}",
                message.identifier,
                message.links.channel.href,
                message.links.sender.href,
                message.create_date,
                message.text
            );
        }
    }
}
