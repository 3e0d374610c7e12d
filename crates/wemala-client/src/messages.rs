use std::sync::Arc;

use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

use wemala_core::{
    config::Config,
    domain::{AuthToken, Message},
    status::{BotStatus, StatusPublisher},
    transport::{ApiOutcome, ApiRequest, ServerTransport},
};

use crate::auth::AuthenticationClient;

/// Paged envelope around the unread-messages listing.
#[derive(Debug, Default, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    content: Vec<Message>,
}

/// Reads unread messages (marking each read) and posts outgoing messages.
///
/// Every call authenticates fresh; there is no token cache. Mark-as-read
/// failures are isolated per message and never remove a message from the
/// returned set. Send failures are logged but publish no status event; only
/// the read path feeds operational health signals.
pub struct MessageExchangeClient {
    cfg: Arc<Config>,
    transport: Arc<dyn ServerTransport>,
    status: StatusPublisher,
    auth: AuthenticationClient,
}

impl MessageExchangeClient {
    pub fn new(
        cfg: Arc<Config>,
        transport: Arc<dyn ServerTransport>,
        status: StatusPublisher,
        auth: AuthenticationClient,
    ) -> Self {
        Self {
            cfg,
            transport,
            status,
            auth,
        }
    }

    /// Snapshot of currently unread messages, in server order.
    ///
    /// Empty when authentication or the listing itself fails; authentication
    /// reports its own failure, so no event is published for that case here.
    pub async fn retrieve_messages(&self) -> Vec<Message> {
        let Some(token) = self.auth.authenticate().await else {
            return Vec::new();
        };

        let messages = self.load_unread(&token).await;
        for message in &messages {
            self.mark_as_read(&message.identifier, &token).await;
        }

        messages
    }

    pub async fn send_message(&self, channel_identifier: &str, text: &str) {
        if channel_identifier.trim().is_empty() {
            warn!("Could not send message to channel because the channel identifier is blank");
            return;
        }
        if text.trim().is_empty() {
            warn!("Could not send blank message to channel '{channel_identifier}'");
            return;
        }

        let Some(token) = self.auth.authenticate().await else {
            error!(
                "Could not send message to channel '{channel_identifier}' because authentication failed"
            );
            return;
        };

        let url = format!("{}/api/message", self.cfg.server_url);
        let body = json!({
            "text": text,
            "channelIdentifier": channel_identifier,
        });

        match self
            .transport
            .execute(ApiRequest::post(url, Some(token), body))
            .await
        {
            ApiOutcome::Success(_) => {}
            // Send failures publish no status event.
            outcome => error!(
                "Send message to channel '{channel_identifier}' on wemala server failed with {}",
                outcome.failure_detail()
            ),
        }
    }

    async fn load_unread(&self, token: &AuthToken) -> Vec<Message> {
        let url = format!(
            "{}/api/messages?status=SEND&status=RECEIVED",
            self.cfg.server_url
        );

        match self
            .transport
            .execute(ApiRequest::get(url, Some(token.clone())))
            .await
        {
            ApiOutcome::Success(body) => match serde_json::from_value::<MessageResponse>(body) {
                Ok(response) => {
                    self.status.publish(BotStatus::Ok);
                    response.content
                }
                Err(e) => {
                    error!("Retrieve messages from wemala server returned an undecodable body: {e}");
                    self.status.publish(BotStatus::ReceiveMessagesFailed);
                    Vec::new()
                }
            },
            outcome => {
                error!(
                    "Retrieve messages from wemala server failed with {}",
                    outcome.failure_detail()
                );
                self.status.publish(BotStatus::ReceiveMessagesFailed);
                Vec::new()
            }
        }
    }

    async fn mark_as_read(&self, identifier: &str, token: &AuthToken) {
        let url = format!("{}/api/message/{identifier}/read", self.cfg.server_url);

        match self
            .transport
            .execute(ApiRequest::patch(url, Some(token.clone())))
            .await
        {
            ApiOutcome::Success(_) => self.status.publish(BotStatus::Ok),
            outcome => {
                error!(
                    "Mark message '{identifier}' as read on wemala server failed with {}",
                    outcome.failure_detail()
                );
                self.status.publish(BotStatus::MarkMessagesFailed);
            }
        }
    }
}
