use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

/// Discrete outcome signal broadcast to observers after a network-backed
/// operation. `Ok` is only emitted on the read path; a healthy login or send
/// stays silent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotStatus {
    Ok,
    AuthenticationFailed,
    RegistrationFailed,
    ReceiveMessagesFailed,
    MarkMessagesFailed,
}

/// Observer of bot status events.
pub trait StatusListener: Send + Sync {
    fn notify(&self, status: BotStatus);
}

/// Fire-and-forget fan-out of status events to registered listeners.
///
/// Clones share the listener list, so the same publisher can be handed to
/// every exchange client at construction. `publish` imposes no back-pressure
/// and returns nothing; listeners are notified in registration order.
#[derive(Clone, Default)]
pub struct StatusPublisher {
    listeners: Arc<RwLock<Vec<Arc<dyn StatusListener>>>>,
}

impl StatusPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Arc<dyn StatusListener>) {
        self.listeners
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }

    pub fn publish(&self, status: BotStatus) {
        // Snapshot the list so a listener can subscribe more listeners
        // without deadlocking the fan-out.
        let listeners = self
            .listeners
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in listeners {
            listener.notify(status);
        }
    }
}

/// Listener that mirrors every status event into the log.
pub struct LogStatusListener;

impl StatusListener for LogStatusListener {
    fn notify(&self, status: BotStatus) {
        match status {
            BotStatus::Ok => debug!("wemala exchange completed with status {status:?}"),
            other => warn!("wemala exchange reported status {other:?}"),
        }
    }
}
