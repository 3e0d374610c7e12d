//! Exchange clients for the wemala chat server.
//!
//! Three services cooperate per operation: the message exchange client asks
//! the authentication client for a token, which on a 401 registers the bot
//! once and retries the login once. Failures never escape a public call;
//! they become absent/empty results plus a published [`BotStatus`] event.
//!
//! [`BotStatus`]: wemala_core::status::BotStatus

pub mod auth;
pub mod http;
pub mod messages;
pub mod registration;

#[cfg(test)]
pub(crate) mod testutil;

pub use auth::AuthenticationClient;
pub use messages::MessageExchangeClient;
pub use registration::RegistrationClient;
