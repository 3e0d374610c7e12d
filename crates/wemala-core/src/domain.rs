use serde::Deserialize;

/// Bot identity used for login and registration.
///
/// Sourced from configuration, never mutated by the exchange clients.
#[derive(Clone, Debug)]
pub struct Credentials {
    /// Email-like login identifier.
    pub identifier: String,
    pub password: String,
    pub username: String,
}

/// Opaque bearer token returned by the login endpoint.
///
/// Never persisted; each logical operation fetches a fresh one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken(pub String);

/// An unread chat message as delivered by the server.
///
/// Paging metadata and link relations the bot does not use (`self`, `status`)
/// are ignored on decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub identifier: String,
    pub text: String,
    #[serde(default)]
    pub create_date: String,
    #[serde(default, rename = "_links")]
    pub links: MessageLinks,
}

/// HAL-style link relations attached to a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageLinks {
    #[serde(default)]
    pub channel: Link,
    #[serde(default)]
    pub sender: Link,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
}
