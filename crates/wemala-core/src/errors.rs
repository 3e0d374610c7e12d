/// Core error type for the bot.
///
/// The exchange clients never surface this to callers: their public contracts
/// resolve to absent/empty results plus published status events. It covers the
/// ambient concerns around them (configuration, logging setup).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
