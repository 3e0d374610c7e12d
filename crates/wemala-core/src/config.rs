use std::{env, fs, path::Path, time::Duration};

use crate::{domain::Credentials, errors::Error, Result};

/// Typed configuration for the bot.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the wemala server, without a trailing slash.
    pub server_url: String,
    pub bot: Credentials,
    pub poll_interval: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let server_url = required("WEMALA_SERVER_URL")?
            .trim_end_matches('/')
            .to_string();

        let bot = Credentials {
            identifier: required("WEMALA_BOT_IDENTIFIER")?,
            password: required("WEMALA_BOT_PASSWORD")?,
            username: required("WEMALA_BOT_USERNAME")?,
        };

        let poll_interval =
            Duration::from_millis(env_u64("WEMALA_POLL_INTERVAL_MS").unwrap_or(5_000));

        Ok(Self {
            server_url,
            bot,
            poll_interval,
        })
    }
}

fn required(key: &str) -> Result<String> {
    env_str(key)
        .and_then(non_empty)
        .ok_or_else(|| Error::Config(format!("{key} environment variable is required")))
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}
