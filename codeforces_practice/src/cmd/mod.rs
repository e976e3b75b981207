pub mod render;
pub mod server;

use anyhow::{Context, Result};
use codeforces_practice_libs::{
    codeforces::client::DEFAULT_API_URL, contest::DEFAULT_RECENT_SIZE, CodeforcesClient,
};
use std::{env, str::FromStr, time::Duration};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reads `key` from the environment, falling back to `default` when it is unset.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value.parse::<T>().with_context(|| {
            let message = format!("{} has an invalid value `{}`", key, value);
            tracing::error!(message);
            message
        }),
        Err(_) => {
            tracing::info!(
                "{} environment variable is not set. Default value `{}` will be used.",
                key,
                default.to_string()
            );
            Ok(default)
        }
    }
}

pub fn create_client() -> Result<CodeforcesClient> {
    let api_url: String = env_or("CODEFORCES_API_URL", String::from(DEFAULT_API_URL))?;
    let timeout: u64 = env_or("CODEFORCES_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

    CodeforcesClient::new(&api_url, Duration::from_secs(timeout)).with_context(|| {
        let message = format!("couldn't create Codeforces API client for {}", api_url);
        tracing::error!(message);
        message
    })
}

/// `--recent-size` takes precedence over `RECENT_CONTEST_SIZE`.
pub fn resolve_recent_size(arg: Option<usize>) -> Result<usize> {
    match arg {
        Some(size) => Ok(size),
        None => env_or("RECENT_CONTEST_SIZE", DEFAULT_RECENT_SIZE),
    }
}
