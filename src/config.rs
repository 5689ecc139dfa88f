use crate::load::DEFAULT_BATCH_SIZE;
use mongodb::Client;
use mongodb::options::ClientOptions;
use std::env;
use std::time::Duration;

fn env_string(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_millis(key: &str, default_millis: u64) -> Duration {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or_else(|| Duration::from_millis(default_millis))
}

/// Connection settings for the document store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub batch_size: usize,
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env_string("MONGO_URI", "mongodb://localhost:27017/"),
            database: env_string("MONGO_DB", "genovisio"),
            batch_size: env_usize("MONGO_BATCH_SIZE", DEFAULT_BATCH_SIZE),
            server_selection_timeout: env_duration_millis(
                "MONGO_SERVER_SELECTION_TIMEOUT_MS",
                30_000,
            ),
        }
    }

    /// Build a client for the configured URI.
    ///
    /// The loader and finder take their client as an explicit argument; this
    /// helper serves binaries and tests that own the connection lifecycle.
    pub async fn client(&self) -> Result<Client, mongodb::error::Error> {
        let mut options = ClientOptions::parse(&self.uri).await?;
        options.server_selection_timeout = Some(self.server_selection_timeout);
        Client::with_options(options)
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
