pub mod config;
pub mod error;
pub mod intersect;
pub mod load;
pub mod record;

use env_logger::Env;
use std::sync::Once;

static LOGGER: Once = Once::new();

/// Initialize the process-wide logger. Safe to call more than once.
pub fn init_logger() {
    LOGGER.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    });
}

#[cfg_attr(not(test), allow(dead_code))]
pub mod test_support {
    pub use database::{TestMongo, TestMongoError};

    pub mod database {
        use mongodb::Client;
        use mongodb::options::ClientOptions;
        use std::time::Duration;
        use testcontainers::{ContainerAsync, core::error::TestcontainersError, runners::AsyncRunner};
        use testcontainers_modules::mongo::Mongo;
        use thiserror::Error;
        use uuid::Uuid;

        #[derive(Debug, Error)]
        pub enum TestMongoError {
            #[error("mongodb error: {0}")]
            Mongo(#[from] mongodb::error::Error),
            #[error("container error: {0}")]
            Container(#[from] TestcontainersError),
        }

        /// Ephemeral MongoDB factory for integration tests.
        pub struct TestMongo {
            client: Client,
            database_name: String,
            container: Option<ContainerAsync<Mongo>>,
        }

        impl TestMongo {
            /// Provision a fresh database by launching a disposable MongoDB container.
            pub async fn new() -> Result<Self, TestMongoError> {
                let container = Mongo::default().start().await?;

                let host = container.get_host().await?.to_string();
                let port = container.get_host_port_ipv4(27017).await?;
                let uri = format!("mongodb://{}:{}/", host, port);

                let mut options = ClientOptions::parse(&uri).await?;
                options.server_selection_timeout = Some(Duration::from_secs(30));
                let client = Client::with_options(options)?;

                let database_name = format!("test_{}", Uuid::new_v4().simple());

                Ok(Self {
                    client,
                    database_name,
                    container: Some(container),
                })
            }

            /// Client connected to the containerized server.
            pub fn client(&self) -> &Client {
                &self.client
            }

            /// Name of the per-test database.
            pub fn database_name(&self) -> &str {
                &self.database_name
            }

            /// Drop the per-test database and stop the container.
            pub async fn close(mut self) -> Result<(), TestMongoError> {
                self.client.database(&self.database_name).drop().await?;
                if let Some(container) = self.container.take() {
                    container.stop().await?;
                }
                Ok(())
            }
        }
    }
}
