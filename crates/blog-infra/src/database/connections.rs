use std::time::Duration;

#[cfg(feature = "mongodb")]
use mongodb::{Client, Database, bson::doc, options::ClientOptions};

#[cfg(feature = "mongodb")]
use blog_core::error::RepoError;

#[cfg(feature = "mongodb")]
use super::{MongoAuthorRepository, MongoPostRepository};

/// Configuration for the MongoDB store.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string (e.g., mongodb://localhost:27017)
    pub uri: String,
    /// Database holding the `authors` and `posts` collections
    pub database: String,
    /// Connect and server-selection timeout
    pub connect_timeout: Duration,
    /// Application name reported to the server
    pub app_name: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "blog".to_string(),
            connect_timeout: Duration::from_secs(10),
            app_name: "blog-server".to_string(),
        }
    }
}

/// Shared store handle.
///
/// The driver's `Client` pools connections internally and is cheap to clone;
/// one instance is created at startup and handed to every repository.
#[cfg(feature = "mongodb")]
#[derive(Clone)]
pub struct DatabaseConnections {
    pub client: Client,
    pub main: Database,
}

#[cfg(feature = "mongodb")]
impl DatabaseConnections {
    /// Connect and ping the configured database.
    pub async fn init(config: &MongoConfig) -> Result<Self, RepoError> {
        tracing::info!(database = %config.database, "Initializing MongoDB connection...");

        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;
        let main = client.database(&config.database);

        main.run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        tracing::info!(database = %config.database, "MongoDB connected");

        Ok(Self { client, main })
    }

    pub fn author_repository(&self) -> MongoAuthorRepository {
        MongoAuthorRepository::new(&self.main)
    }

    pub fn post_repository(&self) -> MongoPostRepository {
        MongoPostRepository::new(&self.main)
    }
}
