//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};
use blog_infra::database::MongoConfig;
use blog_infra::memory::{InMemoryAuthorRepository, InMemoryPostRepository};
use chrono_tz::Tz;
use thiserror::Error;

#[cfg(feature = "mongodb")]
use blog_infra::database::DatabaseConnections;

/// Which store backs the running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    MongoDb,
    InMemory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::MongoDb => "mongodb",
            StoreKind::InMemory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub display_timezone: Tz,
    pub store: StoreKind,
}

/// Why the server could not build its state at startup.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("MongoDB connection failed: {0}")]
    Connection(#[from] RepoError),

    #[error("MONGODB_URI is set but this build has no mongodb feature")]
    MongoDbDisabled,
}

impl AppState {
    /// Build the application state.
    ///
    /// Without a MongoDB config the server runs on the in-memory store. A
    /// configured store that cannot be reached is an error, never a silent
    /// switch to memory.
    pub async fn new(
        db_config: Option<&MongoConfig>,
        display_timezone: Tz,
    ) -> Result<Self, StateError> {
        let state = match db_config {
            Some(config) => Self::connect(config, display_timezone).await?,
            None => {
                tracing::warn!("MONGODB_URI not set. Running without database (in-memory mode).");
                Self::in_memory(display_timezone)
            }
        };

        tracing::info!(store = state.store.as_str(), "Application state initialized");

        Ok(state)
    }

    #[cfg(feature = "mongodb")]
    async fn connect(config: &MongoConfig, display_timezone: Tz) -> Result<Self, StateError> {
        let connections = DatabaseConnections::init(config).await?;
        Ok(Self::with_repositories(
            Arc::new(connections.author_repository()),
            Arc::new(connections.post_repository()),
            display_timezone,
            StoreKind::MongoDb,
        ))
    }

    #[cfg(not(feature = "mongodb"))]
    async fn connect(_config: &MongoConfig, _display_timezone: Tz) -> Result<Self, StateError> {
        Err(StateError::MongoDbDisabled)
    }

    /// State over an empty in-memory store.
    pub fn in_memory(display_timezone: Tz) -> Self {
        Self::with_repositories(
            Arc::new(InMemoryAuthorRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            display_timezone,
            StoreKind::InMemory,
        )
    }

    pub fn with_repositories(
        authors: Arc<dyn AuthorRepository>,
        posts: Arc<dyn PostRepository>,
        display_timezone: Tz,
        store: StoreKind,
    ) -> Self {
        Self {
            posts: PostService::new(authors, posts),
            display_timezone,
            store,
        }
    }
}
