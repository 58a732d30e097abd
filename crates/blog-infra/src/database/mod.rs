//! MongoDB connection management and repositories.

mod connections;

#[cfg(feature = "mongodb")]
mod documents;
#[cfg(feature = "mongodb")]
pub mod mongo_repo;

pub use connections::MongoConfig;

#[cfg(feature = "mongodb")]
pub use connections::DatabaseConnections;

#[cfg(feature = "mongodb")]
pub use mongo_repo::{MongoAuthorRepository, MongoPostRepository};
