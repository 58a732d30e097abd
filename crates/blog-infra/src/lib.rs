//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `mongodb` (default) - MongoDB store via the official driver
//! - `minimal` - No external store, in-memory only

pub mod database;
mod ids;
pub mod memory;

pub use database::MongoConfig;
pub use ids::new_document_id;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};

// Re-exports - MongoDB
#[cfg(feature = "mongodb")]
pub use database::{DatabaseConnections, MongoAuthorRepository, MongoPostRepository};
