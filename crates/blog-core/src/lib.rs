//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the post/author model, the repository ports and the
//! post service, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::PostService;
