//! In-memory store - used when MongoDB is not configured, and as the test
//! double for the HTTP layer.
//!
//! Data is lost on process restart.

mod authors;
mod posts;

pub use authors::InMemoryAuthorRepository;
pub use posts::InMemoryPostRepository;

#[cfg(test)]
mod tests;
