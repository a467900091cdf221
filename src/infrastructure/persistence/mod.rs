//! SQLite repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements over the embedded database file.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - Link storage, lookup, and click counting

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
