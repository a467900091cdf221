//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization. The shorten
//! and stats endpoints speak camelCase; the links listing exposes stored
//! rows in snake_case.

pub mod health;
pub mod links;
pub mod shorten;
pub mod stats;
