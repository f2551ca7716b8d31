//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`cache`] - In-memory cache-aside layer for redirect lookups
//! - [`persistence`] - Repository implementations (PostgreSQL and in-memory)

pub mod cache;
pub mod persistence;
