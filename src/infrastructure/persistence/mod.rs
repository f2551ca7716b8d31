//! Repository implementations.
//!
//! - [`PgMappingRepository`] - PostgreSQL-backed store, the production path
//! - [`MemoryMappingRepository`] - DashMap-backed store for integration tests
//!   and local runs without a database

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::MemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
