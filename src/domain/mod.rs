//! Domain layer containing business entities and logic.
//!
//! Defines the persisted entity and the repository contract independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Repository traits define contracts implemented by the infrastructure layer;
//! business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
