//! Core domain entities representing the business data model.
//!
//! The service persists a single entity: [`UrlMapping`]. A separate
//! [`NewUrlMapping`] struct carries creation input, following the
//! new-type-for-creation pattern.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
