//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations over the repository and cache abstractions,
//! providing a clean API for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - write path: validate,
//!   encode, collision check, persist
//! - [`services::redirect_resolver::RedirectResolver`] - read path: cached
//!   key-to-URL resolution

pub mod services;
