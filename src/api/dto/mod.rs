//! Data Transfer Objects for the HTTP surface.

pub mod shorten;

pub use shorten::{ShortenRequest, ShortenResponse};
