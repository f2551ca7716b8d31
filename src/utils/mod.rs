//! Shared helpers.

pub mod key_codec;
