//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{RedirectResolver, ShortenService};

/// Process-wide service handles, cloned per request by Axum.
///
/// The resolution cache lives inside the resolver as an owned component;
/// nothing here is ambient global state, so tests build a fresh `AppState`
/// per run.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_resolver: Arc<RedirectResolver>,
}
