//! Shared application state for the page fetch service.

use std::sync::Arc;

use crate::content::ContentSource;

#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    /// Anti-forgery token requests must present.
    pub expected_token: Arc<str>,
}

impl AppState {
    pub fn new(source: Arc<dyn ContentSource>, expected_token: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            expected_token: expected_token.into(),
        }
    }
}
