//! Application state shared across request handlers.

use std::sync::Arc;

use crate::dispatch::Dispatcher;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    dispatcher: Dispatcher,
}

impl AppState {
    /// Create a new application state.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(AppStateInner { dispatcher }),
        }
    }

    /// Get a reference to the dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.inner.dispatcher
    }
}
