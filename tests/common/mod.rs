//! Shared utilities for integration tests.

use std::sync::Arc;

use modlog::{CaptureSink, Registry};

/// Build a registry that records every forwarded call.
pub fn capturing_registry() -> (Arc<Registry>, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink::new());
    let registry = Arc::new(Registry::new(sink.clone()));
    (registry, sink)
}
