//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the contract template store behind a trait object so the same
//! handlers run against Postgres or the in-memory store.

use std::sync::Arc;

use crate::store::ContractTemplateStore;

/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContractTemplateStore>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ContractTemplateStore>) -> Self {
        Self { store }
    }
}
