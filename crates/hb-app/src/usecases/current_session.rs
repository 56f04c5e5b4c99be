//! Use case for reading the current authentication state.

use anyhow::Result;
use tracing::{info_span, Instrument};

use hb_core::{EntityStore, Session};

/// Reads the session from the store; `None` means anonymous.
pub struct CurrentSession {
    store: EntityStore,
}

impl CurrentSession {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Result<Option<Session>> {
        let span = info_span!("usecase.current_session.execute");

        async { self.store.session().await }.instrument(span).await
    }
}
