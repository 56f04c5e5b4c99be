//! Use case for ending the authenticated session.

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use hb_core::EntityStore;

/// Removes the session entirely. A no-op when already anonymous.
pub struct Logout {
    store: EntityStore,
}

impl Logout {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Result<()> {
        let span = info_span!("usecase.logout.execute");

        async {
            self.store.clear_session().await?;
            info!("session cleared");
            Ok(())
        }
        .instrument(span)
        .await
    }
}
