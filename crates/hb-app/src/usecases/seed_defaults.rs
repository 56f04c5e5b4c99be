//! Use case for first-run seeding of the store collections.

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use hb_core::catalog::default_rooms;
use hb_core::store::keys;
use hb_core::user::demo_user;
use hb_core::EntityStore;

/// Seeds the room, booking, and user collections on first run.
///
/// Each collection is checked and written independently; a key that is
/// already present is left untouched, so repeated calls are no-ops. The
/// user collection is never auto-regenerated after this.
pub struct SeedDefaults {
    store: EntityStore,
}

impl SeedDefaults {
    pub fn new(store: EntityStore) -> Self {
        Self { store }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Result<()> {
        let span = info_span!("usecase.seed_defaults.execute");

        async {
            if !self.store.contains(keys::ROOMS).await? {
                self.store.set_rooms(&default_rooms()).await?;
                info!("seeded default room catalog");
            }

            if !self.store.contains(keys::BOOKINGS).await? {
                self.store.set_bookings(&[]).await?;
                info!("seeded empty booking collection");
            }

            if !self.store.contains(keys::USERS).await? {
                self.store.set_users(&[demo_user()]).await?;
                info!("seeded demo user account");
            }

            Ok(())
        }
        .instrument(span)
        .await
    }
}
