//! Use case for carrying a chosen room to the booking view.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, info_span, Instrument};

use hb_core::ids::RoomId;
use hb_core::ports::{NavTarget, NavigationPort};
use hb_core::EntityStore;

/// Persists the selected room id, unconditionally replacing any prior
/// selection, then hands off to the booking view.
pub struct SelectRoom {
    store: EntityStore,
    navigation: Arc<dyn NavigationPort>,
}

impl SelectRoom {
    pub fn new(store: EntityStore, navigation: Arc<dyn NavigationPort>) -> Self {
        Self { store, navigation }
    }

    /// Execute the use case.
    pub async fn execute(&self, room_id: RoomId) -> Result<()> {
        let span = info_span!("usecase.select_room.execute");

        async {
            self.store.set_selected_room(room_id).await?;
            info!(%room_id, "room selection recorded");

            self.navigation.navigate(NavTarget::Booking).await?;
            Ok(())
        }
        .instrument(span)
        .await
    }
}
