//! Process-wide install state tracker.
//!
//! Owns the current install state for the lifetime of the process and
//! runs platform and user events through the pure state machine. Only the
//! sticky dismissed flag is durable; the phase itself starts over on each
//! launch.

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, info};

use hb_core::install::{InstallAction, InstallEvent, InstallPhase, InstallState, InstallStateMachine};
use hb_core::EntityStore;

pub struct InstallTracker {
    store: EntityStore,
    state: Mutex<InstallState>,
}

impl InstallTracker {
    /// Build a tracker with the durable dismissed flag restored from the
    /// store. The phase always starts at `NotAvailable`.
    pub async fn restore(store: EntityStore) -> Result<Self> {
        let dismissed = store.prompt_dismissed().await?;
        Ok(Self {
            store,
            state: Mutex::new(InstallState::new(dismissed)),
        })
    }

    /// Current phase, for status reporting.
    pub async fn phase(&self) -> InstallPhase {
        self.state.lock().await.phase
    }

    /// Whether the prompt surface has been permanently dismissed.
    pub async fn dismissed(&self) -> bool {
        self.state.lock().await.dismissed
    }

    /// Feed an event through the state machine, persisting the dismissed
    /// flag when a transition sets it. Returns the actions left for the
    /// UI layer (showing or hiding the prompt surface, invoking the
    /// native dialog).
    pub async fn handle(&self, event: InstallEvent) -> Result<Vec<InstallAction>> {
        let mut state = self.state.lock().await;
        let (next, actions) = InstallStateMachine::transition(*state, event);

        if next != *state {
            debug!(from = ?state.phase, to = ?next.phase, "install state transition");
        }
        *state = next;

        let mut remaining = Vec::with_capacity(actions.len());
        for action in actions {
            match action {
                InstallAction::PersistDismissed => {
                    self.store.set_prompt_dismissed().await?;
                    info!("install prompt dismissed permanently");
                }
                other => remaining.push(other),
            }
        }
        Ok(remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use hb_core::ports::KeyValueStorePort;
    use tokio::sync::Mutex as AsyncMutex;

    #[derive(Default)]
    struct MapStore(AsyncMutex<std::collections::HashMap<String, String>>);

    #[async_trait]
    impl KeyValueStorePort for MapStore {
        async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
            Ok(self.0.lock().await.get(key).cloned())
        }
        async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.0.lock().await.insert(key.into(), value.into());
            Ok(())
        }
        async fn remove(&self, key: &str) -> anyhow::Result<()> {
            self.0.lock().await.remove(key);
            Ok(())
        }
    }

    fn entity_store() -> EntityStore {
        EntityStore::new(Arc::new(MapStore::default()))
    }

    #[tokio::test]
    async fn capability_then_accept_then_confirm_reaches_installed() {
        let tracker = InstallTracker::restore(entity_store()).await.unwrap();
        assert_eq!(tracker.phase().await, InstallPhase::NotAvailable);

        let actions = tracker.handle(InstallEvent::CapabilityDetected).await.unwrap();
        assert_eq!(tracker.phase().await, InstallPhase::Installable);
        assert!(actions.contains(&InstallAction::ShowPromptSurface));

        tracker.handle(InstallEvent::PromptAccepted).await.unwrap();
        assert_eq!(tracker.phase().await, InstallPhase::Installing);

        tracker.handle(InstallEvent::PlatformConfirmed).await.unwrap();
        assert_eq!(tracker.phase().await, InstallPhase::Installed);
    }

    #[tokio::test]
    async fn dismissal_is_durable_across_tracker_restarts() {
        let store = entity_store();

        let tracker = InstallTracker::restore(store.clone()).await.unwrap();
        tracker.handle(InstallEvent::SurfaceDismissed).await.unwrap();
        assert!(tracker.dismissed().await);

        // A fresh tracker over the same store restores the sticky flag and
        // suppresses the surface on the next capability signal.
        let restarted = InstallTracker::restore(store).await.unwrap();
        assert!(restarted.dismissed().await);

        let actions = restarted
            .handle(InstallEvent::CapabilityDetected)
            .await
            .unwrap();
        assert_eq!(restarted.phase().await, InstallPhase::Installable);
        assert!(!actions.contains(&InstallAction::ShowPromptSurface));
    }

    #[tokio::test]
    async fn dismissal_does_not_change_reported_phase() {
        let tracker = InstallTracker::restore(entity_store()).await.unwrap();
        tracker.handle(InstallEvent::CapabilityDetected).await.unwrap();

        tracker.handle(InstallEvent::SurfaceDismissed).await.unwrap();
        assert_eq!(tracker.phase().await, InstallPhase::Installable);
    }

    #[tokio::test]
    async fn standalone_launch_reports_installed_directly() {
        let tracker = InstallTracker::restore(entity_store()).await.unwrap();
        tracker.handle(InstallEvent::LaunchedInstalled).await.unwrap();
        assert_eq!(tracker.phase().await, InstallPhase::Installed);
    }
}
