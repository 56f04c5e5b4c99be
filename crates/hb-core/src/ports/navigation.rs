//! Navigation port.
//!
//! Page navigation is an external collaborator action; use cases signal
//! the target through this port after a successful state change.

use anyhow::Result;

/// Views a use case may hand control to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    /// Search results listing.
    Results,
    /// Booking form for the selected room.
    Booking,
}

#[async_trait::async_trait]
pub trait NavigationPort: Send + Sync {
    async fn navigate(&self, target: NavTarget) -> Result<()>;
}
