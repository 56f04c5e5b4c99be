//! Remote catalog source port.
//!
//! A read-only endpoint returning the room catalog. Absence or failure is
//! an expected outcome; the catalog loader absorbs it into the built-in
//! fallback rather than propagating.

use async_trait::async_trait;

use crate::catalog::Room;

#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    /// Fetch the room catalog from the remote source.
    ///
    /// A single attempt per call, no retry.
    async fn fetch_rooms(&self) -> anyhow::Result<Vec<Room>>;
}
