//! Use case for resolving the active room catalog.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use hb_core::catalog::Catalog;
use hb_core::ports::CatalogSourcePort;

/// Use case for loading the room catalog.
///
/// Attempts the remote source once; any failure or an empty result falls
/// back to the built-in default catalog. The call is total: it always
/// returns a non-empty catalog and never surfaces a fetch error.
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    /// Execute the use case.
    pub async fn execute(&self) -> Catalog {
        let span = info_span!("usecase.load_catalog.execute");

        async {
            match self.source.fetch_rooms().await {
                Ok(rooms) if !rooms.is_empty() => {
                    info!(count = rooms.len(), "loaded catalog from remote source");
                    Catalog::remote(rooms)
                }
                Ok(_) => {
                    warn!("remote catalog was empty, using built-in defaults");
                    Catalog::built_in()
                }
                Err(e) => {
                    warn!(error = %e, "remote catalog unavailable, using built-in defaults");
                    Catalog::built_in()
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hb_core::catalog::{default_rooms, CatalogSource};
    use hb_core::Room;

    struct StaticSource(anyhow::Result<Vec<Room>>);

    #[async_trait]
    impl CatalogSourcePort for StaticSource {
        async fn fetch_rooms(&self) -> anyhow::Result<Vec<Room>> {
            match &self.0 {
                Ok(rooms) => Ok(rooms.clone()),
                Err(e) => Err(anyhow::anyhow!("{}", e)),
            }
        }
    }

    #[tokio::test]
    async fn remote_success_yields_remote_catalog() {
        let rooms = default_rooms();
        let usecase = LoadCatalog::new(Arc::new(StaticSource(Ok(rooms.clone()))));

        let catalog = usecase.execute().await;
        assert_eq!(catalog.source, CatalogSource::Remote);
        assert_eq!(catalog.rooms, rooms);
    }

    #[tokio::test]
    async fn unreachable_remote_falls_back_to_defaults() {
        let usecase =
            LoadCatalog::new(Arc::new(StaticSource(Err(anyhow::anyhow!("unreachable")))));

        let catalog = usecase.execute().await;
        assert_eq!(catalog.source, CatalogSource::BuiltIn);
        assert!(catalog.rooms.len() >= 3);
        let names: Vec<_> = catalog.rooms.iter().map(|r| r.name.as_str()).collect();
        assert!(names.contains(&"Deluxe Suite"));
    }

    #[tokio::test]
    async fn empty_remote_falls_back_to_defaults() {
        let usecase = LoadCatalog::new(Arc::new(StaticSource(Ok(Vec::new()))));

        let catalog = usecase.execute().await;
        assert_eq!(catalog.source, CatalogSource::BuiltIn);
        assert!(!catalog.rooms.is_empty());
    }
}
