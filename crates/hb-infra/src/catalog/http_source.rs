//! HTTP remote catalog source.
//!
//! Fetches the room catalog from a read-only JSON endpoint. A single
//! attempt per call; any transport error, non-success status, or
//! malformed body is returned as an error for the loader to absorb into
//! its built-in fallback.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use hb_core::catalog::Room;
use hb_core::ports::CatalogSourcePort;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct HttpCatalogSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCatalogSource {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CatalogSourcePort for HttpCatalogSource {
    async fn fetch_rooms(&self) -> anyhow::Result<Vec<Room>> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("catalog endpoint returned status {}", response.status());
        }

        let rooms: Vec<Room> = response.json().await?;
        debug!(count = rooms.len(), "fetched remote catalog");
        Ok(rooms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_rooms_parses_remote_catalog() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/rooms.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": 7,
                    "name": "Penthouse",
                    "description": "Top floor suite",
                    "price": 899.0,
                    "capacity": 4,
                    "size": 1200,
                    "amenities": ["WiFi"],
                    "image": "room7.jpg"
                }]"#,
            )
            .create_async()
            .await;

        let source =
            HttpCatalogSource::new(format!("{}/api/rooms.json", server.url())).unwrap();
        let rooms = source.fetch_rooms().await.unwrap();

        mock.assert_async().await;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].name, "Penthouse");
        assert_eq!(rooms[0].capacity, 4);
    }

    #[tokio::test]
    async fn test_fetch_rooms_fails_on_non_success_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/rooms.json")
            .with_status(500)
            .create_async()
            .await;

        let source =
            HttpCatalogSource::new(format!("{}/api/rooms.json", server.url())).unwrap();
        assert!(source.fetch_rooms().await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_rooms_fails_on_malformed_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/rooms.json")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let source =
            HttpCatalogSource::new(format!("{}/api/rooms.json", server.url())).unwrap();
        assert!(source.fetch_rooms().await.is_err());
    }
}
