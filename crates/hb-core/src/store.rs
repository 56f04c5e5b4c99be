//! Typed accessors over the key-value store port.
//!
//! `EntityStore` wraps the raw store handle and owns the JSON
//! serialization of each entity collection and session key. Every key is
//! read and written independently; callers must not assume atomicity
//! across keys.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::booking::{Booking, SearchCriteria};
use crate::catalog::Room;
use crate::ids::RoomId;
use crate::ports::KeyValueStorePort;
use crate::session::Session;
use crate::user::User;

/// Store key names, kept stable across page loads.
pub mod keys {
    pub const ROOMS: &str = "hotelRooms";
    pub const BOOKINGS: &str = "hotelBookings";
    pub const USERS: &str = "hotelUsers";
    pub const SEARCH_CRITERIA: &str = "searchCriteria";
    pub const SELECTED_ROOM: &str = "selectedRoom";
    pub const SESSION: &str = "hotelUser";
    pub const PROMPT_DISMISSED: &str = "pwaPromptDismissed";
}

/// Typed view over the durable key-value store.
#[derive(Clone)]
pub struct EntityStore {
    store: Arc<dyn KeyValueStorePort>,
}

impl EntityStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Whether a value exists under `key`, without deserializing it.
    pub async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.store.get(key).await?.is_some())
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key).await? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .with_context(|| format!("failed to parse stored value under '{}'", key))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("failed to serialize value for '{}'", key))?;
        self.store.set(key, &raw).await?;
        tracing::debug!(key, "store key updated");
        Ok(())
    }

    // === Collections ===

    pub async fn rooms(&self) -> Result<Option<Vec<Room>>> {
        self.get_json(keys::ROOMS).await
    }

    pub async fn set_rooms(&self, rooms: &[Room]) -> Result<()> {
        self.set_json(keys::ROOMS, &rooms).await
    }

    pub async fn bookings(&self) -> Result<Option<Vec<Booking>>> {
        self.get_json(keys::BOOKINGS).await
    }

    pub async fn set_bookings(&self, bookings: &[Booking]) -> Result<()> {
        self.set_json(keys::BOOKINGS, &bookings).await
    }

    pub async fn users(&self) -> Result<Option<Vec<User>>> {
        self.get_json(keys::USERS).await
    }

    pub async fn set_users(&self, users: &[User]) -> Result<()> {
        self.set_json(keys::USERS, &users).await
    }

    // === Search / selection handoff ===

    pub async fn search_criteria(&self) -> Result<Option<SearchCriteria>> {
        self.get_json(keys::SEARCH_CRITERIA).await
    }

    pub async fn set_search_criteria(&self, criteria: &SearchCriteria) -> Result<()> {
        self.set_json(keys::SEARCH_CRITERIA, criteria).await
    }

    pub async fn selected_room(&self) -> Result<Option<RoomId>> {
        self.get_json(keys::SELECTED_ROOM).await
    }

    pub async fn set_selected_room(&self, room_id: RoomId) -> Result<()> {
        self.set_json(keys::SELECTED_ROOM, &room_id).await
    }

    // === Session ===

    pub async fn session(&self) -> Result<Option<Session>> {
        self.get_json(keys::SESSION).await
    }

    pub async fn set_session(&self, session: &Session) -> Result<()> {
        self.set_json(keys::SESSION, session).await
    }

    pub async fn clear_session(&self) -> Result<()> {
        self.store.remove(keys::SESSION).await
    }

    // === Install prompt dismissal ===

    pub async fn prompt_dismissed(&self) -> Result<bool> {
        Ok(self.get_json::<bool>(keys::PROMPT_DISMISSED).await?.unwrap_or(false))
    }

    pub async fn set_prompt_dismissed(&self) -> Result<()> {
        self.set_json(keys::PROMPT_DISMISSED, &true).await
    }
}
