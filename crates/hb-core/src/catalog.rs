//! Room catalog domain models
//!
//! The catalog is the active list of bookable rooms, resolved from a
//! remote source with a built-in fallback. Rooms are read-mostly and
//! immutable after seeding.

use serde::{Deserialize, Serialize};

use crate::ids::RoomId;

/// A bookable room record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    /// Nightly rate in whole currency units.
    pub price: f64,
    /// Maximum number of guests.
    pub capacity: u32,
    /// Floor area in square feet.
    pub size: u32,
    pub amenities: Vec<String>,
    pub image: String,
}

/// Where a resolved catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Remote,
    BuiltIn,
}

/// A resolved room catalog together with its provenance.
///
/// Resolution is total: a failed or empty remote fetch collapses into the
/// built-in default rather than surfacing an error to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub rooms: Vec<Room>,
    pub source: CatalogSource,
}

/// Number of rooms shown on the landing view.
pub const FEATURED_COUNT: usize = 3;

impl Catalog {
    pub fn remote(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            source: CatalogSource::Remote,
        }
    }

    pub fn built_in() -> Self {
        Self {
            rooms: default_rooms(),
            source: CatalogSource::BuiltIn,
        }
    }

    /// The rooms highlighted on the landing view (first three).
    pub fn featured(&self) -> &[Room] {
        let n = self.rooms.len().min(FEATURED_COUNT);
        &self.rooms[..n]
    }
}

/// The built-in default catalog, used when no remote source is reachable
/// and as the first-run seed for the room collection.
pub fn default_rooms() -> Vec<Room> {
    vec![
        Room {
            id: RoomId::new(1),
            name: "Deluxe Suite".into(),
            description: "Spacious suite with king bed and city view".into(),
            price: 299.0,
            capacity: 2,
            size: 450,
            amenities: vec!["WiFi".into(), "TV".into(), "Minibar".into(), "AC".into()],
            image: "room1.jpg".into(),
        },
        Room {
            id: RoomId::new(2),
            name: "Executive Room".into(),
            description: "Modern room with workspace and premium amenities".into(),
            price: 199.0,
            capacity: 2,
            size: 350,
            amenities: vec![
                "WiFi".into(),
                "TV".into(),
                "Work Desk".into(),
                "Coffee Maker".into(),
            ],
            image: "room2.jpg".into(),
        },
        Room {
            id: RoomId::new(3),
            name: "Family Suite".into(),
            description: "Perfect for families with separate bedrooms".into(),
            price: 399.0,
            capacity: 4,
            size: 600,
            amenities: vec![
                "WiFi".into(),
                "2 TVs".into(),
                "Kitchenette".into(),
                "Sofa Bed".into(),
            ],
            image: "room3.jpg".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rooms_have_unique_ids() {
        let rooms = default_rooms();
        let mut ids: Vec<_> = rooms.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), rooms.len());
    }

    #[test]
    fn built_in_catalog_contains_the_three_seed_rooms() {
        let catalog = Catalog::built_in();
        assert!(catalog.rooms.len() >= 3);

        let find = |name: &str| catalog.rooms.iter().find(|r| r.name == name).unwrap();

        let deluxe = find("Deluxe Suite");
        assert_eq!(deluxe.price, 299.0);
        assert_eq!(deluxe.capacity, 2);

        let executive = find("Executive Room");
        assert_eq!(executive.price, 199.0);
        assert_eq!(executive.capacity, 2);

        let family = find("Family Suite");
        assert_eq!(family.price, 399.0);
        assert_eq!(family.capacity, 4);
    }

    #[test]
    fn featured_returns_at_most_three_rooms() {
        let catalog = Catalog::built_in();
        assert_eq!(catalog.featured().len(), 3);

        let short = Catalog::remote(default_rooms().into_iter().take(1).collect());
        assert_eq!(short.featured().len(), 1);
    }

    #[test]
    fn room_round_trips_through_json() {
        let room = default_rooms().remove(0);
        let json = serde_json::to_string(&room).unwrap();
        let back: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(back, room);
    }
}
