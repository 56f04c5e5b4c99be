//! # hb-core
//!
//! Core domain models and business logic for the hotel booking demo.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod booking;
pub mod catalog;
pub mod ids;
pub mod install;
pub mod ports;
pub mod session;
pub mod store;
pub mod user;

// Re-export commonly used types at the crate root
pub use booking::{Booking, SearchCriteria, SearchForm};
pub use catalog::{Catalog, CatalogSource, Room};
pub use ids::{BookingId, RoomId, UserId};
pub use install::{InstallAction, InstallEvent, InstallPhase, InstallState};
pub use session::Session;
pub use store::EntityStore;
pub use user::{Role, User};
