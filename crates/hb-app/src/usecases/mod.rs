//! Business logic use cases
//!
//! Each use case corresponds to one discrete external event: page load
//! (seed + catalog), search submit, room pick, login submit, logout.

pub mod authenticate;
pub mod create_booking;
pub mod current_session;
pub mod load_catalog;
pub mod logout;
pub mod record_search;
pub mod seed_defaults;
pub mod select_room;
