//! # hb-app
//!
//! Application layer for the hotel booking demo: one use case per
//! user-visible operation, plus the process-wide install tracker. The UI
//! layer is an external collaborator that constructs these with explicit
//! store and port handles and invokes `execute` in response to events.

pub mod install_tracker;
pub mod usecases;

pub use install_tracker::InstallTracker;
pub use usecases::authenticate::Authenticate;
pub use usecases::create_booking::{BookingRequest, CreateBooking};
pub use usecases::current_session::CurrentSession;
pub use usecases::load_catalog::LoadCatalog;
pub use usecases::logout::Logout;
pub use usecases::record_search::RecordSearch;
pub use usecases::seed_defaults::SeedDefaults;
pub use usecases::select_room::SelectRoom;

pub use hb_core::ports::{AuthError, BookingError, SearchError};
