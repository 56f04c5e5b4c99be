//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of external dependencies.

pub mod catalog_source;
pub mod errors;
pub mod navigation;
pub mod store;

pub use catalog_source::CatalogSourcePort;
pub use errors::{AuthError, BookingError, SearchError};
pub use navigation::{NavTarget, NavigationPort};
pub use store::KeyValueStorePort;
