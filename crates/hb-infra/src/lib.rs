//! # hb-infra
//!
//! Infrastructure implementations of the hb-core ports: the durable
//! file-backed key-value store, an in-memory store for tests and
//! tooling, and the HTTP remote catalog source.

pub mod catalog;
pub mod store;

pub use catalog::http_source::HttpCatalogSource;
pub use store::file_store::FileKeyValueStore;
pub use store::memory_store::InMemoryKeyValueStore;
