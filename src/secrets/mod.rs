//! Secret store abstraction
//!
//! Credentials are fetched by scope and key from an external secret store.
//! The store is behind a small trait so the sink can be built against a
//! static in-memory store in tests.

mod store;


pub use store::{EnvSecretStore, SecretStore, StaticSecretStore};
