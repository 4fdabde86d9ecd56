//! Persistence: the single JSON tournament document.

pub mod config;
pub mod repository;

pub use config::StoreConfig;
pub use repository::{StateStore, StoreError, StoreResult};
