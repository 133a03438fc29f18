//! Storage layer for the ARGO data browser
//!
//! One `SQLite` file holding two independent tables: `profiles`, replaced
//! wholesale by the loader, and `annotations`, append-only.

mod error;
pub mod loader;
mod schema;
mod storage;
#[cfg(test)]
mod tests;

pub use error::StorageError;
pub use loader::{LoadError, LoadSummary, load_csv, read_profiles, read_profiles_csv};
pub use storage::Storage;
