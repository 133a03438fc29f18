//! Core types and constants for the ARGO data browser
//!
//! This crate contains domain types shared across all other crates.

mod annotation;
pub mod constants;
mod env_config;
mod error;
mod filter;
mod profile;

pub use annotation::*;
pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use filter::*;
pub use profile::*;
