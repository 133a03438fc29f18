//! Service layer for the ARGO data browser
//!
//! Centralizes filter validation and annotation rules between the HTTP/CLI
//! front ends and the store. Every call re-executes against the store;
//! nothing is cached.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod annotation_service;
mod error;
mod profile_service;

pub use annotation_service::AnnotationService;
pub use error::ServiceError;
pub use profile_service::ProfileService;
