// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`document_store`]: loading and persisting property-list documents
//!
//! The use case depends on these traits only, never on a concrete format
//! library.

#![allow(clippy::multiple_crate_versions)]

pub mod document_store;

pub use document_store::{DocumentEncoding, DocumentStore, LoadedDocument};
