// crates/domain/src/lib.rs
//! # Domain
//!
//! Property-list document model and the version bump rules.
//!
//! - [`model`]: ordered document and the closed value type it stores
//! - [`version`]: which field is targeted and how it is rewritten

#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod version;

pub use model::{Document, Integer, Value};
pub use version::{INCREMENT_KEYWORD, VersionTarget, WriteMode, increment_major};
