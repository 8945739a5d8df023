// crates/usecase/src/lib.rs
//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`update_version`]: read, bump or overwrite one version field of a document
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod update_version;

pub use update_version::{EncodingPolicy, UpdateRequest, UpdateVersionField};
