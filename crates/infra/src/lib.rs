// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod plist_store;

pub use plist_store::PlistDocumentStore;
