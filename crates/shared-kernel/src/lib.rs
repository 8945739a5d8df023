// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    DomainError, DomainResult, ErrorCategory, ErrorContext, InfraResult, InfrastructureError,
    PlistVersionError, Result,
};

pub mod error;
