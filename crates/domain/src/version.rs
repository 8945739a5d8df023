// crates/domain/src/version.rs
pub mod target;
pub mod write_mode;

pub use target::VersionTarget;
pub use write_mode::{INCREMENT_KEYWORD, WriteMode, increment_major};
