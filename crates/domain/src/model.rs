// crates/domain/src/model.rs
pub mod document;
pub mod value;

pub use document::Document;
pub use value::{Integer, Value};
