// crates/domain/src/model/value.rs
use std::time::SystemTime;

use super::Document;

/// Property-list integers keep their signedness so they serialize back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integer {
    Signed(i64),
    Unsigned(u64),
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

/// Every value type a property list can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(Integer),
    Real(f64),
    Boolean(bool),
    Date(SystemTime),
    Data(Vec<u8>),
    Array(Vec<Value>),
    Dictionary(Document),
    /// Object reference used by keyed archives.
    Uid(u64),
}

impl Value {
    /// Human readable type name, used in error messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "a string",
            Self::Integer(_) => "an integer",
            Self::Real(_) => "a real",
            Self::Boolean(_) => "a boolean",
            Self::Date(_) => "a date",
            Self::Data(_) => "data",
            Self::Array(_) => "an array",
            Self::Dictionary(_) => "a dictionary",
            Self::Uid(_) => "a uid",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}
