// crates/domain/src/model/document.rs
use std::collections::HashMap;

use plist_version_shared_kernel::{DomainError, DomainResult};

use super::Value;

/// An ordered string-keyed dictionary.
///
/// Key order is the order entries were inserted in, so a loaded document is
/// written back with its keys in their original positions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert or replace `key`. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up `key`, failing when it is absent.
    pub fn require(&self, key: &str) -> DomainResult<&Value> {
        self.get(key).ok_or_else(|| DomainError::KeyNotFound { key: key.to_owned() })
    }

    /// Look up `key` and require a string value.
    pub fn require_str(&self, key: &str) -> DomainResult<&str> {
        let value = self.require(key)?;
        value.as_str().ok_or_else(|| DomainError::UnexpectedType {
            key: key.to_owned(),
            expected: "a string",
            found: value.kind_name(),
        })
    }

    /// Replace an existing entry of any type and return the previous value.
    ///
    /// Nothing is created: an absent key is an error.
    pub fn replace(&mut self, key: &str, value: Value) -> DomainResult<Value> {
        let idx = self
            .position(key)
            .ok_or_else(|| DomainError::KeyNotFound { key: key.to_owned() })?;
        Ok(std::mem::replace(&mut self.entries[idx].1, value))
    }

    /// Replace an existing string entry and return the previous string.
    ///
    /// The key must already hold a string; nothing is created.
    pub fn replace_str(&mut self, key: &str, value: String) -> DomainResult<String> {
        let idx = self
            .position(key)
            .ok_or_else(|| DomainError::KeyNotFound { key: key.to_owned() })?;
        match &mut self.entries[idx].1 {
            Value::String(current) => Ok(std::mem::replace(current, value)),
            other => Err(DomainError::UnexpectedType {
                key: key.to_owned(),
                expected: "a string",
                found: other.kind_name(),
            }),
        }
    }

    pub fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut doc = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
