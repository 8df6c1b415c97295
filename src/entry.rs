//! Owned key/value pair stored by the table.

use core::mem;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    key: String,
    value: String,
}

impl Entry {
    pub(crate) fn new(key: String, value: String) -> Self {
        Self { key, value }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub(crate) fn matches(&self, key: &str) -> bool {
        self.key.as_bytes() == key.as_bytes()
    }

    /// Swap in a new value, keeping the stored key. Returns the old value.
    pub(crate) fn replace_value(&mut self, value: String) -> String {
        mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> String {
        self.value
    }
}
