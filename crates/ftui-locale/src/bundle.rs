//! A single `(namespace, locale)` resource bundle.
//!
//! # Invariants
//!
//! 1. **Unique keys**: construction fails with [`LocaleError::DuplicateKey`]
//!    instead of letting a later entry shadow an earlier one.
//!
//! 2. **Fixed sequence lengths**: every `months-*` key holds 12 strings,
//!    `days-*` 7, `quarters-*` 4 and `era*` 2 (see [`sequence_len`]). The
//!    only constructor checks this, so no bundle of another shape exists.
//!
//! 3. **Immutable**: there is no way to add, replace or remove an entry once
//!    the bundle exists.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::{LocaleError, Result};
use crate::value::{Value, ValueKind, sequence_len};

/// Well-known namespace names.
pub mod namespace {
    /// Number symbols and number patterns (`decimal`, `group`, `percentFormat`, ...).
    pub const NUMBER: &str = "number";
    /// Gregorian calendar names and date/time patterns.
    pub const GREGORIAN: &str = "gregorian";
    /// Form validation messages.
    pub const VALIDATE: &str = "validate";
}

/// Key/value strings for one namespace in one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    namespace: String,
    locale: String,
    entries: HashMap<String, Value>,
}

impl ResourceBundle {
    /// Build a bundle and check sequence shapes.
    pub fn new<I, K, V>(
        namespace: impl Into<String>,
        locale: impl Into<String>,
        entries: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let bundle = Self::from_entries(namespace, locale, entries)?;
        bundle.validate_shapes()?;
        Ok(bundle)
    }

    fn from_entries<I, K, V>(
        namespace: impl Into<String>,
        locale: impl Into<String>,
        entries: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let namespace = namespace.into();
        let locale = locale.into();
        let iter = entries.into_iter();
        let mut map = HashMap::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            match map.entry(key.into()) {
                Entry::Occupied(slot) => {
                    return Err(LocaleError::DuplicateKey {
                        namespace,
                        locale,
                        key: slot.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(value.into());
                }
            }
        }
        Ok(Self {
            namespace,
            locale,
            entries: map,
        })
    }

    fn validate_shapes(&self) -> Result<()> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        // Sorted so the reported key is deterministic.
        keys.sort_unstable();
        for key in keys {
            let Some(expected) = sequence_len(key) else {
                continue;
            };
            match &self.entries[key] {
                Value::Text(_) => return Err(LocaleError::ScalarForSequence { key: key.clone() }),
                Value::List(items) if items.len() != expected => {
                    return Err(LocaleError::InvalidLength {
                        key: key.clone(),
                        expected,
                        found: items.len(),
                    });
                }
                Value::List(_) => {}
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up a value, reporting a [`LocaleError::MissingKey`] on a miss.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries.get(key).ok_or_else(|| {
            tracing::trace!(
                namespace = %self.namespace,
                locale = %self.locale,
                key,
                "locale key miss"
            );
            LocaleError::MissingKey {
                namespace: self.namespace.clone(),
                locale: self.locale.clone(),
                key: key.to_owned(),
            }
        })
    }

    /// Look up a scalar string.
    pub fn text(&self, key: &str) -> Result<&str> {
        match self.get(key)? {
            Value::Text(s) => Ok(s),
            Value::List(_) => Err(LocaleError::KindMismatch {
                key: key.to_owned(),
                expected: ValueKind::Text,
                found: ValueKind::List,
            }),
        }
    }

    /// Look up an ordered sequence.
    pub fn list(&self, key: &str) -> Result<&[String]> {
        match self.get(key)? {
            Value::List(items) => Ok(items),
            Value::Text(_) => Err(LocaleError::KindMismatch {
                key: key.to_owned(),
                expected: ValueKind::List,
                found: ValueKind::Text,
            }),
        }
    }

    /// Look up one element of a sequence by index.
    pub fn item(&self, key: &str, index: usize) -> Result<&str> {
        let items = self.list(key)?;
        items
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| LocaleError::IndexOutOfRange {
                key: key.to_owned(),
                index,
                len: items.len(),
            })
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over all entries (unordered).
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
