//! JSON serialization of resource bundles.
//!
//! Two shapes are accepted:
//!
//! - a **record**: one flat `key -> value` object for a single bundle;
//! - a **document**: `namespace -> locale -> key -> value`, many bundles.
//!
//! A data directory stores one record per bundle at
//! `<dir>/<namespace>/<locale>.json`.
//!
//! ```
//! use ftui_locale::source;
//!
//! let bundles = source::parse_document(r#"{
//!     "validate": { "da": { "missingMessage": "Værdien er påkrævet." } }
//! }"#).unwrap();
//! assert_eq!(bundles.len(), 1);
//! assert_eq!(bundles[0].text("missingMessage").unwrap(), "Værdien er påkrævet.");
//! ```
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Malformed JSON | Syntax error, number as a value | [`LocaleError::Parse`] |
//! | Repeated key | Same key twice in one object | [`LocaleError::DuplicateKey`] |
//! | Repeated bundle | Pair twice in one document | [`LocaleError::DuplicateBundle`] |
//! | Bad sequence | `months-*` with 11 entries | [`LocaleError::InvalidLength`] |
//! | Unreadable file | Permissions, missing directory | [`LocaleError::Io`] |

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::bundle::ResourceBundle;
use crate::error::{LocaleError, Result};
use crate::value::Value;

/// JSON object read as ordered `(key, value)` pairs.
///
/// `serde_json::Map` keeps only the last of two equal keys; collecting pairs
/// lets the caller report the duplicate instead.
struct Pairs<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Pairs<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairsVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
            type Value = Pairs<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    pairs.push((key, value));
                }
                Ok(Pairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor(PhantomData))
    }
}

/// Parses records, documents and data directories.
///
/// Every bundle it yields has passed the same key and sequence-length checks
/// as [`ResourceBundle::new`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Loader;

impl Loader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn build(
        &self,
        namespace: String,
        locale: String,
        entries: Vec<(String, Value)>,
    ) -> Result<ResourceBundle> {
        ResourceBundle::new(namespace, locale, entries)
    }

    /// Parse a flat `key -> value` record into one bundle.
    pub fn parse_record(
        &self,
        namespace: &str,
        locale: &str,
        json: &str,
    ) -> Result<ResourceBundle> {
        let Pairs(entries) = serde_json::from_str::<Pairs<Value>>(json)?;
        self.build(namespace.to_owned(), locale.to_owned(), entries)
    }

    /// Parse a `namespace -> locale -> key -> value` document.
    ///
    /// Bundles are returned in document order.
    pub fn parse_document(&self, json: &str) -> Result<Vec<ResourceBundle>> {
        let Pairs(namespaces) = serde_json::from_str::<Pairs<Pairs<Pairs<Value>>>>(json)?;
        let mut seen = HashSet::new();
        let mut bundles = Vec::new();
        for (namespace, Pairs(locales)) in namespaces {
            for (locale, Pairs(entries)) in locales {
                if !seen.insert((namespace.clone(), locale.clone())) {
                    return Err(LocaleError::DuplicateBundle {
                        namespace,
                        locale,
                    });
                }
                bundles.push(self.build(namespace.clone(), locale, entries)?);
            }
        }
        Ok(bundles)
    }

    /// Read every `<namespace>/<locale>.json` record under `dir`.
    ///
    /// Files without a `.json` extension and entries directly under `dir`
    /// that are not directories are skipped. Results are sorted by
    /// namespace, then locale.
    pub fn read_dir(&self, dir: &Path) -> Result<Vec<ResourceBundle>> {
        let mut bundles = Vec::new();
        for ns_dir in sorted_entries(dir)? {
            if !ns_dir.is_dir() {
                continue;
            }
            let Some(namespace) = file_name(&ns_dir, false) else {
                continue;
            };
            for record in sorted_entries(&ns_dir)? {
                if !record.is_file() || record.extension().is_none_or(|ext| ext != "json") {
                    tracing::trace!(path = %record.display(), "skipping non-record file");
                    continue;
                }
                let Some(locale) = file_name(&record, true) else {
                    continue;
                };
                let json =
                    fs::read_to_string(&record).map_err(|err| LocaleError::io(&record, &err))?;
                let bundle = self
                    .parse_record(&namespace, &locale, &json)
                    .map_err(|err| with_path(err, &record))?;
                bundles.push(bundle);
            }
        }
        Ok(bundles)
    }
}

fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>> {
    let read = fs::read_dir(dir).map_err(|err| LocaleError::io(dir, &err))?;
    let mut paths = Vec::new();
    for entry in read {
        let entry = entry.map_err(|err| LocaleError::io(dir, &err))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

fn file_name(path: &Path, stem: bool) -> Option<String> {
    let name = if stem {
        path.file_stem()
    } else {
        path.file_name()
    };
    name.and_then(|n| n.to_str()).map(str::to_owned)
}

/// Prefix parse errors with the file they came from.
fn with_path(err: LocaleError, path: &Path) -> LocaleError {
    match err {
        LocaleError::Parse(msg) => LocaleError::Parse(format!("{}: {msg}", path.display())),
        other => other,
    }
}

/// Parse a record with a default [`Loader`].
pub fn parse_record(namespace: &str, locale: &str, json: &str) -> Result<ResourceBundle> {
    Loader::new().parse_record(namespace, locale, json)
}

/// Parse a document with a default [`Loader`].
pub fn parse_document(json: &str) -> Result<Vec<ResourceBundle>> {
    Loader::new().parse_document(json)
}

/// Read a data directory with a default [`Loader`].
pub fn read_dir(dir: impl AsRef<Path>) -> Result<Vec<ResourceBundle>> {
    Loader::new().read_dir(dir.as_ref())
}
