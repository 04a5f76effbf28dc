//! Locale store: read-only lookup of `(namespace, locale, key)`.
//!
//! # Invariants
//!
//! 1. **Load once**: a `(namespace, locale)` pair is registered at most once;
//!    a second registration fails with [`LocaleError::DuplicateBundle`] and
//!    leaves the existing bundle untouched.
//!
//! 2. **Exact retrieval**: `get` returns the stored value with no
//!    transformation and no fallback to other locales.
//!
//! 3. **Thread safety**: `LocaleStore` is `Send + Sync`. Registration needs
//!    `&mut self`; once the store is shared behind `&` or `Arc` it cannot
//!    change, so readers take no locks.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing bundle | Namespace or locale never loaded | [`LocaleError::MissingBundle`] |
//! | Missing key | Key not in a loaded bundle | [`LocaleError::MissingKey`] |
//! | Duplicate bundle | Same pair loaded twice | [`LocaleError::DuplicateBundle`] |
//! | Wrong kind | `text` on a list or `list` on a string | [`LocaleError::KindMismatch`] |

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::bundle::{ResourceBundle, namespace};
use crate::config::StoreConfig;
use crate::error::{LocaleError, Result};
use crate::source::Loader;
use crate::value::Value;
use crate::views::{CalendarNames, NumberSymbols, ValidationMessages};

/// Immutable-after-load store of resource bundles.
///
/// # Example
///
/// ```
/// use ftui_locale::{LocaleStore, Value};
///
/// let mut store = LocaleStore::new();
/// store
///     .load("gregorian", "da", [
///         ("field-year", Value::from("år")),
///         ("eraAbbr", Value::from(["f.Kr.", "e.Kr."])),
///     ])
///     .unwrap();
///
/// assert_eq!(store.text("gregorian", "da", "field-year").unwrap(), "år");
/// assert_eq!(store.item("gregorian", "da", "eraAbbr", 1).unwrap(), "e.Kr.");
/// assert!(store.get("gregorian", "sv", "field-year").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    namespaces: HashMap<String, HashMap<String, ResourceBundle>>,
}

impl LocaleStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the embedded bundles.
    #[cfg(feature = "builtin")]
    pub fn with_builtin() -> Result<Self> {
        let mut store = Self::new();
        crate::builtin::load_into(&mut store)?;
        Ok(store)
    }

    /// Build a store from configuration: embedded bundles first, then the
    /// data directory.
    ///
    /// A directory record for a pair that is already embedded is a
    /// [`LocaleError::DuplicateBundle`]; nothing is overridden.
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        let mut store = Self::new();
        if config.include_builtin {
            #[cfg(feature = "builtin")]
            for bundle in crate::builtin::bundles()? {
                store.register(bundle)?;
            }
            #[cfg(not(feature = "builtin"))]
            tracing::warn!("builtin locale data requested but the `builtin` feature is disabled");
        }

        if let Some(dir) = &config.data_dir {
            for bundle in Loader::new().read_dir(dir)? {
                store.register(bundle)?;
            }
        }

        tracing::info!(
            bundles = store.len(),
            builtin = config.include_builtin,
            data_dir = ?config.data_dir,
            "locale store ready"
        );
        Ok(store)
    }

    /// Register a bundle built from `entries`.
    ///
    /// Sequence shapes are validated before registration.
    pub fn load<I, K, V>(&mut self, namespace: &str, locale: &str, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        if self.contains(namespace, locale) {
            return Err(LocaleError::DuplicateBundle {
                namespace: namespace.to_owned(),
                locale: locale.to_owned(),
            });
        }
        self.register(ResourceBundle::new(namespace, locale, entries)?)
    }

    /// Register an already-built bundle.
    ///
    /// Bundles can only be built through checked constructors, so the
    /// sequence-length invariant holds for everything registered here.
    pub fn register(&mut self, bundle: ResourceBundle) -> Result<()> {
        let locales = self
            .namespaces
            .entry(bundle.namespace().to_owned())
            .or_default();
        match locales.entry(bundle.locale().to_owned()) {
            Entry::Occupied(_) => Err(LocaleError::DuplicateBundle {
                namespace: bundle.namespace().to_owned(),
                locale: bundle.locale().to_owned(),
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    namespace = bundle.namespace(),
                    locale = bundle.locale(),
                    entries = bundle.len(),
                    "registered locale bundle"
                );
                slot.insert(bundle);
                Ok(())
            }
        }
    }

    /// Register every bundle of a JSON document.
    ///
    /// Bundles preceding a failing one stay registered.
    pub fn load_document(&mut self, json: &str) -> Result<()> {
        for bundle in Loader::new().parse_document(json)? {
            self.register(bundle)?;
        }
        Ok(())
    }

    /// The bundle for a `(namespace, locale)` pair.
    pub fn bundle(&self, namespace: &str, locale: &str) -> Result<&ResourceBundle> {
        self.namespaces
            .get(namespace)
            .and_then(|locales| locales.get(locale))
            .ok_or_else(|| {
                tracing::trace!(namespace, locale, "locale bundle miss");
                LocaleError::MissingBundle {
                    namespace: namespace.to_owned(),
                    locale: locale.to_owned(),
                }
            })
    }

    /// Look up a value exactly as stored.
    pub fn get(&self, namespace: &str, locale: &str, key: &str) -> Result<&Value> {
        self.bundle(namespace, locale)?.get(key)
    }

    /// Look up a scalar string.
    pub fn text(&self, namespace: &str, locale: &str, key: &str) -> Result<&str> {
        self.bundle(namespace, locale)?.text(key)
    }

    /// Look up an ordered sequence.
    pub fn list(&self, namespace: &str, locale: &str, key: &str) -> Result<&[String]> {
        self.bundle(namespace, locale)?.list(key)
    }

    /// Look up one element of a sequence.
    pub fn item(&self, namespace: &str, locale: &str, key: &str, index: usize) -> Result<&str> {
        self.bundle(namespace, locale)?.item(key, index)
    }

    /// Whether a bundle is registered for the pair.
    #[must_use]
    pub fn contains(&self, namespace: &str, locale: &str) -> bool {
        self.namespaces
            .get(namespace)
            .is_some_and(|locales| locales.contains_key(locale))
    }

    /// Calendar names and patterns for `locale`.
    pub fn calendar(&self, locale: &str) -> Result<CalendarNames<'_>> {
        self.bundle(namespace::GREGORIAN, locale)
            .map(CalendarNames::new)
    }

    /// Number symbols and patterns for `locale`.
    pub fn number_symbols(&self, locale: &str) -> Result<NumberSymbols<'_>> {
        self.bundle(namespace::NUMBER, locale).map(NumberSymbols::new)
    }

    /// Form validation messages for `locale`.
    pub fn validation_messages(&self, locale: &str) -> Result<ValidationMessages<'_>> {
        self.bundle(namespace::VALIDATE, locale)
            .map(ValidationMessages::new)
    }

    /// Number of registered bundles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All registered namespaces, sorted.
    #[must_use]
    pub fn namespaces(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.namespaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Locales registered in `namespace`, sorted. Empty for an unknown namespace.
    #[must_use]
    pub fn locales(&self, namespace: &str) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .namespaces
            .get(namespace)
            .map(|locales| locales.keys().map(String::as_str).collect())
            .unwrap_or_default();
        tags.sort_unstable();
        tags
    }

    /// Every registered `(namespace, locale)` pair, sorted.
    #[must_use]
    pub fn bundles(&self) -> Vec<(&str, &str)> {
        let mut ids: Vec<(&str, &str)> = self
            .namespaces
            .iter()
            .flat_map(|(ns, locales)| locales.keys().map(move |l| (ns.as_str(), l.as_str())))
            .collect();
        ids.sort_unstable();
        ids
    }

    // -----------------------------------------------------------------
    // Coverage
    // -----------------------------------------------------------------

    /// Every key defined by some locale of `namespace`, sorted and deduplicated.
    #[must_use]
    pub fn all_keys(&self, namespace: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .namespaces
            .get(namespace)
            .into_iter()
            .flat_map(HashMap::values)
            .flat_map(|bundle| bundle.keys().map(String::from))
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys from `reference_keys` that `(namespace, locale)` lacks, sorted.
    ///
    /// An unregistered bundle lacks every key.
    #[must_use]
    pub fn missing_keys(
        &self,
        namespace: &str,
        locale: &str,
        reference_keys: &[&str],
    ) -> Vec<String> {
        let bundle = self.bundle(namespace, locale).ok();
        let mut missing: Vec<String> = reference_keys
            .iter()
            .filter(|key| !bundle.is_some_and(|b| b.contains_key(key)))
            .map(|key| (*key).to_owned())
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Per-locale key coverage for `namespace`.
    ///
    /// The reference set is [`all_keys`](Self::all_keys). A locale is only
    /// credited with keys its own bundle defines.
    #[must_use]
    pub fn coverage_report(&self, namespace: &str) -> CoverageReport {
        let reference = self.all_keys(namespace);
        let reference: Vec<&str> = reference.iter().map(String::as_str).collect();

        let locales = self
            .locales(namespace)
            .into_iter()
            .map(|locale| {
                let missing = self.missing_keys(namespace, locale, &reference);
                LocaleCoverage {
                    locale: locale.to_owned(),
                    present: reference.len() - missing.len(),
                    coverage_percent: percent(reference.len() - missing.len(), reference.len()),
                    missing,
                }
            })
            .collect();

        CoverageReport {
            namespace: namespace.to_owned(),
            total_keys: reference.len(),
            locales,
        }
    }
}

/// `part` as a percentage of `whole`; an empty whole counts as full.
fn percent(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        return 100.0;
    }
    part as f32 * 100.0 / whole as f32
}

/// Key coverage of every locale in one namespace.
#[derive(Debug, Clone)]
pub struct CoverageReport {
    pub namespace: String,
    /// Size of the key union over the namespace's locales.
    pub total_keys: usize,
    /// One row per locale, in tag order.
    pub locales: Vec<LocaleCoverage>,
}

/// One locale's row in a [`CoverageReport`].
#[derive(Debug, Clone)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Keys of the union this locale's bundle defines.
    pub present: usize,
    /// Keys of the union this locale's bundle lacks, sorted.
    pub missing: Vec<String>,
    /// `present / total_keys`, scaled to 0..=100.
    pub coverage_percent: f32,
}
