#![forbid(unsafe_code)]

//! Locale resource bundles for FrankenTUI.
//!
//! Stores immutable `(namespace, locale) -> key -> value` tables: number
//! symbols, Gregorian calendar names and patterns, and form validation
//! messages. Values are either a single string or an ordered list of strings
//! (month names, day names, ...). Lookups return the stored data verbatim;
//! pattern interpretation and locale fallback belong to the caller.
//!
//! ```
//! use ftui_locale::{LocaleStore, Value, namespace};
//!
//! let store = LocaleStore::with_builtin().unwrap();
//! assert_eq!(
//!     store.get(namespace::GREGORIAN, "da", "field-year").unwrap(),
//!     &Value::from("år")
//! );
//! let months = store.list(namespace::GREGORIAN, "da", "months-format-wide").unwrap();
//! assert_eq!(months.first().map(String::as_str), Some("januar"));
//! assert_eq!(months.last().map(String::as_str), Some("december"));
//! ```

pub mod bundle;
#[cfg(feature = "builtin")]
pub mod builtin;
pub mod config;
pub mod error;
pub mod slot;
pub mod source;
pub mod store;
pub mod value;
pub mod views;

pub use bundle::{ResourceBundle, namespace};
pub use config::StoreConfig;
pub use error::{LocaleError, Result};
pub use slot::StoreSlot;
pub use store::{CoverageReport, LocaleCoverage, LocaleStore};
pub use value::{Value, ValueKind, sequence_len};
pub use views::{CalendarNames, NumberSymbols, ValidationMessages};
