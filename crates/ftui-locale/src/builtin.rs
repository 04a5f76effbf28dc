//! Locale data embedded at compile time.
//!
//! The records live under `data/<namespace>/<locale>.json`, the same layout
//! [`source::read_dir`](crate::source::read_dir) reads at runtime. Nothing
//! is registered until a caller asks for it.

use crate::bundle::{ResourceBundle, namespace};
use crate::error::Result;
use crate::source::Loader;
use crate::store::LocaleStore;

/// Locale tags with embedded data.
pub const LOCALES: &[&str] = &["da"];

struct Embedded {
    namespace: &'static str,
    locale: &'static str,
    json: &'static str,
}

const EMBEDDED: &[Embedded] = &[
    Embedded {
        namespace: namespace::NUMBER,
        locale: "da",
        json: include_str!("../data/number/da.json"),
    },
    Embedded {
        namespace: namespace::GREGORIAN,
        locale: "da",
        json: include_str!("../data/gregorian/da.json"),
    },
    Embedded {
        namespace: namespace::VALIDATE,
        locale: "da",
        json: include_str!("../data/validate/da.json"),
    },
];

/// Parse every embedded record.
pub fn bundles() -> Result<Vec<ResourceBundle>> {
    let loader = Loader::new();
    EMBEDDED
        .iter()
        .map(|e| loader.parse_record(e.namespace, e.locale, e.json))
        .collect()
}

/// Register every embedded bundle in `store`.
pub fn load_into(store: &mut LocaleStore) -> Result<()> {
    for bundle in bundles()? {
        store.register(bundle)?;
    }
    Ok(())
}
