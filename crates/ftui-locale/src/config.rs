//! Store configuration.

use std::path::PathBuf;

/// Environment variable naming a data directory of `<namespace>/<locale>.json` records.
pub const ENV_LOCALE_DIR: &str = "FTUI_LOCALE_DIR";
/// Truthy value skips the embedded bundles.
pub const ENV_NO_BUILTIN: &str = "FTUI_LOCALE_NO_BUILTIN";

/// Configuration consumed by [`LocaleStore::from_config`](crate::LocaleStore::from_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Register the bundles embedded in the crate.
    pub include_builtin: bool,
    /// Directory of additional records, if any.
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Read configuration from `FTUI_LOCALE_*` environment variables.
    ///
    /// Unset variables keep their defaults; an empty `FTUI_LOCALE_DIR` is
    /// treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let truthy = |key: &str| {
            lookup(key).is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        };
        Self {
            include_builtin: !truthy(ENV_NO_BUILTIN),
            data_dir: lookup(ENV_LOCALE_DIR)
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Only the embedded bundles.
    #[must_use]
    pub fn builtin_only() -> Self {
        Self::default()
    }

    /// Set whether the embedded bundles are registered.
    #[must_use]
    pub fn with_builtin(mut self, enabled: bool) -> Self {
        self.include_builtin = enabled;
        self
    }

    /// Load records from `dir` after the embedded bundles.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }
}
