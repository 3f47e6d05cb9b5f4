//! Base-URL configuration for absolute route resolution.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Environment variable naming the base URL for server-side API calls.
pub const INTERNAL_BASE_URL_VAR: &str = "API_INTERNAL_URL";

/// Environment variable naming the base URL for browser-reachable API calls.
pub const PUBLIC_BASE_URL_VAR: &str = "API_PUBLIC_URL";

const DEFAULT_CONFIG_FILE: &str = "routes.config.json";

/// Base URLs consumed by absolute resolution.
///
/// Both values are optional at load time; absence only becomes an error when
/// the corresponding absolute-resolution method is actually invoked. The
/// configuration is read once at startup and injected into a
/// [`crate::Resolver`], never consulted ad hoc per call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Base URL for internally resolved (server-side) API calls.
    pub internal_base_url: Option<String>,
    /// Base URL for externally resolved (browser-reachable) API calls.
    pub public_base_url: Option<String>,
}

impl ResolverConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to the process environment so deployments can choose either
    /// mechanism.
    pub fn discover(config_dir: &Path) -> Self {
        let candidate = config_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_else(Self::from_env)
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Empty values normalize to `None`: an unset variable and an empty one
    /// are equally "missing" for absolute resolution.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            internal_base_url: normalize(lookup(INTERNAL_BASE_URL_VAR)),
            public_base_url: normalize(lookup(PUBLIC_BASE_URL_VAR)),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn lookup_from<'a>(entries: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: BTreeMap<&str, &str> = entries.iter().copied().collect();
        move |name| map.get(name).map(|value| value.to_string())
    }

    #[test]
    fn reads_both_base_urls_from_lookup() {
        let config = ResolverConfig::from_lookup(lookup_from(&[
            (INTERNAL_BASE_URL_VAR, "https://api.internal.test"),
            (PUBLIC_BASE_URL_VAR, "https://api.test"),
        ]));

        assert_eq!(
            config.internal_base_url.as_deref(),
            Some("https://api.internal.test")
        );
        assert_eq!(config.public_base_url.as_deref(), Some("https://api.test"));
    }

    #[test]
    fn treats_empty_values_as_unset() {
        let config = ResolverConfig::from_lookup(lookup_from(&[
            (INTERNAL_BASE_URL_VAR, ""),
            (PUBLIC_BASE_URL_VAR, "  "),
        ]));

        assert_eq!(config.internal_base_url, None);
        assert_eq!(config.public_base_url, None);
    }

    #[test]
    fn loads_configuration_files() {
        let temp = tempdir().expect("failed to create temp dir");
        let path = temp.path().join("routes.config.json");
        fs::write(
            &path,
            r#"{"internal_base_url": "https://api.internal.test"}"#,
        )
        .expect("failed to write config");

        let config = ResolverConfig::from_path(&path).expect("config should load");
        assert_eq!(
            config.internal_base_url.as_deref(),
            Some("https://api.internal.test")
        );
        assert_eq!(config.public_base_url, None);
    }

    #[test]
    fn discover_prefers_the_config_file() {
        let temp = tempdir().expect("failed to create temp dir");
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            r#"{"public_base_url": "https://api.test"}"#,
        )
        .expect("failed to write config");

        let config = ResolverConfig::discover(temp.path());
        assert_eq!(config.public_base_url.as_deref(), Some("https://api.test"));
    }
}
