use crate::config::{self, ResolverConfig};
use crate::params::Params;
use crate::table::RouteTable;

use super::placeholders;
use super::query;

/// Errors raised when a route cannot be resolved.
///
/// All variants indicate a broken call site or missing deployment
/// configuration rather than a transient condition, so callers should
/// propagate them instead of retrying or falling back to a default route.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The requested key has no entry in the route table.
    RouteNotFound {
        /// Key that was looked up.
        key: String,
    },
    /// The template still contains placeholders after all parameters were
    /// applied.
    MissingParameters {
        /// Key of the route being resolved.
        key: String,
        /// Placeholder names left unresolved, in template order.
        names: Vec<String>,
    },
    /// Absolute resolution was requested but the corresponding base URL is
    /// unset or empty.
    MissingConfiguration {
        /// Name of the missing configuration value.
        setting: &'static str,
    },
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RouteNotFound { key } => {
                write!(f, "no route registered for key `{key}`")
            }
            Self::MissingParameters { key, names } => {
                write!(
                    f,
                    "route `{key}` is missing values for placeholders: {}",
                    names.join(", ")
                )
            }
            Self::MissingConfiguration { setting } => {
                write!(f, "configuration value `{setting}` is not set")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolve `key` against `table`, substituting `params` into the template.
///
/// Parameters are applied in insertion order. A parameter whose name appears
/// as a `:name` placeholder replaces every occurrence of that token with the
/// percent-encoded string form of its value; every other parameter is carried
/// into a trailing query string in the same order. Placeholders left over
/// after all parameters are applied are an error, as is an unknown key.
pub fn resolve(table: &RouteTable, key: &str, params: &Params) -> Result<String, ResolveError> {
    let template = table
        .template(key)
        .ok_or_else(|| ResolveError::RouteNotFound {
            key: key.to_string(),
        })?;

    let mut resolved = template.to_string();
    let mut leftovers: Vec<(String, String)> = Vec::new();

    for (name, value) in params.iter() {
        let text = value.to_string();
        let encoded = urlencoding::encode(&text);
        match placeholders::substitute(&resolved, name, encoded.as_ref()) {
            Some(updated) => resolved = updated,
            None => leftovers.push((name.to_string(), text)),
        }
    }

    let unresolved = placeholders::placeholder_names(&resolved);
    if !unresolved.is_empty() {
        return Err(ResolveError::MissingParameters {
            key: key.to_string(),
            names: unresolved,
        });
    }

    if !leftovers.is_empty() {
        resolved.push('?');
        resolved.push_str(&query::encode_query(&leftovers));
    }

    Ok(resolved)
}

/// Absolute-mode resolver holding the configured base URLs.
///
/// Two independent base URLs exist: one for server-side calls and one for
/// browser-reachable calls. Which one is applied is decided by the method the
/// caller invokes, never by runtime detection. The configuration is injected
/// at construction so a missing value surfaces as an ordinary error instead
/// of hidden global state.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver over the provided configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Create a resolver from the process environment.
    pub fn from_env() -> Self {
        Self::new(ResolverConfig::from_env())
    }

    /// Resolve a relative path, identical to the free [`resolve`] function.
    pub fn resolve(
        &self,
        table: &RouteTable,
        key: &str,
        params: &Params,
    ) -> Result<String, ResolveError> {
        resolve(table, key, params)
    }

    /// Resolve an absolute URL against the internal (server-side) base URL.
    pub fn resolve_internal(
        &self,
        table: &RouteTable,
        key: &str,
        params: &Params,
    ) -> Result<String, ResolveError> {
        self.absolute(
            self.config.internal_base_url.as_deref(),
            config::INTERNAL_BASE_URL_VAR,
            table,
            key,
            params,
        )
    }

    /// Resolve an absolute URL against the public (browser-reachable) base
    /// URL.
    pub fn resolve_public(
        &self,
        table: &RouteTable,
        key: &str,
        params: &Params,
    ) -> Result<String, ResolveError> {
        self.absolute(
            self.config.public_base_url.as_deref(),
            config::PUBLIC_BASE_URL_VAR,
            table,
            key,
            params,
        )
    }

    fn absolute(
        &self,
        base_url: Option<&str>,
        setting: &'static str,
        table: &RouteTable,
        key: &str,
        params: &Params,
    ) -> Result<String, ResolveError> {
        let base_url = base_url
            .filter(|value| !value.is_empty())
            .ok_or(ResolveError::MissingConfiguration { setting })?;

        let path = resolve(table, key, params)?;
        Ok(format!("{}{path}", base_url.trim_end_matches('/')))
    }
}
