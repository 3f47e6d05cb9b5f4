//! Static tables mapping symbolic route keys to URL templates.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Immutable mapping from route key to route template.
///
/// Keys are opaque strings; the portal's tables use dotted `resource.action`
/// names by convention, but nothing here parses or validates key spelling.
/// Templates are path strings containing zero or more `:identifier`
/// placeholders. Tables are built once at startup and only read afterwards,
/// so sharing one across threads needs no synchronization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
  routes: BTreeMap<String, String>,
}

impl RouteTable {
  /// Build a table from `(key, template)` pairs.
  ///
  /// A key repeated later in the sequence replaces the earlier definition.
  pub fn from_pairs<K, T>(pairs: impl IntoIterator<Item = (K, T)>) -> Self
  where
    K: Into<String>,
    T: Into<String>,
  {
    let mut routes = BTreeMap::new();
    for (key, template) in pairs {
      routes.insert(key.into(), template.into());
    }
    Self { routes }
  }

  /// Read a table from a JSON file containing a flat object of
  /// `"key": "template"` entries.
  pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
      .with_context(|| format!("failed to read route table {}", path.display()))?;
    let table = serde_json::from_str(&contents)
      .with_context(|| format!("failed to parse route table {}", path.display()))?;
    Ok(table)
  }

  /// Look up the template registered for `key`.
  pub fn template(&self, key: &str) -> Option<&str> {
    self.routes.get(key).map(String::as_str)
  }

  /// Iterate the registered route keys.
  pub fn keys(&self) -> impl Iterator<Item = &str> {
    self.routes.keys().map(String::as_str)
  }

  /// Number of registered routes.
  pub fn len(&self) -> usize {
    self.routes.len()
  }

  /// Returns `true` when the table holds no routes.
  pub fn is_empty(&self) -> bool {
    self.routes.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn looks_up_registered_templates() {
    let table = RouteTable::from_pairs([("students.show", "/students/:id")]);
    assert_eq!(table.template("students.show"), Some("/students/:id"));
    assert_eq!(table.template("students.index"), None);
    assert_eq!(table.len(), 1);
  }

  #[test]
  fn later_definitions_replace_earlier_ones() {
    let table = RouteTable::from_pairs([
      ("home", "/old"),
      ("home", "/new"),
    ]);
    assert_eq!(table.template("home"), Some("/new"));
    assert_eq!(table.len(), 1);
  }

  #[test]
  fn deserializes_from_flat_json_objects() {
    let table: RouteTable =
      serde_json::from_str(r#"{"search": "/items", "item.show": "/item/:id"}"#)
        .expect("table should deserialize");
    assert_eq!(table.template("search"), Some("/items"));
    assert_eq!(table.template("item.show"), Some("/item/:id"));
  }

  #[test]
  fn loads_tables_from_disk() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("routes.json");
    fs::write(&path, r#"{"ping": "/ping"}"#).expect("failed to write route table");

    let table = RouteTable::load_from_path(&path).expect("table should load");
    assert_eq!(table.template("ping"), Some("/ping"));
  }

  #[test]
  fn missing_files_report_their_path() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("absent.json");

    let error = RouteTable::load_from_path(&path).expect_err("load should fail");
    assert!(error.to_string().contains("absent.json"));
  }
}
