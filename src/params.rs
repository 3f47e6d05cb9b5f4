//! Scalar parameter values and the ordered parameter bag consumed by resolution.

use std::fmt;

/// Scalar value supplied for a route parameter.
///
/// Values are coerced to their string form before substitution or query-string
/// serialization. Coercion is purely textual: `false`, `0` and the empty string
/// all substitute literally rather than being skipped.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
  /// Text value, substituted as-is (after percent-encoding).
  Str(String),
  /// Integer value, rendered in decimal.
  Int(i64),
  /// Floating point value, rendered in the shortest round-trip form.
  Float(f64),
  /// Boolean value, rendered as `true` or `false`.
  Bool(bool),
  /// Explicit null, rendered as the literal string `null`.
  Null,
}

impl fmt::Display for ParamValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Str(value) => f.write_str(value),
      Self::Int(value) => write!(f, "{value}"),
      Self::Float(value) => write!(f, "{value}"),
      Self::Bool(value) => write!(f, "{value}"),
      Self::Null => f.write_str("null"),
    }
  }
}

impl From<&str> for ParamValue {
  fn from(value: &str) -> Self {
    Self::Str(value.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(value: String) -> Self {
    Self::Str(value)
  }
}

impl From<i32> for ParamValue {
  fn from(value: i32) -> Self {
    Self::Int(i64::from(value))
  }
}

impl From<i64> for ParamValue {
  fn from(value: i64) -> Self {
    Self::Int(value)
  }
}

impl From<u32> for ParamValue {
  fn from(value: u32) -> Self {
    Self::Int(i64::from(value))
  }
}

impl From<usize> for ParamValue {
  fn from(value: usize) -> Self {
    Self::Int(value as i64)
  }
}

impl From<f64> for ParamValue {
  fn from(value: f64) -> Self {
    Self::Float(value)
  }
}

impl From<bool> for ParamValue {
  fn from(value: bool) -> Self {
    Self::Bool(value)
  }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(inner) => inner.into(),
      None => Self::Null,
    }
  }
}

/// Ordered bag of route parameters.
///
/// Iteration order is insertion order, and that order is part of the contract:
/// it decides both the substitution sequence and the key order of any generated
/// query string, keeping resolved URLs reproducible across calls.
#[derive(Debug, Clone, Default)]
pub struct Params {
  entries: Vec<(String, ParamValue)>,
}

impl Params {
  /// Create an empty parameter bag.
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a parameter, consuming and returning the bag for chaining.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
    self.insert(key, value);
    self
  }

  /// Append a parameter in place.
  pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
    self.entries.push((key.into(), value.into()));
  }

  /// Iterate parameters in insertion order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
    self.entries.iter().map(|(key, value)| (key.as_str(), value))
  }

  /// Number of parameters in the bag.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when the bag holds no parameters.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut params = Self::new();
    for (key, value) in iter {
      params.insert(key, value);
    }
    params
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn coerces_scalars_to_their_text_form() {
    assert_eq!(ParamValue::from("abc").to_string(), "abc");
    assert_eq!(ParamValue::from(String::new()).to_string(), "");
    assert_eq!(ParamValue::from(0).to_string(), "0");
    assert_eq!(ParamValue::from(-7i64).to_string(), "-7");
    assert_eq!(ParamValue::from(2.5).to_string(), "2.5");
    assert_eq!(ParamValue::from(2.0).to_string(), "2");
    assert_eq!(ParamValue::from(false).to_string(), "false");
    assert_eq!(ParamValue::Null.to_string(), "null");
  }

  #[test]
  fn absent_options_become_null() {
    assert_eq!(ParamValue::from(None::<i32>), ParamValue::Null);
    assert_eq!(ParamValue::from(Some(3)), ParamValue::Int(3));
  }

  #[test]
  fn preserves_insertion_order() {
    let params = Params::new().with("z", 1).with("a", 2).with("m", 3);
    let keys: Vec<&str> = params.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
  }

  #[test]
  fn collects_from_pair_iterators() {
    let params: Params = vec![("id", 7), ("page", 2)].into_iter().collect();
    assert_eq!(params.len(), 2);
    assert!(!params.is_empty());
  }
}
