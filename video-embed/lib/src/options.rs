//! Per-service option mappings.
//!
//! Every service starts from its own default options and applies the caller's
//! overrides on top. The merge is shallow: an override replaces the whole value
//! stored under its key, nested objects are never combined.
//!
//! ## Examples
//!
//! ```
//! use video_embed::ServiceOptions;
//!
//! let defaults = ServiceOptions::new().with("width", 640).with("height", 390);
//! let overrides = ServiceOptions::new().with("width", 800);
//!
//! let merged = ServiceOptions::merged(defaults, overrides);
//! assert_eq!(merged.width(), Some(800.0));
//! assert_eq!(merged.height(), Some(390.0));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping of option name to value for one video service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceOptions(Map<String, Value>);

impl ServiceOptions {
    /// Creates an empty option mapping.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Merges `overrides` into `defaults`, the override winning on every key
    /// present in both.
    ///
    /// An override of `null` still replaces the default, which leaves the key
    /// without a usable value.
    pub fn merged(defaults: ServiceOptions, overrides: ServiceOptions) -> ServiceOptions {
        let mut merged = defaults;
        for (key, value) in overrides.0 {
            merged.0.insert(key, value);
        }
        merged
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a single option.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the option as a number.
    ///
    /// Numeric strings such as `"640"` are accepted, since hand-written
    /// configuration often quotes sizes.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::String(raw) => raw.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            value => value.as_f64(),
        }
    }

    /// Returns the option as a string, if it is one.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Configured player width.
    pub fn width(&self) -> Option<f64> {
        self.number("width")
    }

    /// Configured player height.
    pub fn height(&self) -> Option<f64> {
        self.number("height")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for ServiceOptions
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
