//! Guarded access to block attribute bags.
//!
//! Attributes arrive as loosely typed JSON. Every accessor here is optional:
//! a missing key, a `null`, or a value of the wrong shape reads as absent so
//! the emitters can skip the declaration instead of failing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// The attribute map of a single block.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Attrs(Map<String, Value>);

impl<'de> Deserialize<'de> for Attrs {
    /// Hosts serialise an empty attribute map as `[]`; anything that is not an
    /// object normalises to an empty bag.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Attrs::from_value(value))
    }
}

impl From<Map<String, Value>> for Attrs {
    fn from(map: Map<String, Value>) -> Self {
        Attrs(map)
    }
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Attrs(map),
            _ => Attrs::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    /// Present and not `null`.
    pub fn has(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// True if any of `keys` is present.
    pub fn has_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.has(k))
    }

    /// The scalar value of `key` as CSS text, if present and non-empty.
    pub fn value(&self, key: &str) -> Option<String> {
        self.raw(key)
            .and_then(scalar_string)
            .filter(|s| !s.is_empty())
    }

    /// Like [`Attrs::value`] but also rejects `0`, `"0"` and `false`.
    pub fn filled(&self, key: &str) -> Option<String> {
        self.value(key).filter(|s| s != "0")
    }

    /// Numeric view of `key`; numeric strings are accepted.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.raw(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Loose truthiness of `key`; absent is false.
    pub fn flag(&self, key: &str) -> bool {
        self.raw(key).is_some_and(truthy)
    }

    pub fn list(&self, key: &str) -> Option<&[Value]> {
        match self.raw(key)? {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// A `[top, right, bottom, left]` side array.
    ///
    /// Needs at least four entries; blank entries read as `0`.
    pub fn sides(&self, key: &str) -> Option<[String; 4]> {
        let items = self.list(key)?;
        if items.len() < 4 {
            return None;
        }
        let side = |i: usize| {
            scalar_string(&items[i])
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "0".to_string())
        };
        Some([side(0), side(1), side(2), side(3)])
    }
}

/// Renders a scalar JSON value the way it should appear in CSS text.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_string(n)),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some(String::new()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn number_string(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => format_float(f),
        None => n.to_string(),
    }
}

pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attrs {
        Attrs::from_value(value)
    }

    #[test]
    fn value_skips_null_and_empty() {
        let a = attrs(json!({ "a": null, "b": "", "c": "#fff", "d": 0 }));
        assert_eq!(a.value("a"), None);
        assert_eq!(a.value("b"), None);
        assert_eq!(a.value("c"), Some("#fff".to_string()));
        assert_eq!(a.value("d"), Some("0".to_string()));
        assert_eq!(a.value("missing"), None);
    }

    #[test]
    fn filled_rejects_zero() {
        let a = attrs(json!({ "n": 0, "s": "0", "f": false, "ok": 12 }));
        assert_eq!(a.filled("n"), None);
        assert_eq!(a.filled("s"), None);
        assert_eq!(a.filled("f"), None);
        assert_eq!(a.filled("ok"), Some("12".to_string()));
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        let a = attrs(json!({ "whole": 10.0, "half": 1.5, "neg": -4 }));
        assert_eq!(a.value("whole"), Some("10".to_string()));
        assert_eq!(a.value("half"), Some("1.5".to_string()));
        assert_eq!(a.value("neg"), Some("-4".to_string()));
    }

    #[test]
    fn sides_need_four_entries() {
        let a = attrs(json!({ "ok": [1, 2, "", null], "short": [1, 2] }));
        assert_eq!(
            a.sides("ok"),
            Some(["1".into(), "2".into(), "0".into(), "0".into()])
        );
        assert_eq!(a.sides("short"), None);
    }

    #[test]
    fn flag_follows_loose_truthiness() {
        let a = attrs(json!({ "t": true, "one": 1, "zero": 0, "str": "0", "f": false }));
        assert!(a.flag("t"));
        assert!(a.flag("one"));
        assert!(!a.flag("zero"));
        assert!(!a.flag("str"));
        assert!(!a.flag("f"));
        assert!(!a.flag("missing"));
    }

    #[test]
    fn empty_array_deserializes_to_empty_bag() {
        let a: Attrs = serde_json::from_str("[]").unwrap();
        assert!(a.is_empty());
    }
}
