//! Request parameter mapping.
//!
//! API parameters are a string-keyed mapping whose values are scalars,
//! sequences or nested mappings. The same structure feeds both the
//! request signature and the form/query encoding, so the two always
//! agree on which leaves exist and how they are rendered.

use std::borrow::Cow;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Absent value. Skipped when signing and when encoding.
    Null,
    /// Boolean, rendered as `1` or `0`.
    Bool(bool),
    /// Integer, rendered in decimal.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Sequence, encoded with numeric keys (`list[0]=a`).
    List(Vec<ParamValue>),
    /// Nested mapping, encoded with bracketed keys (`vars[name]=x`).
    Map(Params),
}

impl ParamValue {
    /// Returns the wire text of a scalar value.
    ///
    /// `None` for [`ParamValue::Null`] and for containers.
    #[must_use]
    pub fn leaf_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Null | Self::List(_) | Self::Map(_) => None,
            Self::Bool(true) => Some(Cow::Borrowed("1")),
            Self::Bool(false) => Some(Cow::Borrowed("0")),
            Self::Int(n) => Some(Cow::Owned(n.to_string())),
            Self::Float(f) => Some(Cow::Owned(f.to_string())),
            Self::Str(s) => Some(Cow::Borrowed(s)),
        }
    }

    /// Returns the value as a string slice if it is [`ParamValue::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for an empty list or mapping.
    #[must_use]
    pub fn is_empty_container(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Appends every scalar leaf under this value, depth first.
    pub(crate) fn collect_leaves(&self, out: &mut Vec<String>) {
        match self {
            Self::List(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
            Self::Map(map) => map.collect_leaves(out),
            leaf => {
                if let Some(text) = leaf.leaf_text() {
                    out.push(text.into_owned());
                }
            }
        }
    }

    fn encode_into(&self, key: &str, out: &mut url::form_urlencoded::Serializer<'_, String>) {
        match self {
            Self::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    item.encode_into(&format!("{key}[{index}]"), out);
                }
            }
            Self::Map(map) => {
                for (name, value) in map.iter() {
                    value.encode_into(&format!("{key}[{name}]"), out);
                }
            }
            leaf => {
                if let Some(text) = leaf.leaf_text() {
                    out.append_pair(key, &text);
                }
            }
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

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Str(value.to_string()), Self::Int)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Params> for ParamValue {
    fn from(value: Params) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => {
                if let Some(int) = n.as_i64() {
                    Self::Int(int)
                } else if n.is_u64() {
                    // Above i64::MAX; text keeps every digit.
                    Self::Str(n.to_string())
                } else {
                    n.as_f64().map_or_else(|| Self::Str(n.to_string()), Self::Float)
                }
            }
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Map(Params::from(map)),
        }
    }
}

/// Ordered string-keyed parameter mapping.
///
/// Keys keep their insertion order; inserting an existing key replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();

        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        self.entries.push((key, value));
        None
    }

    /// Builder form of [`Params::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value for a key if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Removes a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes the mapping as `application/x-www-form-urlencoded`.
    ///
    /// Nested mappings and sequences use bracketed keys, e.g.
    /// `vars[name]=Ann&lists[0]=news`. Null leaves are omitted.
    #[must_use]
    pub fn to_form(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            value.encode_into(key, &mut serializer);
        }
        serializer.finish()
    }

    /// Decodes an `application/x-www-form-urlencoded` string, such as the
    /// body of an inbound postback.
    ///
    /// Every value becomes a string. Keys are kept verbatim, so a nested
    /// field arrives as e.g. `vars[name]`. A repeated key, such as
    /// `lists[]=news&lists[]=deals`, collects its values into a
    /// [`ParamValue::List`] in body order.
    #[must_use]
    pub fn from_form(encoded: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in url::form_urlencoded::parse(encoded.as_bytes()) {
            params.append(key.into_owned(), ParamValue::Str(value.into_owned()));
        }
        params
    }

    /// Adds a value under `key`, turning an existing entry into a list
    /// instead of replacing it.
    fn append(&mut self, key: String, value: ParamValue) {
        let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) else {
            self.entries.push((key, value));
            return;
        };

        match &mut slot.1 {
            ParamValue::List(items) => items.push(value),
            existing => {
                let first = std::mem::replace(existing, ParamValue::Null);
                *existing = ParamValue::List(vec![first, value]);
            }
        }
    }

    pub(crate) fn collect_leaves(&self, out: &mut Vec<String>) {
        for (_, value) in &self.entries {
            value.collect_leaves(out);
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = std::vec::IntoIter<(String, ParamValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Params {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
