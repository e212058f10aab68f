//! Flat resource state, as exchanged with the infrastructure-as-code host.
//!
//! The host hands over the user's configuration as a key-ordered map whose values are
//! strings, integers, booleans, nested maps or lists, and stores whatever map the
//! flattener hands back. [`StateValue`] models that loosely-typed value space.
//!
//! The read helpers on [`StateMap`] are deliberately forgiving: a key that holds a value
//! of the wrong type reads as absent, never as an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key-ordered flat state map.
pub type StateMap = BTreeMap<String, StateValue>;

/// A single value inside a [`StateMap`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<StateValue>),
    Map(StateMap),
}

impl StateValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Only a [`StateValue::Float`] qualifies; integers are not widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&StateMap> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[StateValue]> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<StateMap> for StateValue {
    fn from(value: StateMap) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<String>> for StateValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value.into_iter().map(Self::String).collect())
    }
}

impl From<Vec<StateMap>> for StateValue {
    fn from(value: Vec<StateMap>) -> Self {
        Self::List(value.into_iter().map(Self::Map).collect())
    }
}

/// Typed, type-tolerant reads over a [`StateMap`].
pub trait StateMapExt {
    /// String value under `key`, if present and a string.
    fn get_str(&self, key: &str) -> Option<&str>;
    /// Like [`get_str`](Self::get_str) but treats `""` as absent.
    fn get_non_empty_str(&self, key: &str) -> Option<&str>;
    fn get_bool(&self, key: &str) -> Option<bool>;
    fn get_i64(&self, key: &str) -> Option<i64>;
    fn get_f64(&self, key: &str) -> Option<f64>;
    fn get_map(&self, key: &str) -> Option<&StateMap>;
    /// Nested map under `key`, if present and holding at least one entry.
    fn get_non_empty_map(&self, key: &str) -> Option<&StateMap>;
    /// Required string field: absent or mistyped reads as `""`.
    fn string_or_default(&self, key: &str) -> String;
}

impl StateMapExt for StateMap {
    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StateValue::as_str)
    }

    fn get_non_empty_str(&self, key: &str) -> Option<&str> {
        self.get_str(key).filter(|s| !s.is_empty())
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(StateValue::as_bool)
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(StateValue::as_i64)
    }

    fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(StateValue::as_f64)
    }

    fn get_map(&self, key: &str) -> Option<&StateMap> {
        self.get(key).and_then(StateValue::as_map)
    }

    fn get_non_empty_map(&self, key: &str) -> Option<&StateMap> {
        self.get_map(key).filter(|m| !m.is_empty())
    }

    fn string_or_default(&self, key: &str) -> String {
        self.get_str(key).unwrap_or_default().to_string()
    }
}

/// Builds a [`StateMap`] from `key => value` pairs.
///
/// ```
/// use domain_registrar_provider::state_map;
///
/// let m = state_map! { "domain_name" => "example.com", "duration_in_years" => 2_i64 };
/// assert_eq!(m.len(), 2);
/// ```
#[macro_export]
macro_rules! state_map {
    () => {
        $crate::StateMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StateMap::new();
        $(
            map.insert(($key).to_string(), $crate::StateValue::from($value));
        )+
        map
    }};
}
