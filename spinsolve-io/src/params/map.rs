//! Insertion-ordered parameter map

use hashbrown::HashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::value::ParamValue;

/// Parameter key holding the dwell time in milliseconds
pub const DWELL_TIME_KEY: &str = "dwellTime";

/// Ordered `key -> value` mapping decoded from `.par` files
///
/// Iteration follows first-insertion order. Re-inserting an existing key
/// replaces its value in place, so merging files keeps the position of keys
/// seen earlier and appends new ones.
#[derive(Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: Vec<(String, ParamValue)>,
    index: HashMap<String, usize>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        let existing = self.index.get(&key).copied();
        match existing {
            Some(slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    /// Numeric value for `key`, if present and numeric
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ParamValue::as_number)
    }

    /// String value for `key`, if present and textual
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_text)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove `key`, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for (_, later) in self.index.iter_mut() {
            if *later > slot {
                *later -= 1;
            }
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Merge `other` into `self`; keys in `other` win
    pub fn merge(&mut self, other: ParameterMap) {
        self.extend(other.entries);
    }

    /// Dwell time in seconds, from the `dwellTime` parameter (milliseconds)
    pub fn dwell_time_seconds(&self) -> Option<f64> {
        self.get_number(DWELL_TIME_KEY).map(|ms| ms / 1000.0)
    }
}

impl fmt::Debug for ParameterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for ParameterMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        map.extend(iter);
        map
    }
}

impl Serialize for ParameterMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ParameterMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParameterMapVisitor;

        impl<'de> Visitor<'de> for ParameterMapVisitor {
            type Value = ParameterMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter names to numbers or strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ParameterMap, A::Error> {
                let mut map = ParameterMap::new();
                while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ParameterMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut map = ParameterMap::new();
        assert_eq!(map.insert("a", 1.0), None);
        map.insert("b", "two");
        assert_eq!(map.insert("a", 3.0), Some(ParamValue::Number(1.0)));

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get_number("a"), Some(3.0));
        assert_eq!(map.get_text("b"), Some("two"));
        assert_eq!(map.get_number("b"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut first: ParameterMap = [("X", 1.0), ("Y", 2.0)].into_iter().collect();
        let second: ParameterMap = [("X", 10.0), ("Z", 30.0)].into_iter().collect();
        first.merge(second);

        assert_eq!(first.keys().collect::<Vec<_>>(), vec!["X", "Y", "Z"]);
        assert_eq!(first.get_number("X"), Some(10.0));
    }

    #[test]
    fn test_remove_reindexes() {
        let mut map: ParameterMap = [("a", 1.0), ("b", 2.0), ("c", 3.0)].into_iter().collect();
        assert_eq!(map.remove("b"), Some(ParamValue::Number(2.0)));
        assert_eq!(map.remove("b"), None);
        assert!(!map.contains_key("b"));
        assert_eq!(map.get_number("c"), Some(3.0));
        map.insert("d", 4.0);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "c", "d"]);
    }

    #[test]
    fn test_dwell_time_seconds() {
        let mut map = ParameterMap::new();
        assert_eq!(map.dwell_time_seconds(), None);
        map.insert(DWELL_TIME_KEY, "fast");
        assert_eq!(map.dwell_time_seconds(), None);
        map.insert(DWELL_TIME_KEY, 0.5);
        assert_eq!(map.dwell_time_seconds(), Some(0.0005));
    }

    #[test]
    fn test_json_preserves_order_and_types() {
        let mut map = ParameterMap::new();
        map.insert("nrPnts", 16384.0);
        map.insert("Solvent", "CDCl3");
        map.insert("b1Freq", 43.5);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"nrPnts":16384.0,"Solvent":"CDCl3","b1Freq":43.5}"#);

        let back: ParameterMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_debug_lists_entries_in_order() {
        let map: ParameterMap = [("b", 1.0), ("a", 2.0)].into_iter().collect();
        assert_eq!(format!("{:?}", map), r#"{"b": Number(1.0), "a": Number(2.0)}"#);
    }
}
