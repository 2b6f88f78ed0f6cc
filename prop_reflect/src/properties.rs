//! Ordered, copy-on-write property maps.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::Value;

/// Ordered mapping from property name to [`Value`].
///
/// The map sits behind an [`Arc`]; cloning a `Properties` is cheap and the
/// builders share storage between generations until one of them writes.
/// Iteration follows insertion order. Writing an existing name replaces the
/// value in place, so the first insertion fixes the position.
///
/// # Examples
///
/// ```
/// use prop_reflect::Properties;
///
/// let first = Properties::new().set("foo", 1_i32);
/// let second = first.set("foo", 2_i32).set("bar", 3_i32);
///
/// assert_eq!(first.len(), 1);
/// assert_eq!(second.names().collect::<Vec<_>>(), ["foo", "bar"]);
/// assert_eq!(second.get_as::<i32>("foo"), Some(&2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Properties(Arc<IndexMap<String, Value>>);

impl Properties {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy with `name` set to `value`.
    #[must_use]
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.0).insert(name.into(), value.into());
        next
    }

    /// Returns a copy with every entry of `other` written over `self`.
    #[must_use]
    pub fn merge<I, K, V>(&self, other: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut next = self.clone();
        let map = Arc::make_mut(&mut next.0);
        for (name, value) in other {
            map.insert(name.into(), value.into());
        }
        next
    }

    /// Returns a copy holding only the entries accepted by `keep`.
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str, &Value) -> bool,
    {
        Self(Arc::new(
            self.0
                .iter()
                .filter(|(name, value)| keep(name, value))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        ))
    }

    /// Looks up the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Looks up `name` and borrows it as `V`.
    #[must_use]
    pub fn get_as<V: std::any::Any>(&self, name: &str) -> Option<&V> {
        self.get(name).and_then(Value::downcast_ref)
    }

    /// Returns `true` when `name` has a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new().merge(iter)
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Properties;
    use rstest::rstest;

    #[rstest]
    fn set_leaves_the_receiver_untouched() {
        let empty = Properties::new();
        let filled = empty.set("foo", "bar");
        assert!(empty.is_empty());
        assert_eq!(filled.len(), 1);
        assert_eq!(
            filled.get_as::<String>("foo").map(String::as_str),
            Some("bar")
        );
    }

    #[rstest]
    fn merge_overwrites_on_clash_and_keeps_positions() {
        let base: Properties = [("a", 1_i32), ("b", 2_i32)].into_iter().collect();
        let merged = base.merge([("b", 20_i32), ("c", 30_i32)]);
        assert_eq!(merged.names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(merged.get_as::<i32>("b"), Some(&20));
        assert_eq!(base.get_as::<i32>("b"), Some(&2));
    }

    #[rstest]
    fn filter_drops_rejected_names() {
        let base: Properties = [("a", 1_i32), ("b", 2_i32), ("c", 3_i32)]
            .into_iter()
            .collect();
        let kept = base.filter(|name, _| name != "b");
        assert_eq!(kept.names().collect::<Vec<_>>(), ["a", "c"]);
        assert_eq!(base.len(), 3);
    }
}
