//! A read-only one-to-one map with lookups in both directions.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A frozen bidirectional map.
///
/// Built once from a list of pairs and never mutated. Construction fails if
/// either a key or a value appears twice, so every reverse lookup is
/// unambiguous.
#[derive(Debug, Clone)]
pub struct FrozenBiMap<K, V> {
    forward: HashMap<K, V>,
    reverse: HashMap<V, K>,
}

/// Which side of a [`FrozenBiMap`] pair was duplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateEntry<K, V> {
    Key { key: K, first: V, second: V },
    Value { value: V, first: K, second: K },
}

impl<K, V> FrozenBiMap<K, V>
where
    K: Eq + Hash + Copy + Debug,
    V: Eq + Hash + Copy + Debug,
{
    /// Builds the map, rejecting duplicate keys and duplicate values.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, DuplicateEntry<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut forward = HashMap::new();
        let mut reverse = HashMap::new();

        for (key, value) in pairs {
            if let Some(&first) = forward.get(&key) {
                return Err(DuplicateEntry::Key {
                    key,
                    first,
                    second: value,
                });
            }
            if let Some(&first) = reverse.get(&value) {
                return Err(DuplicateEntry::Value {
                    value,
                    first,
                    second: key,
                });
            }
            forward.insert(key, value);
            reverse.insert(value, key);
        }

        Ok(Self { forward, reverse })
    }

    pub fn get_by_key(&self, key: &K) -> Option<V> {
        self.forward.get(key).copied()
    }

    pub fn get_by_value(&self, value: &V) -> Option<K> {
        self.reverse.get(value).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
