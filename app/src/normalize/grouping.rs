use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Label used for crew members whose department is missing.
pub const DEFAULT_DEPARTMENT: &str = "crew";

/// Items bucketed by a derived key. Keys keep the order in which they were
/// first seen while scanning the input.
#[derive(Debug, Clone)]
pub struct Grouping<K, V> {
    keys: Vec<K>,
    buckets: HashMap<K, Vec<V>>,
}

impl<K, V> Grouping<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new<I, F>(items: I, key_of: F) -> Self
    where
        I: IntoIterator<Item = V>,
        F: Fn(&V) -> K,
    {
        let mut keys = Vec::new();
        let mut buckets: HashMap<K, Vec<V>> = HashMap::new();

        for item in items {
            let key = key_of(&item);
            match buckets.get_mut(&key) {
                Some(bucket) => bucket.push(item),
                None => {
                    keys.push(key.clone());
                    buckets.insert(key, vec![item]);
                }
            }
        }

        Self { keys, buckets }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Buckets in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> + '_ {
        self.keys
            .iter()
            .filter_map(move |key| self.get(key).map(|bucket| (key, bucket)))
    }

    pub fn into_groups(mut self) -> Vec<Group<K, V>> {
        let keys = std::mem::take(&mut self.keys);
        keys.into_iter()
            .filter_map(|key| {
                let items = self.buckets.remove(&key)?;
                Some(Group { key, items })
            })
            .collect()
    }
}

/// One bucket of a [`Grouping`], in a shape that serializes as a list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group<K, V> {
    pub key: K,
    pub items: Vec<V>,
}

/// Department label used when grouping crew, `"crew"` when none is given.
pub fn department_key(department: Option<&str>) -> String {
    match department {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_DEPARTMENT.to_string(),
    }
}
