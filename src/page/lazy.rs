use std::collections::HashSet;
use std::hash::Hash;

/// Arms media loading the first time a target becomes visible.
///
/// Loading itself belongs to the caller; success is never tracked here.
#[derive(Debug, Clone)]
pub struct LazyLoader<K> {
    armed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> LazyLoader<K> {
    pub fn new() -> Self {
        Self { armed: HashSet::new() }
    }

    /// Returns true exactly once per key: the caller should start loading.
    pub fn visible(&mut self, key: &K) -> bool {
        self.armed.insert(key.clone())
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.armed.contains(key)
    }

    pub fn armed_count(&self) -> usize {
        self.armed.len()
    }
}

impl<K: Eq + Hash + Clone> Default for LazyLoader<K> {
    fn default() -> Self {
        Self::new()
    }
}
