//! A dense, monotonically-assigned `key -> id` table, scoped to a single
//! `get_summary` call and never reused across calls. Both the term
//! dictionary (`Dictionary<String>`) and the n-gram dictionary
//! (`Dictionary<Vec<TermId>>`) are instances of this.

use std::hash::Hash;

use indexmap::IndexSet;

/// `IndexSet` already hands out dense, insertion-order indices and makes
/// insertion of an existing key a no-op that returns the original index,
/// which is exactly the idempotent, returns-existing-id contract this
/// table needs.
#[derive(Debug, Default, Clone)]
pub struct Dictionary<K> {
    entries: IndexSet<K>,
}

impl<K> Dictionary<K>
where
    K: Hash + Eq,
{
    pub fn new() -> Self {
        Self { entries: IndexSet::new() }
    }

    /// Returns the id for `key`, assigning a new dense id if unseen.
    pub fn get_or_insert(&mut self, key: K) -> u32 {
        let (index, _) = self.entries.insert_full(key);
        index as u32
    }

    pub fn get_by_id(&self, id: u32) -> Option<&K> {
        self.entries.get_index(id as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_id(&self, id: u32) -> bool {
        (id as usize) < self.entries.len()
    }
}
