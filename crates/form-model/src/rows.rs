//! Row Arena
//!
//! Ordered storage for repeatable form rows with stable keys.

use serde::{Deserialize, Serialize};

/// Stable identity of a row. Keys come from a monotonic counter and are
/// never handed out twice, even after the row is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowKey(pub u32);

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered list of rows indexed by `RowKey`
#[derive(Debug, Clone, PartialEq)]
pub struct RowArena<T> {
    rows: Vec<(RowKey, T)>,
    next_key: u32,
}

impl<T> Default for RowArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RowArena<T> {
    pub fn new() -> Self {
        Self { rows: Vec::new(), next_key: 1 }
    }

    /// Append a row and return its fresh key
    pub fn push(&mut self, value: T) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push((key, value));
        key
    }

    /// Detach a row, returning it if the key was live
    pub fn remove(&mut self, key: RowKey) -> Option<T> {
        let idx = self.position(key)?;
        Some(self.rows.remove(idx).1)
    }

    pub fn get(&self, key: RowKey) -> Option<&T> {
        self.rows.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: RowKey) -> Option<&mut T> {
        self.rows.iter_mut().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Zero-based position of a live key
    pub fn position(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|(k, _)| *k == key)
    }

    pub fn contains(&self, key: RowKey) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> Vec<RowKey> {
        self.rows.iter().map(|(k, _)| *k).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RowKey, &T)> {
        self.rows.iter().map(|(k, v)| (*k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_never_reused() {
        let mut arena = RowArena::new();
        let a = arena.push("a");
        let b = arena.push("b");
        assert_eq!(arena.remove(b), Some("b"));
        let c = arena.push("c");

        assert_ne!(b, c);
        assert!(c > a && c > b);
        assert_eq!(arena.keys(), vec![a, c]);
    }

    #[test]
    fn test_remove_unknown_key() {
        let mut arena: RowArena<u8> = RowArena::new();
        arena.push(1);
        assert_eq!(arena.remove(RowKey(99)), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_position_follows_order() {
        let mut arena = RowArena::new();
        let a = arena.push(());
        let b = arena.push(());
        let c = arena.push(());
        arena.remove(a);
        assert_eq!(arena.position(b), Some(0));
        assert_eq!(arena.position(c), Some(1));
        assert!(!arena.contains(a));
    }
}
