//! Ownership helpers for the resource cache.
//!
//! `Pool` keeps every object it was given until the pool itself is dropped.
//! `Slot` holds at most one current value and hands back whatever it evicts.

use std::sync::Arc;

/// Append-only arena of shared objects, released all at once on drop.
#[derive(Debug)]
pub struct Pool<T> {
    items: Vec<Arc<T>>,
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Take ownership of `item` and return a shared handle to it.
    pub fn insert(&mut self, item: T) -> Arc<T> {
        let item = Arc::new(item);
        self.items.push(Arc::clone(&item));
        item
    }

    /// Most recently inserted object.
    pub fn last(&self) -> Option<&Arc<T>> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A single optional current value.
#[derive(Debug)]
pub struct Slot<T> {
    value: Option<T>,
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Install a new current value, returning the one it replaces.
    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    /// Drop the current value from the slot, returning it.
    pub fn invalidate(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_keeps_everything() {
        let mut pool = Pool::new();
        let a = pool.insert("a".to_string());
        let b = pool.insert("b".to_string());

        assert_eq!(pool.len(), 2);
        assert!(Arc::ptr_eq(pool.last().unwrap(), &b));
        assert_eq!(Arc::strong_count(&a), 2);

        drop(pool);
        assert_eq!(Arc::strong_count(&a), 1);
    }

    #[test]
    fn test_slot_replace_and_invalidate() {
        let mut slot = Slot::new();
        assert!(slot.is_empty());

        assert_eq!(slot.replace(1), None);
        assert_eq!(slot.replace(2), Some(1));
        assert_eq!(slot.get(), Some(&2));

        assert_eq!(slot.invalidate(), Some(2));
        assert!(slot.get().is_none());
    }
}
