use std::collections::HashMap;
use std::sync::Arc;

/// Per-read reference resolution context
///
/// Lets a decoding strategy resolve repeated references to the same
/// logical value to one shared instance instead of one allocation per
/// row. Owned by a single read; discarded when the rows are consumed.
#[derive(Debug, Default)]
pub struct IdentityMap {
    interned: HashMap<String, Arc<str>>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `value` to a shared instance, allocating on first sight
    pub fn intern(&mut self, value: &str) -> Arc<str> {
        if let Some(existing) = self.interned.get(value) {
            return existing.clone();
        }
        let shared: Arc<str> = Arc::from(value);
        self.interned.insert(value.to_string(), shared.clone());
        shared
    }

    /// Number of distinct values resolved so far
    pub fn len(&self) -> usize {
        self.interned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_values_share_one_instance() {
        let mut map = IdentityMap::new();
        let first = map.intern("deposit");
        let second = map.intern("deposit");
        let other = map.intern("withdraw");

        assert!(Arc::ptr_eq(&first, &second));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(map.len(), 2);
    }
}
