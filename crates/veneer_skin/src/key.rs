//! Object keys for non-owning references between skin nodes.

/// Identifies one node in a skin tree.
///
/// Keys are plain numbers. Holding one never keeps the node alive, which is
/// what lets a system object point back at its container without a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectKey(u64);

impl ObjectKey {
    /// Creates a key from a raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Hands out unique [`ObjectKey`]s for one skin tree.
#[derive(Debug, Clone)]
pub struct KeyAllocator {
    next: u64,
}

impl KeyAllocator {
    /// Creates an allocator whose first key is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Generates a new unique key.
    pub fn next_key(&mut self) -> ObjectKey {
        let key = ObjectKey::new(self.next);
        self.next += 1;
        key
    }

    /// Number of keys issued so far.
    #[must_use]
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for KeyAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_unique_and_sequential() {
        let mut keys = KeyAllocator::new();
        let a = keys.next_key();
        let b = keys.next_key();

        assert_ne!(a, b);
        assert_eq!(a.raw(), 1);
        assert_eq!(b.raw(), 2);
        assert_eq!(keys.issued(), 2);
    }
}
