//! Unique symbol keys
//!
//! A `Symbol` is an opaque token used as a prototype slot key. Every call to
//! [`Symbol::new`] produces a key that compares equal only to itself (and its
//! clones), so symbol-keyed slots can never collide with each other or with
//! string-named members, whatever their descriptions say.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Global counter for generating unique symbol IDs
static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a new unique symbol ID
fn generate_symbol_id() -> u64 {
    NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// An opaque, identity-compared prototype slot key.
///
/// The optional description is carried for diagnostics only; it plays no
/// part in equality, hashing, or slot lookup.
#[derive(Clone)]
pub struct Symbol {
    /// Unique ID (assigned on creation, the sole identity of the symbol)
    id: u64,
    /// Optional human-readable description
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol, unequal to every symbol created before it
    pub fn new(description: Option<&str>) -> Self {
        Self {
            id: generate_symbol_id(),
            description: description.map(Arc::from),
        }
    }

    /// The symbol's unique ID
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The diagnostic description, if one was given
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "Symbol({} #{})", description, self.id),
            None => write!(f, "Symbol(#{})", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_symbols_are_unique() {
        let a = Symbol::new(Some("last"));
        let b = Symbol::new(Some("last"));
        assert_ne!(a, b);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_clone_preserves_identity() {
        let a = Symbol::new(Some("last"));
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_description() {
        let described = Symbol::new(Some("last"));
        let anonymous = Symbol::new(None);
        assert_eq!(described.description(), Some("last"));
        assert_eq!(anonymous.description(), None);
    }

    #[test]
    fn test_usable_as_map_key() {
        let a = Symbol::new(Some("x"));
        let b = Symbol::new(Some("x"));

        let mut map = FxHashMap::default();
        map.insert(a.clone(), 1);
        map.insert(b.clone(), 2);

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&a), Some(&1));
        assert_eq!(map.get(&b), Some(&2));
    }

    #[test]
    fn test_display() {
        let described = Symbol::new(Some("last"));
        let anonymous = Symbol::new(None);
        assert_eq!(described.to_string(), "Symbol(last)");
        assert_eq!(anonymous.to_string(), "Symbol()");
    }
}
