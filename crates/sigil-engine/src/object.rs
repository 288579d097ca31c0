//! Object model: classes, prototypes, and method slots
//!
//! A `Prototype` is the shared method table behind every instance of a
//! class. It holds two kinds of slots: string-named methods, which are
//! enumerable, and symbol-keyed slots, which never show up in enumeration.
//! Patching only ever touches the symbol table.

use rustc_hash::FxHashMap;

use sigil_sdk::{ExtensionFn, Symbol};

/// A function slot on a prototype
#[derive(Clone)]
pub struct MethodSlot {
    /// The extension function invoked on dispatch
    pub func: ExtensionFn,
    /// Whether the slot shows up in key enumeration
    pub enumerable: bool,
}

impl std::fmt::Debug for MethodSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodSlot")
            .field("enumerable", &self.enumerable)
            .finish()
    }
}

/// Shared method table for all instances of a class
#[derive(Debug, Clone, Default)]
pub struct Prototype {
    /// String-named slots, defined enumerable
    named: FxHashMap<String, MethodSlot>,
    /// Symbol-keyed slots, never enumerable
    keyed: FxHashMap<Symbol, MethodSlot>,
}

impl Prototype {
    /// Create a new empty prototype
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a named, enumerable method. Redefining a name replaces the slot.
    pub fn define_method(&mut self, name: &str, func: ExtensionFn) {
        self.named.insert(
            name.to_string(),
            MethodSlot {
                func,
                enumerable: true,
            },
        );
    }

    /// Define a symbol-keyed, non-enumerable slot.
    ///
    /// Symbols are identity-compared, so distinct symbols can never replace
    /// each other's slot; the table only grows.
    pub fn define_symbol(&mut self, symbol: Symbol, func: ExtensionFn) {
        self.keyed.insert(
            symbol,
            MethodSlot {
                func,
                enumerable: false,
            },
        );
    }

    /// Get a named slot
    pub fn get_method(&self, name: &str) -> Option<&MethodSlot> {
        self.named.get(name)
    }

    /// Get a symbol-keyed slot
    pub fn get_symbol(&self, symbol: &Symbol) -> Option<&MethodSlot> {
        self.keyed.get(symbol)
    }

    /// Names of enumerable slots, sorted for stable order
    pub fn enumerable_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .named
            .iter()
            .filter(|(_, slot)| slot.enumerable)
            .map(|(name, _)| name.clone())
            .collect();
        keys.sort();
        keys
    }

    /// Total number of slots, named and symbol-keyed
    pub fn slot_count(&self) -> usize {
        self.named.len() + self.keyed.len()
    }

    /// Check if the prototype has no slots
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.keyed.is_empty()
    }
}

/// Class definition metadata
#[derive(Debug, Clone)]
pub struct Class {
    /// Class ID (unique identifier, index into the registry)
    pub id: usize,
    /// Class name
    pub name: String,
    /// Parent class ID (None for root classes)
    pub parent_id: Option<usize>,
    /// Shared prototype, mutated in place by method definition and patching
    pub prototype: Prototype,
}

impl Class {
    /// Create a new root class
    pub fn new(id: usize, name: String) -> Self {
        Self {
            id,
            name,
            parent_id: None,
            prototype: Prototype::new(),
        }
    }

    /// Create a new class with a parent
    pub fn with_parent(id: usize, name: String, parent_id: usize) -> Self {
        Self {
            id,
            name,
            parent_id: Some(parent_id),
            prototype: Prototype::new(),
        }
    }
}
