//! Class registry for managing runtime class metadata
//!
//! Classes are stored by ID in registration order. Method resolution walks
//! the parent chain, so a slot defined on a base class is reachable from
//! every subclass.

use rustc_hash::FxHashMap;

use sigil_sdk::Symbol;

use crate::object::{Class, MethodSlot};

/// Class registry for the runtime
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Classes indexed by ID
    classes: Vec<Class>,
    /// Class name to ID mapping
    name_to_id: FxHashMap<String, usize>,
}

impl ClassRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            name_to_id: FxHashMap::default(),
        }
    }

    /// Register a new class
    pub fn register_class(&mut self, class: Class) -> usize {
        let id = class.id;
        let name = class.name.clone();

        self.classes.push(class);
        self.name_to_id.insert(name, id);

        id
    }

    /// Get class by ID
    pub fn get_class(&self, id: usize) -> Option<&Class> {
        self.classes.get(id)
    }

    /// Get mutable class by ID
    pub fn get_class_mut(&mut self, id: usize) -> Option<&mut Class> {
        self.classes.get_mut(id)
    }

    /// Get class by name
    pub fn get_class_by_name(&self, name: &str) -> Option<&Class> {
        self.name_to_id
            .get(name)
            .and_then(|id| self.classes.get(*id))
    }

    /// Get next available class ID
    pub fn next_class_id(&self) -> usize {
        self.classes.len()
    }

    /// Iterate over all classes with their IDs
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Class)> {
        self.classes.iter().enumerate()
    }

    /// Resolve a symbol-keyed slot, walking the parent chain.
    ///
    /// Parent IDs always precede their children, so the walk terminates.
    pub fn lookup_symbol(&self, class_id: usize, symbol: &Symbol) -> Option<&MethodSlot> {
        let mut current = self.classes.get(class_id);
        while let Some(class) = current {
            if let Some(slot) = class.prototype.get_symbol(symbol) {
                return Some(slot);
            }
            current = class.parent_id.and_then(|id| self.classes.get(id));
        }
        None
    }

    /// Resolve a named slot, walking the parent chain
    pub fn lookup_method(&self, class_id: usize, name: &str) -> Option<&MethodSlot> {
        let mut current = self.classes.get(class_id);
        while let Some(class) = current {
            if let Some(slot) = class.prototype.get_method(name) {
                return Some(slot);
            }
            current = class.parent_id.and_then(|id| self.classes.get(id));
        }
        None
    }

    /// Enumerable method names visible from a class, own and inherited,
    /// sorted and deduplicated
    pub fn enumerable_keys(&self, class_id: usize) -> Vec<String> {
        let mut keys = Vec::new();
        let mut current = self.classes.get(class_id);
        while let Some(class) = current {
            keys.extend(class.prototype.enumerable_keys());
            current = class.parent_id.and_then(|id| self.classes.get(id));
        }
        keys.sort();
        keys.dedup();
        keys
    }
}
