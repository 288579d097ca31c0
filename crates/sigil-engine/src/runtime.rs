//! Runtime: class table ownership, patching, and dispatch
//!
//! The runtime owns the class registry behind a read-write lock. Patching
//! takes the write lock for a single slot insert; dispatch clones the slot
//! function out under the read lock and releases it before the extension
//! runs, so extensions may re-enter the runtime freely.

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use sigil_sdk::{ExtensionFn, Instance, NativeResult, Symbol, Value};

use crate::builtins::{self, class_of};
use crate::error::{EngineError, EngineResult};
use crate::object::Class;
use crate::registry::ClassRegistry;

/// Process-wide runtime for the patch-at-startup pattern
static GLOBAL: Lazy<Runtime> = Lazy::new(Runtime::new);

/// The sigil runtime: owns the class registry and dispatches extension calls
pub struct Runtime {
    registry: RwLock<ClassRegistry>,
}

impl Runtime {
    /// Create a runtime with the built-in classes installed
    pub fn new() -> Self {
        let mut registry = ClassRegistry::new();
        builtins::install(&mut registry);
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Shared process-wide runtime.
    ///
    /// Patches applied here stay visible for the remainder of the process
    /// lifetime; there is no removal operation.
    pub fn global() -> &'static Runtime {
        &GLOBAL
    }

    // ========================================================================
    // Class definition
    // ========================================================================

    /// Define a new class, optionally inheriting from an existing parent
    pub fn define_class(&self, name: &str, parent_id: Option<usize>) -> EngineResult<usize> {
        let mut registry = self.registry.write();
        if let Some(parent) = parent_id {
            if registry.get_class(parent).is_none() {
                return Err(EngineError::UnknownClass(format!("#{parent}")));
            }
        }
        let id = registry.next_class_id();
        let class = match parent_id {
            Some(parent) => Class::with_parent(id, name.to_string(), parent),
            None => Class::new(id, name.to_string()),
        };
        Ok(registry.register_class(class))
    }

    /// Look up a class ID by name
    pub fn class_id(&self, name: &str) -> EngineResult<usize> {
        self.registry
            .read()
            .get_class_by_name(name)
            .map(|class| class.id)
            .ok_or_else(|| EngineError::UnknownClass(name.to_string()))
    }

    /// Create an instance of a registered class
    pub fn instantiate(&self, class_id: usize) -> EngineResult<Value> {
        let registry = self.registry.read();
        if registry.get_class(class_id).is_none() {
            return Err(EngineError::UnknownClass(format!("#{class_id}")));
        }
        Ok(Value::object(Instance::new(class_id)))
    }

    // ========================================================================
    // Patching
    // ========================================================================

    /// Attach `func` to a class's shared prototype under a fresh symbol.
    ///
    /// The slot is non-enumerable and immediately visible to every existing
    /// and future instance of the class and its subclasses. The returned
    /// symbol is the only handle to the slot. Patching the same class twice,
    /// even with an identical function and description, produces two
    /// independent slots under two distinct symbols.
    pub fn patch<F>(
        &self,
        class_id: usize,
        func: F,
        description: Option<&str>,
    ) -> EngineResult<Symbol>
    where
        F: Fn(Value, &[Value]) -> NativeResult<Value> + Send + Sync + 'static,
    {
        let symbol = Symbol::new(description);
        let func: ExtensionFn = std::sync::Arc::new(func);

        let mut registry = self.registry.write();
        let class = registry
            .get_class_mut(class_id)
            .ok_or_else(|| EngineError::UnknownClass(format!("#{class_id}")))?;
        class.prototype.define_symbol(symbol.clone(), func);
        Ok(symbol)
    }

    /// [`Runtime::patch`] addressed by class name
    pub fn patch_class<F>(
        &self,
        name: &str,
        func: F,
        description: Option<&str>,
    ) -> EngineResult<Symbol>
    where
        F: Fn(Value, &[Value]) -> NativeResult<Value> + Send + Sync + 'static,
    {
        let class_id = self.class_id(name)?;
        self.patch(class_id, func, description)
    }

    /// Define a string-named, enumerable method on a class prototype.
    ///
    /// This is the ordinary definition path; unlike [`Runtime::patch`] it is
    /// keyed by name, shows up in enumeration, and redefinition replaces the
    /// existing slot.
    pub fn define_method<F>(&self, class_id: usize, name: &str, func: F) -> EngineResult<()>
    where
        F: Fn(Value, &[Value]) -> NativeResult<Value> + Send + Sync + 'static,
    {
        let mut registry = self.registry.write();
        let class = registry
            .get_class_mut(class_id)
            .ok_or_else(|| EngineError::UnknownClass(format!("#{class_id}")))?;
        class.prototype.define_method(name, std::sync::Arc::new(func));
        Ok(())
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Invoke a symbol-keyed method on a receiver.
    ///
    /// Resolution starts at the receiver's class and walks the parent chain.
    /// The slot function is called with the receiver first, then the
    /// call-site arguments; its result, value or error, comes back unchanged.
    pub fn invoke(&self, receiver: &Value, key: &Symbol, args: &[Value]) -> EngineResult<Value> {
        let func = {
            // Clone the slot function out so no registry lock is held while
            // the extension runs; extensions may re-enter the runtime.
            let registry = self.registry.read();
            let class_id = class_of(receiver);
            match registry.lookup_symbol(class_id, key) {
                Some(slot) => slot.func.clone(),
                None => return Err(unknown_method(&registry, class_id, &key.to_string())),
            }
        };
        Ok(func(receiver.clone(), args)?)
    }

    /// Invoke a string-named method on a receiver
    pub fn invoke_named(
        &self,
        receiver: &Value,
        name: &str,
        args: &[Value],
    ) -> EngineResult<Value> {
        let func = {
            let registry = self.registry.read();
            let class_id = class_of(receiver);
            match registry.lookup_method(class_id, name) {
                Some(slot) => slot.func.clone(),
                None => return Err(unknown_method(&registry, class_id, name)),
            }
        };
        Ok(func(receiver.clone(), args)?)
    }

    // ========================================================================
    // Enumeration
    // ========================================================================

    /// All enumerable keys visible on a receiver: own instance fields plus
    /// enumerable prototype methods along the chain, sorted and deduplicated.
    /// Symbol-keyed slots never appear here.
    pub fn enumerate(&self, receiver: &Value) -> Vec<String> {
        let registry = self.registry.read();
        let mut keys = match receiver {
            Value::Object(instance) => instance.field_names(),
            _ => Vec::new(),
        };
        keys.extend(registry.enumerable_keys(class_of(receiver)));
        keys.sort();
        keys.dedup();
        keys
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown_method(registry: &ClassRegistry, class_id: usize, method: &str) -> EngineError {
    let class = registry
        .get_class(class_id)
        .map(|class| class.name.clone())
        .unwrap_or_else(|| format!("#{class_id}"));
    EngineError::UnknownMethod {
        class,
        method: method.to_string(),
    }
}
