//! # Type Registry
//!
//! The registry maps each type name to its descriptor and drives every
//! generic serializer: the contract renderer, the JSON Schema renderer
//! and the validator all walk it instead of inspecting Rust types.
//!
//! ## Closure Invariant
//!
//! A built registry is closed: every `Named` reference in every
//! registered descriptor resolves to a registered type. A schema crate
//! that forgets to register a nested type fails when its registry is
//! built, not halfway through writing an output file.

use std::collections::{HashMap, HashSet, VecDeque};

use okf_core::{Describe, TypeDescriptor};
use thiserror::Error;

/// Error building a type registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A field refers to a type that was never registered.
    #[error("type '{name}' referenced by '{referenced_by}' is not registered")]
    MissingType {
        /// The unresolved type name.
        name: String,
        /// `Type.field` that holds the reference.
        referenced_by: String,
    },

    /// Two descriptors share a name.
    #[error("type '{0}' is registered more than once")]
    DuplicateType(String),
}

/// Collects descriptors before the closure check.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    root: TypeDescriptor,
    types: Vec<TypeDescriptor>,
}

impl RegistryBuilder {
    /// Register a type through its [`Describe`] implementation.
    #[must_use]
    pub fn register<T: Describe>(self) -> Self {
        self.register_descriptor(T::describe())
    }

    /// Register an already-built descriptor.
    #[must_use]
    pub fn register_descriptor(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(descriptor);
        self
    }

    /// Drop a registered type by name. The root cannot be dropped.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.types.retain(|t| t.name != name);
        self
    }

    /// Check uniqueness and closure, producing the registry.
    pub fn build(self) -> Result<TypeRegistry, RegistryError> {
        let root_name = self.root.name;
        let mut types = Vec::with_capacity(self.types.len() + 1);
        types.push(self.root);
        types.extend(self.types);

        let mut index = HashMap::with_capacity(types.len());
        for (i, ty) in types.iter().enumerate() {
            if index.insert(ty.name, i).is_some() {
                return Err(RegistryError::DuplicateType(ty.name.to_string()));
            }
        }

        for ty in &types {
            for (field, referenced) in ty.references() {
                if !index.contains_key(referenced) {
                    return Err(RegistryError::MissingType {
                        name: referenced.to_string(),
                        referenced_by: format!("{}.{}", ty.name, field),
                    });
                }
            }
        }

        tracing::debug!(root = root_name, types = types.len(), "built type registry");

        Ok(TypeRegistry {
            root: root_name,
            types,
            index,
        })
    }
}

/// A closed set of type descriptors with a designated root record.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    root: &'static str,
    /// Root first, then registration order.
    types: Vec<TypeDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl TypeRegistry {
    /// Start a registry whose root record is `R`.
    pub fn builder<R: Describe>() -> RegistryBuilder {
        RegistryBuilder {
            root: R::describe(),
            types: Vec::new(),
        }
    }

    /// The root record's descriptor.
    pub fn root(&self) -> &TypeDescriptor {
        &self.types[0]
    }

    /// Name of the root record.
    pub fn root_name(&self) -> &'static str {
        self.root
    }

    /// Look up a descriptor by type name.
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// All descriptors, root first, then in registration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Number of registered types, root included.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// A registry always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Names of the types reachable from the root, breadth-first.
    pub fn reachable(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([self.root]);
        while let Some(name) = queue.pop_front() {
            if !seen.insert(name) {
                continue;
            }
            order.push(name);
            if let Some(ty) = self.get(name) {
                for (_, referenced) in ty.references() {
                    queue.push_back(referenced);
                }
            }
        }
        order
    }
}
