//! Object-type factory registry.
//!
//! Each object type registers a named-construction entry point and a
//! matching teardown entry point under a stable type identifier. The host's
//! scene loader creates instances through [`ObjectRegistry::create`] and
//! hands them back through [`ObjectRegistry::destroy`] when the scene tears
//! them down, without ever naming a concrete type.

use std::collections::BTreeMap;

use crate::object::SceneObject;
use crate::SceneError;

/// Constructs a new instance of an object type with the given name.
pub type CreateObjectFn = fn(name: String) -> Box<dyn SceneObject>;

/// Tears down an instance previously produced by the matching create
/// function. Consumes the box; most object types simply drop it.
pub type DestroyObjectFn = fn(object: Box<dyn SceneObject>);

/// One registered object type.
struct ObjectKind {
    create: CreateObjectFn,
    destroy: DestroyObjectFn,
}

/// Type identifier -> factory pair, built once at startup.
#[derive(Default)]
pub struct ObjectRegistry {
    kinds: BTreeMap<String, ObjectKind>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object type's factory pair under `type_id`.
    ///
    /// # Panics
    ///
    /// Panics if the type identifier is already registered.
    pub fn register(&mut self, type_id: &str, create: CreateObjectFn, destroy: DestroyObjectFn) {
        assert!(
            !self.kinds.contains_key(type_id),
            "duplicate object type identifier: {type_id:?}"
        );
        self.kinds
            .insert(type_id.to_owned(), ObjectKind { create, destroy });
    }

    /// Instantiate an object of the given type with an instance name.
    pub fn create(&self, type_id: &str, name: &str) -> Result<Box<dyn SceneObject>, SceneError> {
        let kind = self
            .kinds
            .get(type_id)
            .ok_or_else(|| SceneError::UnknownObjectType {
                type_id: type_id.to_owned(),
            })?;
        tracing::trace!(type_id, name, "creating scene object");
        Ok((kind.create)(name.to_owned()))
    }

    /// Tear down an instance of the given type.
    pub fn destroy(&self, type_id: &str, object: Box<dyn SceneObject>) -> Result<(), SceneError> {
        let kind = self
            .kinds
            .get(type_id)
            .ok_or_else(|| SceneError::UnknownObjectType {
                type_id: type_id.to_owned(),
            })?;
        (kind.destroy)(object);
        Ok(())
    }

    /// Whether `type_id` has been registered.
    pub fn contains(&self, type_id: &str) -> bool {
        self.kinds.contains_key(type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_is_a_typed_error() {
        let registry = ObjectRegistry::new();
        let err = registry.create("Ghost", "g").err().unwrap();
        assert!(matches!(err, SceneError::UnknownObjectType { .. }));
    }
}
