//! Scrawl Scene -- host-side contracts for drawable scene objects.
//!
//! This crate defines the vocabulary shared between the Scrawl host engine
//! and its object-type extensions:
//!
//! - **`SceneObject`**: the capability trait every addressable object
//!   implements (position, geometry, draw, lifecycle, persistence).
//! - **`ShapeCommand`** / **`RenderSurface`**: resolved draw commands and the
//!   surfaces that rasterize or record them.
//! - **`TreeNode`**: the generic markup tree scenes are persisted as, with
//!   tolerant typed attribute access.
//! - **`Instruction`** / **`ExtensionRegistry`**: the scripting-layer
//!   contract -- positional type-tagged parameters, the comparison-and-modify
//!   operator convention, and the explicit binding table actions, conditions
//!   and expressions are registered in.
//! - **`ObjectRegistry`** / **`ImageBank`** / **`Placement`**: the factory
//!   table, the scene's named image store, and authoring placement data.
//!
//! Execution is single-threaded and frame-stepped: nothing here blocks,
//! suspends, or spans frames.
//!
//! # Quick Start
//!
//! ```
//! use scrawl_scene::prelude::*;
//!
//! let mut registry = ExtensionRegistry::new();
//! registry.register_condition("AlwaysTrue", vec![], |_ctx, _obj, _instr| true);
//! assert!(registry.condition("AlwaysTrue").is_some());
//! ```

#![deny(unsafe_code)]

pub mod images;
pub mod object;
pub mod registry;
pub mod script;
pub mod shape;
pub mod surface;
pub mod tree;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced at the host seams.
///
/// Entity-level failure modes (malformed parameters, degenerate geometry,
/// missing attributes) deliberately degrade instead of erroring; a typed
/// error only exists where the host itself must distinguish outcomes.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// No object type registered under this identifier.
    #[error("object type '{type_id}' is not registered")]
    UnknownObjectType { type_id: String },

    /// No binding (action/condition/expression) registered under this
    /// identifier.
    #[error("binding '{id}' is not registered")]
    UnknownBinding { id: String },

    /// A persisted scene tree could not be parsed.
    #[error("malformed scene tree: {details}")]
    MalformedTree { details: String },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::images::ImageBank;
    pub use crate::object::{Placement, SceneObject};
    pub use crate::registry::ObjectRegistry;
    pub use crate::script::{
        ActionHandler, AssignOp, Comparison, ExtensionRegistry, Instruction, Param, ParamKind,
        ScriptContext,
    };
    pub use crate::shape::{Rgba, ShapeCommand, ShapeKind};
    pub use crate::surface::{HeadlessSurface, PixelSurface, RenderSurface};
    pub use crate::tree::TreeNode;
    pub use crate::SceneError;

    #[cfg(feature = "edittime")]
    pub use crate::object::{EditAware, THUMBNAIL_SIZE};
}
