//! The generic entity contract between the host scene and object types.
//!
//! The host never holds a concrete object type: every addressable scene
//! object lives behind the [`SceneObject`] capability trait. The trait is
//! deliberately small -- identity, position, degenerate-friendly geometry
//! accessors, the per-frame draw hook, lifecycle (resource prep, placement
//! initialization, cloning) and the two persistence hooks.
//!
//! Bindings that need the concrete type reach it through
//! [`SceneObject::as_any_mut`]; the host itself never downcasts.
//!
//! Edit-time capabilities (placeholder rendering, thumbnails, the property
//! grid) live on the separate [`EditAware`] trait, compiled only with the
//! `edittime` feature so the runtime core carries no editor surface at all.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::images::ImageBank;
use crate::surface::RenderSurface;
use crate::tree::TreeNode;

#[cfg(feature = "edittime")]
use crate::surface::PixelSurface;

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Scene-authoring data for one placed object instance.
///
/// Produced by the scene loader; consumed once per instance via
/// [`SceneObject::initialize_from_placement`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub z_order: i32,
    /// Name of the scene layer the instance is placed on.
    pub layer: String,
}

// ---------------------------------------------------------------------------
// SceneObject
// ---------------------------------------------------------------------------

/// The capability interface every drawable scene object implements.
///
/// Default method bodies encode the common degenerate case (zero-sized,
/// unrotatable objects whose drawable position is their position); object
/// types override only what differs.
pub trait SceneObject: Any {
    /// The instance name this object was created under.
    fn name(&self) -> &str;

    // -- position and geometry ----------------------------------------------

    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);

    /// Hook invoked by the host after it moves the object.
    fn on_position_changed(&mut self) {}

    /// Bounding width. Zero for objects with no persistent geometry.
    fn width(&self) -> f32 {
        0.0
    }

    /// Bounding height. Zero for objects with no persistent geometry.
    fn height(&self) -> f32 {
        0.0
    }

    /// Requested width change; ignored by fixed-extent objects.
    fn set_width(&mut self, _width: f32) {}

    /// Requested height change; ignored by fixed-extent objects.
    fn set_height(&mut self, _height: f32) {}

    /// X coordinate the renderer should anchor drawing at.
    fn drawable_x(&self) -> f32 {
        self.x()
    }

    /// Y coordinate the renderer should anchor drawing at.
    fn drawable_y(&self) -> f32 {
        self.y()
    }

    fn center_x(&self) -> f32 {
        self.drawable_x() + self.width() / 2.0
    }

    fn center_y(&self) -> f32 {
        self.drawable_y() + self.height() / 2.0
    }

    /// Rotation in degrees. Fixed at zero for unrotatable object types.
    fn angle(&self) -> f32 {
        0.0
    }

    /// Attempt to rotate the object; returns `false` when the object type
    /// does not support whole-object rotation.
    fn set_angle(&mut self, _angle: f32) -> bool {
        false
    }

    // -- lifecycle ------------------------------------------------------------

    /// Prepare any images/resources this object needs. Object types without
    /// resource dependencies still return `true` so the host's generic
    /// resource pass needs no special cases.
    fn load_resources(&mut self, images: &ImageBank) -> bool;

    /// Seed initial state from scene-authoring data.
    fn initialize_from_placement(&mut self, placement: &Placement) -> bool;

    /// Per-frame time hook. No-op for object types without animated state.
    fn update_time(&mut self, _elapsed: f32) {}

    /// Produce an independent copy of this object. Transient per-frame state
    /// is never carried over.
    fn clone_object(&self) -> Box<dyn SceneObject>;

    // -- per-frame drawing ----------------------------------------------------

    /// Draw this object for the current frame. Returns a success indicator
    /// for host-level frame reporting.
    fn draw(&mut self, surface: &mut dyn RenderSurface) -> bool;

    // -- persistence ----------------------------------------------------------

    /// Restore persistent state from a scene tree node. Missing attributes
    /// fall back to the object type's defaults.
    fn load_from_tree(&mut self, node: &TreeNode);

    /// Write persistent state into a scene tree node.
    fn save_to_tree(&self, node: &mut TreeNode);

    // -- downcast seam --------------------------------------------------------

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// EditAware (edittime feature only)
// ---------------------------------------------------------------------------

/// Side length of the square object-picker thumbnail, in pixels.
#[cfg(feature = "edittime")]
pub const THUMBNAIL_SIZE: u32 = 24;

/// Editor-only capabilities, linked in via the `edittime` feature.
///
/// The runtime core compiles and behaves identically with this trait absent.
#[cfg(feature = "edittime")]
pub trait EditAware: SceneObject {
    /// Draw for the editor canvas. Unlike [`SceneObject::draw`], this may
    /// render a placeholder even when the object has nothing queued, so the
    /// object stays visible and selectable.
    fn draw_edittime(&mut self, surface: &mut dyn RenderSurface) -> bool;

    /// A [`THUMBNAIL_SIZE`]-sized preview bitmap for object pickers.
    fn thumbnail(&self) -> PixelSurface;

    /// Number of entries in the property grid.
    fn property_count(&self) -> usize;

    /// Property at `index` as `(name, value-as-text)`, if in range.
    fn property(&self, index: usize) -> Option<(String, String)>;

    /// Apply a text-encoded edit to the property at `index`. Returns `false`
    /// when the index is out of range or the value does not parse.
    fn set_property(&mut self, index: usize, value: &str) -> bool;
}
