//! Scrawl Drawer -- a scene entity that draws primitive shapes on demand.
//!
//! The drawer renders user-configurable 2D primitives (rectangles, lines,
//! circles) inside the host's frame loop. Scripting actions mutate its
//! persistent [`StyleState`](style::StyleState) and enqueue resolved
//! [`ShapeCommand`](scrawl_scene::shape::ShapeCommand)s into its per-frame
//! [`ShapeQueue`](queue::ShapeQueue); the host's render pass
//! flushes the queue onto the frame surface and empties it. Conditions and
//! expressions read style values back for event logic.
//!
//! # Quick Start
//!
//! ```
//! use scrawl_drawer::prelude::*;
//! use scrawl_scene::prelude::*;
//!
//! // Startup: build the binding table and the object factory.
//! let mut bindings = ExtensionRegistry::new();
//! register_bindings(&mut bindings);
//! let mut objects = ObjectRegistry::new();
//! register_object_type(&mut objects);
//!
//! // Scene setup.
//! let mut images = ImageBank::new();
//! let mut drawer = objects.create(DRAWER_TYPE_ID, "hud").unwrap();
//!
//! // One frame: run an action, then draw.
//! let mut ctx = ScriptContext { images: &mut images, elapsed: 1.0 / 60.0 };
//! let instr = Instruction::new(vec![
//!     Param::Number(10.0), Param::Number(10.0),
//!     Param::Number(20.0), Param::Number(20.0),
//! ]);
//! bindings
//!     .run_action("Drawer::Rectangle", &mut ctx, drawer.as_mut(), &instr)
//!     .unwrap();
//!
//! let mut surface = HeadlessSurface::new(640, 480);
//! assert!(drawer.draw(&mut surface));
//! assert_eq!(surface.commands().len(), 1);
//! ```
//!
//! With the `edittime` feature enabled the drawer additionally implements
//! the editor's `EditAware` trait (placeholder rendering, thumbnails, the
//! property grid); the runtime core is unchanged without it.

#![deny(unsafe_code)]

pub mod bindings;
#[cfg(feature = "edittime")]
mod edittime;
pub mod object;
pub mod queue;
pub mod style;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::bindings::register_bindings;
    pub use crate::object::{
        create_drawer_object, destroy_drawer_object, register_object_type, DrawerObject,
        DRAWER_TYPE_ID,
    };
    pub use crate::queue::ShapeQueue;
    pub use crate::style::{clamp_channel, clamp_opacity, StyleState};
}
