//! The drawer entity -- a scene object that draws primitive shapes.
//!
//! [`DrawerObject`] owns one [`StyleState`] and one [`ShapeQueue`]. Scripting
//! bindings mutate the style and enqueue resolved commands during the
//! frame's action phase; the host then calls [`SceneObject::draw`] once,
//! which flushes the queue onto the frame's surface.
//!
//! The entity's bounding extents are deliberately degenerate (zero-sized):
//! queued shapes are immediate-draw commands, not persistent geometry that
//! contributes to layout, and the entity as a whole cannot rotate.

use scrawl_scene::images::ImageBank;
use scrawl_scene::object::{Placement, SceneObject};
use scrawl_scene::registry::ObjectRegistry;
use scrawl_scene::shape::{ShapeCommand, ShapeKind};
use scrawl_scene::surface::RenderSurface;
use scrawl_scene::tree::TreeNode;

use crate::queue::ShapeQueue;
use crate::style::StyleState;

/// Stable type identifier the drawer registers under in the host's object
/// type registry.
pub const DRAWER_TYPE_ID: &str = "Drawer";

// ---------------------------------------------------------------------------
// DrawerObject
// ---------------------------------------------------------------------------

/// A scene entity that renders user-configurable primitive shapes.
#[derive(Debug)]
pub struct DrawerObject {
    name: String,
    x: f32,
    y: f32,
    style: StyleState,
    queue: ShapeQueue,
}

impl DrawerObject {
    /// Create a drawer with default style and an empty queue.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            style: StyleState::default(),
            queue: ShapeQueue::new(),
        }
    }

    /// The persistent style configuration.
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Mutable access to the style configuration.
    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    /// The pending per-frame shape queue.
    pub fn queue(&self) -> &ShapeQueue {
        &self.queue
    }

    /// Resolve a point to absolute device coordinates according to the
    /// current coordinate mode and entity position.
    pub fn resolve_point(&self, x: f32, y: f32) -> (f32, f32) {
        if self.style.coordinates_absolute() {
            (x, y)
        } else {
            (x + self.x, y + self.y)
        }
    }

    /// Build a command from resolved geometry plus the current style, and
    /// append it to the queue.
    pub fn enqueue_shape(&mut self, kind: ShapeKind) {
        self.queue.enqueue(ShapeCommand {
            kind,
            fill: self.style.fill_rgba(),
            outline: self.style.outline_rgba(),
            outline_size: self.style.outline_size(),
        });
    }
}

impl SceneObject for DrawerObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn x(&self) -> f32 {
        self.x
    }

    fn y(&self) -> f32 {
        self.y
    }

    fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    fn set_y(&mut self, y: f32) {
        self.y = y;
    }

    fn load_resources(&mut self, _images: &ImageBank) -> bool {
        // No image dependencies; still reports success so the host's
        // generic resource pass needs no special case.
        true
    }

    fn initialize_from_placement(&mut self, placement: &Placement) -> bool {
        self.x = placement.x;
        self.y = placement.y;
        // A freshly placed drawer never starts with pending shapes.
        self.queue = ShapeQueue::new();
        true
    }

    fn clone_object(&self) -> Box<dyn SceneObject> {
        Box::new(DrawerObject {
            name: self.name.clone(),
            x: self.x,
            y: self.y,
            style: self.style.clone(),
            // Transient draw state is never cloned.
            queue: ShapeQueue::new(),
        })
    }

    fn draw(&mut self, surface: &mut dyn RenderSurface) -> bool {
        self.queue.draw_all(surface)
    }

    fn load_from_tree(&mut self, node: &TreeNode) {
        let defaults = StyleState::default();
        let (dr, dg, db) = defaults.fill_color();
        let (or_, og, ob) = defaults.outline_color();

        self.style.set_fill_color(
            node.attr_channel("fillColorR", dr) as f64,
            node.attr_channel("fillColorG", dg) as f64,
            node.attr_channel("fillColorB", db) as f64,
        );
        self.style
            .set_fill_opacity(node.attr_f32("fillOpacity", defaults.fill_opacity()) as f64);
        self.style.set_outline_color(
            node.attr_channel("outlineColorR", or_) as f64,
            node.attr_channel("outlineColorG", og) as f64,
            node.attr_channel("outlineColorB", ob) as f64,
        );
        self.style
            .set_outline_opacity(node.attr_f32("outlineOpacity", defaults.outline_opacity()) as f64);
        self.style
            .set_outline_size(node.attr_i32("outlineSize", defaults.outline_size()) as f64);
        if node.attr_bool("absoluteCoordinates", defaults.coordinates_absolute()) {
            self.style.set_coordinates_absolute();
        } else {
            self.style.set_coordinates_relative();
        }
    }

    fn save_to_tree(&self, node: &mut TreeNode) {
        let (r, g, b) = self.style.fill_color();
        node.set_attr("fillColorR", r);
        node.set_attr("fillColorG", g);
        node.set_attr("fillColorB", b);
        node.set_attr_f32("fillOpacity", self.style.fill_opacity());
        let (r, g, b) = self.style.outline_color();
        node.set_attr("outlineColorR", r);
        node.set_attr("outlineColorG", g);
        node.set_attr("outlineColorB", b);
        node.set_attr_f32("outlineOpacity", self.style.outline_opacity());
        node.set_attr("outlineSize", self.style.outline_size());
        node.set_attr_bool("absoluteCoordinates", self.style.coordinates_absolute());
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

// ---------------------------------------------------------------------------
// Factory entry points
// ---------------------------------------------------------------------------

/// Named-construction entry point for the host's object-type registry.
pub fn create_drawer_object(name: String) -> Box<dyn SceneObject> {
    Box::new(DrawerObject::new(name))
}

/// Matching teardown entry point. Dropping the box releases everything the
/// drawer owns.
pub fn destroy_drawer_object(object: Box<dyn SceneObject>) {
    drop(object);
}

/// Register the drawer's factory pair under [`DRAWER_TYPE_ID`].
pub fn register_object_type(registry: &mut ObjectRegistry) {
    registry.register(DRAWER_TYPE_ID, create_drawer_object, destroy_drawer_object);
}
