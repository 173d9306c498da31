//! Scripting bindings for the drawer entity.
//!
//! [`register_bindings`] installs every action, condition and expression the
//! drawer exposes into an [`ExtensionRegistry`], under the `Drawer::`
//! namespace. The standalone image-composition utility action is registered
//! alongside them because it ships in the same extension namespace, even
//! though it takes no receiver object.
//!
//! Every handler follows the scripting layer's tolerance model: a malformed
//! or out-of-range parameter is clamped or ignored and the handler still
//! reports success; nothing here can abort scene execution. The only
//! `false` return is a receiver that is not a drawer at all, which the
//! host's object filtering normally prevents.

use scrawl_scene::object::SceneObject;
use scrawl_scene::script::{
    AssignOp, Comparison, ExtensionRegistry, Instruction, ParamKind, ScriptContext,
};
use scrawl_scene::shape::ShapeKind;

use crate::object::DrawerObject;
use crate::style::clamp_channel;

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Install the drawer's bindings into the given registry.
///
/// Called once at startup; the registry is then passed by reference to the
/// scripting evaluator.
pub fn register_bindings(registry: &mut ExtensionRegistry) {
    use ParamKind::{Number, Text};

    // Setup actions.
    registry.register_action("Drawer::SetFillColor", vec![Text], act_set_fill_color);
    registry.register_action(
        "Drawer::SetFillOpacity",
        vec![Text, Number],
        act_set_fill_opacity,
    );
    registry.register_action("Drawer::SetOutlineColor", vec![Text], act_set_outline_color);
    registry.register_action(
        "Drawer::SetOutlineOpacity",
        vec![Text, Number],
        act_set_outline_opacity,
    );
    registry.register_action(
        "Drawer::SetOutlineSize",
        vec![Text, Number],
        act_set_outline_size,
    );
    registry.register_action("Drawer::SetCoordinatesAbsolute", vec![], act_coordinates_absolute);
    registry.register_action("Drawer::SetCoordinatesRelative", vec![], act_coordinates_relative);

    // Shape actions.
    registry.register_action(
        "Drawer::Rectangle",
        vec![Number, Number, Number, Number],
        act_rectangle,
    );
    registry.register_action(
        "Drawer::Line",
        vec![Number, Number, Number, Number, Number],
        act_line,
    );
    registry.register_action("Drawer::Circle", vec![Number, Number, Number], act_circle);

    // Standalone composition utility (no receiver).
    registry.register_free_action(
        "Drawer::CopyImageOnAnother",
        vec![Text, Text, Number, Number],
        act_copy_image_on_another,
    );

    // Conditions.
    registry.register_condition("Drawer::FillOpacity", vec![Text, Number], cond_fill_opacity);
    registry.register_condition(
        "Drawer::OutlineOpacity",
        vec![Text, Number],
        cond_outline_opacity,
    );
    registry.register_condition("Drawer::OutlineSize", vec![Text, Number], cond_outline_size);

    // Expressions.
    registry.register_expression("Drawer::FillOpacity", vec![], exp_fill_opacity);
    registry.register_expression("Drawer::OutlineOpacity", vec![], exp_outline_opacity);
}

// ---------------------------------------------------------------------------
// Parameter helpers
// ---------------------------------------------------------------------------

/// Parse a `"r;g;b"` color string into clamped channels.
///
/// Missing or unparsable components read as 0.
pub(crate) fn parse_color(text: &str) -> (u8, u8, u8) {
    let mut parts = text.split(';');
    let mut channel = || {
        parts
            .next()
            .and_then(|p| p.trim().parse::<f64>().ok())
            .map(clamp_channel)
            .unwrap_or(0)
    };
    let r = channel();
    let g = channel();
    let b = channel();
    (r, g, b)
}

fn as_drawer_mut<'a>(object: &'a mut dyn SceneObject) -> Option<&'a mut DrawerObject> {
    let drawer = object.as_any_mut().downcast_mut::<DrawerObject>();
    if drawer.is_none() {
        tracing::warn!("drawer binding invoked on a non-drawer object");
    }
    drawer
}

fn as_drawer<'a>(object: &'a dyn SceneObject) -> Option<&'a DrawerObject> {
    object.as_any().downcast_ref::<DrawerObject>()
}

// ---------------------------------------------------------------------------
// Setup actions
// ---------------------------------------------------------------------------

fn act_set_fill_color(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let (r, g, b) = parse_color(instruction.text(0));
    drawer.style_mut().set_fill_color(r as f64, g as f64, b as f64);
    true
}

fn act_set_outline_color(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let (r, g, b) = parse_color(instruction.text(0));
    drawer
        .style_mut()
        .set_outline_color(r as f64, g as f64, b as f64);
    true
}

/// Shared comparison-and-modify step for the numeric setup actions:
/// parameter 0 is the assignment operator, parameter 1 the operand.
fn modified(instruction: &Instruction, current: f64) -> f64 {
    let op = AssignOp::parse(instruction.text(0));
    op.apply(current, instruction.number(1))
}

fn act_set_fill_opacity(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let next = modified(instruction, drawer.style().fill_opacity() as f64);
    drawer.style_mut().set_fill_opacity(next);
    true
}

fn act_set_outline_opacity(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let next = modified(instruction, drawer.style().outline_opacity() as f64);
    drawer.style_mut().set_outline_opacity(next);
    true
}

fn act_set_outline_size(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let next = modified(instruction, drawer.style().outline_size() as f64);
    drawer.style_mut().set_outline_size(next);
    true
}

fn act_coordinates_absolute(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    _instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    drawer.style_mut().set_coordinates_absolute();
    true
}

fn act_coordinates_relative(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    _instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    drawer.style_mut().set_coordinates_relative();
    true
}

// ---------------------------------------------------------------------------
// Shape actions
// ---------------------------------------------------------------------------

fn act_rectangle(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let (x1, y1) = drawer.resolve_point(instruction.number(0) as f32, instruction.number(1) as f32);
    let (x2, y2) = drawer.resolve_point(instruction.number(2) as f32, instruction.number(3) as f32);
    drawer.enqueue_shape(ShapeKind::Rectangle { x1, y1, x2, y2 });
    true
}

fn act_line(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let (x1, y1) = drawer.resolve_point(instruction.number(0) as f32, instruction.number(1) as f32);
    let (x2, y2) = drawer.resolve_point(instruction.number(2) as f32, instruction.number(3) as f32);
    let thickness = instruction.number(4) as f32;
    drawer.enqueue_shape(ShapeKind::Line { x1, y1, x2, y2, thickness });
    true
}

fn act_circle(
    _ctx: &mut ScriptContext,
    object: &mut dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    let Some(drawer) = as_drawer_mut(object) else {
        return false;
    };
    let (cx, cy) = drawer.resolve_point(instruction.number(0) as f32, instruction.number(1) as f32);
    let radius = instruction.number(2) as f32;
    drawer.enqueue_shape(ShapeKind::Circle { cx, cy, radius });
    true
}

// ---------------------------------------------------------------------------
// Standalone utility action
// ---------------------------------------------------------------------------

/// Copy one scene image onto another: `(destination, source, x, y)`.
///
/// Reports success even when an image name is unknown; composition failures
/// degrade to "nothing copied".
fn act_copy_image_on_another(ctx: &mut ScriptContext, instruction: &Instruction) -> bool {
    ctx.images.copy_onto(
        instruction.text(0),
        instruction.text(1),
        instruction.number(2) as i32,
        instruction.number(3) as i32,
    );
    true
}

// ---------------------------------------------------------------------------
// Conditions
// ---------------------------------------------------------------------------

/// Shared comparison step for conditions: parameter 0 is the comparison
/// operator, parameter 1 the operand.
fn compared(instruction: &Instruction, current: f64) -> bool {
    Comparison::parse(instruction.text(0)).evaluate(current, instruction.number(1))
}

fn cond_fill_opacity(
    _ctx: &ScriptContext,
    object: &dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    as_drawer(object)
        .map(|d| compared(instruction, d.style().fill_opacity() as f64))
        .unwrap_or(false)
}

fn cond_outline_opacity(
    _ctx: &ScriptContext,
    object: &dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    as_drawer(object)
        .map(|d| compared(instruction, d.style().outline_opacity() as f64))
        .unwrap_or(false)
}

fn cond_outline_size(
    _ctx: &ScriptContext,
    object: &dyn SceneObject,
    instruction: &Instruction,
) -> bool {
    as_drawer(object)
        .map(|d| compared(instruction, d.style().outline_size() as f64))
        .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

fn exp_fill_opacity(
    _ctx: &ScriptContext,
    object: &dyn SceneObject,
    _instruction: &Instruction,
) -> f64 {
    as_drawer(object)
        .map(|d| d.style().fill_opacity() as f64)
        .unwrap_or(0.0)
}

fn exp_outline_opacity(
    _ctx: &ScriptContext,
    object: &dyn SceneObject,
    _instruction: &Instruction,
) -> f64 {
    as_drawer(object)
        .map(|d| d.style().outline_opacity() as f64)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_string_parses_and_clamps() {
        assert_eq!(parse_color("255;128;0"), (255, 128, 0));
        assert_eq!(parse_color(" 10 ; 20 ; 30 "), (10, 20, 30));
        assert_eq!(parse_color("300;-5;90"), (255, 0, 90));
        // Missing or garbage components read as 0.
        assert_eq!(parse_color("12"), (12, 0, 0));
        assert_eq!(parse_color("a;b;c"), (0, 0, 0));
        assert_eq!(parse_color(""), (0, 0, 0));
    }
}
