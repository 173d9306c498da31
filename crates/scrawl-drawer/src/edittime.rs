//! Editor-only glue: placeholder rendering, thumbnails, the property grid.
//!
//! Compiled only with the `edittime` feature. Nothing here affects runtime
//! behavior; the property grid exposes the same seven style fields as the
//! serialization adapter, exchanged as text.

use scrawl_scene::object::{EditAware, SceneObject, THUMBNAIL_SIZE};
use scrawl_scene::shape::{ShapeCommand, ShapeKind};
use scrawl_scene::surface::{PixelSurface, RenderSurface};

use crate::bindings::parse_color;
use crate::object::DrawerObject;

/// Half-extent of the editor placeholder swatch drawn at the entity
/// position, in pixels.
const PLACEHOLDER_HALF: f32 = 8.0;

impl DrawerObject {
    /// A swatch rectangle centered on `(cx, cy)` carrying the current style.
    fn swatch(&self, cx: f32, cy: f32, half: f32) -> ShapeCommand {
        ShapeCommand {
            kind: ShapeKind::Rectangle {
                x1: cx - half,
                y1: cy - half,
                x2: cx + half,
                y2: cy + half,
            },
            fill: self.style().fill_rgba(),
            outline: self.style().outline_rgba(),
            outline_size: self.style().outline_size(),
        }
    }
}

impl EditAware for DrawerObject {
    fn draw_edittime(&mut self, surface: &mut dyn RenderSurface) -> bool {
        // Placeholder swatch so the object stays visible and selectable on
        // the editor canvas even when nothing was queued this frame.
        surface.draw_shape(&self.swatch(self.x(), self.y(), PLACEHOLDER_HALF));
        self.draw(surface)
    }

    fn thumbnail(&self) -> PixelSurface {
        let mut preview = PixelSurface::new(THUMBNAIL_SIZE, THUMBNAIL_SIZE);
        let center = THUMBNAIL_SIZE as f32 / 2.0;
        preview.draw_shape(&self.swatch(center, center, center - 3.0));
        preview
    }

    fn property_count(&self) -> usize {
        6
    }

    fn property(&self, index: usize) -> Option<(String, String)> {
        let style = self.style();
        let color = |(r, g, b): (u8, u8, u8)| format!("{r};{g};{b}");
        let entry = match index {
            0 => ("Fill color", color(style.fill_color())),
            1 => ("Fill opacity", style.fill_opacity().to_string()),
            2 => ("Outline color", color(style.outline_color())),
            3 => ("Outline opacity", style.outline_opacity().to_string()),
            4 => ("Outline size", style.outline_size().to_string()),
            5 => (
                "Absolute coordinates",
                style.coordinates_absolute().to_string(),
            ),
            _ => return None,
        };
        Some((entry.0.to_owned(), entry.1))
    }

    fn set_property(&mut self, index: usize, value: &str) -> bool {
        let style = self.style_mut();
        match index {
            0 => {
                let (r, g, b) = parse_color(value);
                style.set_fill_color(r as f64, g as f64, b as f64);
            }
            1 => match value.trim().parse::<f64>() {
                Ok(v) => style.set_fill_opacity(v),
                Err(_) => return false,
            },
            2 => {
                let (r, g, b) = parse_color(value);
                style.set_outline_color(r as f64, g as f64, b as f64);
            }
            3 => match value.trim().parse::<f64>() {
                Ok(v) => style.set_outline_opacity(v),
                Err(_) => return false,
            },
            4 => match value.trim().parse::<f64>() {
                Ok(v) => style.set_outline_size(v),
                Err(_) => return false,
            },
            5 => match value.trim() {
                "true" | "1" => style.set_coordinates_absolute(),
                "false" | "0" => style.set_coordinates_relative(),
                _ => return false,
            },
            _ => return false,
        }
        true
    }
}
