//! Resolved draw commands -- the vocabulary consumed by render surfaces.
//!
//! A [`ShapeCommand`] is one ready-to-rasterize primitive. Geometry is always
//! expressed in absolute device coordinates: coordinate-mode resolution
//! happens at enqueue time, before a command is ever constructed, so a
//! surface never needs to know about entity positions.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// An RGBA color: 0-255 channels plus a 0.0-1.0 alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity in 0.0 (transparent) to 1.0 (opaque).
    pub alpha: f32,
}

impl Rgba {
    /// Construct an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Construct a color with an explicit alpha.
    pub const fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }
}

// ---------------------------------------------------------------------------
// ShapeKind
// ---------------------------------------------------------------------------

/// Kind-specific geometry of a draw command, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Axis-aligned rectangle given by two opposite corners.
    Rectangle { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Line segment between two endpoints, with its own stroke thickness.
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
    },
    /// Circle given by center and radius.
    Circle { cx: f32, cy: f32, radius: f32 },
}

impl ShapeKind {
    /// All coordinates (and line thickness) of this geometry.
    fn coords(&self) -> [f32; 5] {
        match *self {
            ShapeKind::Rectangle { x1, y1, x2, y2 } => [x1, y1, x2, y2, 0.0],
            ShapeKind::Line { x1, y1, x2, y2, thickness } => [x1, y1, x2, y2, thickness],
            ShapeKind::Circle { cx, cy, radius } => [cx, cy, radius, 0.0, 0.0],
        }
    }
}

// ---------------------------------------------------------------------------
// ShapeCommand
// ---------------------------------------------------------------------------

/// One resolved, ready-to-rasterize primitive shape instruction.
///
/// Carries the geometry plus a snapshot of the fill and outline style taken
/// at enqueue time. Commands are transient: they live inside an entity's
/// per-frame queue and never survive a draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeCommand {
    /// Geometry, already resolved to absolute device coordinates.
    pub kind: ShapeKind,
    /// Interior color.
    pub fill: Rgba,
    /// Stroke color.
    pub outline: Rgba,
    /// Stroke width in pixels. The sign is preserved end to end: a positive
    /// value strokes outward from the shape boundary, a negative value
    /// strokes inward.
    pub outline_size: i32,
}

impl ShapeCommand {
    /// Whether this command can be rasterized at all.
    ///
    /// Degenerate geometry (non-finite coordinates, a circle with zero or
    /// negative radius) is dropped at draw time rather than surfaced as an
    /// error; the frame continues without it.
    pub fn is_drawable(&self) -> bool {
        if self.kind.coords().iter().any(|c| !c.is_finite()) {
            return false;
        }
        match self.kind {
            ShapeKind::Circle { radius, .. } => radius > 0.0,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_rectangle_is_drawable() {
        let cmd = ShapeCommand {
            kind: ShapeKind::Rectangle { x1: 0.0, y1: 0.0, x2: 10.0, y2: 10.0 },
            fill: Rgba::opaque(255, 255, 255),
            outline: Rgba::opaque(0, 0, 0),
            outline_size: 1,
        };
        assert!(cmd.is_drawable());
    }

    #[test]
    fn nan_coordinate_is_not_drawable() {
        let cmd = ShapeCommand {
            kind: ShapeKind::Line {
                x1: f32::NAN,
                y1: 0.0,
                x2: 5.0,
                y2: 5.0,
                thickness: 1.0,
            },
            fill: Rgba::opaque(255, 255, 255),
            outline: Rgba::opaque(0, 0, 0),
            outline_size: 1,
        };
        assert!(!cmd.is_drawable());
    }

    #[test]
    fn zero_or_negative_radius_is_not_drawable() {
        for radius in [0.0, -4.0] {
            let cmd = ShapeCommand {
                kind: ShapeKind::Circle { cx: 10.0, cy: 10.0, radius },
                fill: Rgba::opaque(255, 255, 255),
                outline: Rgba::opaque(0, 0, 0),
                outline_size: 1,
            };
            assert!(!cmd.is_drawable(), "radius {radius} should be dropped");
        }
    }

    #[test]
    fn serializes_to_json() {
        let cmd = ShapeCommand {
            kind: ShapeKind::Circle { cx: 1.0, cy: 2.0, radius: 3.0 },
            fill: Rgba::with_alpha(10, 20, 30, 0.5),
            outline: Rgba::opaque(0, 0, 0),
            outline_size: -2,
        };
        let json = serde_json::to_string(&cmd).expect("should serialize to JSON");
        assert!(json.contains("Circle"));
        let back: ShapeCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
