//! Render surfaces -- where resolved shape commands get rasterized.
//!
//! The [`RenderSurface`] trait is the seam between an entity's draw pass and
//! whatever actually puts pixels somewhere. Two implementations ship here:
//!
//! - [`PixelSurface`]: an owned RGBA8 buffer with CPU rasterization of the
//!   three primitive kinds (rectangle, line, circle), including the
//!   signed-outline stroke convention.
//! - [`HeadlessSurface`]: records resolved commands in draw order without
//!   touching pixels. Used for headless frame reporting and in tests.

use serde::{Deserialize, Serialize};

use crate::shape::{Rgba, ShapeCommand, ShapeKind};

// ---------------------------------------------------------------------------
// RenderSurface
// ---------------------------------------------------------------------------

/// A target that resolved shape commands are drawn onto.
///
/// Implementations receive commands whose geometry is already in absolute
/// device coordinates; malformed commands are filtered out by the caller
/// before they reach a surface.
pub trait RenderSurface {
    /// Surface dimensions in pixels, `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Rasterize one shape command.
    fn draw_shape(&mut self, shape: &ShapeCommand);
}

// ---------------------------------------------------------------------------
// PixelSurface
// ---------------------------------------------------------------------------

/// An owned RGBA8 pixel buffer with CPU shape rasterization.
///
/// Rasterization is signed-distance based: a pixel is filled when its center
/// lies inside the shape boundary, and stroked when it falls in the outline
/// band. A positive outline size strokes outward from the boundary, a
/// negative one strokes inward (over the fill).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    /// Row-major RGBA8, `width * height * 4` bytes.
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface of the given size, cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Fill the whole surface with one color (alpha written as-is).
    pub fn clear(&mut self, color: Rgba) {
        let a = (color.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, a]);
        }
    }

    /// The RGBA bytes of one pixel, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) as usize) * 4;
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Source-over blend one pixel. Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let alpha = color.alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) as usize) * 4;
        let blend = |src: u8, dst: u8| -> u8 {
            (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8
        };
        self.pixels[i] = blend(color.r, self.pixels[i]);
        self.pixels[i + 1] = blend(color.g, self.pixels[i + 1]);
        self.pixels[i + 2] = blend(color.b, self.pixels[i + 2]);
        let dst_a = self.pixels[i + 3] as f32 / 255.0;
        self.pixels[i + 3] = ((alpha + dst_a * (1.0 - alpha)) * 255.0).round() as u8;
    }

    /// Blend another surface onto this one with its top-left corner at
    /// `(x, y)`. Pixels falling outside this surface are ignored.
    pub fn blit(&mut self, src: &PixelSurface, x: i32, y: i32) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                let [r, g, b, a] = src
                    .pixel(sx, sy)
                    .unwrap_or([0, 0, 0, 0]);
                self.blend_pixel(
                    x + sx as i32,
                    y + sy as i32,
                    Rgba::with_alpha(r, g, b, a as f32 / 255.0),
                );
            }
        }
    }

    /// Signed distance from a point to the shape boundary.
    ///
    /// Negative inside, positive outside. For rectangles this uses the
    /// Chebyshev distance so the outline band keeps square corners.
    fn boundary_distance(kind: &ShapeKind, px: f32, py: f32) -> f32 {
        match *kind {
            ShapeKind::Rectangle { x1, y1, x2, y2 } => {
                let (min_x, max_x) = (x1.min(x2), x1.max(x2));
                let (min_y, max_y) = (y1.min(y2), y1.max(y2));
                let dx = (min_x - px).max(px - max_x);
                let dy = (min_y - py).max(py - max_y);
                dx.max(dy)
            }
            ShapeKind::Circle { cx, cy, radius } => {
                ((px - cx).powi(2) + (py - cy).powi(2)).sqrt() - radius
            }
            ShapeKind::Line { x1, y1, x2, y2, thickness } => {
                segment_distance(px, py, x1, y1, x2, y2) - thickness.max(0.0) / 2.0
            }
        }
    }

    /// Conservative pixel bounding box for a command, outline included.
    fn bounds(&self, shape: &ShapeCommand) -> (i32, i32, i32, i32) {
        let pad = shape.outline_size.max(0) as f32 + 1.0;
        let (min_x, min_y, max_x, max_y) = match shape.kind {
            ShapeKind::Rectangle { x1, y1, x2, y2 }
            | ShapeKind::Line { x1, y1, x2, y2, .. } => {
                (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
            }
            ShapeKind::Circle { cx, cy, radius } => {
                (cx - radius, cy - radius, cx + radius, cy + radius)
            }
        };
        let extra = if let ShapeKind::Line { thickness, .. } = shape.kind {
            pad + thickness.max(0.0) / 2.0
        } else {
            pad
        };
        (
            ((min_x - extra).floor() as i32).max(0),
            ((min_y - extra).floor() as i32).max(0),
            ((max_x + extra).ceil() as i32).min(self.width as i32),
            ((max_y + extra).ceil() as i32).min(self.height as i32),
        )
    }
}

impl RenderSurface for PixelSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_shape(&mut self, shape: &ShapeCommand) {
        let (x0, y0, x1, y1) = self.bounds(shape);
        let stroke = shape.outline_size;
        for y in y0..y1 {
            for x in x0..x1 {
                // Sample at the pixel center.
                let d = Self::boundary_distance(&shape.kind, x as f32 + 0.5, y as f32 + 0.5);
                if d <= 0.0 {
                    // Inside. An inward stroke paints the band just inside
                    // the boundary in the outline color.
                    if stroke < 0 && d >= stroke as f32 {
                        self.blend_pixel(x, y, shape.outline);
                    } else {
                        self.blend_pixel(x, y, shape.fill);
                    }
                } else if stroke > 0 && d <= stroke as f32 {
                    // Outward stroke band.
                    self.blend_pixel(x, y, shape.outline);
                }
            }
        }
    }
}

/// Euclidean distance from a point to a line segment.
fn segment_distance(px: f32, py: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let (vx, vy) = (x2 - x1, y2 - y1);
    let len_sq = vx * vx + vy * vy;
    let t = if len_sq <= f32::EPSILON {
        0.0
    } else {
        (((px - x1) * vx + (py - y1) * vy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (x1 + t * vx, y1 + t * vy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

// ---------------------------------------------------------------------------
// HeadlessSurface
// ---------------------------------------------------------------------------

/// A surface that records commands instead of rasterizing them.
///
/// Keeps every drawn command in draw order, so hosts running without a
/// window (and tests) can still observe exactly what a frame produced.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    commands: Vec<ShapeCommand>,
}

impl HeadlessSurface {
    /// Create a recording surface reporting the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Commands drawn so far, in draw order.
    pub fn commands(&self) -> &[ShapeCommand] {
        &self.commands
    }

    /// Forget all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl RenderSurface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_shape(&mut self, shape: &ShapeCommand) {
        self.commands.push(shape.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_rect(x1: f32, y1: f32, x2: f32, y2: f32, outline_size: i32) -> ShapeCommand {
        ShapeCommand {
            kind: ShapeKind::Rectangle { x1, y1, x2, y2 },
            fill: Rgba::opaque(255, 0, 0),
            outline: Rgba::opaque(0, 0, 255),
            outline_size,
        }
    }

    #[test]
    fn fills_rectangle_interior() {
        let mut surface = PixelSurface::new(32, 32);
        surface.draw_shape(&red_rect(4.0, 4.0, 12.0, 12.0, 0));
        assert_eq!(surface.pixel(8, 8), Some([255, 0, 0, 255]));
        // Outside stays untouched.
        assert_eq!(surface.pixel(20, 20), Some([0, 0, 0, 0]));
    }

    #[test]
    fn positive_outline_strokes_outward() {
        let mut surface = PixelSurface::new(32, 32);
        surface.draw_shape(&red_rect(8.0, 8.0, 16.0, 16.0, 2));
        // One pixel outside the boundary is stroke.
        assert_eq!(surface.pixel(17, 12), Some([0, 0, 255, 255]));
        // Just inside the boundary is fill.
        assert_eq!(surface.pixel(15, 12), Some([255, 0, 0, 255]));
    }

    #[test]
    fn negative_outline_strokes_inward() {
        let mut surface = PixelSurface::new(32, 32);
        surface.draw_shape(&red_rect(8.0, 8.0, 16.0, 16.0, -2));
        // Just inside the boundary is stroke, center is fill.
        assert_eq!(surface.pixel(15, 12), Some([0, 0, 255, 255]));
        assert_eq!(surface.pixel(12, 12), Some([255, 0, 0, 255]));
        // Nothing painted outside the boundary.
        assert_eq!(surface.pixel(17, 12), Some([0, 0, 0, 0]));
    }

    #[test]
    fn circle_center_is_filled() {
        let mut surface = PixelSurface::new(32, 32);
        surface.draw_shape(&ShapeCommand {
            kind: ShapeKind::Circle { cx: 16.0, cy: 16.0, radius: 6.0 },
            fill: Rgba::opaque(0, 255, 0),
            outline: Rgba::opaque(0, 0, 0),
            outline_size: 0,
        });
        assert_eq!(surface.pixel(16, 16), Some([0, 255, 0, 255]));
        assert_eq!(surface.pixel(16, 25), Some([0, 0, 0, 0]));
    }

    #[test]
    fn line_covers_its_midpoint() {
        let mut surface = PixelSurface::new(32, 32);
        surface.draw_shape(&ShapeCommand {
            kind: ShapeKind::Line { x1: 2.0, y1: 16.0, x2: 30.0, y2: 16.0, thickness: 3.0 },
            fill: Rgba::opaque(255, 255, 255),
            outline: Rgba::opaque(0, 0, 0),
            outline_size: 0,
        });
        assert_eq!(surface.pixel(16, 16), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(16, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn blit_copies_source_at_offset() {
        let mut dst = PixelSurface::new(16, 16);
        let mut src = PixelSurface::new(4, 4);
        src.clear(Rgba::opaque(9, 8, 7));
        dst.blit(&src, 10, 10);
        assert_eq!(dst.pixel(10, 10), Some([9, 8, 7, 255]));
        assert_eq!(dst.pixel(13, 13), Some([9, 8, 7, 255]));
        assert_eq!(dst.pixel(9, 9), Some([0, 0, 0, 0]));
    }

    #[test]
    fn headless_surface_records_in_order() {
        let mut surface = HeadlessSurface::new(64, 64);
        let a = red_rect(0.0, 0.0, 1.0, 1.0, 0);
        let b = red_rect(2.0, 2.0, 3.0, 3.0, 0);
        surface.draw_shape(&a);
        surface.draw_shape(&b);
        assert_eq!(surface.commands(), &[a, b]);
        surface.reset();
        assert!(surface.commands().is_empty());
    }
}
