//! Persistent fill/outline style configuration.
//!
//! [`StyleState`] holds the seven style fields that survive across frames
//! and seed every newly queued shape. Mutation happens only through the
//! clamping setters here (driven by scripting bindings) or through the
//! serialization adapter -- which reuses the same pure clamp functions, so
//! the storage invariants hold at every write site:
//!
//! - color channels are always in 0-255,
//! - opacities are always in 0-100 (percentage, matching the scripting
//!   layer's convention; 0.0-1.0 alpha only appears in resolved commands).

use scrawl_scene::shape::Rgba;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Clamp functions
// ---------------------------------------------------------------------------

/// Clamp a scripting-layer number into a 0-255 color channel.
///
/// Non-finite input reads as 0.
pub fn clamp_channel(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

/// Clamp a scripting-layer number into a 0-100 opacity percentage.
///
/// Non-finite input reads as 0.
pub fn clamp_opacity(value: f64) -> f32 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0) as f32
}

// ---------------------------------------------------------------------------
// StyleState
// ---------------------------------------------------------------------------

/// The persistent style configuration of a drawer entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleState {
    fill_color_r: u8,
    fill_color_g: u8,
    fill_color_b: u8,
    /// Fill opacity as a 0-100 percentage.
    fill_opacity: f32,
    outline_color_r: u8,
    outline_color_g: u8,
    outline_color_b: u8,
    /// Outline opacity as a 0-100 percentage.
    outline_opacity: f32,
    /// Stroke width in pixels; the sign selects stroke direction (positive
    /// outward, negative inward) and is preserved, never normalized.
    outline_size: i32,
    /// When true, shape geometry is interpreted as absolute screen
    /// coordinates; when false, relative to the entity position.
    absolute_coordinates: bool,
}

impl Default for StyleState {
    /// Opaque white fill, opaque black outline of size 1, absolute
    /// coordinates.
    fn default() -> Self {
        Self {
            fill_color_r: 255,
            fill_color_g: 255,
            fill_color_b: 255,
            fill_opacity: 100.0,
            outline_color_r: 0,
            outline_color_g: 0,
            outline_color_b: 0,
            outline_opacity: 100.0,
            outline_size: 1,
            absolute_coordinates: true,
        }
    }
}

impl StyleState {
    // -- fill ----------------------------------------------------------------

    pub fn set_fill_color(&mut self, r: f64, g: f64, b: f64) {
        self.fill_color_r = clamp_channel(r);
        self.fill_color_g = clamp_channel(g);
        self.fill_color_b = clamp_channel(b);
    }

    pub fn fill_color(&self) -> (u8, u8, u8) {
        (self.fill_color_r, self.fill_color_g, self.fill_color_b)
    }

    pub fn set_fill_opacity(&mut self, value: f64) {
        self.fill_opacity = clamp_opacity(value);
    }

    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }

    /// The fill as a resolved command color (alpha 0.0-1.0).
    pub fn fill_rgba(&self) -> Rgba {
        Rgba::with_alpha(
            self.fill_color_r,
            self.fill_color_g,
            self.fill_color_b,
            self.fill_opacity / 100.0,
        )
    }

    // -- outline -------------------------------------------------------------

    pub fn set_outline_color(&mut self, r: f64, g: f64, b: f64) {
        self.outline_color_r = clamp_channel(r);
        self.outline_color_g = clamp_channel(g);
        self.outline_color_b = clamp_channel(b);
    }

    pub fn outline_color(&self) -> (u8, u8, u8) {
        (self.outline_color_r, self.outline_color_g, self.outline_color_b)
    }

    pub fn set_outline_opacity(&mut self, value: f64) {
        self.outline_opacity = clamp_opacity(value);
    }

    pub fn outline_opacity(&self) -> f32 {
        self.outline_opacity
    }

    /// Set the stroke width. The sign is kept as given; non-finite input
    /// reads as 0.
    pub fn set_outline_size(&mut self, value: f64) {
        self.outline_size = if value.is_finite() {
            value.round() as i32
        } else {
            0
        };
    }

    pub fn outline_size(&self) -> i32 {
        self.outline_size
    }

    /// The outline as a resolved command color (alpha 0.0-1.0).
    pub fn outline_rgba(&self) -> Rgba {
        Rgba::with_alpha(
            self.outline_color_r,
            self.outline_color_g,
            self.outline_color_b,
            self.outline_opacity / 100.0,
        )
    }

    // -- coordinate mode -----------------------------------------------------

    /// Interpret future shape geometry as absolute screen coordinates.
    pub fn set_coordinates_absolute(&mut self) {
        self.absolute_coordinates = true;
    }

    /// Interpret future shape geometry relative to the entity position.
    pub fn set_coordinates_relative(&mut self) {
        self.absolute_coordinates = false;
    }

    pub fn coordinates_absolute(&self) -> bool {
        self.absolute_coordinates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_white_fill_black_outline() {
        let style = StyleState::default();
        assert_eq!(style.fill_color(), (255, 255, 255));
        assert_eq!(style.fill_opacity(), 100.0);
        assert_eq!(style.outline_color(), (0, 0, 0));
        assert_eq!(style.outline_opacity(), 100.0);
        assert_eq!(style.outline_size(), 1);
        assert!(style.coordinates_absolute());
    }

    #[test]
    fn color_setters_clamp_out_of_range_values() {
        let mut style = StyleState::default();
        style.set_fill_color(300.0, -20.0, 128.0);
        assert_eq!(style.fill_color(), (255, 0, 128));
        style.set_outline_color(-1.0, 256.0, 0.0);
        assert_eq!(style.outline_color(), (0, 255, 0));
    }

    #[test]
    fn opacity_setters_clamp_to_percentage_range() {
        let mut style = StyleState::default();
        style.set_fill_opacity(150.0);
        assert_eq!(style.fill_opacity(), 100.0);
        style.set_outline_opacity(-5.0);
        assert_eq!(style.outline_opacity(), 0.0);
    }

    #[test]
    fn non_finite_input_reads_as_zero() {
        let mut style = StyleState::default();
        style.set_fill_opacity(f64::NAN);
        assert_eq!(style.fill_opacity(), 0.0);
        style.set_fill_color(f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(style.fill_color(), (0, 0, 0));
        style.set_outline_size(f64::NAN);
        assert_eq!(style.outline_size(), 0);
    }

    #[test]
    fn negative_outline_size_is_preserved() {
        let mut style = StyleState::default();
        style.set_outline_size(-3.0);
        assert_eq!(style.outline_size(), -3);
    }

    #[test]
    fn coordinate_mode_setters_are_mutually_exclusive() {
        let mut style = StyleState::default();
        style.set_coordinates_relative();
        assert!(!style.coordinates_absolute());
        style.set_coordinates_absolute();
        assert!(style.coordinates_absolute());
    }

    #[test]
    fn serializes_to_json() {
        let mut style = StyleState::default();
        style.set_outline_size(-2.0);
        let json = serde_json::to_string(&style).expect("should serialize to JSON");
        let back: StyleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn rgba_conversion_scales_opacity_to_alpha() {
        let mut style = StyleState::default();
        style.set_fill_opacity(50.0);
        assert_eq!(style.fill_rgba().alpha, 0.5);
        assert_eq!(style.outline_rgba().alpha, 1.0);
    }
}
