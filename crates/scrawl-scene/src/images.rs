//! Named offscreen images owned by the running scene.
//!
//! The [`ImageBank`] is the image-manager handle threaded through resource
//! loading and scripting bindings. Object types without image dependencies
//! receive it and ignore it; composition utilities (copying one image onto
//! another) mutate it directly.

use std::collections::BTreeMap;

use crate::surface::PixelSurface;

/// A named store of [`PixelSurface`] images.
#[derive(Debug, Clone, Default)]
pub struct ImageBank {
    images: BTreeMap<String, PixelSurface>,
}

impl ImageBank {
    /// Create an empty bank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an image under `name`.
    pub fn insert(&mut self, name: &str, image: PixelSurface) {
        self.images.insert(name.to_owned(), image);
    }

    /// Borrow the image under `name`, if present.
    pub fn get(&self, name: &str) -> Option<&PixelSurface> {
        self.images.get(name)
    }

    /// Mutably borrow the image under `name`, if present.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PixelSurface> {
        self.images.get_mut(name)
    }

    /// Blend the image under `src` onto the image under `dst` with its
    /// top-left corner at `(x, y)`.
    ///
    /// Silently does nothing when either name is missing or both name the
    /// same image; composition failures never abort the scene.
    pub fn copy_onto(&mut self, dst: &str, src: &str, x: i32, y: i32) -> bool {
        if dst == src {
            return false;
        }
        let Some(source) = self.images.get(src).cloned() else {
            tracing::warn!(src, "copy_onto: source image not found");
            return false;
        };
        let Some(target) = self.images.get_mut(dst) else {
            tracing::warn!(dst, "copy_onto: destination image not found");
            return false;
        };
        target.blit(&source, x, y);
        true
    }

    /// Number of images held.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the bank holds no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Rgba;

    #[test]
    fn copy_onto_blends_source_into_destination() {
        let mut bank = ImageBank::new();
        bank.insert("canvas", PixelSurface::new(8, 8));
        let mut stamp = PixelSurface::new(2, 2);
        stamp.clear(Rgba::opaque(1, 2, 3));
        bank.insert("stamp", stamp);

        assert!(bank.copy_onto("canvas", "stamp", 4, 4));
        assert_eq!(bank.get("canvas").unwrap().pixel(4, 4), Some([1, 2, 3, 255]));
        assert_eq!(bank.get("canvas").unwrap().pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn copy_onto_missing_image_is_a_soft_failure() {
        let mut bank = ImageBank::new();
        bank.insert("canvas", PixelSurface::new(8, 8));
        assert!(!bank.copy_onto("canvas", "ghost", 0, 0));
        assert!(!bank.copy_onto("ghost", "canvas", 0, 0));
        assert!(!bank.copy_onto("canvas", "canvas", 0, 0));
    }
}
