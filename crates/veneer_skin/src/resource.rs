//! Shared skin resources.
//!
//! The bitmap store is owned by the host and only ever queried here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A region of an image file declared by the skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitmap {
    /// Reference used by elements (`background`, `image`).
    pub id: String,
    /// Image source.
    pub file: String,
    /// Horizontal offset of the region inside `file`.
    #[serde(default)]
    pub x: i32,
    /// Vertical offset of the region inside `file`.
    #[serde(default)]
    pub y: i32,
    /// Region width, if declared.
    #[serde(default)]
    pub w: Option<u32>,
    /// Region height, if declared.
    #[serde(default)]
    pub h: Option<u32>,
}

impl Bitmap {
    /// Creates a bitmap covering `file` from its origin.
    #[must_use]
    pub fn new(id: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file: file.into(),
            x: 0,
            y: 0,
            w: None,
            h: None,
        }
    }

    /// Sets the region offset.
    #[must_use]
    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Sets the region size.
    #[must_use]
    pub fn with_size(mut self, w: u32, h: u32) -> Self {
        self.w = Some(w);
        self.h = Some(h);
        self
    }

    /// Background value that shows this region: `url(<file>) <-x>px <-y>px`.
    #[must_use]
    pub fn background_css_value(&self) -> String {
        format!("url({}) {}px {}px", self.file, -self.x, -self.y)
    }
}

/// Source of shared skin resources.
pub trait ResourceProvider {
    /// Looks up a bitmap by reference. Missing bitmaps yield `None`.
    fn bitmap(&self, reference: &str) -> Option<&Bitmap>;
}

/// In-memory bitmap store with case-insensitive references.
#[derive(Debug, Clone, Default)]
pub struct BitmapRegistry {
    bitmaps: HashMap<String, Bitmap>,
}

impl BitmapRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a bitmap, replacing any bitmap with the same reference.
    pub fn insert(&mut self, bitmap: Bitmap) -> Option<Bitmap> {
        self.bitmaps.insert(bitmap.id.to_lowercase(), bitmap)
    }

    /// Number of registered bitmaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bitmaps.len()
    }

    /// Returns true if no bitmaps are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bitmaps.is_empty()
    }
}

impl FromIterator<Bitmap> for BitmapRegistry {
    fn from_iter<I: IntoIterator<Item = Bitmap>>(iter: I) -> Self {
        let mut registry = Self::new();
        for bitmap in iter {
            registry.insert(bitmap);
        }
        registry
    }
}

impl ResourceProvider for BitmapRegistry {
    fn bitmap(&self, reference: &str) -> Option<&Bitmap> {
        self.bitmaps.get(&reference.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_css_value() {
        let bitmap = Bitmap::new("wasabi.frame", "frame.png").with_offset(12, 40);
        assert_eq!(bitmap.background_css_value(), "url(frame.png) -12px -40px");

        let origin = Bitmap::new("bg", "bg.png");
        assert_eq!(origin.background_css_value(), "url(bg.png) 0px 0px");
    }

    #[test]
    fn test_registry_lookup_ignores_case() {
        let registry: BitmapRegistry = [Bitmap::new("Player.BG", "bg.png")].into_iter().collect();

        assert_eq!(registry.len(), 1);
        assert!(registry.bitmap("player.bg").is_some());
        assert!(registry.bitmap("PLAYER.BG").is_some());
        assert!(registry.bitmap("missing").is_none());
    }
}
