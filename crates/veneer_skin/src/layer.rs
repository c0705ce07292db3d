//! Layers: leaf objects that draw one bitmap.

use veneer_core::coerce::px;
use veneer_core::CoerceResult;

use crate::key::ObjectKey;
use crate::object::{resolve_base, resolve_chain, GuiBase, GuiObject, Resolver};
use crate::render::RenderContext;
use crate::surface::{StyleProperty, SurfaceHandle};

/// A leaf object showing a bitmap.
#[derive(Debug)]
pub struct Layer {
    base: GuiBase,
    image: Option<String>,
    background_applied: bool,
}

impl Layer {
    const CHAIN: &'static [Resolver<Self>] = &[resolve_base::<Self>, Self::resolve_own];

    /// Creates a declared layer with no image.
    #[must_use]
    pub const fn new(key: ObjectKey) -> Self {
        Self {
            base: GuiBase::new(key),
            image: None,
            background_applied: false,
        }
    }

    /// Bitmap reference drawn by this layer.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn resolve_own(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        if key == "image" {
            self.image = Some(value.to_owned());
            return Ok(true);
        }
        Ok(false)
    }
}

impl GuiObject for Layer {
    fn base(&self) -> &GuiBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GuiBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Layer"
    }

    fn set_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        resolve_chain(self, Self::CHAIN, key, value)
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> SurfaceHandle {
        let id = self.id().to_owned();
        let handle = self.base.render_base(cx, &id);
        cx.tag_kind(handle, self.kind());

        let resources = cx.resources;
        let bitmap = match self.image.as_deref() {
            Some(reference) => {
                let found = resources.bitmap(reference);
                if found.is_none() {
                    tracing::warn!("Layer \"{}\" references missing bitmap \"{}\"", id, reference);
                }
                found
            }
            None => None,
        };
        let Some(bitmap) = bitmap else {
            if self.background_applied {
                cx.surface.set_style(handle, StyleProperty::Background, "");
                self.background_applied = false;
            }
            return handle;
        };

        cx.surface
            .set_style(handle, StyleProperty::Background, &bitmap.background_css_value());
        self.background_applied = true;
        // Declared size wins over the bitmap's natural size.
        if self.base.width().is_none() {
            let width = bitmap.w.map(f64::from);
            cx.surface.set_style(handle, StyleProperty::Width, &px(width));
        }
        if self.base.height().is_none() {
            let height = bitmap.h.map(f64::from);
            cx.surface.set_style(handle, StyleProperty::Height, &px(height));
        }
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::RenderConfig;

    use crate::render::CommandSurface;
    use crate::resource::{Bitmap, BitmapRegistry};

    #[test]
    fn test_layer_attributes() {
        let mut layer = Layer::new(ObjectKey::new(1));
        assert!(layer.set_attribute("ID", "play").unwrap());
        assert!(layer.set_attribute("Image", "player.play").unwrap());
        assert!(!layer.set_attribute("background", "x").unwrap());

        assert_eq!(layer.id(), "play");
        assert_eq!(layer.image(), Some("player.play"));
    }

    #[test]
    fn test_layer_draws_bitmap_at_natural_size() {
        let bitmaps: BitmapRegistry = [Bitmap::new("player.play", "cbuttons.png")
            .with_offset(23, 0)
            .with_size(23, 18)]
        .into_iter()
        .collect();
        let mut layer = Layer::new(ObjectKey::new(1));
        layer.set_attribute("image", "player.play").unwrap();
        layer.set_attribute("h", "20").unwrap();

        let mut surface = CommandSurface::new();
        let config = RenderConfig::default();
        let handle = layer.render(&mut RenderContext::new(&mut surface, &bitmaps, &config));

        let element = surface.element(handle).unwrap();
        assert_eq!(element.attribute("data-obj-name"), Some("Layer"));
        assert_eq!(
            element.style(StyleProperty::Background),
            Some("url(cbuttons.png) -23px 0px")
        );
        assert_eq!(element.style(StyleProperty::Width), Some("23px"));
        assert_eq!(element.style(StyleProperty::Height), Some("20px"));
    }

    #[test]
    fn test_layer_missing_bitmap() {
        let bitmaps = BitmapRegistry::new();
        let mut layer = Layer::new(ObjectKey::new(1));
        layer.set_attribute("image", "nowhere").unwrap();

        let mut surface = CommandSurface::new();
        let config = RenderConfig::default();
        let handle = layer.render(&mut RenderContext::new(&mut surface, &bitmaps, &config));

        assert_eq!(surface.element(handle).unwrap().style(StyleProperty::Background), None);
    }

    #[test]
    fn test_layer_clears_background_when_image_goes_missing() {
        let bitmaps: BitmapRegistry = [Bitmap::new("a", "a.png").with_size(8, 8)]
            .into_iter()
            .collect();
        let mut layer = Layer::new(ObjectKey::new(1));
        layer.set_attribute("image", "a").unwrap();

        let mut surface = CommandSurface::new();
        let config = RenderConfig::default();
        let handle = layer.render(&mut RenderContext::new(&mut surface, &bitmaps, &config));
        assert_eq!(
            surface.element(handle).unwrap().style(StyleProperty::Background),
            Some("url(a.png) 0px 0px")
        );

        layer.set_attribute("image", "missing").unwrap();
        let again = layer.render(&mut RenderContext::new(&mut surface, &bitmaps, &config));

        assert_eq!(handle, again);
        let element = surface.element(handle).unwrap();
        assert_eq!(element.style(StyleProperty::Background), None);
        assert_eq!(element.style(StyleProperty::Width), None);
    }

    #[test]
    fn test_layer_without_image_never_touches_background() {
        let bitmaps = BitmapRegistry::new();
        let mut layer = Layer::new(ObjectKey::new(1));

        let mut surface = CommandSurface::new();
        let config = RenderConfig::default();
        layer.render(&mut RenderContext::new(&mut surface, &bitmaps, &config));

        assert!(!surface.commands().iter().any(|command| matches!(
            command,
            crate::render::SurfaceCommand::SetStyle {
                property: StyleProperty::Background,
                ..
            }
        )));
    }
}
