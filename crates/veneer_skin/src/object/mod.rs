//! Base UI object contract.
//!
//! Every renderable skin element implements [`GuiObject`] and embeds a
//! [`GuiBase`] holding the state all elements share: identity, presentation
//! attributes, the render-target handle and the lifecycle state.

mod resolve;

use std::fmt;

use veneer_core::coerce::{num, opacity, px, to_bool};
use veneer_core::CoerceResult;

use crate::group::Group;
use crate::key::ObjectKey;
use crate::lifecycle::{InitContext, Lifecycle};
use crate::render::RenderContext;
use crate::surface::{StyleProperty, SurfaceHandle};

pub use resolve::{resolve_base, resolve_chain, Resolver};

/// A node in the renderable skin tree.
pub trait GuiObject: fmt::Debug {
    /// Shared element state.
    fn base(&self) -> &GuiBase;

    /// Mutable shared element state.
    fn base_mut(&mut self) -> &mut GuiBase;

    /// Type name written to the render target for diagnostics.
    fn kind(&self) -> &'static str;

    /// Applies one markup attribute.
    ///
    /// Keys are case-insensitive. Returns `Ok(false)` for keys this type does
    /// not recognise; callers ignore those.
    ///
    /// # Errors
    ///
    /// Returns a coercion error if a recognised key has a malformed value. The
    /// targeted field is left unchanged.
    fn set_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool>;

    /// Identity used by lookups.
    fn id(&self) -> &str {
        self.base().id()
    }

    /// One-time context wiring. Repeated calls are no-ops.
    fn initialize(&mut self, _ctx: &mut InitContext<'_>) {
        self.base_mut().begin_initialize();
    }

    /// Populates this object's render target and returns its handle.
    ///
    /// The handle is created on the first call and reused afterwards.
    fn render(&mut self, cx: &mut RenderContext<'_>) -> SurfaceHandle;

    /// Current render target, if rendered.
    fn handle(&self) -> Option<SurfaceHandle> {
        self.base().handle()
    }

    /// Container view of this object, if it is one.
    fn as_group(&self) -> Option<&Group> {
        None
    }

    /// Mutable container view of this object, if it is one.
    fn as_group_mut(&mut self) -> Option<&mut Group> {
        None
    }
}

/// State shared by every UI object.
#[derive(Debug, Clone)]
pub struct GuiBase {
    key: ObjectKey,
    id: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    w: Option<f64>,
    h: Option<f64>,
    alpha: Option<f64>,
    visible: bool,
    ghost: bool,
    tooltip: Option<String>,
    handle: Option<SurfaceHandle>,
    state: Lifecycle,
}

impl GuiBase {
    /// Creates the shared state for a freshly declared object.
    #[must_use]
    pub const fn new(key: ObjectKey) -> Self {
        Self {
            key,
            id: None,
            x: None,
            y: None,
            w: None,
            h: None,
            alpha: None,
            visible: true,
            ghost: false,
            tooltip: None,
            handle: None,
            state: Lifecycle::Declared,
        }
    }

    /// Tree key of this object.
    #[must_use]
    pub const fn key(&self) -> ObjectKey {
        self.key
    }

    /// Declared id, or `""` if none was declared.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Declared horizontal offset.
    #[must_use]
    pub const fn x(&self) -> Option<f64> {
        self.x
    }

    /// Declared vertical offset.
    #[must_use]
    pub const fn y(&self) -> Option<f64> {
        self.y
    }

    /// Declared width.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        self.w
    }

    /// Declared height.
    #[must_use]
    pub const fn height(&self) -> Option<f64> {
        self.h
    }

    /// Declared alpha, `0..=255`.
    #[must_use]
    pub const fn alpha(&self) -> Option<f64> {
        self.alpha
    }

    /// Whether the object is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether pointer events pass through the object.
    #[must_use]
    pub const fn is_ghost(&self) -> bool {
        self.ghost
    }

    /// Tooltip text.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    /// Render target, once created.
    #[must_use]
    pub const fn handle(&self) -> Option<SurfaceHandle> {
        self.handle
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> Lifecycle {
        self.state
    }

    /// Applies a base attribute. `key` must already be lowercase.
    ///
    /// # Errors
    ///
    /// Returns a coercion error for malformed numeric or boolean values.
    pub fn apply_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        match key {
            "id" => self.id = Some(value.to_owned()),
            "x" => self.x = Some(num(value)?),
            "y" => self.y = Some(num(value)?),
            "w" => self.w = Some(num(value)?),
            "h" => self.h = Some(num(value)?),
            "alpha" => self.alpha = Some(num(value)?),
            "visible" => self.visible = to_bool(value)?,
            "ghost" => self.ghost = to_bool(value)?,
            "tooltip" => self.tooltip = Some(value.to_owned()),
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Moves `Declared → Initialized`.
    ///
    /// Returns false, and changes nothing, if the object was already
    /// initialized. Callers skip their own propagation in that case.
    pub fn begin_initialize(&mut self) -> bool {
        if self.state.is_initialized() {
            tracing::debug!("Skipping re-initialization of \"{}\"", self.id());
            return false;
        }
        self.state = Lifecycle::Initialized;
        true
    }

    /// Base render step: creates the target on first use and writes the
    /// shared presentation attributes.
    pub fn render_base(&mut self, cx: &mut RenderContext<'_>, resolved_id: &str) -> SurfaceHandle {
        let handle = match self.handle {
            Some(handle) => handle,
            None => {
                let handle = cx.surface.create_element();
                self.handle = Some(handle);
                handle
            }
        };

        cx.surface
            .set_attribute(handle, &cx.config.id_attribute, resolved_id);
        cx.surface.set_style(handle, StyleProperty::Left, &px(self.x));
        cx.surface.set_style(handle, StyleProperty::Top, &px(self.y));
        cx.surface.set_style(handle, StyleProperty::Width, &px(self.w));
        cx.surface.set_style(handle, StyleProperty::Height, &px(self.h));
        let alpha = self.alpha.map(opacity).unwrap_or_default();
        cx.surface.set_style(handle, StyleProperty::Opacity, &alpha);
        cx.surface.set_style(
            handle,
            StyleProperty::Display,
            if self.visible { "" } else { "none" },
        );
        cx.surface.set_style(
            handle,
            StyleProperty::PointerEvents,
            if self.ghost { "none" } else { "" },
        );

        if self.state == Lifecycle::Initialized {
            self.state = Lifecycle::Rendered;
        }
        tracing::trace!("Rendered \"{}\" into handle {}", resolved_id, handle.raw());
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{CoerceError, RenderConfig};

    use crate::render::CommandSurface;
    use crate::resource::BitmapRegistry;

    #[test]
    fn test_base_attributes() {
        let mut base = GuiBase::new(ObjectKey::new(1));
        assert!(base.apply_attribute("id", "Play").unwrap());
        assert!(base.apply_attribute("x", "10").unwrap());
        assert!(base.apply_attribute("alpha", "128").unwrap());
        assert!(base.apply_attribute("ghost", "1").unwrap());
        assert!(base.apply_attribute("tooltip", "Play").unwrap());
        assert!(!base.apply_attribute("maximum_w", "10").unwrap());

        assert_eq!(base.id(), "Play");
        assert_eq!(base.x(), Some(10.0));
        assert_eq!(base.alpha(), Some(128.0));
        assert!(base.is_ghost());
        assert_eq!(base.tooltip(), Some("Play"));
    }

    #[test]
    fn test_bad_value_leaves_field() {
        let mut base = GuiBase::new(ObjectKey::new(1));
        base.apply_attribute("visible", "0").unwrap();
        let err = base.apply_attribute("visible", "maybe").unwrap_err();

        assert!(matches!(err, CoerceError::InvalidBool { .. }));
        assert!(!base.is_visible());
    }

    #[test]
    fn test_initialize_once() {
        let mut base = GuiBase::new(ObjectKey::new(1));
        assert!(base.begin_initialize());
        assert!(!base.begin_initialize());
        assert_eq!(base.state(), Lifecycle::Initialized);
    }

    #[test]
    fn test_render_base_reuses_handle() {
        let mut base = GuiBase::new(ObjectKey::new(1));
        base.apply_attribute("w", "20").unwrap();
        base.apply_attribute("visible", "0").unwrap();
        base.begin_initialize();

        let mut surface = CommandSurface::new();
        let bitmaps = BitmapRegistry::new();
        let config = RenderConfig::default();
        let mut cx = RenderContext::new(&mut surface, &bitmaps, &config);
        let first = base.render_base(&mut cx, "main");
        let second = base.render_base(&mut cx, "main");

        assert_eq!(first, second);
        assert_eq!(base.state(), Lifecycle::Rendered);
        assert_eq!(surface.element_count(), 1);
        let element = surface.element(first).unwrap();
        assert_eq!(element.attribute("data-id"), Some("main"));
        assert_eq!(element.style(StyleProperty::Width), Some("20px"));
        assert_eq!(element.style(StyleProperty::Height), None);
        assert_eq!(element.style(StyleProperty::Display), Some("none"));
    }
}
