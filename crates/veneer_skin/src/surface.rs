//! Render surface contract.
//!
//! The surface is whatever actually displays the skin (a DOM, a retained
//! scene graph, a test recorder). Skin objects only see opaque handles and
//! the four operations below.

/// Opaque handle to one element on a [`RenderSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(u64);

impl SurfaceHandle {
    /// Creates a handle from a raw value. Only surfaces should mint handles.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Presentation properties a skin object can set on its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    /// Horizontal offset.
    Left,
    /// Vertical offset.
    Top,
    /// Element width.
    Width,
    /// Element height.
    Height,
    /// Opacity in `0..=1`.
    Opacity,
    /// `none` hides the element.
    Display,
    /// `none` lets pointer events fall through.
    PointerEvents,
    /// Composed background value.
    Background,
}

impl StyleProperty {
    /// CSS-equivalent property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
            Self::Opacity => "opacity",
            Self::Display => "display",
            Self::PointerEvents => "pointer-events",
            Self::Background => "background",
        }
    }
}

/// A surface that skin objects render into.
///
/// An empty `value` clears the attribute or style. Appending a child that is
/// already attached somewhere moves it.
pub trait RenderSurface {
    /// Creates a detached element and returns its handle.
    fn create_element(&mut self) -> SurfaceHandle;

    /// Sets a named attribute on an element.
    fn set_attribute(&mut self, target: SurfaceHandle, name: &str, value: &str);

    /// Sets a presentation property on an element.
    fn set_style(&mut self, target: SurfaceHandle, property: StyleProperty, value: &str);

    /// Appends `child` as the last child of `parent`.
    fn append_child(&mut self, parent: SurfaceHandle, child: SurfaceHandle);
}
