//! Layouts: top-level groups with window behavior flags.
//!
//! A layout is a [`Group`] plus a few keys of its own. Its resolver chain has
//! three links (base, group, layout), so every group key keeps its meaning.

use veneer_core::coerce::to_bool;
use veneer_core::CoerceResult;

use crate::group::{resolve_group, Group};
use crate::key::ObjectKey;
use crate::lifecycle::InitContext;
use crate::object::{resolve_base, resolve_chain, GuiBase, GuiObject, Resolver};
use crate::render::RenderContext;
use crate::surface::SurfaceHandle;

/// A group that forms a window layout.
#[derive(Debug)]
pub struct Layout {
    group: Group,
    resizable: bool,
    scalable: bool,
    desktop_alpha: bool,
}

impl Layout {
    const CHAIN: &'static [Resolver<Self>] = &[
        resolve_base::<Self>,
        resolve_group::<Self>,
        Self::resolve_own,
    ];

    /// Creates an empty, declared layout.
    #[must_use]
    pub fn new(key: ObjectKey) -> Self {
        Self {
            group: Group::new(key),
            resizable: false,
            scalable: false,
            desktop_alpha: false,
        }
    }

    /// The underlying group.
    #[must_use]
    pub const fn group(&self) -> &Group {
        &self.group
    }

    /// Mutable access to the underlying group, for attaching children.
    pub fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }

    /// Whether the user may resize the layout.
    #[must_use]
    pub const fn resizable(&self) -> bool {
        self.resizable
    }

    /// Whether the layout may be scaled.
    #[must_use]
    pub const fn scalable(&self) -> bool {
        self.scalable
    }

    /// Whether per-pixel desktop transparency is requested.
    #[must_use]
    pub const fn desktop_alpha(&self) -> bool {
        self.desktop_alpha
    }

    fn resolve_own(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        match key {
            "resizable" => self.resizable = to_bool(value)?,
            "scalable" => self.scalable = to_bool(value)?,
            "desktopalpha" => self.desktop_alpha = to_bool(value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl GuiObject for Layout {
    fn base(&self) -> &GuiBase {
        self.group.base()
    }

    fn base_mut(&mut self) -> &mut GuiBase {
        self.group.base_mut()
    }

    fn kind(&self) -> &'static str {
        "Layout"
    }

    fn set_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        resolve_chain(self, Self::CHAIN, key, value)
    }

    fn id(&self) -> &str {
        self.group.id()
    }

    fn initialize(&mut self, ctx: &mut InitContext<'_>) {
        self.group.initialize(ctx);
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> SurfaceHandle {
        self.group.render_as(cx, "Layout")
    }

    fn as_group(&self) -> Option<&Group> {
        Some(&self.group)
    }

    fn as_group_mut(&mut self) -> Option<&mut Group> {
        Some(&mut self.group)
    }
}
