//! Container objects.
//!
//! A [`Group`] owns an ordered list of child objects and an ordered list of
//! system objects, drives their lifecycle and composes their render output.
//! It also answers the scripting bridge's id lookups.

use veneer_core::coerce::{num, px, to_bool};
use veneer_core::{ids_match, CoerceResult};

use crate::error::LookupError;
use crate::key::ObjectKey;
use crate::lifecycle::InitContext;
use crate::object::{resolve_base, resolve_chain, GuiBase, GuiObject, Resolver};
use crate::render::RenderContext;
use crate::resource::ResourceProvider;
use crate::surface::{StyleProperty, SurfaceHandle};
use crate::system::SystemObject;

/// A container of UI objects and system objects.
#[derive(Debug)]
pub struct Group {
    base: GuiBase,
    instance_id: Option<String>,
    background: Option<String>,
    draw_background: bool,
    minimum_h: Option<f64>,
    minimum_w: Option<f64>,
    maximum_h: Option<f64>,
    maximum_w: Option<f64>,
    background_applied: bool,
    children: Vec<Box<dyn GuiObject>>,
    system_objects: Vec<SystemObject>,
}

impl Group {
    const CHAIN: &'static [Resolver<Self>] = &[resolve_base::<Self>, resolve_group::<Self>];

    /// Creates an empty, declared group.
    #[must_use]
    pub fn new(key: ObjectKey) -> Self {
        Self {
            base: GuiBase::new(key),
            instance_id: None,
            background: None,
            draw_background: true,
            minimum_h: None,
            minimum_w: None,
            maximum_h: None,
            maximum_w: None,
            background_applied: false,
            children: Vec::new(),
            system_objects: Vec::new(),
        }
    }

    /// Tree key of this group.
    #[must_use]
    pub const fn key(&self) -> ObjectKey {
        self.base.key()
    }

    /// Instance id override.
    #[must_use]
    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    /// Background bitmap reference.
    #[must_use]
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Whether the background is composed at render time.
    #[must_use]
    pub const fn draw_background(&self) -> bool {
        self.draw_background
    }

    /// Minimum height. Stored only; enforcement is up to the surface.
    #[must_use]
    pub const fn minimum_h(&self) -> Option<f64> {
        self.minimum_h
    }

    /// Minimum width. Stored only; enforcement is up to the surface.
    #[must_use]
    pub const fn minimum_w(&self) -> Option<f64> {
        self.minimum_w
    }

    /// Maximum height, applied as the render target's height.
    #[must_use]
    pub const fn maximum_h(&self) -> Option<f64> {
        self.maximum_h
    }

    /// Maximum width, applied as the render target's width.
    #[must_use]
    pub const fn maximum_w(&self) -> Option<f64> {
        self.maximum_w
    }

    /// Appends a child. Children render and resolve in insertion order.
    pub fn add_child(&mut self, child: Box<dyn GuiObject>) {
        self.children.push(child);
    }

    /// Attaches a system object and points its back-reference here.
    pub fn add_system_object(&mut self, mut system: SystemObject) {
        system.set_parent_group(self.key());
        self.system_objects.push(system);
    }

    /// Direct children, in declaration order.
    #[must_use]
    pub fn children(&self) -> &[Box<dyn GuiObject>] {
        &self.children
    }

    /// Attached system objects, in attachment order.
    #[must_use]
    pub fn system_objects(&self) -> &[SystemObject] {
        &self.system_objects
    }

    /// Mutable access to one attached system object.
    pub fn system_object_mut(&mut self, index: usize) -> Option<&mut SystemObject> {
        self.system_objects.get_mut(index)
    }

    /// Finds a direct child by id, ignoring case.
    ///
    /// Only direct children are searched; system objects and deeper
    /// descendants are not.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] listing every direct child id when nothing matches.
    pub fn find_child(&self, id: &str) -> Result<&dyn GuiObject, LookupError> {
        find_in(&self.children, self.id(), id)
    }

    /// Mutable variant of [`find_child`](Self::find_child).
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] listing every direct child id when nothing matches.
    pub fn find_child_mut(&mut self, id: &str) -> Result<&mut dyn GuiObject, LookupError> {
        match self.children.iter().position(|child| ids_match(child.id(), id)) {
            Some(index) => Ok(&mut *self.children[index]),
            None => Err(lookup_error(&self.children, self.id(), id)),
        }
    }

    /// Renders this group tagged as `kind`.
    pub(crate) fn render_as(&mut self, cx: &mut RenderContext<'_>, kind: &str) -> SurfaceHandle {
        let id = self.id().to_owned();
        let handle = self.base.render_base(cx, &id);
        cx.tag_kind(handle, kind);
        cx.surface
            .set_style(handle, StyleProperty::Height, &px(self.maximum_h));
        cx.surface
            .set_style(handle, StyleProperty::Width, &px(self.maximum_w));

        match self.background_value(cx.resources) {
            Some(css) => {
                cx.surface.set_style(handle, StyleProperty::Background, &css);
                self.background_applied = true;
            }
            None if self.background_applied => {
                cx.surface.set_style(handle, StyleProperty::Background, "");
                self.background_applied = false;
            }
            None => {}
        }

        for child in &mut self.children {
            let child_handle = child.render(cx);
            cx.surface.append_child(handle, child_handle);
        }
        handle
    }

    fn background_value(&self, resources: &dyn ResourceProvider) -> Option<String> {
        if !self.draw_background {
            return None;
        }
        let reference = self.background.as_deref()?;
        match resources.bitmap(reference) {
            Some(bitmap) => Some(bitmap.background_css_value()),
            None => {
                tracing::warn!(
                    "Group \"{}\" references missing background bitmap \"{}\"",
                    self.id(),
                    reference
                );
                None
            }
        }
    }

    fn apply_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        match key {
            "instance_id" => self.instance_id = Some(value.to_owned()),
            "background" => self.background = Some(value.to_owned()),
            "drawbackground" => self.draw_background = to_bool(value)?,
            "minimum_h" => self.minimum_h = Some(num(value)?),
            "minimum_w" => self.minimum_w = Some(num(value)?),
            "maximum_h" => self.maximum_h = Some(num(value)?),
            "maximum_w" => self.maximum_w = Some(num(value)?),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

/// Group link of a resolver chain, for any object that exposes a [`Group`].
///
/// # Errors
///
/// Returns a coercion error for malformed numeric or boolean values.
pub fn resolve_group<T: GuiObject>(target: &mut T, key: &str, value: &str) -> CoerceResult<bool> {
    match target.as_group_mut() {
        Some(group) => group.apply_attribute(key, value),
        None => Ok(false),
    }
}

impl GuiObject for Group {
    fn base(&self) -> &GuiBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut GuiBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Group"
    }

    fn set_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        resolve_chain(self, Self::CHAIN, key, value)
    }

    fn id(&self) -> &str {
        resolved_id(&self.base, self.instance_id.as_deref())
    }

    fn initialize(&mut self, ctx: &mut InitContext<'_>) {
        if !self.base.begin_initialize() {
            return;
        }
        tracing::debug!(
            "Initializing group \"{}\": {} system objects, {} children",
            self.id(),
            self.system_objects.len(),
            self.children.len()
        );

        let scope = ScriptScope {
            key: self.base.key(),
            id: resolved_id(&self.base, self.instance_id.as_deref()),
            children: &self.children,
        };
        for system in &mut self.system_objects {
            system.initialize(&scope, ctx);
        }
        for child in &mut self.children {
            child.initialize(ctx);
        }
    }

    fn render(&mut self, cx: &mut RenderContext<'_>) -> SurfaceHandle {
        self.render_as(cx, "Group")
    }

    fn as_group(&self) -> Option<&Group> {
        Some(self)
    }

    fn as_group_mut(&mut self) -> Option<&mut Group> {
        Some(self)
    }
}

/// Read-only view of a container handed to script hooks during initialization.
#[derive(Debug, Clone, Copy)]
pub struct ScriptScope<'a> {
    key: ObjectKey,
    id: &'a str,
    children: &'a [Box<dyn GuiObject>],
}

impl<'a> ScriptScope<'a> {
    /// Key of the owning container.
    #[must_use]
    pub const fn key(&self) -> ObjectKey {
        self.key
    }

    /// Resolved id of the owning container.
    #[must_use]
    pub const fn id(&self) -> &'a str {
        self.id
    }

    /// The container's direct children.
    #[must_use]
    pub const fn children(&self) -> &'a [Box<dyn GuiObject>] {
        self.children
    }

    /// Same lookup as [`Group::find_child`].
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] listing every direct child id when nothing matches.
    pub fn find_child(&self, id: &str) -> Result<&'a dyn GuiObject, LookupError> {
        find_in(self.children, self.id, id)
    }
}

fn resolved_id<'a>(base: &'a GuiBase, instance_id: Option<&'a str>) -> &'a str {
    instance_id.unwrap_or_else(|| base.id())
}

fn find_in<'a>(
    children: &'a [Box<dyn GuiObject>],
    container: &str,
    requested: &str,
) -> Result<&'a dyn GuiObject, LookupError> {
    children
        .iter()
        .find(|child| ids_match(child.id(), requested))
        .map(|child| &**child)
        .ok_or_else(|| lookup_error(children, container, requested))
}

fn lookup_error(children: &[Box<dyn GuiObject>], container: &str, requested: &str) -> LookupError {
    LookupError {
        requested: requested.to_owned(),
        container: container.to_owned(),
        available: children.iter().map(|child| child.id().to_owned()).collect(),
    }
}
