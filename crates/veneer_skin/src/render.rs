//! Render pass plumbing.
//!
//! [`RenderContext`] carries the injected collaborators through a render
//! pass. [`CommandSurface`] is an in-memory [`RenderSurface`] that records
//! every command and keeps the resulting element table, for headless
//! rendering and for inspecting what a skin produced.

use std::collections::BTreeMap;

use veneer_core::RenderConfig;

use crate::resource::ResourceProvider;
use crate::surface::{RenderSurface, StyleProperty, SurfaceHandle};

/// Everything a render pass needs from the host.
pub struct RenderContext<'a> {
    /// Surface receiving the rendered elements.
    pub surface: &'a mut dyn RenderSurface,
    /// Bitmap store queried for backgrounds and images.
    pub resources: &'a dyn ResourceProvider,
    /// Attribute naming.
    pub config: &'a RenderConfig,
}

impl<'a> RenderContext<'a> {
    /// Bundles the collaborators for one render pass.
    pub fn new(
        surface: &'a mut dyn RenderSurface,
        resources: &'a dyn ResourceProvider,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            surface,
            resources,
            config,
        }
    }

    /// Tags an element with its object kind for diagnostics.
    pub fn tag_kind(&mut self, target: SurfaceHandle, kind: &str) {
        self.surface
            .set_attribute(target, &self.config.kind_attribute, kind);
    }
}

/// A command received by a [`CommandSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    /// Element created.
    Create {
        /// New element.
        handle: SurfaceHandle,
    },
    /// Attribute set.
    SetAttribute {
        /// Element.
        target: SurfaceHandle,
        /// Attribute name.
        name: String,
        /// New value.
        value: String,
    },
    /// Style property set.
    SetStyle {
        /// Element.
        target: SurfaceHandle,
        /// Property.
        property: StyleProperty,
        /// New value.
        value: String,
    },
    /// Child appended.
    Append {
        /// Receiving element.
        parent: SurfaceHandle,
        /// Appended element.
        child: SurfaceHandle,
    },
}

/// State of one element on a [`CommandSurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<StyleProperty, String>,
    children: Vec<SurfaceHandle>,
    parent: Option<SurfaceHandle>,
}

impl Element {
    /// Returns an attribute value, if set and non-empty.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns a style value, if set and non-empty.
    #[must_use]
    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.styles.get(&property).map(String::as_str)
    }

    /// Attached children, in order.
    #[must_use]
    pub fn children(&self) -> &[SurfaceHandle] {
        &self.children
    }

    /// Element this one is attached to.
    #[must_use]
    pub fn parent(&self) -> Option<SurfaceHandle> {
        self.parent
    }
}

/// Recording in-memory surface.
#[derive(Debug, Default)]
pub struct CommandSurface {
    elements: Vec<Element>,
    commands: Vec<SurfaceCommand>,
}

impl CommandSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::with_capacity(64),
            commands: Vec::with_capacity(256),
        }
    }

    /// Returns an element's current state.
    #[must_use]
    pub fn element(&self, handle: SurfaceHandle) -> Option<&Element> {
        usize::try_from(handle.raw())
            .ok()
            .and_then(|index| self.elements.get(index))
    }

    /// Number of elements created so far.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Every command received since creation or the last [`clear_commands`](Self::clear_commands).
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Children appended to `parent`, in the order the appends arrived.
    #[must_use]
    pub fn appends_to(&self, parent: SurfaceHandle) -> Vec<SurfaceHandle> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Append { parent: p, child } if *p == parent => Some(*child),
                _ => None,
            })
            .collect()
    }

    /// Forgets recorded commands. Elements are kept.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    fn element_mut(&mut self, handle: SurfaceHandle) -> Option<&mut Element> {
        let element = usize::try_from(handle.raw())
            .ok()
            .and_then(|index| self.elements.get_mut(index));
        if element.is_none() {
            tracing::warn!("Unknown surface handle {}", handle.raw());
        }
        element
    }
}

impl RenderSurface for CommandSurface {
    fn create_element(&mut self) -> SurfaceHandle {
        let handle = SurfaceHandle::new(self.elements.len() as u64);
        self.elements.push(Element::default());
        self.commands.push(SurfaceCommand::Create { handle });
        handle
    }

    fn set_attribute(&mut self, target: SurfaceHandle, name: &str, value: &str) {
        self.commands.push(SurfaceCommand::SetAttribute {
            target,
            name: name.to_owned(),
            value: value.to_owned(),
        });
        if let Some(element) = self.element_mut(target) {
            if value.is_empty() {
                element.attributes.remove(name);
            } else {
                element.attributes.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    fn set_style(&mut self, target: SurfaceHandle, property: StyleProperty, value: &str) {
        self.commands.push(SurfaceCommand::SetStyle {
            target,
            property,
            value: value.to_owned(),
        });
        if let Some(element) = self.element_mut(target) {
            if value.is_empty() {
                element.styles.remove(&property);
            } else {
                element.styles.insert(property, value.to_owned());
            }
        }
    }

    fn append_child(&mut self, parent: SurfaceHandle, child: SurfaceHandle) {
        self.commands.push(SurfaceCommand::Append { parent, child });
        if parent == child || self.element(parent).is_none() {
            return;
        }

        let previous = match self.element_mut(child) {
            Some(element) => element.parent.replace(parent),
            None => return,
        };
        if let Some(old_parent) = previous.and_then(|p| self.element_mut(p)) {
            old_parent.children.retain(|&c| c != child);
        }
        if let Some(new_parent) = self.element_mut(parent) {
            new_parent.children.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_records_commands() {
        let mut surface = CommandSurface::new();
        let root = surface.create_element();
        surface.set_attribute(root, "data-id", "main");
        surface.set_style(root, StyleProperty::Width, "200px");

        assert_eq!(surface.commands().len(), 3);
        let element = surface.element(root).unwrap();
        assert_eq!(element.attribute("data-id"), Some("main"));
        assert_eq!(element.style(StyleProperty::Width), Some("200px"));
    }

    #[test]
    fn test_empty_value_clears() {
        let mut surface = CommandSurface::new();
        let root = surface.create_element();
        surface.set_style(root, StyleProperty::Height, "50px");
        surface.set_style(root, StyleProperty::Height, "");

        assert_eq!(surface.element(root).unwrap().style(StyleProperty::Height), None);
    }

    #[test]
    fn test_append_moves_child() {
        let mut surface = CommandSurface::new();
        let a = surface.create_element();
        let b = surface.create_element();
        let child = surface.create_element();

        surface.append_child(a, child);
        surface.append_child(b, child);

        assert!(surface.element(a).unwrap().children().is_empty());
        assert_eq!(surface.element(b).unwrap().children(), &[child]);
        assert_eq!(surface.element(child).unwrap().parent(), Some(b));
    }

    #[test]
    fn test_reappend_keeps_single_entry() {
        let mut surface = CommandSurface::new();
        let parent = surface.create_element();
        let child = surface.create_element();

        surface.append_child(parent, child);
        surface.append_child(parent, child);

        assert_eq!(surface.element(parent).unwrap().children(), &[child]);
        assert_eq!(surface.appends_to(parent), vec![child, child]);
    }
}
