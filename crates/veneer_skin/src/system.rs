//! System objects: non-visual nodes attached to a container.
//!
//! A system object carries behavior (usually a compiled script) but draws
//! nothing. It takes part in initialization only.

use std::fmt;

use veneer_core::CoerceResult;

use crate::group::ScriptScope;
use crate::key::ObjectKey;
use crate::lifecycle::{InitContext, Lifecycle};
use crate::object::{resolve_chain, Resolver};

/// Behavior run when a system object initializes.
///
/// The scope exposes the owning container, already fully configured, so a
/// hook can look up the children it will drive.
pub trait ScriptHook: fmt::Debug {
    /// Called once, before any of the container's children initialize.
    fn on_init(&mut self, scope: &ScriptScope<'_>, ctx: &mut InitContext<'_>);
}

/// Hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScript;

impl ScriptHook for NoopScript {
    fn on_init(&mut self, _scope: &ScriptScope<'_>, _ctx: &mut InitContext<'_>) {}
}

/// A non-visual node owned by a container.
#[derive(Debug)]
pub struct SystemObject {
    key: ObjectKey,
    id: Option<String>,
    file: Option<String>,
    param: Option<String>,
    parent: Option<ObjectKey>,
    state: Lifecycle,
    hook: Box<dyn ScriptHook>,
}

impl SystemObject {
    const CHAIN: &'static [Resolver<Self>] = &[Self::resolve_own];

    /// Creates a detached system object running `hook`.
    #[must_use]
    pub fn new(key: ObjectKey, hook: Box<dyn ScriptHook>) -> Self {
        Self {
            key,
            id: None,
            file: None,
            param: None,
            parent: None,
            state: Lifecycle::Declared,
            hook,
        }
    }

    /// Tree key of this object.
    #[must_use]
    pub const fn key(&self) -> ObjectKey {
        self.key
    }

    /// Declared id, or `""`.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Script file reference.
    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// Parameter string handed to the script.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Key of the container this object reports as its parent.
    #[must_use]
    pub const fn parent_group(&self) -> Option<ObjectKey> {
        self.parent
    }

    /// Points the back-reference at a container.
    ///
    /// This only overwrites the key. It does not move the object between
    /// container lists: an object re-pointed while listed in container A
    /// stays in A's list and now reports B as its parent.
    pub fn set_parent_group(&mut self, parent: ObjectKey) {
        self.parent = Some(parent);
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> Lifecycle {
        self.state
    }

    /// Applies one markup attribute (`id`, `file`, `param`).
    ///
    /// # Errors
    ///
    /// Never fails today; the signature matches
    /// [`GuiObject::set_attribute`](crate::GuiObject::set_attribute).
    pub fn set_attribute(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        resolve_chain(self, Self::CHAIN, key, value)
    }

    fn resolve_own(&mut self, key: &str, value: &str) -> CoerceResult<bool> {
        let slot = match key {
            "id" => &mut self.id,
            "file" => &mut self.file,
            "param" => &mut self.param,
            _ => return Ok(false),
        };
        *slot = Some(value.to_owned());
        Ok(true)
    }

    pub(crate) fn initialize(&mut self, scope: &ScriptScope<'_>, ctx: &mut InitContext<'_>) {
        if self.state.is_initialized() {
            tracing::debug!("Skipping re-initialization of system object \"{}\"", self.id());
            return;
        }
        if self.parent != Some(scope.key()) {
            tracing::warn!(
                "System object \"{}\" initialized by container \"{}\" but reports parent {:?}",
                self.id(),
                scope.id(),
                self.parent.map(ObjectKey::raw)
            );
        }
        self.state = Lifecycle::Initialized;
        tracing::debug!("Initializing system object \"{}\" in \"{}\"", self.id(), scope.id());
        self.hook.on_init(scope, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_attributes() {
        let mut system = SystemObject::new(ObjectKey::new(7), Box::new(NoopScript));

        assert!(system.set_attribute("ID", "eq.script").unwrap());
        assert!(system.set_attribute("file", "scripts/eq.maki").unwrap());
        assert!(system.set_attribute("Param", "eq_group").unwrap());
        assert!(!system.set_attribute("x", "1").unwrap());

        assert_eq!(system.id(), "eq.script");
        assert_eq!(system.file(), Some("scripts/eq.maki"));
        assert_eq!(system.param(), Some("eq_group"));
    }

    #[test]
    fn test_parent_last_write_wins() {
        let mut system = SystemObject::new(ObjectKey::new(7), Box::new(NoopScript));
        system.set_parent_group(ObjectKey::new(1));
        system.set_parent_group(ObjectKey::new(2));

        assert_eq!(system.parent_group(), Some(ObjectKey::new(2)));
    }
}
