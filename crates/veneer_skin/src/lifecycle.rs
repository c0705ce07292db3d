//! Lifecycle states and the initialization context.

use std::any::Any;

/// Where a node is in its lifecycle.
///
/// `Declared → Initialized → Rendered`. Rendering may repeat; initialization
/// happens at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Attributes are being applied.
    #[default]
    Declared,
    /// One-time context wiring is complete.
    Initialized,
    /// The render target has been populated at least once.
    Rendered,
}

impl Lifecycle {
    /// Returns true once initialization has run.
    #[must_use]
    pub const fn is_initialized(self) -> bool {
        !matches!(self, Self::Declared)
    }
}

/// Caller-defined value passed unchanged to every initialized node.
///
/// The skin tree never looks inside. Script hooks and custom objects that
/// know the concrete type can downcast it.
pub struct InitContext<'a> {
    data: &'a mut (dyn Any + 'static),
}

impl<'a> InitContext<'a> {
    /// Wraps the caller's context value.
    pub fn new(data: &'a mut (dyn Any + 'static)) -> Self {
        Self { data }
    }

    /// Borrows the context as `T`, if that is its type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.data.downcast_ref()
    }

    /// Mutably borrows the context as `T`, if that is its type.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.data.downcast_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_downcast() {
        let mut log: Vec<String> = Vec::new();
        let mut ctx = InitContext::new(&mut log);

        ctx.downcast_mut::<Vec<String>>().unwrap().push("init".to_owned());
        assert!(ctx.downcast_ref::<u32>().is_none());
        assert_eq!(ctx.downcast_ref::<Vec<String>>().unwrap().len(), 1);
    }

    #[test]
    fn test_lifecycle_flags() {
        assert!(!Lifecycle::Declared.is_initialized());
        assert!(Lifecycle::Initialized.is_initialized());
        assert!(Lifecycle::Rendered.is_initialized());
    }
}
