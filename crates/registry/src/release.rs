//! Release actions: how a tracked handle is torn down.

use std::fmt;

/// Tears down one handle. Implemented for every `FnOnce(H)`.
pub trait ReleaseAction<H> {
    fn release(self: Box<Self>, handle: H);
}

impl<H, F> ReleaseAction<H> for F
where
    F: FnOnce(H),
{
    fn release(self: Box<Self>, handle: H) {
        (*self)(handle)
    }
}

/// Generic deallocation used when no release action was supplied.
pub fn dealloc<H>(handle: H) {
    drop(handle);
}

/// An optional release action with [`dealloc`] as the fallback
pub struct Release<H> {
    action: Option<Box<dyn ReleaseAction<H>>>,
}

impl<H> Release<H> {
    /// Release by dropping the handle
    pub fn dealloc() -> Self {
        Self { action: None }
    }

    /// Release through a closure
    pub fn with<F>(action: F) -> Self
    where
        F: FnOnce(H) + 'static,
    {
        Self {
            action: Some(Box::new(action)),
        }
    }

    /// True when the handle will simply be dropped
    pub fn is_dealloc(&self) -> bool {
        self.action.is_none()
    }

    /// Consume the action on `handle`
    pub fn run(self, handle: H) {
        match self.action {
            Some(action) => action.release(handle),
            None => dealloc(handle),
        }
    }
}

impl<H> Default for Release<H> {
    fn default() -> Self {
        Self::dealloc()
    }
}

impl<H> fmt::Debug for Release<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dealloc() {
            write!(f, "Release::Dealloc")
        } else {
            write!(f, "Release::Custom(<action>)")
        }
    }
}
