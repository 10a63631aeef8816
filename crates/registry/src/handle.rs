//! Handle identity.
//!
//! A registry never compares resources by value. Two handles are the same
//! resource when they point at the same address, so an `Rc` clone of a
//! tracked resource is recognised as already registered.

use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Address identity of a tracked resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandleId(usize);

impl HandleId {
    /// Identity of `handle`
    pub fn of<H: Handle + ?Sized>(handle: &H) -> Self {
        handle.handle_id()
    }

    /// Identity of a raw address
    pub fn from_ptr<T: ?Sized>(ptr: *const T) -> Self {
        HandleId(ptr as *const () as usize)
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl<H: Handle> From<&H> for HandleId {
    fn from(handle: &H) -> Self {
        handle.handle_id()
    }
}

/// An opaque reference to a resource that must be released exactly once
pub trait Handle {
    fn handle_id(&self) -> HandleId;
}

/// Zero-sized boxes share a dangling address and therefore alias each other.
impl<T: ?Sized> Handle for Box<T> {
    fn handle_id(&self) -> HandleId {
        HandleId::from_ptr(&**self as *const T)
    }
}

impl<T: ?Sized> Handle for Rc<T> {
    fn handle_id(&self) -> HandleId {
        HandleId::from_ptr(Rc::as_ptr(self))
    }
}

impl<T: ?Sized> Handle for Arc<T> {
    fn handle_id(&self) -> HandleId {
        HandleId::from_ptr(Arc::as_ptr(self))
    }
}
