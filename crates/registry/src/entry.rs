//! A registered (handle, release action) pair.

use crate::handle::{Handle, HandleId};
use crate::release::Release;

/// One occupied slot of a registry
#[derive(Debug)]
pub struct Entry<H> {
    handle: H,
    release: Release<H>,
}

impl<H: Handle> Entry<H> {
    pub(crate) fn new(handle: H, release: Release<H>) -> Self {
        Self { handle, release }
    }

    pub fn id(&self) -> HandleId {
        self.handle.handle_id()
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub(crate) fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Run the release action on the handle
    pub(crate) fn release(self) {
        self.release.run(self.handle);
    }

    /// Hand the handle back without releasing it
    pub(crate) fn into_handle(self) -> H {
        self.handle
    }
}
