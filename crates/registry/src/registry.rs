//! The resource registry.
//!
//! A registry is a vector of slots. Each occupied slot owns one handle and the
//! action that tears it down. Slots are filled first-free, so bulk release
//! walks resources in slot order rather than registration order, and never in
//! reverse.

use crate::config::{CapacityPolicy, RegistryConfig};
use crate::entry::Entry;
use crate::handle::{Handle, HandleId};
use crate::release::Release;
use reclaim_core::{Error, Result, GROWTH_FACTOR};
use std::any::Any;
use std::fmt;
use std::ops::DerefMut;

/// Type-erased handle for registries that track unrelated resource types
pub type AnyHandle = Box<dyn Any>;

/// Tracks live handles so that everything acquired so far can be released
/// exactly once
pub struct Registry<H: Handle = AnyHandle> {
    slots: Vec<Option<Entry<H>>>,
    len: usize,
    policy: CapacityPolicy,
}

/// A handle the registry refused to track.
///
/// Converting into [`Error`] (for instance through `?`) tears the handle down
/// with its own release action, so a rejected resource is never leaked.
pub struct Rejected<H> {
    error: Error,
    handle: H,
    release: Release<H>,
}

impl<H> Rejected<H> {
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// Take back the handle and its action without releasing anything
    pub fn into_parts(self) -> (Error, H, Release<H>) {
        (self.error, self.handle, self.release)
    }

    /// Release the rejected handle and return the failure
    pub fn release(self) -> Error {
        self.release.run(self.handle);
        self.error
    }
}

impl<H> From<Rejected<H>> for Error {
    fn from(rejected: Rejected<H>) -> Self {
        rejected.release()
    }
}

impl<H> fmt::Debug for Rejected<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .field("release", &self.release)
            .finish_non_exhaustive()
    }
}

impl<H: Handle> Registry<H> {
    /// Create a registry that never holds more than `capacity` handles
    pub fn fixed(capacity: usize) -> Result<Self> {
        Self::with_policy(CapacityPolicy::Fixed(capacity))
    }

    /// Create a growable registry with the default initial capacity
    pub fn growable() -> Result<Self> {
        Self::with_policy(CapacityPolicy::growable())
    }

    /// Create a registry from configuration
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        Self::with_policy(config.policy)
    }

    /// Create a registry with an explicit capacity policy
    pub fn with_policy(policy: CapacityPolicy) -> Result<Self> {
        policy.validate()?;

        let capacity = policy.initial_capacity();
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|e| Error::allocation(capacity, e))?;
        slots.resize_with(capacity, || None);

        tracing::trace!(%policy, "created registry");

        Ok(Self {
            slots,
            len: 0,
            policy,
        })
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing store
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn contains(&self, handle: impl Into<HandleId>) -> bool {
        self.position(handle.into()).is_some()
    }

    pub fn get(&self, handle: impl Into<HandleId>) -> Option<&H> {
        let index = self.position(handle.into())?;
        self.slots[index].as_ref().map(Entry::handle)
    }

    /// Mutable access to the resource behind a handle.
    ///
    /// Only the target is exposed so the handle itself, and with it the
    /// identity, cannot be swapped out while registered.
    pub fn get_mut(&mut self, handle: impl Into<HandleId>) -> Option<&mut H::Target>
    where
        H: DerefMut,
    {
        let index = self.position(handle.into())?;
        self.slots[index]
            .as_mut()
            .map(|entry| &mut **entry.handle_mut())
    }

    /// Occupied entries in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Entry<H>> + '_ {
        self.slots.iter().flatten()
    }

    /// Register `handle` with the action that releases it.
    ///
    /// Adding a handle that is already tracked succeeds without touching the
    /// registry; the duplicate and its action are dropped unused. A full fixed
    /// registry, or a growable one whose storage cannot be doubled, hands the
    /// handle back inside [`Rejected`] and is left unchanged.
    ///
    /// Identity is the handle's address. Boxes of a zero-sized type all share
    /// one dangling address, so a second `Box<()>` counts as a duplicate and
    /// its release action never runs.
    pub fn add(
        &mut self,
        handle: H,
        release: Release<H>,
    ) -> std::result::Result<HandleId, Rejected<H>> {
        let id = handle.handle_id();
        if self.position(id).is_some() {
            tracing::trace!(handle = %id, "handle already registered");
            return Ok(id);
        }

        if self.len >= self.capacity() {
            if let Err(error) = self.grow() {
                return Err(Rejected {
                    error,
                    handle,
                    release,
                });
            }
        }

        let Some(index) = self.slots.iter().position(Option::is_none) else {
            return Err(Rejected {
                error: Error::capacity_exceeded(self.capacity()),
                handle,
                release,
            });
        };

        self.slots[index] = Some(Entry::new(handle, release));
        self.len += 1;
        tracing::debug!(handle = %id, slot = index, len = self.len, "registered handle");
        Ok(id)
    }

    /// Stop tracking a handle.
    ///
    /// With `execute_release` the entry's action runs (or the handle is
    /// dropped) and `None` is returned. Without it the handle is handed back to
    /// the caller, who may register it again later. An unknown handle is
    /// reported as a warning and otherwise ignored.
    pub fn remove(&mut self, handle: impl Into<HandleId>, execute_release: bool) -> Option<H> {
        let id = handle.into();
        let Some(index) = self.position(id) else {
            tracing::warn!(handle = %id, "handle is not registered, nothing to remove");
            return None;
        };

        let entry = self.slots[index].take()?;
        self.len -= 1;

        if execute_release {
            tracing::debug!(handle = %id, slot = index, "releasing handle");
            entry.release();
            None
        } else {
            tracing::debug!(handle = %id, slot = index, "returning handle to caller");
            Some(entry.into_handle())
        }
    }

    /// Release every tracked handle in slot order and destroy the registry
    pub fn release_all(mut self) {
        let released = self.drain();
        tracing::debug!(released, "released registry");
    }

    /// Release every tracked handle in slot order, leaving the registry empty.
    ///
    /// Each slot is cleared before its action runs.
    pub(crate) fn drain(&mut self) -> usize {
        let mut released = 0;
        for index in 0..self.slots.len() {
            if let Some(entry) = self.slots[index].take() {
                self.len -= 1;
                tracing::trace!(handle = %entry.id(), slot = index, "releasing handle");
                entry.release();
                released += 1;
            }
        }
        released
    }

    fn position(&self, id: HandleId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|entry| entry.id() == id))
    }

    fn grow(&mut self) -> Result<()> {
        let capacity = self.capacity();
        if !self.policy.is_growable() {
            return Err(Error::capacity_exceeded(capacity));
        }

        let target = capacity.checked_mul(GROWTH_FACTOR).ok_or_else(|| {
            Error::invalid_capacity(capacity, "doubling the backing store overflows")
        })?;
        self.slots
            .try_reserve_exact(target - capacity)
            .map_err(|e| Error::allocation(target, e))?;
        self.slots.resize_with(target, || None);

        tracing::debug!(from = capacity, to = target, "grew registry");
        Ok(())
    }
}

impl<H: Handle> Drop for Registry<H> {
    fn drop(&mut self) {
        if self.len > 0 {
            tracing::warn!(
                live = self.len,
                "registry dropped without release_all, releasing remaining handles"
            );
            self.drain();
        }
    }
}

impl<H: Handle> fmt::Debug for Registry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("policy", &self.policy)
            .field("capacity", &self.capacity())
            .field("len", &self.len)
            .finish()
    }
}
