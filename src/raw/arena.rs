use alloc::vec::Vec;

use super::handle::Handle;
use crate::error::{TreeError, TreeResult};

/// Slot storage for tree nodes.
///
/// Freed slots are recycled through `free`, so a handle stays valid until the
/// node it names is taken and may be reissued afterwards.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    /// Number of elements that fit without reallocating, counting free slots.
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) const fn len(&self) -> usize {
        self.slots.len().saturating_sub(self.free.len())
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `element`, aborting on allocator failure like `Vec::push`.
    ///
    /// # Panics
    ///
    /// Panics if every `Handle` is already in use.
    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(h) = self.free.pop() {
            self.slots[h.to_index()] = Some(element);
            return h;
        }
        assert!(
            self.slots.len() <= Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX + 1
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    /// Stores `element`, reporting allocator failure instead of aborting.
    ///
    /// On error the arena is unchanged and `element` is dropped.
    pub(crate) fn try_alloc(&mut self, element: T) -> TreeResult<Handle> {
        if let Some(h) = self.free.pop() {
            self.slots[h.to_index()] = Some(element);
            return Ok(h);
        }
        if self.slots.len() > Handle::MAX {
            return Err(TreeError::CapacityOverflow);
        }
        if let Err(err) = self.slots.try_reserve(1) {
            log::debug!("node arena could not grow past {} slots: {err}", self.slots.len());
            return Err(err.into());
        }
        self.slots.push(Some(element));
        Ok(Handle::from_index(self.slots.len() - 1))
    }

    /// Makes room for `additional` more elements beyond those currently live.
    pub(crate) fn try_reserve(&mut self, additional: usize) -> TreeResult<()> {
        let fresh = additional.saturating_sub(self.free.len());
        if self.slots.len().saturating_add(fresh) > Handle::MAX + 1 {
            return Err(TreeError::CapacityOverflow);
        }
        self.slots.try_reserve(fresh)?;
        Ok(())
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    /// Returns the element if `handle` names an occupied slot.
    #[inline]
    pub(crate) fn try_get(&self, handle: Handle) -> Option<&T> {
        self.slots.get(handle.to_index()).and_then(Option::as_ref)
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
