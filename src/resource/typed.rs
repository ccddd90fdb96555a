/*!
 * Typed Allocator
 * Adapts element counts to the byte-oriented resource surface
 */

use super::traits::{Resource, ResourceInfo};
use super::types::{Block, ResourceStats};
use std::marker::PhantomData;
use std::mem;

/// Typed façade over a resource
///
/// The only thing containers see: converts element counts and the element's
/// alignment into byte requests, and exposes block sizes back in element
/// counts. Performs no algorithmic work of its own. Blocks keep their length
/// in bytes internally; `count_of` reports whole elements.
#[derive(Debug)]
pub struct TypedAlloc<T, R: Resource> {
    resource: R,
    _marker: PhantomData<fn() -> T>,
}

impl<T, R: Resource> TypedAlloc<T, R> {
    pub fn new(resource: R) -> Self {
        Self {
            resource,
            _marker: PhantomData,
        }
    }

    /// Recover the underlying resource
    pub fn into_inner(self) -> R {
        self.resource
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Byte size for `count` elements, `None` on overflow
    #[inline]
    fn bytes_for(count: usize) -> Option<usize> {
        count.checked_mul(mem::size_of::<T>())
    }

    /// Allocate storage for `count` elements
    ///
    /// Zero-sized element types always receive `Block::EMPTY`.
    pub fn allocate(&mut self, count: usize) -> Option<Block> {
        let bytes = Self::bytes_for(count)?;
        self.resource.allocate(bytes, mem::align_of::<T>())
    }

    /// Resize to `new_count` elements, relocating if necessary
    pub fn reallocate(&mut self, block: &mut Block, new_count: usize) -> bool {
        let Some(bytes) = Self::bytes_for(new_count) else {
            return false;
        };
        self.resource
            .reallocate(block, bytes, mem::align_of::<T>())
    }

    /// Grow to `new_count` elements without relocating
    pub fn grow_in_place(&mut self, block: &mut Block, new_count: usize) -> bool {
        let Some(bytes) = Self::bytes_for(new_count) else {
            return false;
        };
        self.resource.grow_in_place(block, bytes)
    }

    pub fn deallocate(&mut self, block: Block) {
        self.resource.deallocate(block);
    }

    pub fn reset(&mut self) {
        self.resource.reset();
    }

    /// Arena capacity in whole elements; `None` means effectively unbounded
    pub fn capacity(&self) -> Option<usize> {
        let size = mem::size_of::<T>();
        if size == 0 {
            return None;
        }
        self.resource.capacity().map(|bytes| bytes / size)
    }

    /// Number of whole elements a block can hold
    pub fn count_of(&self, block: &Block) -> usize {
        let size = mem::size_of::<T>();
        if size == 0 {
            return 0;
        }
        block.len() / size
    }
}

impl<T, R: Resource + ResourceInfo> TypedAlloc<T, R> {
    pub fn stats(&self) -> ResourceStats {
        self.resource.stats()
    }
}
