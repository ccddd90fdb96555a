/*!
 * Resource Types
 * Common types for the resource back-ends
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the checked byte-view accessors
///
/// Allocation failure is never an error: `allocate` signals it with `None`
/// and the in-place operations with `false`. `BlockError` only surfaces when
/// a handle is presented to a resource whose storage does not contain it —
/// a stale handle, or a handle produced by a different resource instance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("block at {offset:#x}+{len} exceeds resource bounds ({capacity} bytes)")]
    OutOfBounds {
        offset: Address,
        len: Size,
        capacity: Size,
    },

    #[error("no allocation registered at {0:#x}")]
    UnknownAddress(Address),
}

/// A non-owning handle to an allocated byte range
///
/// Arena back-ends hand out offsets into their owned buffer; the heap
/// back-end hands out synthetic addresses. The resource that produced a
/// `Block` is the sole owner of the backing bytes, and a `Block` must only
/// be presented back to that instance. `Block::EMPTY` is the canonical
/// zero-length block used for zero-size allocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    offset: Address,
    len: Size,
}

impl Block {
    /// The canonical empty block
    pub const EMPTY: Block = Block { offset: 0, len: 0 };

    pub(crate) const fn new(offset: Address, len: Size) -> Self {
        Self { offset, len }
    }

    /// Base offset of the block within its resource
    #[inline]
    pub const fn offset(&self) -> Address {
        self.offset
    }

    /// Length of the block in bytes
    #[inline]
    pub const fn len(&self) -> Size {
        self.len
    }

    /// One past the last byte of the block
    #[inline]
    pub const fn end(&self) -> Address {
        self.offset + self.len
    }

    /// Whether this block holds no bytes
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Point-in-time snapshot of a resource's bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceStats {
    /// Total arena size; `None` means effectively unbounded
    pub capacity: Option<Size>,
    /// Bytes currently handed out to callers
    pub used_bytes: Size,
    /// Bytes still available, where the back-end can know it
    pub available_bytes: Option<Size>,
    /// Allocations served since construction
    pub allocation_count: u64,
    /// Deallocations accepted since construction
    pub deallocation_count: u64,
    /// Number of free spans tracked (0 for back-ends without recycling)
    pub free_spans: usize,
    /// Largest single free span, in bytes
    pub largest_free_span: Size,
}
