/*!
 * Block Resource Library
 * Pluggable low-level memory resources and the typed allocator built on them
 */

pub mod core;
pub mod resource;

// Re-exports
pub use resource::{
    Block, BlockError, BumpArena, FreeListArena, HeapResource, Resource, ResourceInfo,
    ResourceStats, TypedAlloc,
};
