/*!
 * Resource Module
 *
 * Pluggable memory resources and the typed allocator façade:
 * - Heap pass-through for unbounded storage
 * - Bump arena for fast monotonic allocation
 * - Free-list arena for recycling with best-fit and coalescing
 *
 * Data flows container → TypedAlloc → Resource → raw arena bytes; resources
 * never know about element types, only bytes and alignment.
 */

pub mod bump;
pub mod freelist;
pub mod heap;
pub mod traits;
pub mod typed;
pub mod types;

// Re-export for convenience
pub use bump::BumpArena;
pub use freelist::FreeListArena;
pub use heap::HeapResource;
pub use traits::{Resource, ResourceInfo};
pub use typed::TypedAlloc;
pub use types::{Block, BlockError, ResourceStats};
