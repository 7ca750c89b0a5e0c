//! Arena-style containers that recycle storage instead of returning it to
//! the allocator.
//!
//! - [`IndexedNodeList`] is a doubly linked list whose nodes live in one
//!   `Vec` and link to each other by slot index. Removed slots go onto a
//!   free list threaded through the table and are reused by later inserts.
//! - [`BoundedObjectPool`] is a LIFO cache of up to `max_size` reusable
//!   instances, built and reset through a [`Recycle`] implementation.

mod error;
mod list;
mod node;
mod object_pool;
mod recycle;


pub use error::{Error, Result};
pub use list::{IndexedNodeList, Iter, Slots, HEAD};
pub use node::Node;
pub use object_pool::{BoundedObjectPool, DEFAULT_MAX_SIZE};
pub use recycle::FnRecycle;

/// Builds fresh instances for a [`BoundedObjectPool`] and returns used ones
/// to their initial state.
pub trait Recycle {
    type Item;
    type Error;

    /// Called by `allocate` when the pool has nothing to hand out.
    fn create(&mut self) -> std::result::Result<Self::Item, Self::Error>;

    /// Called by `release` on every returned instance, whether or not the
    /// pool keeps it.
    fn reset(&mut self, item: &mut Self::Item) -> std::result::Result<(), Self::Error>;
}
