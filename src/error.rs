use thiserror::Error;

/// Errors returned by the list and the pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A pool was constructed with a maximum size of zero.
    #[error("invalid pool size {max_size}: a pool must hold at least one instance")]
    InvalidMaxSize {
        max_size: usize,
    },

    /// Slot 0 holds the head sentinel and is never addressable as an element.
    #[error("slot 0 is the head sentinel and holds no element")]
    SentinelSlot,

    /// The slot lies beyond the end of the node table.
    #[error("slot {slot} is out of range for a node table of {table_len} slots")]
    SlotOutOfRange {
        slot: usize,
        table_len: usize,
    },

    /// The slot exists but currently sits on the free list.
    #[error("slot {slot} is on the free list")]
    SlotNotLive {
        slot: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
