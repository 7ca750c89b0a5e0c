/// One slot of an [`IndexedNodeList`](crate::IndexedNodeList) table.
///
/// A slot is either the head sentinel (slot 0), a live node carrying an
/// element, or a free node waiting to be reused. `None` in a link field is
/// the end-of-chain marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) previous: Option<usize>,
    pub(crate) next: Option<usize>, // next live slot, or next free slot while on the free list
    pub(crate) data: Option<T>,
}

impl <T> Node<T> {
    pub(crate) fn sentinel() -> Self {
        return Self {
            previous: None,
            next: None,
            data: None,
        }
    }

    pub(crate) fn live(previous: usize, data: T) -> Self {
        return Self {
            previous: Some(previous),
            next: None,
            data: Some(data),
        }
    }

    pub(crate) fn free(next_free_slot: Option<usize>) -> Self {
        return Self {
            previous: None,
            next: next_free_slot,
            data: None,
        }
    }

    pub fn previous(&self) -> Option<usize> {
        return self.previous
    }

    pub fn next(&self) -> Option<usize> {
        return self.next
    }

    pub fn data(&self) -> Option<&T> {
        return self.data.as_ref()
    }

    pub fn is_live(&self) -> bool {
        return self.data.is_some()
    }
}
