use std::fmt;
use std::iter::FusedIterator;
use std::mem;
use log::trace;
use crate::error::{Error, Result};
use crate::node::Node;

/// Slot of the head sentinel. Never freed, never reused.
pub const HEAD: usize = 0;

/// A doubly linked list whose nodes live in one growable table and link to
/// each other by slot index.
///
/// Slot 0 always holds the head sentinel. Removed slots are threaded onto a
/// free list through their `next` field and handed out again, most recently
/// freed first, before the table is allowed to grow.
#[derive(Clone, Debug)]
pub struct IndexedNodeList<T> {
    table: Vec<Node<T>>,
    tail: usize,
    first_empty: Option<usize>,
    number_empty: usize,
    size: usize,
}

impl <T> IndexedNodeList<T> {
    pub fn new() -> Self {
        return Self {
            table: vec![Node::sentinel()],
            tail: HEAD,
            first_empty: None,
            number_empty: 0,
            size: 0,
        }
    }

    /// Creates an empty list with room for `num_items` elements before the
    /// table has to reallocate.
    pub fn with_capacity(num_items: usize) -> Self {
        let mut table: Vec<Node<T>> = Vec::with_capacity(num_items.saturating_add(1));
        table.push(Node::sentinel());

        return Self {
            table,
            tail: HEAD,
            first_empty: None,
            number_empty: 0,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        return self.size
    }

    pub fn is_empty(&self) -> bool {
        return self.size == 0
    }

    pub fn head(&self) -> usize {
        return HEAD
    }

    pub fn tail(&self) -> usize {
        return self.tail
    }

    pub fn first_empty(&self) -> Option<usize> {
        return self.first_empty
    }

    pub fn number_empty(&self) -> usize {
        return self.number_empty
    }

    /// The raw node table, sentinel and free slots included.
    pub fn table(&self) -> &[Node<T>] {
        return &self.table
    }

    /// Appends `item` after the current tail and returns the slot it landed in.
    pub fn add(&mut self, item: T) -> usize {
        let node: Node<T> = Node::live(self.tail, item);
        let slot: usize = match self.first_empty {
            Some(free_slot) => {
                self.first_empty = self.table[free_slot].next;
                self.number_empty -= 1;
                self.table[free_slot] = node;
                trace!("reusing free slot {free_slot}, {} free slots left", self.number_empty);
                free_slot
            },

            None => {
                self.table.push(node);
                trace!("node table grew to {} slots", self.table.len());
                self.table.len() - 1
            },
        };

        self.table[self.tail].next = Some(slot);
        self.tail = slot;
        self.size += 1;
        return slot
    }

    /// Unlinks the node in `slot`, puts the slot on the free list and returns
    /// its element.
    pub fn remove(&mut self, slot: usize) -> Result<T> {
        self.check_live(slot)?;

        let previous: usize = match self.table[slot].previous {
            Some(previous) => previous,
            None => unreachable!("live slot {slot} has no predecessor"),
        };
        let next: Option<usize> = self.table[slot].next;

        self.table[previous].next = next;
        match next {
            Some(next) => self.table[next].previous = Some(previous),
            None => self.tail = previous,
        }

        let removed: Node<T> = mem::replace(&mut self.table[slot], Node::free(self.first_empty));
        self.first_empty = Some(slot);
        self.number_empty += 1;
        self.size -= 1;

        match removed.data {
            Some(item) => return Ok(item),
            None => unreachable!("live slot {slot} held no element"),
        }
    }

    pub fn get(&self, slot: usize) -> Result<&T> {
        self.check_live(slot)?;
        match &self.table[slot].data {
            Some(item) => return Ok(item),
            None => unreachable!(),
        }
    }

    pub fn get_mut(&mut self, slot: usize) -> Result<&mut T> {
        self.check_live(slot)?;
        match &mut self.table[slot].data {
            Some(item) => return Ok(item),
            None => unreachable!(),
        }
    }

    pub fn front(&self) -> Option<&T> {
        return self.table[HEAD].next.and_then(|slot: usize| self.table[slot].data.as_ref())
    }

    pub fn back(&self) -> Option<&T> {
        return self.table[self.tail].data.as_ref()
    }

    /// Elements in list order.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter::new(self.slots())
    }

    /// Elements in list order, paired with the slot each one occupies.
    pub fn slots(&self) -> Slots<'_, T> {
        return Slots::new(&self.table, self.size)
    }

    pub fn for_each_mut<F: FnMut(&mut T)>(&mut self, mut f: F) {
        let mut cursor: Option<usize> = self.table[HEAD].next;
        while let Some(slot) = cursor {
            let node: &mut Node<T> = &mut self.table[slot];
            cursor = node.next;
            if let Some(item) = node.data.as_mut() {
                f(item);
            }
        }
    }

    /// Logical position of the first element equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        return self.iter().position(|candidate: &T| candidate == item)
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        return self.position(item).is_some()
    }

    /// Drops every element and shrinks the table back to the sentinel.
    pub fn clear(&mut self) {
        self.table.truncate(1);
        self.table[HEAD] = Node::sentinel();
        self.tail = HEAD;
        self.first_empty = None;
        self.number_empty = 0;
        self.size = 0;
    }

    /// Rebuilds the table in list order without free slots. Afterwards the
    /// `k`-th element sits in slot `k + 1`, so previously handed out slots
    /// are no longer valid.
    pub fn compact(&mut self) {
        let old_num_slots: usize = self.table.len();
        let mut table: Vec<Node<T>> = Vec::with_capacity(self.size + 1);
        table.push(Node::sentinel());

        let mut cursor: Option<usize> = self.table[HEAD].next;
        while let Some(slot) = cursor {
            let node: &mut Node<T> = &mut self.table[slot];
            cursor = node.next;

            let new_slot: usize = table.len();
            table[new_slot - 1].next = Some(new_slot);
            table.push(Node {
                previous: Some(new_slot - 1),
                next: None,
                data: node.data.take(),
            });
        }

        self.tail = table.len() - 1;
        self.table = table;
        self.first_empty = None;
        self.number_empty = 0;
        trace!("compacted node table from {old_num_slots} to {} slots", self.table.len());
    }

    fn check_live(&self, slot: usize) -> Result<()> {
        if slot == HEAD {
            return Err(Error::SentinelSlot)
        }

        match self.table.get(slot) {
            None => return Err(Error::SlotOutOfRange { slot, table_len: self.table.len() }),
            Some(node) if !node.is_live() => return Err(Error::SlotNotLive { slot }),
            Some(_) => return Ok(()),
        }
    }
}

impl <T> Default for IndexedNodeList<T> {
    fn default() -> Self {
        return Self::new()
    }
}

impl <T> Extend<T> for IndexedNodeList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl <T> FromIterator<T> for IndexedNodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list: Self = Self::new();
        list.extend(iter);
        return list
    }
}

impl <'a, T> IntoIterator for &'a IndexedNodeList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter()
    }
}

impl <T: fmt::Display> fmt::Display for IndexedNodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[ ")?;
        for item in self.iter() {
            write!(f, "{item} ")?;
        }
        return f.write_str("]")
    }
}

#[derive(Clone, Debug)]
pub struct Slots<'a, T> {
    table: &'a [Node<T>],
    cursor: Option<usize>,
    remaining: usize,
}

impl <'a, T> Slots<'a, T> {
    fn new(table: &'a [Node<T>], num_items: usize) -> Self {
        return Self {
            table,
            cursor: table[HEAD].next,
            remaining: num_items,
        }
    }
}

impl <'a, T> Iterator for Slots<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let slot: usize = self.cursor?;
        let node: &'a Node<T> = &self.table[slot];
        self.cursor = node.next;
        self.remaining -= 1;
        match &node.data {
            Some(item) => return Some((slot, item)),
            None => unreachable!("free slot {slot} is linked into the list"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining))
    }
}

impl <T> ExactSizeIterator for Slots<'_, T> {}

impl <T> FusedIterator for Slots<'_, T> {}

#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Slots<'a, T>,
}

impl <'a, T> Iter<'a, T> {
    fn new(inner: Slots<'a, T>) -> Self {
        return Self { inner }
    }
}

impl <'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        return self.inner.next().map(|(_, item)| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return self.inner.size_hint()
    }
}

impl <T> ExactSizeIterator for Iter<'_, T> {}

impl <T> FusedIterator for Iter<'_, T> {}
