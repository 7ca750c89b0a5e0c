use std::convert::Infallible;
use std::fmt;
use std::slice;
use log::debug;
use crate::error::{Error, Result};
use crate::Recycle;
use crate::recycle::FnRecycle;

pub const DEFAULT_MAX_SIZE: usize = 8;

/// A bounded stack of reusable instances.
///
/// `allocate` hands out the most recently released instance, falling back to
/// [`Recycle::create`] when the pool is empty. `release` resets the instance
/// and keeps it only while fewer than `max_size` instances are pooled.
pub struct BoundedObjectPool<R: Recycle> {
    recycler: R,
    pool: Vec<R::Item>, // top of the stack is the end of the vec
    max_size: usize,
}

impl <R: Recycle> BoundedObjectPool<R> {
    pub fn new(recycler: R, max_size: usize) -> Result<Self> {
        if max_size < 1 {
            return Err(Error::InvalidMaxSize { max_size })
        }

        return Ok(Self {
            recycler,
            pool: Vec::new(),
            max_size,
        })
    }

    pub fn with_default_size(recycler: R) -> Self {
        return Self {
            recycler,
            pool: Vec::new(),
            max_size: DEFAULT_MAX_SIZE,
        }
    }

    /// Number of instances available for reuse.
    pub fn len(&self) -> usize {
        return self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        return self.pool.is_empty()
    }

    pub fn max_size(&self) -> usize {
        return self.max_size
    }

    pub fn recycler(&self) -> &R {
        return &self.recycler
    }

    pub fn recycler_mut(&mut self) -> &mut R {
        return &mut self.recycler
    }

    pub fn allocate(&mut self) -> std::result::Result<R::Item, R::Error> {
        match self.pool.pop() {
            Some(item) => return Ok(item),
            None => return self.recycler.create(),
        }
    }

    pub fn release(&mut self, mut item: R::Item) -> std::result::Result<(), R::Error> {
        self.recycler.reset(&mut item)?;

        if self.pool.len() < self.max_size {
            self.pool.push(item);
        }
        else {
            debug!("object pool is full at {} instances, discarding released instance", self.max_size);
        }
        return Ok(())
    }

    /// Pooled instances from the bottom of the stack to the top.
    pub fn iter(&self) -> slice::Iter<'_, R::Item> {
        return self.pool.iter()
    }

    /// Drops every pooled instance.
    pub fn clear(&mut self) {
        self.pool.clear();
    }
}

impl <R: Recycle<Error = Infallible>> BoundedObjectPool<R> {
    pub fn take(&mut self) -> R::Item {
        match self.allocate() {
            Ok(item) => return item,
            Err(never) => match never {},
        }
    }

    pub fn put(&mut self, item: R::Item) {
        match self.release(item) {
            Ok(()) => {},
            Err(never) => match never {},
        }
    }
}

impl <T, C, R> BoundedObjectPool<FnRecycle<T, C, R>>
where
    C: FnMut() -> T,
    R: FnMut(&mut T),
{
    pub fn from_fns(create: C, reset: R, max_size: usize) -> Result<Self> {
        return Self::new(FnRecycle::new(create, reset), max_size)
    }
}

impl <R: Recycle> fmt::Debug for BoundedObjectPool<R>
where
    R: fmt::Debug,
    R::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("BoundedObjectPool")
            .field("recycler", &self.recycler)
            .field("pool", &self.pool)
            .field("max_size", &self.max_size)
            .finish()
    }
}

impl <R: Recycle> fmt::Display for BoundedObjectPool<R>
where
    R::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.pool.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        return Ok(())
    }
}
