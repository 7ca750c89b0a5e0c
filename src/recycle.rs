use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;
use crate::Recycle;

/// A [`Recycle`] made of two closures.
pub struct FnRecycle<T, C, R> {
    create: C,
    reset: R,
    _item: PhantomData<fn() -> T>,
}

impl <T, C, R> FnRecycle<T, C, R>
where
    C: FnMut() -> T,
    R: FnMut(&mut T),
{
    pub fn new(create: C, reset: R) -> Self {
        return Self {
            create,
            reset,
            _item: PhantomData,
        }
    }
}

impl <T, C, R> Recycle for FnRecycle<T, C, R>
where
    C: FnMut() -> T,
    R: FnMut(&mut T),
{
    type Item = T;
    type Error = Infallible;

    fn create(&mut self) -> Result<T, Infallible> {
        return Ok((self.create)())
    }

    fn reset(&mut self, item: &mut T) -> Result<(), Infallible> {
        (self.reset)(item);
        return Ok(())
    }
}

impl <T, C, R> fmt::Debug for FnRecycle<T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_struct("FnRecycle").finish_non_exhaustive()
    }
}
