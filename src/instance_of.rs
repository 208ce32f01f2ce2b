use crate::cursor::{Cursor, Progress, current_if_positioned, no_current};
use crate::error::Result;
use std::marker::PhantomData;

/// Access to one variant payload of a sum type
///
/// Implement this once per payload type to let [`InstanceOf`] narrow a cursor
/// of the sum type to a cursor of that payload.
pub trait Narrow<U> {
    fn narrow(&self) -> Option<&U>;
}

/// Cursor that only surfaces the values of another cursor holding a `U`, and
/// exposes them as `U`
#[derive(Debug)]
pub struct InstanceOf<C, U> {
    cursor: C,
    progress: Progress,
    _phantom: PhantomData<fn() -> U>,
}

impl<C, U> InstanceOf<C, U> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            progress: Progress::default(),
            _phantom: PhantomData,
        }
    }
}

impl<C, U> Cursor for InstanceOf<C, U>
where
    C: Cursor,
    C::Item: Narrow<U>,
{
    type Item = U;

    fn has_started(&self) -> bool {
        self.progress.has_started()
    }

    fn has_current(&self) -> bool {
        self.progress.has_current(&self.cursor)
    }

    fn current(&self) -> Result<&Self::Item> {
        match self.progress.current(&self.cursor)?.narrow() {
            Some(value) => Ok(value),
            None => no_current(),
        }
    }

    fn next(&mut self) -> Result<bool> {
        self.progress.begin();
        while self.cursor.next()? {
            if let Some(value) = current_if_positioned(&self.cursor)? {
                if value.narrow().is_some() {
                    return Ok(self.progress.finish(true));
                }
            }
        }
        Ok(self.progress.finish(false))
    }
}

/// Extension trait to add .instance_of() to all cursors
pub trait InstanceOfExt: Cursor + Sized {
    fn instance_of<U>(self) -> InstanceOf<Self, U>
    where
        Self::Item: Narrow<U>,
    {
        InstanceOf::new(self)
    }
}

/// Implement InstanceOfExt for all cursors
impl<C: Cursor> InstanceOfExt for C {}

/// Convenience function to create an InstanceOf cursor
pub fn instance_of<U, C>(cursor: C) -> InstanceOf<C, U>
where
    C: Cursor,
    C::Item: Narrow<U>,
{
    InstanceOf::new(cursor)
}
