use crate::cursor::{Cursor, no_current};
use crate::error::Result;

/// Cursor that surfaces at most `count` values of another cursor
///
/// The inner cursor is not advanced again once the limit is reached.
#[derive(Debug)]
pub struct Take<C> {
    cursor: C,
    remaining: usize,
    started: bool,
    positioned: bool,
}

impl<C> Take<C> {
    pub fn new(cursor: C, count: usize) -> Self {
        Self {
            cursor,
            remaining: count,
            started: false,
            positioned: false,
        }
    }

    /// Number of values this cursor may still surface
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Item = C::Item;

    fn has_started(&self) -> bool {
        self.started
    }

    fn has_current(&self) -> bool {
        self.positioned && self.cursor.has_current()
    }

    fn current(&self) -> Result<&Self::Item> {
        if self.positioned {
            self.cursor.current()
        } else {
            no_current()
        }
    }

    fn next(&mut self) -> Result<bool> {
        self.started = true;
        self.positioned = false;

        if self.remaining == 0 {
            return Ok(false);
        }

        self.positioned = self.cursor.next()?;
        if self.positioned {
            self.remaining -= 1;
        } else {
            self.remaining = 0;
        }
        tracing::trace!(remaining = self.remaining, "take advanced");
        Ok(self.positioned)
    }
}

/// Extension trait to add .take() to all cursors
pub trait TakeExt: Cursor + Sized {
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }
}

/// Implement TakeExt for all cursors
impl<C: Cursor> TakeExt for C {}

/// Convenience function to create a Take cursor
pub fn take<C: Cursor>(cursor: C, count: usize) -> Take<C> {
    Take::new(cursor, count)
}
