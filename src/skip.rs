use crate::cursor::{Cursor, Progress};
use crate::error::Result;

/// Cursor that discards the first `count` values of another cursor
///
/// Only advances that land on a value count towards `count`, so a failing
/// advance during the skip phase leaves the number still to skip unchanged.
#[derive(Debug)]
pub struct Skip<C> {
    cursor: C,
    to_skip: usize,
    progress: Progress,
}

impl<C> Skip<C> {
    pub fn new(cursor: C, count: usize) -> Self {
        Self {
            cursor,
            to_skip: count,
            progress: Progress::default(),
        }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Item = C::Item;

    fn has_started(&self) -> bool {
        self.progress.has_started()
    }

    fn has_current(&self) -> bool {
        self.progress.has_current(&self.cursor)
    }

    fn current(&self) -> Result<&Self::Item> {
        self.progress.current(&self.cursor)
    }

    fn next(&mut self) -> Result<bool> {
        self.progress.begin();
        while self.to_skip > 0 {
            if !self.cursor.next()? {
                tracing::trace!("skip exhausted its source while skipping");
                self.to_skip = 0;
                return Ok(false);
            }
            self.to_skip -= 1;
        }
        let found = self.cursor.next()?;
        Ok(self.progress.finish(found))
    }
}

/// Extension trait to add .skip() to all cursors
pub trait SkipExt: Cursor + Sized {
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }
}

/// Implement SkipExt for all cursors
impl<C: Cursor> SkipExt for C {}

/// Convenience function to create a Skip cursor
pub fn skip<C: Cursor>(cursor: C, count: usize) -> Skip<C> {
    Skip::new(cursor, count)
}
