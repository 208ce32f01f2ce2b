use crate::cursor::{Cursor, Progress, current_if_positioned};
use crate::error::Result;
use std::fmt;

/// Cursor that only surfaces the values of another cursor matching a predicate
///
/// A single advance pulls from the inner cursor until a value matches or the
/// inner cursor is exhausted. There is no bound on how many values one
/// advance may pull, so filtering an endless source that never matches never
/// returns.
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
    progress: Progress,
}

impl<C, P> Filter<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            progress: Progress::default(),
        }
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("cursor", &self.cursor)
            .field("predicate", &"<function>")
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
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
        while self.cursor.next()? {
            if let Some(value) = current_if_positioned(&self.cursor)? {
                if (self.predicate)(value) {
                    return Ok(self.progress.finish(true));
                }
            }
        }
        Ok(self.progress.finish(false))
    }
}

/// Extension trait to add .filter() to all cursors
pub trait FilterExt: Cursor + Sized {
    #[doc(alias = "where")]
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

/// Implement FilterExt for all cursors
impl<C: Cursor> FilterExt for C {}

/// Convenience function to create a filtered cursor
pub fn filter<C, P>(cursor: C, predicate: P) -> Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    Filter::new(cursor, predicate)
}
