use crate::cursor::{Cursor, Progress, current_if_positioned};
use crate::error::Result;

/// Cursor that surfaces values of another cursor while a predicate holds
///
/// The first value failing the predicate ends the traversal. That value is
/// consumed from the inner cursor but never surfaced, and no later value is
/// surfaced even if it would satisfy the predicate again.
pub struct TakeWhile<C, P> {
    cursor: C,
    predicate: P,
    stopped: bool,
    progress: Progress,
}

impl<C, P> TakeWhile<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            stopped: false,
            progress: Progress::default(),
        }
    }
}

impl<C: std::fmt::Debug, P> std::fmt::Debug for TakeWhile<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("cursor", &self.cursor)
            .field("predicate", &"<function>")
            .field("stopped", &self.stopped)
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
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
        if self.stopped {
            return Ok(false);
        }

        self.cursor.next()?;
        match current_if_positioned(&self.cursor)? {
            Some(value) if (self.predicate)(value) => Ok(self.progress.finish(true)),
            Some(_) => {
                tracing::trace!("take_while predicate failed, stopping");
                self.stopped = true;
                Ok(false)
            }
            None => Ok(false),
        }
    }
}

/// Extension trait to add .take_while() to all cursors
pub trait TakeWhileExt: Cursor + Sized {
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }
}

/// Implement TakeWhileExt for all cursors
impl<C: Cursor> TakeWhileExt for C {}

/// Convenience function to create a TakeWhile cursor
pub fn take_while<C, P>(cursor: C, predicate: P) -> TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    TakeWhile::new(cursor, predicate)
}
