use crate::cursor::{Cursor, Progress, current_if_positioned};
use crate::error::Result;

/// Cursor that discards values of another cursor until one satisfies a
/// predicate
///
/// The satisfying value is the first value surfaced. After that every value
/// passes through unchecked.
pub struct SkipUntil<C, P> {
    cursor: C,
    predicate: P,
    found: bool,
    progress: Progress,
}

impl<C, P> SkipUntil<C, P> {
    pub fn new(cursor: C, predicate: P) -> Self {
        Self {
            cursor,
            predicate,
            found: false,
            progress: Progress::default(),
        }
    }
}

impl<C: std::fmt::Debug, P> std::fmt::Debug for SkipUntil<C, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkipUntil")
            .field("cursor", &self.cursor)
            .field("predicate", &"<function>")
            .field("found", &self.found)
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, P> Cursor for SkipUntil<C, P>
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
        if self.found {
            let found = self.cursor.next()?;
            return Ok(self.progress.finish(found));
        }

        while self.cursor.next()? {
            if let Some(value) = current_if_positioned(&self.cursor)? {
                if (self.predicate)(value) {
                    self.found = true;
                    return Ok(self.progress.finish(true));
                }
            }
        }
        Ok(self.progress.finish(false))
    }
}

/// Extension trait to add .skip_until() to all cursors
pub trait SkipUntilExt: Cursor + Sized {
    fn skip_until<P>(self, predicate: P) -> SkipUntil<Self, P>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        SkipUntil::new(self, predicate)
    }
}

/// Implement SkipUntilExt for all cursors
impl<C: Cursor> SkipUntilExt for C {}

/// Convenience function to create a SkipUntil cursor
pub fn skip_until<C, P>(cursor: C, predicate: P) -> SkipUntil<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    SkipUntil::new(cursor, predicate)
}
