use crate::cursor::{Cursor, no_current};
use crate::error::Result;
use std::fmt;

/// Cursor whose advance is supplied as a function over the wrapped cursor
///
/// The function advances the wrapped cursor however it likes and reports
/// whether a value is now exposed. Reading the current value reads the
/// wrapped cursor, and only while the last advance reported a value.
/// This is the way to build a one-off decorator without a named type.
pub struct Customize<C, F> {
    cursor: C,
    advance: F,
    started: bool,
    positioned: bool,
    exhausted: bool,
}

impl<C, F> Customize<C, F> {
    pub fn new(cursor: C, advance: F) -> Self {
        Self {
            cursor,
            advance,
            started: false,
            positioned: false,
            exhausted: false,
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Customize<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Customize")
            .field("cursor", &self.cursor)
            .field("advance", &"<function>")
            .field("started", &self.started)
            .field("positioned", &self.positioned)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

impl<C, F> Cursor for Customize<C, F>
where
    C: Cursor,
    F: FnMut(&mut C) -> Result<bool>,
{
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
        if self.exhausted {
            return Ok(false);
        }
        self.started = true;
        self.positioned = false;

        let found = (self.advance)(&mut self.cursor)? && self.cursor.has_current();
        self.positioned = found;
        self.exhausted = !found;
        Ok(found)
    }
}

/// Extension trait to add .customize() to all cursors
pub trait CustomizeExt: Cursor + Sized {
    fn customize<F>(self, advance: F) -> Customize<Self, F>
    where
        F: FnMut(&mut Self) -> Result<bool>,
    {
        Customize::new(self, advance)
    }
}

/// Implement CustomizeExt for all cursors
impl<C: Cursor> CustomizeExt for C {}

/// Convenience function to create a Customize cursor
pub fn customize<C, F>(cursor: C, advance: F) -> Customize<C, F>
where
    C: Cursor,
    F: FnMut(&mut C) -> Result<bool>,
{
    Customize::new(cursor, advance)
}
