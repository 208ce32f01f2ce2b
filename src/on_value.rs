use crate::cursor::{Cursor, Progress, current_if_positioned};
use crate::error::Result;
use std::fmt;

/// Cursor that runs an action each time another cursor surfaces a value
///
/// The action runs once per successful advance, after the inner cursor has
/// moved, and before the advance returns. Surfaced values and exhaustion are
/// left untouched.
pub struct OnValue<C, A> {
    cursor: C,
    action: A,
    progress: Progress,
}

impl<C, A> OnValue<C, A> {
    pub fn new(cursor: C, action: A) -> Self {
        Self {
            cursor,
            action,
            progress: Progress::default(),
        }
    }
}

impl<C: fmt::Debug, A> fmt::Debug for OnValue<C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnValue")
            .field("cursor", &self.cursor)
            .field("action", &"<function>")
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, A> Cursor for OnValue<C, A>
where
    C: Cursor,
    A: FnMut(&C::Item),
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
        if !self.cursor.next()? {
            return Ok(self.progress.finish(false));
        }
        if let Some(value) = current_if_positioned(&self.cursor)? {
            (self.action)(value);
        }
        Ok(self.progress.finish(true))
    }
}

/// Extension trait to add .on_value() to all cursors
pub trait OnValueExt: Cursor + Sized {
    fn on_value<A>(self, action: A) -> OnValue<Self, A>
    where
        A: FnMut(&Self::Item),
    {
        OnValue::new(self, action)
    }
}

/// Implement OnValueExt for all cursors
impl<C: Cursor> OnValueExt for C {}

/// Convenience function to create an OnValue cursor
pub fn on_value<C, A>(cursor: C, action: A) -> OnValue<C, A>
where
    C: Cursor,
    A: FnMut(&C::Item),
{
    OnValue::new(cursor, action)
}
