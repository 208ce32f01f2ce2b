use crate::cursor::{Cursor, CursorState, no_current};
use crate::error::Result;

/// Cursor that surfaces exactly one value
#[derive(Debug, Clone)]
pub struct SingleCursor<T> {
    value: T,
    state: CursorState,
}

impl<T> SingleCursor<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            state: CursorState::NotStarted,
        }
    }
}

impl<T> Cursor for SingleCursor<T> {
    type Item = T;

    fn has_started(&self) -> bool {
        self.state != CursorState::NotStarted
    }

    fn has_current(&self) -> bool {
        self.state == CursorState::Positioned
    }

    fn current(&self) -> Result<&Self::Item> {
        match self.state {
            CursorState::Positioned => Ok(&self.value),
            _ => no_current(),
        }
    }

    fn next(&mut self) -> Result<bool> {
        self.state = match self.state {
            CursorState::NotStarted => CursorState::Positioned,
            CursorState::Positioned | CursorState::Exhausted => CursorState::Exhausted,
        };
        Ok(self.has_current())
    }

    fn state(&self) -> CursorState {
        self.state
    }
}

/// Create a cursor over a single value
pub fn single<T>(value: T) -> SingleCursor<T> {
    SingleCursor::new(value)
}
