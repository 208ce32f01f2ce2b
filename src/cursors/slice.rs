use crate::cursor::{Cursor, no_current};
use crate::error::Result;

/// Cursor over a borrowed backing sequence
#[derive(Debug)]
pub enum SliceCursor<'a, T> {
    /// No value has been requested yet
    NotStarted { data: &'a [T] },
    /// Cursor pointing at a valid index of `data`
    Positioned { data: &'a [T], position: usize },
    /// Cursor moved past the last element
    Exhausted { data: &'a [T] },
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceCursor::NotStarted { data }
    }

    fn at(data: &'a [T], position: usize) -> Self {
        if position < data.len() {
            SliceCursor::Positioned { data, position }
        } else {
            SliceCursor::Exhausted { data }
        }
    }

    /// Index of the current element, `None` when not positioned
    pub fn position(&self) -> Option<usize> {
        match self {
            SliceCursor::Positioned { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// The backing sequence
    pub fn source(&self) -> &'a [T] {
        match *self {
            SliceCursor::NotStarted { data } => data,
            SliceCursor::Positioned { data, .. } => data,
            SliceCursor::Exhausted { data } => data,
        }
    }
}

impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = T;

    fn has_started(&self) -> bool {
        !matches!(self, SliceCursor::NotStarted { .. })
    }

    fn has_current(&self) -> bool {
        matches!(self, SliceCursor::Positioned { .. })
    }

    fn current(&self) -> Result<&Self::Item> {
        match *self {
            SliceCursor::Positioned { data, position } => Ok(&data[position]),
            _ => no_current(),
        }
    }

    fn next(&mut self) -> Result<bool> {
        *self = match *self {
            SliceCursor::NotStarted { data } => Self::at(data, 0),
            SliceCursor::Positioned { data, position } => Self::at(data, position + 1),
            SliceCursor::Exhausted { data } => SliceCursor::Exhausted { data },
        };
        Ok(self.has_current())
    }
}

/// Create a cursor over a borrowed slice
pub fn from_slice<T>(data: &[T]) -> SliceCursor<'_, T> {
    SliceCursor::new(data)
}
