use crate::cursor::{Cursor, no_current};
use crate::error::Result;

/// Cursor that owns its backing sequence
#[derive(Debug, Clone)]
pub struct VecCursor<T> {
    data: Vec<T>,
    /// `None` until the first advance, `data.len()` once exhausted
    position: Option<usize>,
}

impl<T> VecCursor<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            position: None,
        }
    }

    /// Give back the backing sequence
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> From<Vec<T>> for VecCursor<T> {
    fn from(data: Vec<T>) -> Self {
        Self::new(data)
    }
}

impl<T> Cursor for VecCursor<T> {
    type Item = T;

    fn has_started(&self) -> bool {
        self.position.is_some()
    }

    fn has_current(&self) -> bool {
        matches!(self.position, Some(position) if position < self.data.len())
    }

    fn current(&self) -> Result<&Self::Item> {
        match self.position {
            Some(position) if position < self.data.len() => Ok(&self.data[position]),
            _ => no_current(),
        }
    }

    fn next(&mut self) -> Result<bool> {
        let len = self.data.len();
        let next = match self.position {
            None => 0,
            Some(position) => (position + 1).min(len),
        };
        self.position = Some(next);
        Ok(next < len)
    }
}

/// Create a cursor that owns `data`
pub fn from_vec<T>(data: Vec<T>) -> VecCursor<T> {
    VecCursor::new(data)
}
