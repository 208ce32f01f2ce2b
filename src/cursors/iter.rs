use crate::cursor::{Cursor, no_current};
use crate::error::Result;
use std::iter::Fuse;

/// Cursor over the values of a standard library iterator
///
/// Each advance pulls one value out of the iterator and keeps it until the
/// following advance.
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iter: Fuse<I>,
    current: Option<I::Item>,
    started: bool,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            current: None,
            started: false,
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    fn has_started(&self) -> bool {
        self.started
    }

    fn has_current(&self) -> bool {
        self.current.is_some()
    }

    fn current(&self) -> Result<&Self::Item> {
        match &self.current {
            Some(value) => Ok(value),
            None => no_current(),
        }
    }

    fn next(&mut self) -> Result<bool> {
        self.started = true;
        self.current = self.iter.next();
        Ok(self.current.is_some())
    }
}

/// Create a cursor from anything that can be iterated
pub fn from_iter<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor::new(iter.into_iter())
}
