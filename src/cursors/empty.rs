use crate::cursor::{Cursor, no_current};
use crate::error::Result;
use std::marker::PhantomData;

/// A cursor that never surfaces a value
#[derive(Debug)]
pub struct EmptyCursor<T> {
    started: bool,
    _phantom: PhantomData<T>,
}

impl<T> EmptyCursor<T> {
    pub fn new() -> Self {
        Self {
            started: false,
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for EmptyCursor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Cursor for EmptyCursor<T> {
    type Item = T;

    fn has_started(&self) -> bool {
        self.started
    }

    fn has_current(&self) -> bool {
        false
    }

    fn current(&self) -> Result<&Self::Item> {
        no_current()
    }

    fn next(&mut self) -> Result<bool> {
        self.started = true;
        Ok(false)
    }
}

/// Create a cursor with no values
pub fn empty<T>() -> EmptyCursor<T> {
    EmptyCursor::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn test_empty_not_started() {
        let cursor = empty::<u8>();
        assert!(!cursor.has_started());
        assert!(!cursor.has_current());
        assert_eq!(
            cursor.current().unwrap_err().kind(),
            FailureKind::InvalidState
        );
    }

    #[test]
    fn test_empty_next_always_false() {
        let mut cursor = empty::<u8>();
        assert!(!cursor.next().unwrap());
        assert!(cursor.has_started());
        assert!(!cursor.next().unwrap());
        assert!(!cursor.has_current());
        assert!(cursor.current().is_err());
    }
}
