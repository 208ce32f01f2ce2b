use crate::cursor::Cursor;
use crate::error::Result;

/// Adapter that lets a cursor drive a `for` loop
///
/// The first step starts the cursor, so a cursor that is already positioned
/// yields its current value first. Every later step advances it. Values are
/// cloned out of the cursor. A failure is yielded as an `Err` item, and
/// iteration can continue past it.
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
    started: bool,
}

impl<C> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            started: false,
        }
    }

    /// Give back the wrapped cursor
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = Result<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = if self.started {
            self.cursor.next().map(|_| ())
        } else {
            self.started = true;
            self.cursor.start().map(|_| ())
        };

        if let Err(failure) = step {
            return Some(Err(failure));
        }

        if self.cursor.has_current() {
            Some(self.cursor.current().cloned())
        } else {
            None
        }
    }
}

/// Extension trait to iterate over any cursor with `for`
pub trait CursorIterExt: Cursor + Sized {
    /// Iterate by consuming the cursor
    fn into_values(self) -> CursorIter<Self> {
        CursorIter::new(self)
    }

    /// Iterate through a borrow, leaving the cursor usable afterwards
    fn values(&mut self) -> CursorIter<&mut Self> {
        CursorIter::new(self)
    }
}

/// Implement CursorIterExt for all cursors
impl<C: Cursor> CursorIterExt for C {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{from_results, from_slice};
    use crate::error::{Failure, FailureKind};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_for_loop() {
        let data = [1, 2, 3];
        let mut sum = 0;
        for value in from_slice(&data).into_values() {
            sum += value.unwrap();
        }
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_collect_results() {
        let data = ["a", "b"];
        let values: Result<Vec<_>> = from_slice(&data).into_values().collect();
        assert_eq!(values.unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_starts_from_current_value() {
        let data = [1, 2, 3];
        let mut cursor = from_slice(&data);
        cursor.next().unwrap();
        cursor.next().unwrap();

        let rest: Vec<i32> = cursor.values().map(|value| value.unwrap()).collect();
        assert_eq!(rest, vec![2, 3]);
        assert!(!cursor.has_current());
    }

    #[test]
    fn test_failure_is_yielded_and_iteration_continues() {
        let cursor = from_results(vec![
            Ok(1),
            Err(Failure::new(FailureKind::Io, "boom")),
            Ok(3),
        ]);
        let mut iter = cursor.into_values();

        assert_eq!(iter.next().unwrap().unwrap(), 1);
        assert_eq!(iter.next().unwrap().unwrap_err().kind(), FailureKind::Io);
        assert_eq!(iter.next().unwrap().unwrap(), 3);
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_failure_on_start() {
        let cursor = from_results(vec![Err::<i32, _>(Failure::new(FailureKind::Parse, "p")), Ok(2)]);
        let values: Vec<_> = cursor.into_values().collect();

        assert_eq!(values.len(), 2);
        assert!(values[0].is_err());
        assert_eq!(*values[1].as_ref().unwrap(), 2);
    }
}
