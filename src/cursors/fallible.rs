use crate::cursor::{Cursor, no_current};
use crate::error::{Failure, Result};
use std::iter::Fuse;

/// Cursor over an iterator whose values may fail to be produced
///
/// An `Err` item is raised from [`Cursor::next`]. The cursor has already
/// moved past the failing position when the failure is raised, so advancing
/// again continues with the following item. Sources backed by external
/// resources (directory walks, readers) surface their errors this way.
#[derive(Debug)]
pub struct FallibleCursor<I, T>
where
    I: Iterator<Item = Result<T, Failure>>,
{
    iter: Fuse<I>,
    current: Option<T>,
    started: bool,
}

impl<I, T> FallibleCursor<I, T>
where
    I: Iterator<Item = Result<T, Failure>>,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            current: None,
            started: false,
        }
    }
}

impl<I, T> Cursor for FallibleCursor<I, T>
where
    I: Iterator<Item = Result<T, Failure>>,
{
    type Item = T;

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
        self.current = None;
        match self.iter.next() {
            Some(Ok(value)) => {
                self.current = Some(value);
                Ok(true)
            }
            Some(Err(failure)) => Err(failure),
            None => Ok(false),
        }
    }
}

/// Create a cursor from an iterator of results
pub fn from_results<I, T>(iter: I) -> FallibleCursor<I::IntoIter, T>
where
    I: IntoIterator<Item = Result<T, Failure>>,
{
    FallibleCursor::new(iter.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn test_failure_is_raised_and_skippable() {
        let mut cursor = from_results(vec![
            Ok(1),
            Err(Failure::new(FailureKind::Parse, "bad")),
            Ok(3),
        ]);

        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), 1);

        let failure = cursor.next().unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Parse);
        assert!(cursor.has_started());
        assert!(!cursor.has_current());

        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), 3);
        assert!(!cursor.next().unwrap());
        assert!(!cursor.next().unwrap());
    }

    #[test]
    fn test_all_ok() {
        let mut cursor = from_results(["a", "b"].into_iter().map(Ok));
        assert!(cursor.next().unwrap());
        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), "b");
        assert!(!cursor.next().unwrap());
    }
}
