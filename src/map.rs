use crate::cursor::{Cursor, Progress};
use crate::error::Result;
use std::cell::OnceCell;
use std::fmt;

/// Cursor combinator that transforms the values of a cursor using a mapping function
///
/// The mapper runs the first time the current value is read after an
/// advance, and its result is kept until the next advance.
pub struct Map<C, F, U> {
    cursor: C,
    mapper: F,
    mapped: OnceCell<U>,
    progress: Progress,
}

impl<C, F, U> Map<C, F, U> {
    pub fn new(cursor: C, mapper: F) -> Self {
        Map {
            cursor,
            mapper,
            mapped: OnceCell::new(),
            progress: Progress::default(),
        }
    }
}

impl<C, F, U> fmt::Debug for Map<C, F, U>
where
    C: fmt::Debug,
    U: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("cursor", &self.cursor)
            .field("mapper", &"<function>")
            .field("mapped", &self.mapped)
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, F, U> Cursor for Map<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> U,
{
    type Item = U;

    fn has_started(&self) -> bool {
        self.progress.has_started()
    }

    fn has_current(&self) -> bool {
        self.progress.has_current(&self.cursor)
    }

    fn current(&self) -> Result<&Self::Item> {
        if let Some(mapped) = self.mapped.get() {
            return Ok(mapped);
        }
        let value = self.progress.current(&self.cursor)?;
        Ok(self.mapped.get_or_init(|| (self.mapper)(value)))
    }

    fn next(&mut self) -> Result<bool> {
        self.mapped.take();
        self.progress.begin();
        let found = self.cursor.next()?;
        Ok(self.progress.finish(found))
    }
}

/// Extension trait to add .map() to all cursors
pub trait MapExt: Cursor + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F, U>
    where
        F: Fn(&Self::Item) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all cursors
impl<C: Cursor> MapExt for C {}

/// Convenience function to create a Map cursor
pub fn map<C, F, U>(cursor: C, mapper: F) -> Map<C, F, U>
where
    C: Cursor,
    F: Fn(&C::Item) -> U,
{
    Map::new(cursor, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{empty, from_slice};
    use crate::materialize::MaterializeExt;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn test_map_squares() {
        let data = [1, 2, 3];
        let mut cursor = from_slice(&data).map(|x| x * x);
        assert_eq!(cursor.to_vec().unwrap(), vec![1, 4, 9]);
    }

    #[test]
    fn test_map_changes_type() {
        let data = [1, 22, 333];
        let mut cursor = map(from_slice(&data), |x: &i32| x.to_string().len());
        assert_eq!(cursor.to_vec().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_map_runs_once_per_position() {
        let calls = Cell::new(0);
        let data = [1, 2];
        let mut cursor = from_slice(&data).map(|x| {
            calls.set(calls.get() + 1);
            x + 100
        });

        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), 101);
        assert_eq!(*cursor.current().unwrap(), 101);
        assert_eq!(calls.get(), 1);

        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), 102);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let data = [1, 2, 3];
        let mut cursor = from_slice(&data).map(|x| {
            calls.set(calls.get() + 1);
            *x
        });

        while cursor.next().unwrap() {}
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_map_exhausted_current_fails() {
        let mut cursor = empty::<i32>().map(|x| x + 1);
        assert!(!cursor.next().unwrap());
        assert!(cursor.current().is_err());
        assert!(cursor.has_started());
    }

    #[test]
    fn test_map_over_positioned_inner() {
        let data = [1, 2, 3];
        let mut inner = from_slice(&data);
        inner.next().unwrap();

        let mut cursor = map(&mut inner, |x: &i32| x * 10);
        assert!(!cursor.has_started());
        assert!(cursor.current().is_err());
        assert_eq!(cursor.to_vec().unwrap(), vec![20, 30]);
    }
}
