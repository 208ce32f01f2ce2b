use crate::error::{Failure, Result};

/// Conceptual state of a cursor, derived from the protocol queries
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CursorState {
    /// No advance has been requested yet
    NotStarted,
    /// A value is exposed through [`Cursor::current`]
    Positioned,
    /// No more values exist
    Exhausted,
}

/// Pull-based cursor over a sequence of values
///
/// A cursor starts out not started, and each call to [`Cursor::next`] moves it
/// either onto a value or into exhaustion. It never returns to the not started
/// state and once exhausted it stays exhausted. Decorators wrap a cursor and
/// derive their own state from it, so a pipeline is pulled from its outermost
/// decorator.
pub trait Cursor {
    /// The type of values this cursor surfaces
    type Item;

    /// Whether the first advance has been requested, regardless of its outcome
    fn has_started(&self) -> bool;

    /// Whether the cursor is currently positioned on a value
    fn has_current(&self) -> bool;

    /// Get the value the cursor is positioned on
    ///
    /// Fails with [`FailureKind::InvalidState`](crate::FailureKind::InvalidState)
    /// when the cursor has not started or is exhausted
    fn current(&self) -> Result<&Self::Item>;

    /// Advance to the next value
    ///
    /// Returns whether the cursor is positioned on a value afterwards. Calling
    /// this on an exhausted cursor keeps returning `false`.
    fn next(&mut self) -> Result<bool>;

    /// The conceptual state derived from [`Cursor::has_started`] and
    /// [`Cursor::has_current`]
    fn state(&self) -> CursorState {
        if self.has_current() {
            CursorState::Positioned
        } else if self.has_started() {
            CursorState::Exhausted
        } else {
            CursorState::NotStarted
        }
    }

    /// Advance once if the cursor has not started yet, otherwise do nothing
    fn start(&mut self) -> Result<&mut Self>
    where
        Self: Sized,
    {
        if !self.has_started() {
            self.next()?;
        }
        Ok(self)
    }

    /// Whether the cursor has a value, starting it if needed
    ///
    /// Repeated calls do not advance past the first value.
    fn any(&mut self) -> Result<bool>
    where
        Self: Sized,
    {
        Ok(self.start()?.has_current())
    }

    /// Get the current value, failing with the same error as
    /// [`Cursor::current`] but after starting the cursor
    fn started_current(&mut self) -> Result<&Self::Item>
    where
        Self: Sized,
    {
        self.start()?;
        Self::current(self)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    fn has_started(&self) -> bool {
        (**self).has_started()
    }

    fn has_current(&self) -> bool {
        (**self).has_current()
    }

    fn current(&self) -> Result<&Self::Item> {
        (**self).current()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn has_started(&self) -> bool {
        (**self).has_started()
    }

    fn has_current(&self) -> bool {
        (**self).has_current()
    }

    fn current(&self) -> Result<&Self::Item> {
        (**self).current()
    }

    fn next(&mut self) -> Result<bool> {
        (**self).next()
    }
}

/// Read the current value of `cursor` only when it reports one
///
/// Decorators use this after an advance so that a cursor which is positioned
/// but cannot produce its value still surfaces the failure.
pub(crate) fn current_if_positioned<C: Cursor + ?Sized>(cursor: &C) -> Result<Option<&C::Item>> {
    if cursor.has_current() {
        cursor.current().map(Some)
    } else {
        Ok(None)
    }
}

/// Position bookkeeping for decorators
///
/// A decorator exposes the wrapped cursor's value only after one of its own
/// advances accepted it. Wrapping a cursor that is already positioned
/// therefore starts the decorator out not started.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Progress {
    started: bool,
    positioned: bool,
}

impl Progress {
    pub(crate) fn has_started(&self) -> bool {
        self.started
    }

    pub(crate) fn has_current<C: Cursor + ?Sized>(&self, cursor: &C) -> bool {
        self.positioned && cursor.has_current()
    }

    pub(crate) fn current<'a, C: Cursor + ?Sized>(&self, cursor: &'a C) -> Result<&'a C::Item> {
        if self.positioned {
            cursor.current()
        } else {
            no_current()
        }
    }

    /// Record that an advance began, dropping any accepted position
    pub(crate) fn begin(&mut self) {
        self.started = true;
        self.positioned = false;
    }

    /// Record whether the advance ended on an accepted value
    pub(crate) fn finish(&mut self, positioned: bool) -> bool {
        self.positioned = positioned;
        positioned
    }
}

/// Fail with the standard error for reading a cursor without a current value
pub(crate) fn no_current<T>() -> Result<T> {
    Err(Failure::no_current_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{SliceCursor, empty};
    use crate::error::FailureKind;

    #[test]
    fn test_start_advances_once() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::new(&data);

        assert!(!cursor.has_started());
        cursor.start().unwrap();
        assert!(cursor.has_started());
        assert_eq!(*cursor.current().unwrap(), 1);

        cursor.start().unwrap();
        assert_eq!(*cursor.current().unwrap(), 1);
    }

    #[test]
    fn test_state_transitions() {
        let data = [1];
        let mut cursor = SliceCursor::new(&data);

        assert_eq!(cursor.state(), CursorState::NotStarted);
        cursor.next().unwrap();
        assert_eq!(cursor.state(), CursorState::Positioned);
        cursor.next().unwrap();
        assert_eq!(cursor.state(), CursorState::Exhausted);
        cursor.next().unwrap();
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_any_is_idempotent() {
        let data = [7, 8];
        let mut cursor = SliceCursor::new(&data);

        assert!(cursor.any().unwrap());
        assert!(cursor.any().unwrap());
        assert_eq!(*cursor.current().unwrap(), 7);
    }

    #[test]
    fn test_any_on_empty() {
        let mut cursor = empty::<i32>();
        assert!(!cursor.any().unwrap());
        assert!(!cursor.any().unwrap());
        assert!(cursor.has_started());
    }

    #[test]
    fn test_started_current() {
        let data = ["a", "b"];
        let mut cursor = SliceCursor::new(&data);
        assert_eq!(*cursor.started_current().unwrap(), "a");

        let mut cursor = empty::<&str>();
        let err = cursor.started_current().unwrap_err();
        assert_eq!(err.kind(), FailureKind::InvalidState);
    }

    #[test]
    fn test_boxed_dyn_cursor() {
        let data = [1, 2];
        let mut cursor: Box<dyn Cursor<Item = i32> + '_> = Box::new(SliceCursor::new(&data));

        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), 1);
        assert!(cursor.next().unwrap());
        assert!(!cursor.next().unwrap());
        assert!(!cursor.has_current());
    }

    #[test]
    fn test_mut_ref_cursor_advances_original() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::new(&data);

        fn advance_twice<C: Cursor>(mut cursor: C) {
            cursor.next().unwrap();
            cursor.next().unwrap();
        }

        advance_twice(&mut cursor);
        assert_eq!(*cursor.current().unwrap(), 2);
    }

    #[test]
    fn test_progress_ignores_inner_position() {
        let data = [1, 2];
        let mut inner = SliceCursor::new(&data);
        inner.next().unwrap();

        let mut progress = Progress::default();
        assert!(!progress.has_started());
        assert!(!progress.has_current(&inner));
        assert!(progress.current(&inner).is_err());

        progress.begin();
        let found = inner.next().unwrap();
        assert!(progress.finish(found));
        assert!(progress.has_current(&inner));
        assert_eq!(*progress.current(&inner).unwrap(), 2);

        progress.begin();
        assert!(progress.has_started());
        assert!(!progress.has_current(&inner));
    }
}
