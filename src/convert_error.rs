use crate::cursor::{Cursor, Progress};
use crate::error::{Failure, FailureKind, Result};
use std::fmt;

/// Cursor that replaces failures raised while advancing another cursor
///
/// Failures of `kind` (or a kind beneath it) are handed to the converter and
/// the failure it returns is raised in their place. Other failures propagate
/// unchanged.
pub struct ConvertError<C, F> {
    cursor: C,
    kind: FailureKind,
    converter: F,
    progress: Progress,
}

impl<C, F> ConvertError<C, F> {
    pub fn new(cursor: C, kind: FailureKind, converter: F) -> Self {
        Self {
            cursor,
            kind,
            converter,
            progress: Progress::default(),
        }
    }
}

impl<C: fmt::Debug, F> fmt::Debug for ConvertError<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertError")
            .field("cursor", &self.cursor)
            .field("kind", &self.kind)
            .field("converter", &"<function>")
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, F> Cursor for ConvertError<C, F>
where
    C: Cursor,
    F: FnMut(Failure) -> Failure,
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
        match self.cursor.next() {
            Ok(found) => Ok(self.progress.finish(found)),
            Err(failure) if failure.is(&self.kind) => {
                let converted = (self.converter)(failure);
                tracing::debug!(
                    kind = %converted.kind(),
                    message = converted.message(),
                    "converted failure while advancing"
                );
                Err(converted)
            }
            Err(failure) => Err(failure),
        }
    }
}

/// Extension trait to add .convert_error() to all cursors
pub trait ConvertErrorExt: Cursor + Sized {
    fn convert_error<F>(self, kind: FailureKind, converter: F) -> ConvertError<Self, F>
    where
        F: FnMut(Failure) -> Failure,
    {
        ConvertError::new(self, kind, converter)
    }
}

/// Implement ConvertErrorExt for all cursors
impl<C: Cursor> ConvertErrorExt for C {}

/// Convenience function to create a ConvertError cursor
pub fn convert_error<C, F>(cursor: C, kind: FailureKind, converter: F) -> ConvertError<C, F>
where
    C: Cursor,
    F: FnMut(Failure) -> Failure,
{
    ConvertError::new(cursor, kind, converter)
}
