use crate::cursor::{Cursor, Progress};
use crate::error::{Failure, FailureKind, Result};
use std::fmt;

/// Cursor that observes failures raised while advancing another cursor
/// without suppressing them
///
/// The handler runs for failures of `kind` (or a kind beneath it), then the
/// failure propagates to the caller unchanged.
pub struct OnError<C, H> {
    cursor: C,
    kind: FailureKind,
    handler: H,
    progress: Progress,
}

impl<C, H> OnError<C, H> {
    pub fn new(cursor: C, kind: FailureKind, handler: H) -> Self {
        Self {
            cursor,
            kind,
            handler,
            progress: Progress::default(),
        }
    }
}

impl<C: fmt::Debug, H> fmt::Debug for OnError<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnError")
            .field("cursor", &self.cursor)
            .field("kind", &self.kind)
            .field("handler", &"<function>")
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, H> Cursor for OnError<C, H>
where
    C: Cursor,
    H: FnMut(&Failure),
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
        let found = self.cursor.next().inspect_err(|failure| {
            if failure.is(&self.kind) {
                tracing::debug!(
                    kind = %failure.kind(),
                    message = failure.message(),
                    "observed failure while advancing"
                );
                (self.handler)(failure);
            }
        })?;
        Ok(self.progress.finish(found))
    }
}

/// Extension trait to add .on_error() to all cursors
pub trait OnErrorExt: Cursor + Sized {
    fn on_error<H>(self, kind: FailureKind, handler: H) -> OnError<Self, H>
    where
        H: FnMut(&Failure),
    {
        OnError::new(self, kind, handler)
    }
}

/// Implement OnErrorExt for all cursors
impl<C: Cursor> OnErrorExt for C {}

/// Convenience function to create an OnError cursor
pub fn on_error<C, H>(cursor: C, kind: FailureKind, handler: H) -> OnError<C, H>
where
    C: Cursor,
    H: FnMut(&Failure),
{
    OnError::new(cursor, kind, handler)
}
