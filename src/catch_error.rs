use crate::cursor::{Cursor, Progress};
use crate::error::{Failure, FailureKind, Result};
use std::fmt;

/// Cursor that suppresses failures raised while advancing another cursor
///
/// When an advance of the inner cursor fails with a failure of `kind` (or a
/// kind beneath it), the handler sees the failure and the advance is retried,
/// so the failing position produces no value. Failures of other kinds
/// propagate unchanged.
///
/// Retrying assumes the inner cursor moves past a failing position. A source
/// that fails at the same position forever makes an advance loop forever.
pub struct CatchError<C, H> {
    cursor: C,
    kind: FailureKind,
    handler: H,
    progress: Progress,
}

impl<C, H> CatchError<C, H> {
    pub fn new(cursor: C, kind: FailureKind, handler: H) -> Self {
        Self {
            cursor,
            kind,
            handler,
            progress: Progress::default(),
        }
    }
}

impl<C: fmt::Debug, H> fmt::Debug for CatchError<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatchError")
            .field("cursor", &self.cursor)
            .field("kind", &self.kind)
            .field("handler", &"<function>")
            .field("progress", &self.progress)
            .finish()
    }
}

impl<C, H> Cursor for CatchError<C, H>
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
        loop {
            match self.cursor.next() {
                Ok(found) => return Ok(self.progress.finish(found)),
                Err(failure) if failure.is(&self.kind) => {
                    tracing::debug!(
                        kind = %failure.kind(),
                        message = failure.message(),
                        "suppressed failure while advancing"
                    );
                    (self.handler)(&failure);
                }
                Err(failure) => return Err(failure),
            }
        }
    }
}

/// Handler for [`CatchErrorExt::catch_error`], ignores the failure
pub type IgnoreFailure = fn(&Failure);

fn ignore_failure(_: &Failure) {}

/// Extension trait to add .catch_error() to all cursors
pub trait CatchErrorExt: Cursor + Sized {
    /// Suppress failures of `kind` without observing them
    fn catch_error(self, kind: FailureKind) -> CatchError<Self, IgnoreFailure> {
        CatchError::new(self, kind, ignore_failure as IgnoreFailure)
    }

    /// Suppress failures of `kind`, passing each one to `handler` first
    fn catch_error_with<H>(self, kind: FailureKind, handler: H) -> CatchError<Self, H>
    where
        H: FnMut(&Failure),
    {
        CatchError::new(self, kind, handler)
    }
}

/// Implement CatchErrorExt for all cursors
impl<C: Cursor> CatchErrorExt for C {}

/// Convenience function to create a CatchError cursor
pub fn catch_error<C, H>(cursor: C, kind: FailureKind, handler: H) -> CatchError<C, H>
where
    C: Cursor,
    H: FnMut(&Failure),
{
    CatchError::new(cursor, kind, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{from_results, from_slice};
    use crate::materialize::MaterializeExt;
    use pretty_assertions::assert_eq;

    fn parse_failure(message: &'static str) -> Failure {
        Failure::new(FailureKind::Parse, message)
    }

    #[test]
    fn test_catch_error_skips_failing_position() {
        let mut cursor = from_results(vec![Ok(1), Err(parse_failure("second")), Ok(3)])
            .catch_error(FailureKind::Parse);

        assert_eq!(cursor.to_vec().unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_catch_error_matches_more_specific_kind() {
        let mut cursor = from_results(vec![
            Err(Failure::new(FailureKind::FileNotFound, "a.txt")),
            Ok("b.txt"),
            Err(Failure::new(FailureKind::FolderNotFound, "c")),
        ])
        .catch_error(FailureKind::NotFound);

        assert_eq!(cursor.to_vec().unwrap(), vec!["b.txt"]);
    }

    #[test]
    fn test_catch_error_passes_other_kinds() {
        let mut cursor = from_results(vec![Ok(1), Err(Failure::new(FailureKind::Io, "disk")), Ok(3)])
            .catch_error(FailureKind::Parse);

        assert!(cursor.next().unwrap());
        let failure = cursor.next().unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Io);
        assert!(cursor.next().unwrap());
        assert_eq!(*cursor.current().unwrap(), 3);
    }

    #[test]
    fn test_catch_error_with_handler_sees_each_failure() {
        let mut seen = Vec::new();
        {
            let mut cursor = from_results(vec![
                Err(parse_failure("x")),
                Ok(2),
                Err(parse_failure("y")),
                Err(parse_failure("z")),
            ])
            .catch_error_with(FailureKind::Any, |failure| {
                seen.push(failure.message().to_string())
            });

            assert_eq!(cursor.to_vec().unwrap(), vec![2]);
        }
        assert_eq!(seen, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_catch_error_all_failures() {
        let mut cursor = catch_error(
            from_results(vec![Err::<i32, _>(parse_failure("only"))]),
            FailureKind::Runtime,
            |_: &Failure| {},
        );

        assert!(!cursor.next().unwrap());
        assert!(cursor.has_started());
        assert!(!cursor.has_current());
    }

    #[test]
    fn test_catch_error_over_positioned_inner() {
        let data = ['a', 'b'];
        let mut inner = from_slice(&data);
        inner.next().unwrap();

        let mut cursor = catch_error(&mut inner, FailureKind::Any, |_: &Failure| {});
        assert!(!cursor.has_started());
        assert!(!cursor.has_current());
        assert_eq!(cursor.to_vec().unwrap(), vec!['b']);
    }
}
