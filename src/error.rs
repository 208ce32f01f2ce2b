use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Result alias used by every cursor operation
pub type Result<T, E = Failure> = std::result::Result<T, E>;

/// Classification tag for failures raised while traversing a cursor
///
/// Kinds form a tree rooted at [`FailureKind::Any`]. Interception matches a
/// registered kind against a raised kind with [`FailureKind::refines`], so a
/// handler registered for `NotFound` also sees `FileNotFound` and
/// `FolderNotFound`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Root of the taxonomy, matches every failure
    Any,
    Runtime,
    /// An argument or input did not satisfy a required condition
    PreCondition,
    /// A cursor operation was invoked in a state that does not support it
    InvalidState,
    NotFound,
    FileNotFound,
    FolderNotFound,
    AlreadyExists,
    Parse,
    Io,
    EndOfStream,
    /// Caller-defined kind hung beneath any existing kind
    Custom {
        name: &'static str,
        parent: &'static FailureKind,
    },
}

impl FailureKind {
    /// The kind directly above this one, `None` for [`FailureKind::Any`]
    pub fn parent(&self) -> Option<FailureKind> {
        match self {
            FailureKind::Any => None,
            FailureKind::Runtime | FailureKind::Io => Some(FailureKind::Any),
            FailureKind::PreCondition
            | FailureKind::NotFound
            | FailureKind::AlreadyExists
            | FailureKind::Parse => Some(FailureKind::Runtime),
            FailureKind::InvalidState => Some(FailureKind::PreCondition),
            FailureKind::FileNotFound | FailureKind::FolderNotFound => Some(FailureKind::NotFound),
            FailureKind::EndOfStream => Some(FailureKind::Io),
            FailureKind::Custom { parent, .. } => Some(**parent),
        }
    }

    /// Whether this kind is `other` or sits somewhere beneath it
    pub fn refines(&self, other: &FailureKind) -> bool {
        let mut kind = Some(*self);
        while let Some(current) = kind {
            if current == *other {
                return true;
            }
            kind = current.parent();
        }
        false
    }

    pub fn name(&self) -> &'static str {
        match self {
            FailureKind::Any => "any",
            FailureKind::Runtime => "runtime",
            FailureKind::PreCondition => "precondition",
            FailureKind::InvalidState => "invalid state",
            FailureKind::NotFound => "not found",
            FailureKind::FileNotFound => "file not found",
            FailureKind::FolderNotFound => "folder not found",
            FailureKind::AlreadyExists => "already exists",
            FailureKind::Parse => "parse",
            FailureKind::Io => "io",
            FailureKind::EndOfStream => "end of stream",
            FailureKind::Custom { name, .. } => *name,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failure raised by a cursor operation
#[derive(Debug, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Failure {
    kind: FailureKind,
    message: Cow<'static, str>,
    #[source]
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying error that caused this failure
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Failure raised when the current value is requested from a cursor
    /// that is not positioned on a value
    pub fn no_current_value() -> Self {
        Self::new(
            FailureKind::InvalidState,
            "cannot read the current value of a cursor that has no current value",
        )
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this failure should be intercepted by a handler registered for `kind`
    pub fn is(&self, kind: &FailureKind) -> bool {
        self.kind.refines(kind)
    }
}

impl From<std::io::Error> for Failure {
    fn from(err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => FailureKind::NotFound,
            std::io::ErrorKind::AlreadyExists => FailureKind::AlreadyExists,
            std::io::ErrorKind::UnexpectedEof => FailureKind::EndOfStream,
            _ => FailureKind::Io,
        };
        Failure::new(kind, err.to_string()).with_source(err)
    }
}
