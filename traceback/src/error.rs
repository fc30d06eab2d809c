//! Definition of errors with the [`Frames`] captured where they were created.
//!
//! Every constructor captures the stack at its own call site: the first frame of an [`Error`] is
//! the function that called the constructor. Wrapping an [`Error`] again captures a new, independent
//! list of frames, and the wrapped error stays reachable through [`source`](StdError::source).
//!
//! The capture path counts frames, so each constructor passes its result through
//! [`black_box`]: none of them may be turned into a tail call.

use core::hint::black_box;
use std::error::Error as StdError;
use std::fmt;

use derive_more::Display;

use crate::capture::capture;
use crate::frames::Frames;

/// Any error that can be wrapped.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// What an [`Error`] was built from.
#[derive(Debug, Display)]
pub(crate) enum Origin {
    /// A message without any underlying error.
    #[display(fmt = "{_0}")]
    Message(String),

    /// Another error, without context.
    #[display(fmt = "{_0}")]
    Cause(Cause),

    /// Another error, prefixed with a context message.
    #[display(fmt = "{context}: {source}")]
    Context { context: String, source: Cause },
}

impl Origin {
    /// Wraps `source` under `context`.
    #[inline]
    pub(crate) fn context<E: Into<Cause>, M: fmt::Display>(source: E, context: M) -> Self {
        Self::Context {
            context: context.to_string(),
            source: source.into(),
        }
    }
}

/// The type representing an error and the stack on which it was created.
#[derive(Debug)]
pub struct Error {
    /// The message or the wrapped error.
    origin: Origin,

    /// The stack at construction time.
    frames: Frames,
}

impl Error {
    /// Creates an error from a message.
    #[inline(never)]
    #[must_use]
    pub fn new<M: fmt::Display>(message: M) -> Self {
        black_box(Self::traced(Origin::Message(message.to_string()), 1))
    }

    /// Creates an error from a formatted message, see [`errorf!`](crate::errorf).
    #[inline(never)]
    #[must_use]
    pub fn errorf(args: fmt::Arguments<'_>) -> Self {
        black_box(Self::traced(Origin::Message(args.to_string()), 1))
    }

    /// Wraps `err` without adding any message.
    #[inline(never)]
    #[must_use]
    pub fn from_cause<E: Into<Cause>>(err: E) -> Self {
        black_box(Self::traced(Origin::Cause(err.into()), 1))
    }

    /// Wraps `err`, prefixing its message with `message: `.
    #[inline(never)]
    #[must_use]
    pub fn wrap<E: Into<Cause>, M: fmt::Display>(err: E, message: M) -> Self {
        black_box(Self::traced(Origin::context(err, message), 1))
    }

    /// Wraps `err`, prefixing its message with a formatted message.
    #[inline(never)]
    #[must_use]
    pub fn wrapf<E: Into<Cause>>(err: E, args: fmt::Arguments<'_>) -> Self {
        black_box(Self::traced(Origin::context(err, args), 1))
    }

    /// Captures the stack for `origin`, dropping the frame of this function and `skip` more.
    #[inline(never)]
    pub(crate) fn traced(origin: Origin, skip: usize) -> Self {
        let frames = black_box(capture(skip + 1));

        Self { origin, frames }
    }

    /// Returns the wrapped error, or `None` for an error built from a message.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match &self.origin {
            Origin::Message(_) => None,
            Origin::Cause(source) | Origin::Context { source, .. } => Some(&**source),
        }
    }

    /// Returns the frames captured by this error, not the ones of its causes.
    #[inline]
    #[must_use]
    pub const fn frames(&self) -> &Frames {
        &self.frames
    }

    /// Renders the captured frames with the default formatter.
    #[inline]
    #[must_use]
    pub fn trace(&self) -> String {
        self.frames.to_string()
    }
}

/// Displays the message, prefixed to the message of the wrapped error if any. The alternate form
/// `{:#}` appends the trace on the following lines.
impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin)?;

        if f.alternate() && !self.frames.is_empty() {
            write!(f, "\n{}", self.frames)?;
        }

        Ok(())
    }
}

impl StdError for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause().map(|source| source as &(dyn StdError + 'static))
    }
}

/// Wraps `err` without adding any message, or returns `None` if there is no error.
#[inline(never)]
#[must_use]
pub fn from<E: Into<Cause>>(err: Option<E>) -> Option<Error> {
    match err {
        Some(err) => black_box(Some(Error::traced(Origin::Cause(err.into()), 1))),
        None => None,
    }
}

/// Wraps `err` with a context message, or returns `None` if there is no error.
#[inline(never)]
#[must_use]
pub fn wrap<E: Into<Cause>, M: fmt::Display>(err: Option<E>, message: M) -> Option<Error> {
    match err {
        Some(err) => black_box(Some(Error::traced(Origin::context(err, message), 1))),
        None => None,
    }
}

/// Wraps `err` with a formatted context message, or returns `None` if there is no error.
///
/// See also [`wrapf!`](crate::wrapf).
#[inline(never)]
#[must_use]
pub fn wrapf<E: Into<Cause>>(err: Option<E>, args: fmt::Arguments<'_>) -> Option<Error> {
    match err {
        Some(err) => black_box(Some(Error::traced(Origin::context(err, args), 1))),
        None => None,
    }
}

/// Creates an [`Error`] from a format string and its arguments.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::Error::errorf(::core::format_args!($($arg)*))
    };
}

/// Wraps an `Option` of an error with a formatted context message, see [`wrapf`](crate::wrapf()).
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrapf($err, ::core::format_args!($($arg)*))
    };
}
