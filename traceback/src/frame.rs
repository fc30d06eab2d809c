//! Stack locations recorded by a [capture](crate::capture).

use derive_more::{Constructor, Display};

/// A single stack location.
#[derive(Clone, Constructor, Debug, Default, Display, Eq, PartialEq, Hash)]
#[display(fmt = "{function}()\n\t{file}:{line}")]
pub struct Frame {
    /// Demangled function path, without its hash suffix.
    pub function: String,

    /// Source file, as recorded in the debug information.
    pub file: String,

    /// Line number, 0 when unknown.
    pub line: u32,
}

impl Frame {
    /// Renders the frame with a caller-supplied `formatter`.
    #[inline]
    #[must_use]
    pub fn format<F: Fn(&Self) -> String>(&self, formatter: F) -> String {
        formatter(self)
    }
}

/// The formatter used by the [`Display`](core::fmt::Display) implementations of [`Frame`] and
/// [`Frames`](crate::Frames).
///
/// Renders `function()`, a newline, a tab, then `file:line`.
#[inline]
#[must_use]
pub fn default_formatter(frame: &Frame) -> String {
    frame.to_string()
}
