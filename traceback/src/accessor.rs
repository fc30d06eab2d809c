//! Recovery of [`Frames`] from arbitrary errors.

use std::error::Error as StdError;

use crate::error::Error;
use crate::frames::Frames;

/// Iterator over an error and its successive [`source`](StdError::source)s.
#[derive(Clone, Debug)]
pub struct Chain<'err> {
    next: Option<&'err (dyn StdError + 'static)>,
}

impl<'err> Iterator for Chain<'err> {
    type Item = &'err (dyn StdError + 'static);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let err = self.next.take()?;
        self.next = err.source();
        Some(err)
    }
}

/// Returns an iterator over `err`, then its source, then the source of its source, and so on.
#[inline]
#[must_use]
pub fn chain<'err>(err: &'err (dyn StdError + 'static)) -> Chain<'err> {
    Chain { next: Some(err) }
}

/// Returns the frames of the first traced [`Error`] in the chain of `err`.
///
/// Errors that are not traced, as well as `None`, give empty frames.
///
/// ```
/// use traceback::{frames_of, Error};
///
/// fn some_func() -> Result<(), Error> {
///     Err(Error::new("something went wrong"))
/// }
///
/// let err = some_func().unwrap_err();
/// let frames = frames_of(Some(&err));
///
/// assert!(frames.len() > 0);
/// let _ = frames.format(|frame| format!("{}:{} ({})", frame.file, frame.line, frame.function));
/// ```
#[must_use]
pub fn frames_of(err: Option<&(dyn StdError + 'static)>) -> Frames {
    err.into_iter()
        .flat_map(chain)
        .find_map(|err| err.downcast_ref::<Error>())
        .map(|err| err.frames().clone())
        .unwrap_or_default()
}
