//! Capture of traces in `Result`-returning code.

use core::hint::black_box;
use std::fmt;

use crate::error::{Cause, Error, Origin};

/// Utility trait simplifying the use of [`Error`] in error handling contexts.
///
/// `Ok` values go through untouched; `Err` values are wrapped in an [`Error`] whose first frame is
/// the caller of the method.
pub trait Traceable<T> {
    /// Wraps the error without adding any message.
    ///
    /// # Errors
    /// Yields the wrapped error if `self` is an error.
    fn traced(self) -> Result<T, Error>;

    /// Wraps the error with a context `message`.
    ///
    /// # Errors
    /// Yields the wrapped error if `self` is an error.
    fn wrap_err<M: fmt::Display>(self, message: M) -> Result<T, Error>;

    /// Wraps the error with a context message computed only on failure.
    ///
    /// # Errors
    /// Yields the wrapped error if `self` is an error.
    fn wrap_err_with<M: fmt::Display, F: FnOnce() -> M>(self, message: F) -> Result<T, Error>;
}

impl<T, E: Into<Cause>> Traceable<T> for Result<T, E> {
    #[inline(never)]
    fn traced(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => black_box(Err(Error::traced(Origin::Cause(err.into()), 1))),
        }
    }

    #[inline(never)]
    fn wrap_err<M: fmt::Display>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => black_box(Err(Error::traced(Origin::context(err, message), 1))),
        }
    }

    #[inline(never)]
    fn wrap_err_with<M: fmt::Display, F: FnOnce() -> M>(self, message: F) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => {
                let origin = Origin::context(err, message());
                black_box(Err(Error::traced(origin, 1)))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;
    use std::num::ParseIntError;

    use super::*;

    fn parse(input: &str) -> Result<u32, ParseIntError> {
        input.parse()
    }

    #[test]
    fn ok_goes_through() {
        assert_eq!(parse("42").traced().ok(), Some(42));
        assert_eq!(parse("42").wrap_err("parsing").ok(), Some(42));
        assert_eq!(parse("42").wrap_err_with(|| -> String { unreachable!() }).ok(), Some(42));
    }

    #[test]
    fn traced_starts_at_caller() {
        let err = parse("forty-two").traced().unwrap_err();

        assert_eq!(err.to_string(), "invalid digit found in string");
        assert!(err.frames().first().unwrap().function.ends_with("traced_starts_at_caller"));
    }

    #[test]
    fn wrap_err_starts_at_caller() {
        let err = parse("").wrap_err("failed to read the answer").unwrap_err();

        assert_eq!(err.to_string(), "failed to read the answer: cannot parse integer from empty string");
        assert!(err.frames().first().unwrap().function.ends_with("wrap_err_starts_at_caller"));
    }

    #[test]
    fn wrap_err_with_is_lazy() {
        let input = "x";
        let err = parse(input).wrap_err_with(|| format!("failed to parse {input:?}")).unwrap_err();

        assert_eq!(err.to_string(), "failed to parse \"x\": invalid digit found in string");
        assert!(err.frames().first().unwrap().function.ends_with("wrap_err_with_is_lazy"));
    }

    #[test]
    fn traced_errors_nest() {
        let inner = parse("x").traced();
        let outer = inner.wrap_err("outer").unwrap_err();

        let source = outer.source().unwrap();
        assert!(source.downcast_ref::<Error>().is_some());
        assert_eq!(outer.to_string(), "outer: invalid digit found in string");
    }
}
