//! Errors carrying the call stack on which they were created.
//!
//! An [`Error`] wraps any other error (or a plain message) together with the [`Frames`] captured
//! when it was constructed. Each layer of wrapping captures its own frames; [`frames_of`] finds
//! the frames of the first traced error in any chain of [`source`](std::error::Error::source)s.
//!
//! ```
//! use traceback::{Error, Traceable};
//!
//! fn read_port(input: &str) -> Result<u16, Error> {
//!     input.parse::<u16>().wrap_err("invalid port")
//! }
//!
//! let err = read_port("http").unwrap_err();
//!
//! assert_eq!(err.to_string(), "invalid port: invalid digit found in string");
//! assert!(err.frames().first().is_some());
//! println!("{}", err.trace());
//! ```

pub mod accessor;
pub mod capture;
pub mod error;
pub mod frame;
pub mod frames;
pub mod traceable;

pub use accessor::{chain, frames_of};
pub use capture::{capture, MAX_DEPTH};
pub use error::{from, wrap, wrapf, Error};
pub use frame::{default_formatter, Frame};
pub use frames::Frames;
pub use traceable::Traceable;
