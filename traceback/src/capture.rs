//! Capture of the current call stack.
//!
//! The platform walk is hidden behind [`StackWalker`], so that the skipping logic can be driven by
//! a fixed stack in tests. [`Runtime`] is the real walker, built on the [`backtrace`] crate.
//!
//! Every function on the capture path is `#[inline(never)]` and passes the result of its inner
//! call through [`black_box`]: skip depths count frames, and an inlined helper or a tail call would
//! shift every depth by one.

use core::hint::black_box;

use log::{trace, warn};

use crate::frame::Frame;
use crate::frames::Frames;

/// Maximum number of frames kept by a capture.
pub const MAX_DEPTH: usize = 64;

/// Number of raw frames scanned when the anchor frame of [`Runtime`] cannot be found.
const MAX_SCAN: usize = 256;

/// A facility walking the stack of the current thread.
#[cfg_attr(test, mockall::automock)]
pub trait StackWalker {
    /// Returns at most `limit` frames, innermost first.
    ///
    /// The first frame is the caller of `walk`, after `skip` frames have been dropped. The frame
    /// of `walk` itself is never part of the result.
    fn walk(&self, skip: usize, limit: usize) -> Vec<Frame>;
}

/// The stack of the running thread, resolved with the debug information of the binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct Runtime;

impl StackWalker for Runtime {
    #[inline(never)]
    fn walk(&self, skip: usize, limit: usize) -> Vec<Frame> {
        let walk: fn(&Self, usize, usize) -> Vec<Frame> = <Self as StackWalker>::walk;
        let anchor = walk as usize;
        let wanted = skip.saturating_add(limit);

        // Raw frames are innermost first. Everything up to and including the anchor belongs to
        // `backtrace` or to this function.
        let mut raw = Vec::new();
        let mut found = None;
        backtrace::trace(|frame| {
            if found.is_none() && frame.symbol_address() as usize == anchor {
                found = Some(raw.len());
            }
            raw.push(frame.clone());

            match found {
                Some(index) => raw.len() <= index.saturating_add(wanted),
                None => raw.len() < MAX_SCAN,
            }
        });

        if found.is_none() {
            warn!("stack walk did not reach its own frame, no frame recorded");
        }

        frames_after(&raw, found, skip, limit, |frame, frames| {
            backtrace::resolve_frame(frame, |symbol| frames.push(frame_of(symbol)));
        })
    }
}

/// Resolves the raw frames following the one at index `anchor`, then drops `skip` frames and
/// keeps at most `limit`.
///
/// `resolve` appends the frames of one raw frame; a raw frame may stand for several inlined
/// functions. Resolution stops at the first raw frame giving nothing. Without an anchor, the
/// frames of the walk itself cannot be told apart from the others, and nothing is kept.
fn frames_after<R, F>(raw: &[R], anchor: Option<usize>, skip: usize, limit: usize, mut resolve: F) -> Vec<Frame>
where
    F: FnMut(&R, &mut Vec<Frame>),
{
    let Some(anchor) = anchor else {
        return Vec::new();
    };
    let wanted = skip.saturating_add(limit);

    let mut frames = Vec::new();
    for frame in raw.iter().skip(anchor + 1) {
        let resolved = frames.len();
        resolve(frame, &mut frames);

        if frames.len() == resolved || frames.len() >= wanted {
            break;
        }
    }

    frames.into_iter().skip(skip).take(limit).collect()
}

/// Converts a resolved symbol, keeping empty fields for missing debug information.
fn frame_of(symbol: &backtrace::Symbol) -> Frame {
    Frame {
        function: symbol.name().map(|name| format!("{name:#}")).unwrap_or_default(),
        file: symbol.filename().map(|path| path.display().to_string()).unwrap_or_default(),
        line: symbol.lineno().unwrap_or_default(),
    }
}

/// Captures the stack with `walker`.
///
/// `skip` is relative to the caller of this function: `0` keeps the caller as the first frame.
#[inline(never)]
pub fn capture_with<W: StackWalker + ?Sized>(walker: &W, skip: usize) -> Frames {
    let frames = black_box(walker.walk(skip + 1, MAX_DEPTH));
    frames.into_iter().take(MAX_DEPTH).collect()
}

/// Captures the stack of the current thread.
///
/// With `skip = 0`, the first frame is the function calling `capture`; each further level of
/// `skip` drops one more frame. The walk stops at the entry point of the thread, after
/// [`MAX_DEPTH`] frames, or at the first frame that cannot be resolved.
#[inline(never)]
#[must_use]
pub fn capture(skip: usize) -> Frames {
    let frames = black_box(capture_with(&Runtime, skip + 1));
    trace!("captured {} frames (skip {skip})", frames.len());
    frames
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;

    fn frame(function: &str, line: u32) -> Frame {
        Frame::new(function.to_owned(), "src/fake.rs".to_owned(), line)
    }

    #[test]
    fn walker_sees_caller_relative_skip() {
        let mut walker = MockStackWalker::new();
        walker
            .expect_walk()
            .with(eq(1), eq(MAX_DEPTH))
            .times(1)
            .returning(|_, _| vec![frame("caller", 1), frame("main", 2)]);

        let frames = capture_with(&walker, 0);

        assert_eq!(frames.to_string(), "caller()\n\tsrc/fake.rs:1\nmain()\n\tsrc/fake.rs:2\n");
    }

    #[test]
    fn walker_receives_extra_skip() {
        let mut walker = MockStackWalker::new();
        walker.expect_walk().with(eq(4), eq(MAX_DEPTH)).times(1).returning(|_, _| vec![]);

        assert!(capture_with(&walker, 3).is_empty());
    }

    #[test]
    fn capture_is_capped() {
        let mut walker = MockStackWalker::new();
        walker
            .expect_walk()
            .returning(|_, _| (0..2 * MAX_DEPTH as u32).map(|line| frame("deep", line)).collect());

        let frames = capture_with(&walker, 0);

        assert_eq!(frames.len(), MAX_DEPTH);
        assert_eq!(frames.first(), Some(&frame("deep", 0)));
    }

    #[test]
    fn caller_is_first_frame() {
        let frames = capture(0);

        let first = frames.first().expect("the test function is on the stack");
        assert!(first.function.ends_with("caller_is_first_frame"), "{frames}");
        assert!(first.file.ends_with("capture.rs"), "{frames}");
        assert!(first.line > 0);
    }

    #[test]
    fn capture_frames_are_excluded() {
        let frames = capture(0);

        assert!(!frames.is_empty());
        assert!(frames.iter().all(|frame| !frame.function.starts_with("traceback::capture::capture")), "{frames}");
        assert!(frames.iter().all(|frame| !frame.function.contains("StackWalker")), "{frames}");
    }

    #[test]
    fn each_skip_level_drops_one_frame() {
        let deep = capture(0);
        let shallow = capture(1);

        assert!(deep.iter().skip(1).zip(shallow.iter()).all(|(lhs, rhs)| lhs == rhs));
        if deep.len() < MAX_DEPTH {
            assert_eq!(shallow.len(), deep.len() - 1);
        }
    }

    #[inline(never)]
    fn nested() -> Frames {
        black_box(capture(0))
    }

    #[test]
    fn nested_call_adds_one_frame() {
        let direct = capture(0);
        let nested = nested();

        assert!(nested.first().unwrap().function.ends_with("nested"), "{nested}");

        if nested.len() < MAX_DEPTH {
            assert_eq!(nested.len(), direct.len() + 1);
        }
    }

    /// Raw frames resolving to the given function names, one raw frame per slice.
    fn resolve(raw: &&[&str], frames: &mut Vec<Frame>) {
        frames.extend(raw.iter().map(|function| frame(function, 1)));
    }

    fn names(frames: &[Frame]) -> Vec<&str> {
        frames.iter().map(|frame| frame.function.as_str()).collect()
    }

    #[test]
    fn missing_anchor_records_nothing() {
        let raw: [&[&str]; 3] = [&["backtrace::trace"], &["walk"], &["caller"]];

        assert!(frames_after(&raw, None, 0, MAX_DEPTH, resolve).is_empty());
    }

    #[test]
    fn frames_start_after_the_anchor() {
        let raw: [&[&str]; 5] = [&["backtrace::trace"], &["walk"], &["capture"], &["caller"], &["main"]];

        assert_eq!(names(&frames_after(&raw, Some(1), 0, MAX_DEPTH, resolve)), ["capture", "caller", "main"]);
        assert_eq!(names(&frames_after(&raw, Some(1), 1, MAX_DEPTH, resolve)), ["caller", "main"]);
        assert_eq!(names(&frames_after(&raw, Some(1), 1, 1, resolve)), ["caller"]);
        assert!(frames_after(&raw, Some(1), 5, MAX_DEPTH, resolve).is_empty());
    }

    #[test]
    fn inlined_frames_count_as_frames() {
        let raw: [&[&str]; 3] = [&["walk"], &["inlined", "caller"], &["main"]];

        assert_eq!(names(&frames_after(&raw, Some(0), 1, MAX_DEPTH, resolve)), ["caller", "main"]);
    }

    #[test]
    fn unresolved_frame_ends_the_walk() {
        let raw: [&[&str]; 4] = [&["walk"], &["caller"], &[], &["main"]];

        assert_eq!(names(&frames_after(&raw, Some(0), 0, MAX_DEPTH, resolve)), ["caller"]);
    }

    #[test]
    fn skipping_past_the_stack_is_empty() {
        assert!(capture(MAX_SCAN).is_empty());
    }
}
