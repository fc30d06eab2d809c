//! Ordered lists of [`Frame`]s.

use core::fmt;

use crate::frame::Frame;

/// The frames of one capture, innermost first.
///
/// Frames are only appended while the list is being built. An empty list is a valid value, it
/// renders as the empty string.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Frames {
    frames: Vec<Frame>,
}

impl Frames {
    /// Appends a frame at the outer end of the list.
    #[inline]
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Returns the number of frames.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frame was recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Returns the innermost frame, the one nearest the capture site.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    /// Iterates over the frames, innermost first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Renders every frame with `formatter`, each followed by a newline.
    #[must_use]
    pub fn format<F: Fn(&Frame) -> String>(&self, formatter: F) -> String {
        self.frames.iter().fold(String::new(), |mut out, frame| {
            out.push_str(&frame.format(&formatter));
            out.push('\n');
            out
        })
    }
}

impl fmt::Display for Frames {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.frames.iter().try_for_each(|frame| writeln!(f, "{frame}"))
    }
}

impl FromIterator<Frame> for Frames {
    #[inline]
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl<'frames> IntoIterator for &'frames Frames {
    type Item = &'frames Frame;
    type IntoIter = core::slice::Iter<'frames, Frame>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
