//! Resettable cursor over the output of a layout.
//!
//! A [`LayoutResults`] starts *before* the first result. The usual loop is
//!
//! ```
//! # use hcpdf_layout::{Layout, LayoutSpace};
//! let mut results = Layout::flow().apply(LayoutSpace::new(0.0, 100.0), &[10.0, 20.0]);
//! while results.has_next() {
//!     results.advance()?;
//!     let (index, low, high) = (results.index()?, results.low()?, results.high()?);
//!     # let _ = (index, low, high);
//! }
//! # Ok::<(), hcpdf_layout::LayoutStateError>(())
//! ```
//!
//! or, equivalently, `while let Some(result) = results.next_result()`.
//! [`LayoutResults::reset`] rewinds to the initial position in O(1); grid and
//! table containers replay the same cursor once per row.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::space::LayoutSpace;

/// The interval assigned to one element.
///
/// `low <= high` regardless of the direction of the layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub index: usize,
    pub low: f32,
    pub high: f32,
}

impl LayoutResult {
    pub fn new(index: usize, a: f32, b: f32) -> Self {
        Self {
            index,
            low: a.min(b),
            high: a.max(b),
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.high - self.low
    }
}

/// Misuse of a [`LayoutResults`] cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStateError {
    /// No result is active: the cursor was just created or reset, or the
    /// last advance failed.
    NoCurrent,
    /// `advance` was called with no results left.
    Exhausted,
}

impl fmt::Display for LayoutStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCurrent => write!(f, "no layout result is active"),
            Self::Exhausted => write!(f, "no more layout results"),
        }
    }
}

impl std::error::Error for LayoutStateError {}

/// Whether an element that overruns the space is clipped and ends iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Overflow {
    /// Clip the overrunning element to the remaining length and stop.
    Clip,
    /// Sizes were precomputed to fit; emit all of them.
    Emit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cursor {
    BeforeFirst,
    At(LayoutResult),
    Exhausted,
}

/// Lazy, restartable sequence of [`LayoutResult`]s, lowest index first.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResults {
    space: LayoutSpace,
    spacing: f32,
    sizes: Vec<f32>,
    overflow: Overflow,
    cursor: Cursor,
    next_index: usize,
    consumed: f32,
}

impl LayoutResults {
    /// A sequence with no results.
    pub fn empty(space: LayoutSpace) -> Self {
        Self::new(space, 0.0, Vec::new(), Overflow::Emit)
    }

    pub(crate) fn new(space: LayoutSpace, spacing: f32, sizes: Vec<f32>, overflow: Overflow) -> Self {
        Self {
            space,
            spacing,
            sizes,
            overflow,
            cursor: Cursor::BeforeFirst,
            next_index: 0,
            consumed: 0.0,
        }
    }

    /// The space these results were computed for.
    #[inline]
    pub fn space(&self) -> LayoutSpace {
        self.space
    }

    /// Check whether another result is available.
    pub fn has_next(&self) -> bool {
        if self.next_index >= self.sizes.len() {
            return false;
        }
        match self.overflow {
            Overflow::Clip => self.consumed < self.space.length(),
            Overflow::Emit => true,
        }
    }

    /// Move to the next result.
    pub fn advance(&mut self) -> Result<(), LayoutStateError> {
        if !self.has_next() {
            self.cursor = Cursor::Exhausted;
            return Err(LayoutStateError::Exhausted);
        }
        let index = self.next_index;
        let mut size = self.sizes[index];
        if self.overflow == Overflow::Clip && self.consumed + size >= self.space.length() {
            size = self.space.length() - self.consumed;
        }
        let start = self.space.at(self.consumed);
        let end = self.space.at(self.consumed + size);
        self.cursor = Cursor::At(LayoutResult::new(index, start, end));
        self.consumed += size + self.spacing;
        self.next_index += 1;
        Ok(())
    }

    /// Rewind to the position before the first result.
    pub fn reset(&mut self) {
        self.cursor = Cursor::BeforeFirst;
        self.next_index = 0;
        self.consumed = 0.0;
    }

    /// The active result.
    pub fn current(&self) -> Result<LayoutResult, LayoutStateError> {
        match self.cursor {
            Cursor::At(result) => Ok(result),
            Cursor::BeforeFirst | Cursor::Exhausted => Err(LayoutStateError::NoCurrent),
        }
    }

    /// Index of the element the active result belongs to.
    pub fn index(&self) -> Result<usize, LayoutStateError> {
        self.current().map(|r| r.index)
    }

    /// Smaller end point of the active result.
    pub fn low(&self) -> Result<f32, LayoutStateError> {
        self.current().map(|r| r.low)
    }

    /// Larger end point of the active result.
    pub fn high(&self) -> Result<f32, LayoutStateError> {
        self.current().map(|r| r.high)
    }

    /// Advance and return the new active result, or `None` at the end.
    pub fn next_result(&mut self) -> Option<LayoutResult> {
        if !self.has_next() {
            return None;
        }
        self.advance().ok()?;
        self.current().ok()
    }

    /// Reset, then collect every result. Leaves the cursor at the last result.
    pub fn replay(&mut self) -> Vec<LayoutResult> {
        self.reset();
        let mut out = Vec::with_capacity(self.sizes.len());
        while let Some(result) = self.next_result() {
            out.push(result);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow(space: LayoutSpace, sizes: &[f32]) -> LayoutResults {
        LayoutResults::new(space, 0.0, sizes.to_vec(), Overflow::Clip)
    }

    #[test]
    fn starts_before_first() {
        let results = flow(LayoutSpace::new(0.0, 10.0), &[1.0]);
        assert_eq!(results.index(), Err(LayoutStateError::NoCurrent));
        assert_eq!(results.low(), Err(LayoutStateError::NoCurrent));
        assert_eq!(results.high(), Err(LayoutStateError::NoCurrent));
    }

    #[test]
    fn advance_past_end_is_error() {
        let mut results = flow(LayoutSpace::new(0.0, 10.0), &[1.0]);
        results.advance().unwrap();
        assert_eq!(results.index(), Ok(0));
        assert!(!results.has_next());
        assert_eq!(results.advance(), Err(LayoutStateError::Exhausted));
        assert_eq!(results.current(), Err(LayoutStateError::NoCurrent));
    }

    #[test]
    fn reset_rewinds() {
        let mut results = flow(LayoutSpace::new(0.0, 10.0), &[2.0, 3.0]);
        results.advance().unwrap();
        results.advance().unwrap();
        results.reset();
        assert_eq!(results.current(), Err(LayoutStateError::NoCurrent));
        assert!(results.has_next());
        results.advance().unwrap();
        assert_eq!(results.current(), Ok(LayoutResult::new(0, 0.0, 2.0)));
    }

    #[test]
    fn descending_results_are_normalized() {
        let mut results = flow(LayoutSpace::new(10.0, 0.0), &[4.0]);
        let r = results.next_result().unwrap();
        assert_eq!(r.low, 6.0);
        assert_eq!(r.high, 10.0);
        assert_eq!(r.length(), 4.0);
    }

    #[test]
    fn empty_has_nothing() {
        let mut results = LayoutResults::empty(LayoutSpace::new(0.0, 10.0));
        assert!(!results.has_next());
        assert!(results.next_result().is_none());
        assert_eq!(results.advance(), Err(LayoutStateError::Exhausted));
        results.reset();
        assert!(results.replay().is_empty());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            LayoutStateError::NoCurrent.to_string(),
            "no layout result is active"
        );
        assert_eq!(
            LayoutStateError::Exhausted.to_string(),
            "no more layout results"
        );
    }
}
