//! Directed one-dimensional spaces.

use serde::{Deserialize, Serialize};

/// The directed interval a layout distributes among its elements.
///
/// Layout starts at `start` and works towards `end`; `start` may be greater
/// than `end`. Vertical layouts in page space run from the top edge down to
/// the bottom edge, so their spaces are descending.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutSpace {
    start: f32,
    end: f32,
}

impl LayoutSpace {
    #[inline]
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> f32 {
        self.end
    }

    /// `-1`, `0` or `1`.
    ///
    /// Zero only for the degenerate space where `start == end`; otherwise
    /// `start + direction * length == end`.
    #[inline]
    pub fn direction(&self) -> f32 {
        let delta = self.end - self.start;
        if delta > 0.0 {
            1.0
        } else if delta < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Always `>= 0`.
    #[inline]
    pub fn length(&self) -> f32 {
        (self.end - self.start).abs()
    }

    /// The same interval traversed the other way round.
    #[inline]
    pub const fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Coordinate at `offset` from the start, in the space's direction.
    #[inline]
    pub fn at(&self, offset: f32) -> f32 {
        self.start + self.direction() * offset
    }
}
