#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page space.
///
/// Uses PDF user-space coordinates: the origin is the lower-left corner of the
/// page and `y` increases upward. `x`/`y` locate the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Bottom edge.
    pub y: f32,
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its lower-left corner and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Create a rectangle from its four edges.
    ///
    /// The edges may be given in either order; the result is normalized so
    /// that width and height are never negative.
    pub fn from_edges(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        let x = left.min(right);
        let y = bottom.min(top);
        Self::new(x, y, (right - left).abs(), (top - bottom).abs())
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Bottom edge (alias for y).
    #[inline]
    pub const fn bottom(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Check if the rectangle has no positive area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Replace the horizontal extent, keeping the vertical one.
    #[inline]
    pub fn with_horizontal(&self, left: f32, right: f32) -> Rect {
        Rect::from_edges(left, self.bottom(), right, self.top())
    }

    /// Replace the vertical extent, keeping the horizontal one.
    #[inline]
    pub fn with_vertical(&self, bottom: f32, top: f32) -> Rect {
        Rect::from_edges(self.left(), bottom, self.right(), top)
    }

    /// Shrink by the given insets.
    ///
    /// Returns `None` when either resulting dimension is not positive.
    pub fn inner(&self, insets: Sides) -> Option<Rect> {
        let width = self.width - insets.horizontal_sum();
        let height = self.height - insets.vertical_sum();
        if width > 0.0 && height > 0.0 {
            Some(Rect::new(
                self.x + insets.left,
                self.y + insets.bottom,
                width,
                height,
            ))
        } else {
            None
        }
    }
}

/// Insets for padding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sides {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: f32) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }

    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: f32) -> Self {
        Self {
            top: 0.0,
            right: val,
            bottom: 0.0,
            left: val,
        }
    }

    /// Create new sides with vertical values only.
    pub const fn vertical(val: f32) -> Self {
        Self {
            top: val,
            right: 0.0,
            bottom: val,
            left: 0.0,
        }
    }

    /// Horizontal and vertical values at once.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create new sides with specific values.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    #[inline]
    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// A 2x3 affine transform `[a b c d e f]` in PDF matrix order.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// Pure translation.
    pub const fn translation(x: f32, y: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    /// Counter-clockwise rotation by `angle` radians, then translation.
    pub fn rotation(angle: f32, x: f32, y: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin, -sin, cos, x, y)
    }

    /// Apply to a point.
    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}
