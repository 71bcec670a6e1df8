//! Overriding the preferred size of an element.

use std::fmt;
use std::io;

use hcpdf_core::error::non_negative;
use hcpdf_core::{BuildError, Rect};
use hcpdf_render::Canvas;

use crate::Element;

/// What a [`SizedBox`] reports for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SizeOverride {
    /// Report the child's own preferred size.
    #[default]
    Element,
    /// Report this value. Positive infinity means "as large as possible".
    Fixed(f32),
}

impl SizeOverride {
    fn validate(self, field: &'static str) -> Result<Self, BuildError> {
        match self {
            Self::Element => Ok(self),
            Self::Fixed(value) => non_negative(field, value).map(Self::Fixed),
        }
    }

    fn resolve(self, measure: impl FnOnce() -> io::Result<f32>) -> io::Result<f32> {
        match self {
            Self::Element => measure(),
            Self::Fixed(value) => Ok(value),
        }
    }
}

/// Reports a different preferred size than its child.
///
/// Only measurement changes: the child is painted into exactly the rectangle
/// this element receives.
pub struct SizedBox {
    child: Box<dyn Element>,
    width: SizeOverride,
    height: SizeOverride,
}

impl fmt::Debug for SizedBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedBox")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl SizedBox {
    /// Fails if a fixed size is negative or NaN.
    pub fn new(
        child: impl Element + 'static,
        width: SizeOverride,
        height: SizeOverride,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            child: child.boxed(),
            width: width.validate("width")?,
            height: height.validate("height")?,
        })
    }

    pub fn with_width(child: impl Element + 'static, width: f32) -> Result<Self, BuildError> {
        Self::new(child, SizeOverride::Fixed(width), SizeOverride::Element)
    }

    pub fn with_height(child: impl Element + 'static, height: f32) -> Result<Self, BuildError> {
        Self::new(child, SizeOverride::Element, SizeOverride::Fixed(height))
    }

    pub fn with_size(
        child: impl Element + 'static,
        width: f32,
        height: f32,
    ) -> Result<Self, BuildError> {
        Self::new(child, SizeOverride::Fixed(width), SizeOverride::Fixed(height))
    }

    pub fn infinite_width(child: impl Element + 'static) -> Self {
        Self::unchecked(child, SizeOverride::Fixed(f32::INFINITY), SizeOverride::Element)
    }

    pub fn infinite_height(child: impl Element + 'static) -> Self {
        Self::unchecked(child, SizeOverride::Element, SizeOverride::Fixed(f32::INFINITY))
    }

    pub fn infinite_size(child: impl Element + 'static) -> Self {
        Self::unchecked(
            child,
            SizeOverride::Fixed(f32::INFINITY),
            SizeOverride::Fixed(f32::INFINITY),
        )
    }

    fn unchecked(child: impl Element + 'static, width: SizeOverride, height: SizeOverride) -> Self {
        Self {
            child: child.boxed(),
            width,
            height,
        }
    }
}

impl Element for SizedBox {
    fn measure_width(&self) -> io::Result<f32> {
        self.width.resolve(|| self.child.measure_width())
    }

    fn measure_height(&self) -> io::Result<f32> {
        self.height.resolve(|| self.child.measure_height())
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        self.child.paint(canvas, area)
    }
}
