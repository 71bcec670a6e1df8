//! Empty insets around an element.

use std::fmt;
use std::io;

use hcpdf_core::error::non_negative;
use hcpdf_core::{BuildError, Rect, Sides};
use hcpdf_render::Canvas;

use crate::Element;

/// Adds fixed, invisible insets around a child.
///
/// The child is painted into the rectangle shrunk by the insets, or not at all
/// if nothing positive remains on either axis.
pub struct Padding {
    child: Box<dyn Element>,
    insets: Sides,
}

impl fmt::Debug for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Padding")
            .field("insets", &self.insets)
            .finish_non_exhaustive()
    }
}

impl Padding {
    /// Fails if any inset is negative or NaN.
    pub fn new(child: impl Element + 'static, insets: Sides) -> Result<Self, BuildError> {
        non_negative("top inset", insets.top)?;
        non_negative("right inset", insets.right)?;
        non_negative("bottom inset", insets.bottom)?;
        non_negative("left inset", insets.left)?;
        Ok(Self {
            child: child.boxed(),
            insets,
        })
    }

    /// The same inset on every side.
    pub fn all(child: impl Element + 'static, inset: f32) -> Result<Self, BuildError> {
        Self::new(child, Sides::all(inset))
    }

    /// `horizontal` left and right, `vertical` top and bottom.
    pub fn symmetric(
        child: impl Element + 'static,
        horizontal: f32,
        vertical: f32,
    ) -> Result<Self, BuildError> {
        Self::new(child, Sides::symmetric(horizontal, vertical))
    }

    #[inline]
    pub fn insets(&self) -> Sides {
        self.insets
    }
}

impl Element for Padding {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(self.insets.horizontal_sum() + self.child.measure_width()?)
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(self.insets.vertical_sum() + self.child.measure_height()?)
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        match area.inner(self.insets) {
            Some(inner) => self.child.paint(canvas, inner),
            None => {
                hcpdf_core::trace!(?area, "padding: no room for child");
                Ok(())
            }
        }
    }
}
