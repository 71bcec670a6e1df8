//! The element that paints nothing.

use std::io;

use hcpdf_core::Rect;
use hcpdf_render::Canvas;

use crate::Element;

/// Zero-sized and invisible. Useful as a placeholder in grids and as filler
/// between sized elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

impl Element for Empty {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(0.0)
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(0.0)
    }

    fn paint(&self, _canvas: &mut dyn Canvas, _area: Rect) -> io::Result<()> {
        Ok(())
    }
}
