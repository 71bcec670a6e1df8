//! A stroked frame around an element.

use std::fmt;
use std::io;

use hcpdf_core::error::positive;
use hcpdf_core::{BuildError, Rect, Sides};
use hcpdf_render::{Canvas, Color};

use crate::Element;

/// Default stroke width of a [`LineBorder`].
pub const DEFAULT_WIDTH: f32 = 1.0;

/// Strokes a line of uniform width around a child.
///
/// The stroke sits entirely inside the given rectangle and the child gets the
/// interior. When the rectangle is too small to leave an interior, the whole
/// rectangle is filled with the border color instead.
pub struct LineBorder {
    child: Box<dyn Element>,
    width: f32,
    color: Color,
}

impl fmt::Debug for LineBorder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBorder")
            .field("width", &self.width)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl LineBorder {
    /// Fails unless `width > 0`.
    pub fn new(child: impl Element + 'static, width: f32, color: Color) -> Result<Self, BuildError> {
        Ok(Self {
            child: child.boxed(),
            width: positive("border width", width)?,
            color,
        })
    }

    /// One point wide, black.
    pub fn thin(child: impl Element + 'static) -> Self {
        Self {
            child: child.boxed(),
            width: DEFAULT_WIDTH,
            color: Color::BLACK,
        }
    }

    /// One point wide in `color`.
    pub fn colored(child: impl Element + 'static, color: Color) -> Self {
        Self {
            child: child.boxed(),
            width: DEFAULT_WIDTH,
            color,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Element for LineBorder {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(2.0 * self.width + self.child.measure_width()?)
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(2.0 * self.width + self.child.measure_height()?)
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let Some(interior) = area.inner(Sides::all(self.width)) else {
            hcpdf_core::trace!(?area, "line border: no interior, filling");
            canvas.set_fill_color(self.color)?;
            return canvas.fill_rect(area);
        };
        // Strokes are centered on the path, so inset the path by half a width.
        let half = self.width / 2.0;
        canvas.set_stroke_color(self.color)?;
        canvas.set_line_width(self.width)?;
        canvas.stroke_rect(Rect::new(
            area.x + half,
            area.y + half,
            area.width - self.width,
            area.height - self.width,
        ))?;
        self.child.paint(canvas, interior)
    }
}
