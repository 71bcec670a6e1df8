//! The paint sink every element draws through.

use std::io;

use hcpdf_core::{Rect, Transform};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::font::FontMetrics;

/// A straight line from `(x1, y1)` to `(x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Segment {
    #[inline]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// A page content sink.
///
/// Coordinates are in points with `y` increasing upward. The operations map
/// one-to-one onto PDF content-stream operators, so a sink may stream them
/// straight to a writer. Text operations are only valid between
/// [`begin_text`](Canvas::begin_text) and [`end_text`](Canvas::end_text).
///
/// Each method may fail with an I/O error; elements propagate it unchanged
/// and do not attempt to undo partial output.
pub trait Canvas {
    /// Color for subsequent fills and glyphs (`rg`).
    fn set_fill_color(&mut self, color: Color) -> io::Result<()>;

    /// Color for subsequent strokes (`RG`).
    fn set_stroke_color(&mut self, color: Color) -> io::Result<()>;

    /// Stroke width in points (`w`).
    fn set_line_width(&mut self, width: f32) -> io::Result<()>;

    /// Fill `rect` with the fill color.
    fn fill_rect(&mut self, rect: Rect) -> io::Result<()>;

    /// Stroke the outline of `rect` with the stroke color and width.
    fn stroke_rect(&mut self, rect: Rect) -> io::Result<()>;

    /// Stroke all `segments` as one path.
    fn stroke_lines(&mut self, segments: &[Segment]) -> io::Result<()>;

    /// Open a text object (`BT`). Resets the text matrix to identity.
    fn begin_text(&mut self) -> io::Result<()>;

    /// Select a font and size for subsequent text (`Tf`).
    fn set_font(&mut self, font: &dyn FontMetrics, size: f32) -> io::Result<()>;

    /// Replace the text matrix and the line matrix (`Tm`).
    fn set_text_matrix(&mut self, matrix: Transform) -> io::Result<()>;

    /// Move to the start of the next line, offset from the current line
    /// start (`Td`).
    fn move_text(&mut self, dx: f32, dy: f32) -> io::Result<()>;

    /// Show a glyph run at the current text position (`Tj`).
    fn show_text(&mut self, text: &str) -> io::Result<()>;

    /// Close the text object (`ET`).
    fn end_text(&mut self) -> io::Result<()>;

    /// Concatenate `matrix` onto the current transformation matrix (`cm`).
    fn concat_transform(&mut self, matrix: Transform) -> io::Result<()>;

    /// Push the graphics state (`q`).
    fn save_state(&mut self) -> io::Result<()>;

    /// Pop the graphics state (`Q`).
    fn restore_state(&mut self) -> io::Result<()>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn set_fill_color(&mut self, color: Color) -> io::Result<()> {
        (**self).set_fill_color(color)
    }

    fn set_stroke_color(&mut self, color: Color) -> io::Result<()> {
        (**self).set_stroke_color(color)
    }

    fn set_line_width(&mut self, width: f32) -> io::Result<()> {
        (**self).set_line_width(width)
    }

    fn fill_rect(&mut self, rect: Rect) -> io::Result<()> {
        (**self).fill_rect(rect)
    }

    fn stroke_rect(&mut self, rect: Rect) -> io::Result<()> {
        (**self).stroke_rect(rect)
    }

    fn stroke_lines(&mut self, segments: &[Segment]) -> io::Result<()> {
        (**self).stroke_lines(segments)
    }

    fn begin_text(&mut self) -> io::Result<()> {
        (**self).begin_text()
    }

    fn set_font(&mut self, font: &dyn FontMetrics, size: f32) -> io::Result<()> {
        (**self).set_font(font, size)
    }

    fn set_text_matrix(&mut self, matrix: Transform) -> io::Result<()> {
        (**self).set_text_matrix(matrix)
    }

    fn move_text(&mut self, dx: f32, dy: f32) -> io::Result<()> {
        (**self).move_text(dx, dy)
    }

    fn show_text(&mut self, text: &str) -> io::Result<()> {
        (**self).show_text(text)
    }

    fn end_text(&mut self) -> io::Result<()> {
        (**self).end_text()
    }

    fn concat_transform(&mut self, matrix: Transform) -> io::Result<()> {
        (**self).concat_transform(matrix)
    }

    fn save_state(&mut self) -> io::Result<()> {
        (**self).save_state()
    }

    fn restore_state(&mut self) -> io::Result<()> {
        (**self).restore_state()
    }
}
