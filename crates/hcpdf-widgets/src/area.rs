//! Filled rectangles with optional edge strokes.

use std::io;

use hcpdf_core::Rect;
use hcpdf_render::{Canvas, Color, Segment};

use crate::Element;

/// Stroke width of area edges.
pub const LINE_WIDTH: f32 = 1.0;

bitflags::bitflags! {
    /// Which edges of an [`Area`] are stroked.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        const NONE       = 0b0000;
        const TOP        = 0b1000;
        const RIGHT      = 0b0100;
        const BOTTOM     = 0b0010;
        const LEFT       = 0b0001;
        const HORIZONTAL = Self::TOP.bits() | Self::BOTTOM.bits();
        const VERTICAL   = Self::LEFT.bits() | Self::RIGHT.bits();
        const ALL        = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

/// A rectangle filled with one color, with any subset of its edges stroked in
/// another.
///
/// Its preferred size is one point plus half a stroke width for every stroked
/// edge on that axis, because strokes are centered on the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Area {
    fill: Option<Color>,
    stroke: Option<Color>,
    edges: Edges,
}

impl Area {
    pub const fn new(fill: Option<Color>, stroke: Option<Color>, edges: Edges) -> Self {
        Self {
            fill,
            stroke,
            edges,
        }
    }

    /// Filled, no edges.
    pub const fn filled(fill: Color) -> Self {
        Self::new(Some(fill), None, Edges::NONE)
    }

    /// Filled, with all four edges stroked.
    pub const fn bordered(fill: Color, stroke: Color) -> Self {
        Self::new(Some(fill), Some(stroke), Edges::ALL)
    }

    /// Stroked edges only.
    pub const fn outline(stroke: Color, edges: Edges) -> Self {
        Self::new(None, Some(stroke), edges)
    }

    /// Same colors, different edges.
    #[must_use]
    pub const fn with_edges(self, edges: Edges) -> Self {
        Self { edges, ..self }
    }

    #[inline]
    pub const fn edges(&self) -> Edges {
        self.edges
    }

    fn stroked(&self, edge: Edges) -> bool {
        self.stroke.is_some() && self.edges.contains(edge)
    }

    fn extent(&self, first: Edges, second: Edges) -> f32 {
        let mut size = 1.0;
        for edge in [first, second] {
            if self.stroked(edge) {
                size += 0.5 * LINE_WIDTH;
            }
        }
        size
    }

    fn segments(&self, area: Rect) -> Vec<Segment> {
        let (left, right, bottom, top) = (area.left(), area.right(), area.bottom(), area.top());
        let mut segments = Vec::with_capacity(4);
        if self.edges.contains(Edges::TOP) {
            segments.push(Segment::new(left, top, right, top));
        }
        if self.edges.contains(Edges::RIGHT) {
            segments.push(Segment::new(right, top, right, bottom));
        }
        if self.edges.contains(Edges::BOTTOM) {
            segments.push(Segment::new(right, bottom, left, bottom));
        }
        if self.edges.contains(Edges::LEFT) {
            segments.push(Segment::new(left, bottom, left, top));
        }
        segments
    }
}

impl Element for Area {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(self.extent(Edges::LEFT, Edges::RIGHT))
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(self.extent(Edges::TOP, Edges::BOTTOM))
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        if let Some(fill) = self.fill {
            canvas.set_fill_color(fill)?;
            canvas.fill_rect(area)?;
        }
        let Some(stroke) = self.stroke else {
            return Ok(());
        };
        if self.edges.is_empty() {
            return Ok(());
        }
        canvas.set_stroke_color(stroke)?;
        canvas.set_line_width(LINE_WIDTH)?;
        if self.edges == Edges::ALL {
            canvas.stroke_rect(area)
        } else {
            canvas.stroke_lines(&self.segments(area))
        }
    }
}
