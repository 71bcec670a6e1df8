//! Horizontal and vertical sequences of elements.

use std::fmt;
use std::io;

use hcpdf_core::{BuildError, Rect};
use hcpdf_layout::{Layout, LayoutSpace};
use hcpdf_render::Canvas;

use crate::{Element, max_of, measure_heights, measure_widths};

/// The main axis of a [`SequentialContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The layout space spanned by `area` along this axis.
    pub fn space(self, area: Rect) -> LayoutSpace {
        match self {
            Self::Horizontal => LayoutSpace::new(area.left(), area.right()),
            Self::Vertical => LayoutSpace::new(area.top(), area.bottom()),
        }
    }

    /// `area` restricted to `[low, high]` along this axis.
    pub fn slice(self, area: Rect, low: f32, high: f32) -> Rect {
        match self {
            Self::Horizontal => area.with_horizontal(low, high),
            Self::Vertical => area.with_vertical(low, high),
        }
    }
}

/// Lays children out one after another along an axis.
///
/// The layout distributes the main axis; every child gets the full cross-axis
/// extent of the container.
pub struct SequentialContainer {
    axis: Axis,
    layout: Layout,
    children: Vec<Box<dyn Element>>,
}

impl fmt::Debug for SequentialContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialContainer")
            .field("axis", &self.axis)
            .field("layout", &self.layout)
            .field("children", &self.children.len())
            .finish()
    }
}

impl SequentialContainer {
    pub fn new(axis: Axis, layout: Layout, children: Vec<Box<dyn Element>>) -> Self {
        Self {
            axis,
            layout,
            children,
        }
    }

    pub fn horizontal(layout: Layout, children: Vec<Box<dyn Element>>) -> Self {
        Self::new(Axis::Horizontal, layout, children)
    }

    pub fn vertical(layout: Layout, children: Vec<Box<dyn Element>>) -> Self {
        Self::new(Axis::Vertical, layout, children)
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    fn main_sizes(&self) -> io::Result<Vec<f32>> {
        match self.axis {
            Axis::Horizontal => measure_widths(&self.children),
            Axis::Vertical => measure_heights(&self.children),
        }
    }
}

impl Element for SequentialContainer {
    fn measure_width(&self) -> io::Result<f32> {
        match self.axis {
            Axis::Horizontal => Ok(self.layout.size(&measure_widths(&self.children)?)),
            Axis::Vertical => Ok(max_of(measure_widths(&self.children)?)),
        }
    }

    fn measure_height(&self) -> io::Result<f32> {
        match self.axis {
            Axis::Horizontal => Ok(max_of(measure_heights(&self.children)?)),
            Axis::Vertical => Ok(self.layout.size(&measure_heights(&self.children)?)),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let _guard = hcpdf_core::debug_span!(
            "sequence.paint",
            axis = ?self.axis,
            children = self.children.len()
        )
        .entered();
        let sizes = self.main_sizes()?;
        let mut results = self.layout.apply(self.axis.space(area), &sizes);
        while let Some(result) = results.next_result() {
            let slot = self.axis.slice(area, result.low, result.high);
            self.children[result.index].paint(canvas, slot)?;
        }
        Ok(())
    }
}

fn spaced(
    axis: Axis,
    layout: Result<Layout, BuildError>,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    Ok(SequentialContainer::new(axis, layout?, children))
}

/// Left to right at preferred widths, clipped at the right edge.
pub fn horizontal_flow(children: Vec<Box<dyn Element>>) -> SequentialContainer {
    SequentialContainer::horizontal(Layout::flow(), children)
}

/// Top to bottom at preferred heights, clipped at the bottom edge.
pub fn vertical_flow(children: Vec<Box<dyn Element>>) -> SequentialContainer {
    SequentialContainer::vertical(Layout::flow(), children)
}

/// Equal-width columns.
pub fn horizontal_split(children: Vec<Box<dyn Element>>) -> SequentialContainer {
    SequentialContainer::horizontal(Layout::split(), children)
}

/// Equal-height rows.
pub fn vertical_split(children: Vec<Box<dyn Element>>) -> SequentialContainer {
    SequentialContainer::vertical(Layout::split(), children)
}

/// Preferred widths scaled to fill the width.
pub fn horizontal_stretch(children: Vec<Box<dyn Element>>) -> SequentialContainer {
    SequentialContainer::horizontal(Layout::stretch(), children)
}

/// Preferred heights scaled to fill the height.
pub fn vertical_stretch(children: Vec<Box<dyn Element>>) -> SequentialContainer {
    SequentialContainer::vertical(Layout::stretch(), children)
}

pub fn horizontal_flow_spaced(
    spacing: f32,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    spaced(Axis::Horizontal, Layout::flow_spaced(spacing), children)
}

pub fn vertical_flow_spaced(
    spacing: f32,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    spaced(Axis::Vertical, Layout::flow_spaced(spacing), children)
}

pub fn horizontal_split_spaced(
    spacing: f32,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    spaced(Axis::Horizontal, Layout::split_spaced(spacing), children)
}

pub fn vertical_split_spaced(
    spacing: f32,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    spaced(Axis::Vertical, Layout::split_spaced(spacing), children)
}

pub fn horizontal_stretch_spaced(
    spacing: f32,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    spaced(Axis::Horizontal, Layout::stretch_spaced(spacing), children)
}

pub fn vertical_stretch_spaced(
    spacing: f32,
    children: Vec<Box<dyn Element>>,
) -> Result<SequentialContainer, BuildError> {
    spaced(Axis::Vertical, Layout::stretch_spaced(spacing), children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Broken, Probe};
    use hcpdf_render::RecordingCanvas;

    fn probes(sizes: &[(f32, f32)]) -> (Vec<Probe>, Vec<Box<dyn Element>>) {
        let probes: Vec<Probe> = sizes.iter().map(|&(w, h)| Probe::new(w, h)).collect();
        let boxed = probes.iter().cloned().map(Element::boxed).collect();
        (probes, boxed)
    }

    #[test]
    fn horizontal_measurement() {
        let (_, children) = probes(&[(10.0, 5.0), (20.0, 15.0)]);
        let row = horizontal_flow_spaced(4.0, children).unwrap();
        assert_eq!(row.measure_width().unwrap(), 34.0);
        assert_eq!(row.measure_height().unwrap(), 15.0);
    }

    #[test]
    fn vertical_measurement() {
        let (_, children) = probes(&[(10.0, 5.0), (20.0, 15.0)]);
        let column = vertical_split(children);
        assert_eq!(column.measure_width().unwrap(), 20.0);
        assert_eq!(column.measure_height().unwrap(), 30.0);
    }

    #[test]
    fn horizontal_flow_uses_full_height() {
        let (probes, children) = probes(&[(10.0, 5.0), (20.0, 15.0)]);
        horizontal_flow_spaced(5.0, children)
            .unwrap()
            .paint(&mut RecordingCanvas::new(), Rect::new(100.0, 0.0, 200.0, 50.0))
            .unwrap();
        assert_eq!(probes[0].only(), Some(Rect::new(100.0, 0.0, 10.0, 50.0)));
        assert_eq!(probes[1].only(), Some(Rect::new(115.0, 0.0, 20.0, 50.0)));
    }

    #[test]
    fn vertical_flow_runs_top_down_and_clips() {
        let (probes, children) = probes(&[(1.0, 30.0), (1.0, 30.0), (1.0, 30.0)]);
        vertical_flow(children)
            .paint(&mut RecordingCanvas::new(), Rect::new(0.0, 0.0, 40.0, 50.0))
            .unwrap();
        assert_eq!(probes[0].only(), Some(Rect::new(0.0, 20.0, 40.0, 30.0)));
        assert_eq!(probes[1].only(), Some(Rect::new(0.0, 0.0, 40.0, 20.0)));
        assert!(probes[2].painted().is_empty());
    }

    #[test]
    fn stretch_fills_main_axis() {
        let (probes, children) = probes(&[(10.0, 1.0), (30.0, 1.0)]);
        horizontal_stretch(children)
            .paint(&mut RecordingCanvas::new(), Rect::new(0.0, 0.0, 80.0, 10.0))
            .unwrap();
        assert_eq!(probes[0].only(), Some(Rect::new(0.0, 0.0, 20.0, 10.0)));
        assert_eq!(probes[1].only(), Some(Rect::new(20.0, 0.0, 60.0, 10.0)));
    }

    #[test]
    fn negative_spacing_rejected() {
        assert!(vertical_stretch_spaced(-1.0, Vec::new()).is_err());
        assert!(horizontal_split_spaced(-1.0, Vec::new()).is_err());
    }

    #[test]
    fn measurement_errors_propagate() {
        let row = horizontal_flow(vec![Probe::new(1.0, 1.0).boxed(), Broken.boxed()]);
        assert!(row.measure_width().is_err());
        assert!(
            row.paint(&mut RecordingCanvas::new(), Rect::new(0.0, 0.0, 10.0, 10.0))
                .is_err()
        );
    }
}
