#![forbid(unsafe_code)]

//! Elements and containers.
//!
//! Every visual node implements [`Element`]. A tree is built once, top-down,
//! and is immutable afterwards. Painting follows a two-step protocol:
//!
//! 1. `measure_width` / `measure_height` report the preferred size, computed
//!    bottom-up from the children.
//! 2. `paint` receives the rectangle actually available, which may be smaller
//!    or larger than the preferred size. Containers divide it among their
//!    children with the layouts from `hcpdf-layout`.
//!
//! Elements hold no per-paint state, so one tree may be painted any number of
//! times, including concurrently from several threads with separate canvases.

pub mod align;
pub mod area;
pub mod border_container;
pub mod empty;
pub mod grid;
pub mod line_border;
pub mod padding;
pub mod page;
pub mod sequential;
pub mod sized;
pub mod stack;
pub mod table;
pub mod text;

#[cfg(test)]
pub(crate) mod testing;

use std::io;
use std::sync::Arc;

use hcpdf_core::Rect;
use hcpdf_render::Canvas;

pub use align::{Aligned, Alignment, HorizontalAlignment, VerticalAlignment};
pub use area::{Area, Edges};
pub use border_container::{BorderContainer, BorderContainerBuilder};
pub use empty::Empty;
pub use grid::GridContainer;
pub use line_border::LineBorder;
pub use padding::Padding;
pub use page::{Orientation, Page, PageSize};
pub use sequential::{Axis, SequentialContainer};
pub use sized::{SizeOverride, SizedBox};
pub use stack::Stack;
pub use table::{
    DEFAULT_SPAN_POLICY, Span, SpanPolicy, TableContainer, TableContainerBuilder, TablePosition,
};
pub use text::{DEFAULT_LINE_SPACING, MultilineText, SideText, Text};

/// A rectangular visual node.
///
/// Measurement and painting may fail with the I/O errors of the font metrics
/// or the canvas; implementations propagate them unchanged. Painting into a
/// rectangle too small for the element is not an error: content that does not
/// fit is clipped or skipped.
pub trait Element: Send + Sync {
    /// Preferred width in points.
    fn measure_width(&self) -> io::Result<f32>;

    /// Preferred height in points.
    fn measure_height(&self) -> io::Result<f32>;

    /// Paint into `area`.
    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()>;

    /// Move into a `Box<dyn Element>`.
    fn boxed(self) -> Box<dyn Element>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn measure_width(&self) -> io::Result<f32> {
        (**self).measure_width()
    }

    fn measure_height(&self) -> io::Result<f32> {
        (**self).measure_height()
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        (**self).paint(canvas, area)
    }
}

impl<E: Element + ?Sized> Element for Arc<E> {
    fn measure_width(&self) -> io::Result<f32> {
        (**self).measure_width()
    }

    fn measure_height(&self) -> io::Result<f32> {
        (**self).measure_height()
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        (**self).paint(canvas, area)
    }
}

/// Preferred widths of `elements`, in order.
pub(crate) fn measure_widths<E: Element>(elements: &[E]) -> io::Result<Vec<f32>> {
    elements.iter().map(Element::measure_width).collect()
}

/// Preferred heights of `elements`, in order.
pub(crate) fn measure_heights<E: Element>(elements: &[E]) -> io::Result<Vec<f32>> {
    elements.iter().map(Element::measure_height).collect()
}

/// Largest value, or zero when empty.
pub(crate) fn max_of(values: impl IntoIterator<Item = f32>) -> f32 {
    values.into_iter().fold(0.0, f32::max)
}
