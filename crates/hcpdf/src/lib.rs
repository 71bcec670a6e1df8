#![forbid(unsafe_code)]

//! hcpdf public facade crate.
//!
//! Re-exports the element tree, layouts, and paint sinks of the internal
//! crates and adds the glue to turn a tree into page content:
//!
//! ```
//! use hcpdf::prelude::*;
//!
//! let body = Padding::all(Area::bordered(Color::LIGHT_GRAY, Color::BLACK), 36.0)?;
//! let bytes = hcpdf::render_page(&Page::portrait(PageSize::A4), &body, Vec::new())?;
//! assert!(bytes.ends_with(b"re S\n"));
//! # Ok::<(), hcpdf::Error>(())
//! ```

use std::fmt;
use std::io::Write;

// --- Core re-exports -------------------------------------------------------

pub use hcpdf_core::{BuildError, Rect, Sides, Transform, units};

// --- Layout re-exports -----------------------------------------------------

pub use hcpdf_layout::{
    Layout, LayoutKind, LayoutResult, LayoutResults, LayoutSpace, LayoutStateError,
};

// --- Render re-exports -----------------------------------------------------

pub use hcpdf_render::{
    Canvas, CanvasOp, Color, ContentStream, FontMetrics, MonospaceMetrics, RecordingCanvas,
    Segment, Style,
};

// --- Widget re-exports -----------------------------------------------------

pub use hcpdf_widgets::sequential::{
    horizontal_flow, horizontal_flow_spaced, horizontal_split, horizontal_split_spaced,
    horizontal_stretch, horizontal_stretch_spaced, vertical_flow, vertical_flow_spaced,
    vertical_split, vertical_split_spaced, vertical_stretch, vertical_stretch_spaced,
};
pub use hcpdf_widgets::{
    Aligned, Alignment, Area, Axis, BorderContainer, BorderContainerBuilder, DEFAULT_LINE_SPACING,
    DEFAULT_SPAN_POLICY, Edges, Element, Empty, GridContainer, HorizontalAlignment, LineBorder,
    MultilineText, Orientation, Padding, Page, PageSize, SequentialContainer, SideText,
    SizeOverride, SizedBox, Span, SpanPolicy, Stack, TableContainer, TableContainerBuilder,
    TablePosition, Text, VerticalAlignment,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for hcpdf documents.
#[derive(Debug)]
pub enum Error {
    /// Font metrics or the paint sink failed.
    Io(std::io::Error),
    /// An element or layout was constructed with invalid arguments.
    Build(BuildError),
    /// Layout results were read out of order.
    Layout(LayoutStateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Build(err) => write!(f, "invalid argument: {err}"),
            Self::Layout(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Build(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        Self::Build(err)
    }
}

impl From<LayoutStateError> for Error {
    fn from(err: LayoutStateError) -> Self {
        Self::Layout(err)
    }
}

/// Standard result type for hcpdf APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Painting -------------------------------------------------------------

/// Paint `element` onto `page` and write the resulting content stream to
/// `writer`, which is returned once flushed.
pub fn render_page<W: Write>(page: &Page, element: &dyn Element, writer: W) -> Result<W> {
    let mut stream = ContentStream::new(writer);
    page.paint(element, &mut stream)?;
    hcpdf_core::debug!(operations = stream.operations(), "page rendered");
    Ok(stream.into_inner()?)
}

/// Preferred `(width, height)` of `element`.
pub fn measure(element: &dyn Element) -> Result<(f32, f32)> {
    Ok((element.measure_width()?, element.measure_height()?))
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Aligned, Alignment, Area, BorderContainer, Color, Edges, Element, Empty, Error,
        GridContainer, HorizontalAlignment, Layout, LineBorder, MonospaceMetrics, MultilineText,
        Orientation, Padding, Page, PageSize, Rect, Result, SequentialContainer, SideText, Sides,
        SizedBox, SpanPolicy, Stack, Style, TableContainer, Text, VerticalAlignment,
    };

    pub use crate::{core, layout, render, widgets};
}

pub use hcpdf_core as core;
pub use hcpdf_layout as layout;
pub use hcpdf_render as render;
pub use hcpdf_widgets as widgets;
