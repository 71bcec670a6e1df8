#![forbid(unsafe_code)]

//! Render: paint sinks, colors, and font metrics.
//!
//! # Role in hcpdf
//! Elements never talk to a PDF writer directly. They paint through the
//! [`Canvas`] trait, and they measure text through [`FontMetrics`]. This crate
//! owns both seams together with two concrete sinks:
//!
//! - [`ContentStream`] writes PDF content-stream operators to any `io::Write`.
//! - [`RecordingCanvas`] records [`CanvasOp`]s for inspection in tests.
//!
//! Every sink and metrics call returns `io::Result`; callers propagate failures
//! unchanged.

pub mod canvas;
pub mod color;
pub mod content_stream;
pub mod font;
pub mod recording;

pub use canvas::{Canvas, Segment};
pub use color::Color;
pub use content_stream::ContentStream;
pub use font::{FontMetrics, MonospaceMetrics, Style};
pub use recording::{CanvasOp, RecordingCanvas};
