//! A canvas that records operations instead of drawing them.

use std::io;

use hcpdf_core::{Rect, Transform};
use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Segment};
use crate::color::Color;
use crate::font::FontMetrics;

/// One recorded [`Canvas`] call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasOp {
    SetFillColor { color: Color },
    SetStrokeColor { color: Color },
    SetLineWidth { width: f32 },
    FillRect { rect: Rect },
    StrokeRect { rect: Rect },
    StrokeLines { segments: Vec<Segment> },
    BeginText,
    SetFont { font: String, size: f32 },
    SetTextMatrix { matrix: Transform },
    MoveText { dx: f32, dy: f32 },
    ShowText { text: String },
    EndText,
    ConcatTransform { matrix: Transform },
    SaveState,
    RestoreState,
}

/// Records every call as a [`CanvasOp`].
///
/// Optionally fails once a given number of operations has been recorded,
/// which lets tests check that errors propagate out of a paint traversal.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    fail_after: Option<usize>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas that accepts `count` operations and fails on every call
    /// after that.
    pub fn failing_after(count: usize) -> Self {
        Self {
            ops: Vec::new(),
            fail_after: Some(count),
        }
    }

    #[inline]
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<CanvasOp> {
        self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Rectangles passed to [`Canvas::fill_rect`], in order.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::FillRect { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Text passed to [`Canvas::show_text`], in order.
    pub fn shown_text(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                CanvasOp::ShowText { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, op: CanvasOp) -> io::Result<()> {
        if self.fail_after.is_some_and(|limit| self.ops.len() >= limit) {
            return Err(io::Error::other("recording canvas: injected failure"));
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn set_fill_color(&mut self, color: Color) -> io::Result<()> {
        self.record(CanvasOp::SetFillColor { color })
    }

    fn set_stroke_color(&mut self, color: Color) -> io::Result<()> {
        self.record(CanvasOp::SetStrokeColor { color })
    }

    fn set_line_width(&mut self, width: f32) -> io::Result<()> {
        self.record(CanvasOp::SetLineWidth { width })
    }

    fn fill_rect(&mut self, rect: Rect) -> io::Result<()> {
        self.record(CanvasOp::FillRect { rect })
    }

    fn stroke_rect(&mut self, rect: Rect) -> io::Result<()> {
        self.record(CanvasOp::StrokeRect { rect })
    }

    fn stroke_lines(&mut self, segments: &[Segment]) -> io::Result<()> {
        self.record(CanvasOp::StrokeLines {
            segments: segments.to_vec(),
        })
    }

    fn begin_text(&mut self) -> io::Result<()> {
        self.record(CanvasOp::BeginText)
    }

    fn set_font(&mut self, font: &dyn FontMetrics, size: f32) -> io::Result<()> {
        self.record(CanvasOp::SetFont {
            font: font.resource_name().to_string(),
            size,
        })
    }

    fn set_text_matrix(&mut self, matrix: Transform) -> io::Result<()> {
        self.record(CanvasOp::SetTextMatrix { matrix })
    }

    fn move_text(&mut self, dx: f32, dy: f32) -> io::Result<()> {
        self.record(CanvasOp::MoveText { dx, dy })
    }

    fn show_text(&mut self, text: &str) -> io::Result<()> {
        self.record(CanvasOp::ShowText {
            text: text.to_string(),
        })
    }

    fn end_text(&mut self) -> io::Result<()> {
        self.record(CanvasOp::EndText)
    }

    fn concat_transform(&mut self, matrix: Transform) -> io::Result<()> {
        self.record(CanvasOp::ConcatTransform { matrix })
    }

    fn save_state(&mut self) -> io::Result<()> {
        self.record(CanvasOp::SaveState)
    }

    fn restore_state(&mut self) -> io::Result<()> {
        self.record(CanvasOp::RestoreState)
    }
}
