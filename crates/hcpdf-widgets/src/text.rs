//! Text runs.
//!
//! Every text element measures a box from its [`Style`]'s font metrics and
//! paints that box centered in the rectangle it receives, whatever the
//! rectangle's size. Text is never wrapped or clipped; only explicit `'\n'`
//! breaks start a new line.

use std::f32::consts::FRAC_PI_2;
use std::io;

use hcpdf_core::{BuildError, Rect, Transform};
use hcpdf_render::{Canvas, Style};

use crate::Element;
use crate::align::HorizontalAlignment;

/// Line spacing of [`MultilineText`] unless configured otherwise.
pub const DEFAULT_LINE_SPACING: f32 = 1.2;

/// Lower-left corner of a `width x height` box centered in `area`.
fn centered_origin(area: Rect, width: f32, height: f32) -> (f32, f32) {
    (
        area.x + (area.width - width) / 2.0,
        area.y + (area.height - height) / 2.0,
    )
}

// =========================================================================
// Text
// =========================================================================

/// A single line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    text: String,
    style: Style,
}

impl Text {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(text, self.style.clone())
    }

    #[must_use]
    pub fn with_style(&self, style: Style) -> Self {
        Self::new(self.text.clone(), style)
    }
}

impl Element for Text {
    fn measure_width(&self) -> io::Result<f32> {
        self.style.string_width(&self.text)
    }

    fn measure_height(&self) -> io::Result<f32> {
        self.style.height()
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let (x, y) = centered_origin(area, self.measure_width()?, self.measure_height()?);
        canvas.begin_text()?;
        self.style.apply(canvas)?;
        canvas.set_text_matrix(Transform::translation(x, y - self.style.descent()?))?;
        canvas.show_text(&self.text)?;
        canvas.end_text()
    }
}

// =========================================================================
// MultilineText
// =========================================================================

/// Several lines separated by `'\n'`, each aligned within the widest line.
///
/// Trailing empty lines are kept and count towards the height. Consecutive
/// baselines are `line_spacing` line heights apart.
#[derive(Debug, Clone, PartialEq)]
pub struct MultilineText {
    text: String,
    style: Style,
    line_spacing: f32,
    alignment: HorizontalAlignment,
}

impl MultilineText {
    /// Left-aligned lines at [`DEFAULT_LINE_SPACING`].
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            line_spacing: DEFAULT_LINE_SPACING,
            alignment: HorizontalAlignment::Left,
        }
    }

    /// Fails if `line_spacing` is below one or NaN.
    pub fn with_options(
        text: impl Into<String>,
        style: Style,
        line_spacing: f32,
        alignment: HorizontalAlignment,
    ) -> Result<Self, BuildError> {
        Self::new(text, style)
            .with_line_spacing(line_spacing)
            .map(|t| t.with_alignment(alignment))
    }

    pub fn with_line_spacing(mut self, line_spacing: f32) -> Result<Self, BuildError> {
        if line_spacing.is_nan() || line_spacing < 1.0 {
            return Err(BuildError::LineSpacingBelowOne {
                value: line_spacing,
            });
        }
        self.line_spacing = line_spacing;
        Ok(self)
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_style(&self, style: Style) -> Self {
        Self {
            style,
            ..self.clone()
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[inline]
    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    #[inline]
    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

impl Element for MultilineText {
    fn measure_width(&self) -> io::Result<f32> {
        self.lines().try_fold(0.0f32, |width, line| {
            Ok::<f32, io::Error>(width.max(self.style.string_width(line)?))
        })
    }

    fn measure_height(&self) -> io::Result<f32> {
        let count = self.lines().count() as f32;
        Ok(((count - 1.0) * self.line_spacing + 1.0) * self.style.height()?)
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let width = self.measure_width()?;
        let height = self.measure_height()?;
        let line_height = self.style.height()?;
        let (x, y) = centered_origin(area, width, height);

        canvas.begin_text()?;
        self.style.apply(canvas)?;
        let lead = (self.line_spacing - 1.0) * line_height - self.style.descent()?;
        canvas.set_text_matrix(Transform::translation(x, y + height + lead))?;
        for line in self.lines() {
            let offset = self
                .alignment
                .offset(self.style.string_width(line)?, width);
            canvas.move_text(offset, -self.line_spacing * line_height)?;
            canvas.show_text(line)?;
            canvas.move_text(-offset, 0.0)?;
        }
        canvas.end_text()
    }
}

// =========================================================================
// SideText
// =========================================================================

/// A single line rotated a quarter turn counter-clockwise, reading bottom to
/// top. Width and height are those of [`Text`] swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct SideText {
    text: String,
    style: Style,
}

impl SideText {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn style(&self) -> &Style {
        &self.style
    }

    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(text, self.style.clone())
    }

    #[must_use]
    pub fn with_style(&self, style: Style) -> Self {
        Self::new(self.text.clone(), style)
    }
}

impl Element for SideText {
    fn measure_width(&self) -> io::Result<f32> {
        self.style.height()
    }

    fn measure_height(&self) -> io::Result<f32> {
        self.style.string_width(&self.text)
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let width = self.measure_width()?;
        let (x, y) = centered_origin(area, width, self.measure_height()?);
        canvas.begin_text()?;
        self.style.apply(canvas)?;
        let baseline = x + width + self.style.descent()?;
        canvas.set_text_matrix(Transform::rotation(FRAC_PI_2, baseline, y))?;
        canvas.show_text(&self.text)?;
        canvas.end_text()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use hcpdf_render::{CanvasOp, Color, MonospaceMetrics, RecordingCanvas};

    const EPS: f32 = 1e-3;

    // Courier at 10pt: 6pt advance, 10.55pt line height, -1.57pt descent.
    fn courier() -> Style {
        Style::black(Arc::new(MonospaceMetrics::courier()), 10.0).unwrap()
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn matrix(ops: &[CanvasOp]) -> Transform {
        ops.iter()
            .find_map(|op| match op {
                CanvasOp::SetTextMatrix { matrix } => Some(*matrix),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn text_measures_from_metrics() {
        let text = Text::new("Hello", courier());
        assert!(close(text.measure_width().unwrap(), 30.0));
        assert!(close(text.measure_height().unwrap(), 10.55));
    }

    #[test]
    fn text_paints_centered_on_baseline() {
        let mut canvas = RecordingCanvas::new();
        Text::new("Hi", courier())
            .paint(&mut canvas, Rect::new(0.0, 0.0, 100.0, 50.0))
            .unwrap();
        let ops = canvas.ops();
        assert_eq!(ops[0], CanvasOp::BeginText);
        assert_eq!(ops[1], CanvasOp::SetFillColor { color: Color::BLACK });
        assert_eq!(
            ops[2],
            CanvasOp::SetFont {
                font: "Courier".into(),
                size: 10.0
            }
        );
        let m = matrix(ops);
        assert!(close(m.e, 44.0));
        assert!(close(m.f, (50.0 - 10.55) / 2.0 + 1.57));
        assert_eq!(canvas.shown_text(), vec!["Hi"]);
        assert_eq!(canvas.ops().last(), Some(&CanvasOp::EndText));
    }

    #[test]
    fn restyled_copies() {
        let text = Text::new("a", courier());
        let red = text.with_style(text.style().with_color(Color::RED));
        assert_eq!(red.style().color(), Color::RED);
        assert_eq!(red.text(), "a");
        assert_eq!(text.with_text("b").text(), "b");
        assert_eq!(text.with_text("b").style(), text.style());
    }

    #[test]
    fn multiline_keeps_trailing_empty_lines() {
        let text = MultilineText::new("ab\n\nc\n", courier());
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["ab", "", "c", ""]);
        assert!(close(text.measure_width().unwrap(), 12.0));
        assert!(close(
            text.measure_height().unwrap(),
            (3.0 * DEFAULT_LINE_SPACING + 1.0) * 10.55
        ));
    }

    #[test]
    fn single_line_multiline_matches_text_height() {
        let text = MultilineText::with_options("abc", courier(), 2.0, HorizontalAlignment::Center)
            .unwrap();
        assert!(close(text.measure_height().unwrap(), 10.55));
    }

    #[test]
    fn line_spacing_below_one_rejected() {
        assert_eq!(
            MultilineText::new("a", courier()).with_line_spacing(0.5),
            Err(BuildError::LineSpacingBelowOne { value: 0.5 })
        );
        assert!(MultilineText::new("a", courier()).with_line_spacing(f32::NAN).is_err());
        assert!(MultilineText::new("a", courier()).with_line_spacing(1.0).is_ok());
    }

    #[test]
    fn multiline_aligns_each_line() {
        let text = MultilineText::new("abcd\nab", courier())
            .with_alignment(HorizontalAlignment::Right)
            .with_line_spacing(1.0)
            .unwrap();
        let mut canvas = RecordingCanvas::new();
        let area = Rect::new(0.0, 0.0, text.measure_width().unwrap(), 21.1);
        text.paint(&mut canvas, area).unwrap();

        let m = matrix(canvas.ops());
        assert!(close(m.e, 0.0));
        assert!(close(m.f, 21.1 + 1.57));

        let moves: Vec<(f32, f32)> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                CanvasOp::MoveText { dx, dy } => Some((*dx, *dy)),
                _ => None,
            })
            .collect();
        assert_eq!(moves.len(), 4);
        assert!(close(moves[0].0, 0.0) && close(moves[0].1, -10.55));
        assert!(close(moves[2].0, 12.0) && close(moves[2].1, -10.55));
        assert!(close(moves[3].0, -12.0) && close(moves[3].1, 0.0));
        assert_eq!(canvas.shown_text(), vec!["abcd", "ab"]);
    }

    #[test]
    fn side_text_swaps_dimensions_and_rotates() {
        let text = SideText::new("Side", courier());
        assert!(close(text.measure_width().unwrap(), 10.55));
        assert!(close(text.measure_height().unwrap(), 24.0));

        let mut canvas = RecordingCanvas::new();
        text.paint(&mut canvas, Rect::new(0.0, 0.0, 10.55, 24.0)).unwrap();
        let m = matrix(canvas.ops());
        assert!(close(m.a, 0.0) && close(m.b, 1.0));
        assert!(close(m.c, -1.0) && close(m.d, 0.0));
        assert!(close(m.e, 10.55 - 1.57));
        assert!(close(m.f, 0.0));
    }

    #[test]
    fn canvas_errors_propagate() {
        let mut canvas = RecordingCanvas::failing_after(1);
        assert!(
            Text::new("x", courier())
                .paint(&mut canvas, Rect::new(0.0, 0.0, 10.0, 10.0))
                .is_err()
        );
    }
}
