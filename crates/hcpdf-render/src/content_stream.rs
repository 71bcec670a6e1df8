//! PDF content-stream emission.
//!
//! [`ContentStream`] turns [`Canvas`] calls into the textual operators of a
//! PDF page content stream. It does not build a document: the surrounding
//! application wraps the bytes in a stream object and registers the fonts
//! named by [`FontMetrics::resource_name`] in the page resources.
//!
//! # Usage
//!
//! ```
//! use hcpdf_core::Rect;
//! use hcpdf_render::{Canvas, Color, ContentStream};
//!
//! let mut stream = ContentStream::new(Vec::new());
//! stream.set_fill_color(Color::RED)?;
//! stream.fill_rect(Rect::new(10.0, 20.0, 30.0, 40.0))?;
//! let bytes = stream.into_inner()?;
//! assert_eq!(bytes, b"1 0 0 rg\n10 20 30 40 re f\n");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, BufWriter, Write};

use hcpdf_core::{Rect, Transform};

use crate::canvas::{Canvas, Segment};
use crate::color::Color;
use crate::font::FontMetrics;

/// Size of the internal write buffer (16KB).
const BUFFER_CAPACITY: usize = 16 * 1024;

/// Decimal places kept for coordinates and color components.
const PRECISION: f64 = 10_000.0;

/// A [`Canvas`] that writes PDF operators to `W`, one per line.
///
/// Non-finite numbers cannot be expressed in a content stream; operations
/// carrying one fail with [`io::ErrorKind::InvalidInput`] before anything is
/// written for that operation.
pub struct ContentStream<W: Write> {
    writer: BufWriter<W>,
    operations: usize,
}

impl<W: Write> ContentStream<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(BUFFER_CAPACITY, writer),
            operations: 0,
        }
    }

    /// Number of operators written so far.
    #[inline]
    pub fn operations(&self) -> usize {
        self.operations
    }

    /// Flush the buffer to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|err| err.into_error())
    }

    fn emit(&mut self, operands: &[f32], operator: &str) -> io::Result<()> {
        let mut line = String::with_capacity(operands.len() * 8 + operator.len() + 1);
        for &value in operands {
            line.push_str(&format_number(value)?);
            line.push(' ');
        }
        line.push_str(operator);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.operations += 1;
        Ok(())
    }

    fn emit_color(&mut self, color: Color, operator: &str) -> io::Result<()> {
        self.emit(&color.components(), operator)
    }

    fn emit_matrix(&mut self, m: Transform, operator: &str) -> io::Result<()> {
        self.emit(&[m.a, m.b, m.c, m.d, m.e, m.f], operator)
    }
}

impl<W: Write> Canvas for ContentStream<W> {
    fn set_fill_color(&mut self, color: Color) -> io::Result<()> {
        self.emit_color(color, "rg")
    }

    fn set_stroke_color(&mut self, color: Color) -> io::Result<()> {
        self.emit_color(color, "RG")
    }

    fn set_line_width(&mut self, width: f32) -> io::Result<()> {
        self.emit(&[width], "w")
    }

    fn fill_rect(&mut self, rect: Rect) -> io::Result<()> {
        self.emit(&[rect.x, rect.y, rect.width, rect.height], "re f")
    }

    fn stroke_rect(&mut self, rect: Rect) -> io::Result<()> {
        self.emit(&[rect.x, rect.y, rect.width, rect.height], "re S")
    }

    fn stroke_lines(&mut self, segments: &[Segment]) -> io::Result<()> {
        if segments.is_empty() {
            return Ok(());
        }
        // Validate up front so a bad segment leaves no dangling path.
        for s in segments {
            for value in [s.x1, s.y1, s.x2, s.y2] {
                format_number(value)?;
            }
        }
        for s in segments {
            self.emit(&[s.x1, s.y1], "m")?;
            self.emit(&[s.x2, s.y2], "l")?;
        }
        self.emit(&[], "S")
    }

    fn begin_text(&mut self) -> io::Result<()> {
        self.emit(&[], "BT")
    }

    fn set_font(&mut self, font: &dyn FontMetrics, size: f32) -> io::Result<()> {
        let size = format_number(size)?;
        writeln!(self.writer, "/{} {size} Tf", font.resource_name())?;
        self.operations += 1;
        Ok(())
    }

    fn set_text_matrix(&mut self, matrix: Transform) -> io::Result<()> {
        self.emit_matrix(matrix, "Tm")
    }

    fn move_text(&mut self, dx: f32, dy: f32) -> io::Result<()> {
        self.emit(&[dx, dy], "Td")
    }

    fn show_text(&mut self, text: &str) -> io::Result<()> {
        let mut line = Vec::with_capacity(text.len() + 6);
        line.push(b'(');
        escape_string(text, &mut line);
        line.extend_from_slice(b") Tj\n");
        self.writer.write_all(&line)?;
        self.operations += 1;
        Ok(())
    }

    fn end_text(&mut self) -> io::Result<()> {
        self.emit(&[], "ET")
    }

    fn concat_transform(&mut self, matrix: Transform) -> io::Result<()> {
        self.emit_matrix(matrix, "cm")
    }

    fn save_state(&mut self) -> io::Result<()> {
        self.emit(&[], "q")
    }

    fn restore_state(&mut self) -> io::Result<()> {
        self.emit(&[], "Q")
    }
}

/// Format a number as a PDF real: at most four decimals, no exponent, no
/// trailing zeros.
pub fn format_number(value: f32) -> io::Result<String> {
    if !value.is_finite() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("content stream operand must be finite, but was {value}"),
        ));
    }
    let rounded = (f64::from(value) * PRECISION).round() / PRECISION;
    if rounded == 0.0 {
        return Ok("0".to_string());
    }
    Ok(format!("{rounded}"))
}

/// Append `text` as the body of a PDF literal string.
///
/// Delimiters and backslashes are escaped. Characters outside printable
/// ASCII are written as octal escapes of their Latin-1 code; characters
/// beyond Latin-1 become `?`.
fn escape_string(text: &str, out: &mut Vec<u8>) {
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                out.push(b'\\');
                out.push(ch as u8);
            }
            ' '..='~' => out.push(ch as u8),
            _ => match u8::try_from(u32::from(ch)) {
                Ok(code) => out.extend_from_slice(format!("\\{code:03o}").as_bytes()),
                Err(_) => out.push(b'?'),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::MonospaceMetrics;

    fn render(paint: impl FnOnce(&mut ContentStream<Vec<u8>>) -> io::Result<()>) -> String {
        let mut stream = ContentStream::new(Vec::new());
        paint(&mut stream).unwrap();
        String::from_utf8(stream.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(0.0).unwrap(), "0");
        assert_eq!(format_number(-0.0).unwrap(), "0");
        assert_eq!(format_number(12.0).unwrap(), "12");
        assert_eq!(format_number(0.5).unwrap(), "0.5");
        assert_eq!(format_number(-3.25).unwrap(), "-3.25");
        assert_eq!(format_number(1.0 / 3.0).unwrap(), "0.3333");
        assert_eq!(format_number(1e-6).unwrap(), "0");
        assert!(format_number(f32::INFINITY).is_err());
        assert!(format_number(f32::NAN).is_err());
    }

    #[test]
    fn graphics_operators() {
        let out = render(|s| {
            s.set_stroke_color(Color::rgb(255, 0, 0))?;
            s.set_line_width(1.5)?;
            s.stroke_rect(Rect::new(0.0, 0.0, 10.0, 20.0))?;
            s.save_state()?;
            s.concat_transform(Transform::new(0.0, 1.0, -1.0, 0.0, 595.0, 0.0))?;
            s.restore_state()
        });
        assert_eq!(
            out,
            "1 0 0 RG\n1.5 w\n0 0 10 20 re S\nq\n0 1 -1 0 595 0 cm\nQ\n"
        );
    }

    #[test]
    fn lines_share_one_stroke() {
        let out = render(|s| {
            s.stroke_lines(&[
                Segment::new(0.0, 10.0, 10.0, 10.0),
                Segment::new(10.0, 10.0, 10.0, 0.0),
            ])
        });
        assert_eq!(out, "0 10 m\n10 10 l\n10 10 m\n10 0 l\nS\n");
        assert_eq!(render(|s| s.stroke_lines(&[])), "");
    }

    #[test]
    fn text_operators() {
        let font = MonospaceMetrics::courier();
        let out = render(|s| {
            s.begin_text()?;
            s.set_font(&font, 12.0)?;
            s.set_text_matrix(Transform::translation(72.0, 700.0))?;
            s.move_text(0.0, -14.4)?;
            s.show_text("a (b) \\ é")?;
            s.end_text()
        });
        assert_eq!(
            out,
            "BT\n/Courier 12 Tf\n1 0 0 1 72 700 Tm\n0 -14.4 Td\n(a \\(b\\) \\\\ \\351) Tj\nET\n"
        );
    }

    #[test]
    fn characters_beyond_latin1_are_replaced() {
        assert_eq!(render(|s| s.show_text("x日")), "(x?) Tj\n");
    }

    #[test]
    fn non_finite_operands_fail() {
        let mut stream = ContentStream::new(Vec::new());
        let err = stream
            .fill_rect(Rect::new(0.0, 0.0, f32::INFINITY, 1.0))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        let err = stream
            .stroke_lines(&[Segment::new(0.0, 0.0, 1.0, 1.0), Segment::new(0.0, f32::NAN, 1.0, 1.0)])
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(stream.operations(), 0);
        assert!(stream.into_inner().unwrap().is_empty());
    }

    #[test]
    fn counts_operations() {
        let mut stream = ContentStream::new(Vec::new());
        stream.begin_text().unwrap();
        stream.show_text("x").unwrap();
        stream.end_text().unwrap();
        assert_eq!(stream.operations(), 3);
    }
}
