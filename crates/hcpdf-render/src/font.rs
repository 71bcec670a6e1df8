//! Font metrics and text styles.
//!
//! Metrics follow the PDF convention: a [`FontMetrics`] provider reports
//! values in glyph-space units (1/1000 em) and [`Style`] scales them by the
//! font size to points.

use std::fmt;
use std::io;
use std::sync::Arc;

use hcpdf_core::BuildError;
use unicode_width::UnicodeWidthStr;

use crate::canvas::Canvas;
use crate::color::Color;

/// Glyph-space units per em.
pub const UNITS_PER_EM: f32 = 1000.0;

/// Font metrics source.
///
/// Implementations may load font programs lazily, so every query can fail.
/// All values are in glyph-space units (1/1000 em).
pub trait FontMetrics: fmt::Debug + Send + Sync {
    /// Name under which the font is registered in the page resources.
    fn resource_name(&self) -> &str;

    /// Maximum height above the baseline.
    fn ascent(&self) -> io::Result<f32>;

    /// Maximum depth below the baseline. Negative for most fonts.
    fn descent(&self) -> io::Result<f32>;

    /// Height of the font bounding box.
    fn bounding_box_height(&self) -> io::Result<f32>;

    /// Advance width of `text`.
    fn string_width(&self, text: &str) -> io::Result<f32>;
}

// =========================================================================
// MonospaceMetrics
// =========================================================================

/// Fixed-pitch metrics: every display column advances by the same width.
///
/// Wide characters (CJK, emoji) count as two columns and zero-width
/// characters as none.
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceMetrics {
    resource_name: String,
    advance: f32,
    ascent: f32,
    descent: f32,
    bounding_box_height: f32,
}

impl MonospaceMetrics {
    pub fn new(
        resource_name: impl Into<String>,
        advance: f32,
        ascent: f32,
        descent: f32,
        bounding_box_height: f32,
    ) -> Self {
        Self {
            resource_name: resource_name.into(),
            advance,
            ascent,
            descent,
            bounding_box_height,
        }
    }

    /// Metrics of the standard Courier font.
    pub fn courier() -> Self {
        Self::new("Courier", 600.0, 629.0, -157.0, 1055.0)
    }

    #[inline]
    pub fn advance(&self) -> f32 {
        self.advance
    }
}

impl FontMetrics for MonospaceMetrics {
    fn resource_name(&self) -> &str {
        &self.resource_name
    }

    fn ascent(&self) -> io::Result<f32> {
        Ok(self.ascent)
    }

    fn descent(&self) -> io::Result<f32> {
        Ok(self.descent)
    }

    fn bounding_box_height(&self) -> io::Result<f32> {
        Ok(self.bounding_box_height)
    }

    fn string_width(&self, text: &str) -> io::Result<f32> {
        Ok(text.width() as f32 * self.advance)
    }
}

// =========================================================================
// Style
// =========================================================================

/// Font, size, and color of a text run.
///
/// Immutable; the `with_*` methods return modified copies. Two styles are
/// equal when they share the same font instance and have equal size and color.
#[derive(Debug, Clone)]
pub struct Style {
    font: Arc<dyn FontMetrics>,
    size: f32,
    color: Color,
}

impl Style {
    /// Create a style. Fails if `size` is below one point.
    pub fn new(font: Arc<dyn FontMetrics>, size: f32, color: Color) -> Result<Self, BuildError> {
        if size.is_nan() || size < 1.0 {
            return Err(BuildError::FontSizeBelowOne { value: size });
        }
        Ok(Self { font, size, color })
    }

    /// Black text.
    pub fn black(font: Arc<dyn FontMetrics>, size: f32) -> Result<Self, BuildError> {
        Self::new(font, size, Color::BLACK)
    }

    #[inline]
    pub fn font(&self) -> &Arc<dyn FontMetrics> {
        &self.font
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn with_font(&self, font: Arc<dyn FontMetrics>) -> Self {
        Self {
            font,
            size: self.size,
            color: self.color,
        }
    }

    pub fn with_size(&self, size: f32) -> Result<Self, BuildError> {
        Self::new(Arc::clone(&self.font), size, self.color)
    }

    #[must_use]
    pub fn with_color(&self, color: Color) -> Self {
        Self {
            font: Arc::clone(&self.font),
            size: self.size,
            color,
        }
    }

    /// Select the fill color and font on `canvas`. Must be called inside a
    /// text object.
    pub fn apply(&self, canvas: &mut dyn Canvas) -> io::Result<()> {
        canvas.set_fill_color(self.color)?;
        canvas.set_font(self.font.as_ref(), self.size)
    }

    /// Ascent in points.
    pub fn ascent(&self) -> io::Result<f32> {
        Ok(self.scale(self.font.ascent()?))
    }

    /// Descent in points; usually negative.
    pub fn descent(&self) -> io::Result<f32> {
        Ok(self.scale(self.font.descent()?))
    }

    /// Line height in points (height of the font bounding box).
    pub fn height(&self) -> io::Result<f32> {
        Ok(self.scale(self.font.bounding_box_height()?))
    }

    /// Width of `text` in points.
    pub fn string_width(&self, text: &str) -> io::Result<f32> {
        Ok(self.scale(self.font.string_width(text)?))
    }

    #[inline]
    fn scale(&self, units: f32) -> f32 {
        units * self.size / UNITS_PER_EM
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.color == other.color && Arc::ptr_eq(&self.font, &other.font)
    }
}
