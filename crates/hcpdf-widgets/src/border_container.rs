//! The five-region border container.
//!
//! Up to five optional children share one rectangle. Painting consumes the
//! rectangle in a fixed order:
//!
//! 1. `top`, then `bottom`, each across the full width.
//! 2. `left`, then `right`, each across the band left between them.
//! 3. `center` in whatever is left.
//!
//! Each side takes at most its preferred extent, then reserves its spacing
//! towards the center. Spacing that would reach the opposite edge is dropped
//! together with everything behind it: the side grows to the opposite edge and
//! nothing further is painted on that axis.

use std::fmt;
use std::io;

use hcpdf_core::error::non_negative;
use hcpdf_core::{BuildError, Rect};
use hcpdf_render::Canvas;

use crate::Element;

type Side = Option<Box<dyn Element>>;

fn width_of(side: &Side) -> io::Result<f32> {
    side.as_ref().map_or(Ok(0.0), |e| e.measure_width())
}

fn height_of(side: &Side) -> io::Result<f32> {
    side.as_ref().map_or(Ok(0.0), |e| e.measure_height())
}

fn spacing_of(side: &Side, spacing: f32) -> f32 {
    if side.is_some() { spacing } else { 0.0 }
}

/// Spacing between each side and the center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Spacings {
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
}

/// Collects the sides and spacings of a [`BorderContainer`].
#[derive(Default)]
pub struct BorderContainerBuilder {
    top: Side,
    bottom: Side,
    left: Side,
    right: Side,
    center: Side,
    spacings: Spacings,
}

impl fmt::Debug for BorderContainerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorderContainerBuilder")
            .field("top", &self.top.is_some())
            .field("bottom", &self.bottom.is_some())
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("center", &self.center.is_some())
            .field("spacings", &self.spacings)
            .finish()
    }
}

impl BorderContainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn top(mut self, element: impl Element + 'static) -> Self {
        self.top = Some(element.boxed());
        self
    }

    #[must_use]
    pub fn bottom(mut self, element: impl Element + 'static) -> Self {
        self.bottom = Some(element.boxed());
        self
    }

    #[must_use]
    pub fn left(mut self, element: impl Element + 'static) -> Self {
        self.left = Some(element.boxed());
        self
    }

    #[must_use]
    pub fn right(mut self, element: impl Element + 'static) -> Self {
        self.right = Some(element.boxed());
        self
    }

    #[must_use]
    pub fn center(mut self, element: impl Element + 'static) -> Self {
        self.center = Some(element.boxed());
        self
    }

    #[must_use]
    pub fn top_spacing(mut self, spacing: f32) -> Self {
        self.spacings.top = spacing;
        self
    }

    #[must_use]
    pub fn bottom_spacing(mut self, spacing: f32) -> Self {
        self.spacings.bottom = spacing;
        self
    }

    #[must_use]
    pub fn left_spacing(mut self, spacing: f32) -> Self {
        self.spacings.left = spacing;
        self
    }

    #[must_use]
    pub fn right_spacing(mut self, spacing: f32) -> Self {
        self.spacings.right = spacing;
        self
    }

    /// Spacing below `top` and above `bottom`.
    #[must_use]
    pub fn horizontal_spacing(self, spacing: f32) -> Self {
        self.top_spacing(spacing).bottom_spacing(spacing)
    }

    /// Spacing right of `left` and left of `right`.
    #[must_use]
    pub fn vertical_spacing(self, spacing: f32) -> Self {
        self.left_spacing(spacing).right_spacing(spacing)
    }

    #[must_use]
    pub fn all_spacings(self, spacing: f32) -> Self {
        self.horizontal_spacing(spacing).vertical_spacing(spacing)
    }

    /// Fails on the first negative or NaN spacing, checking top, bottom, left
    /// and right in that order.
    pub fn build(self) -> Result<BorderContainer, BuildError> {
        non_negative("top spacing", self.spacings.top)?;
        non_negative("bottom spacing", self.spacings.bottom)?;
        non_negative("left spacing", self.spacings.left)?;
        non_negative("right spacing", self.spacings.right)?;
        Ok(BorderContainer {
            top: self.top,
            bottom: self.bottom,
            left: self.left,
            right: self.right,
            center: self.center,
            spacings: self.spacings,
        })
    }
}

/// Top and bottom bands over a row of left, center and right.
pub struct BorderContainer {
    top: Side,
    bottom: Side,
    left: Side,
    right: Side,
    center: Side,
    spacings: Spacings,
}

impl fmt::Debug for BorderContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BorderContainer")
            .field("top", &self.top.is_some())
            .field("bottom", &self.bottom.is_some())
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("center", &self.center.is_some())
            .field("spacings", &self.spacings)
            .finish()
    }
}

impl BorderContainer {
    pub fn builder() -> BorderContainerBuilder {
        BorderContainerBuilder::new()
    }

    #[inline]
    pub fn top_spacing(&self) -> f32 {
        self.spacings.top
    }

    #[inline]
    pub fn bottom_spacing(&self) -> f32 {
        self.spacings.bottom
    }

    #[inline]
    pub fn left_spacing(&self) -> f32 {
        self.spacings.left
    }

    #[inline]
    pub fn right_spacing(&self) -> f32 {
        self.spacings.right
    }
}

/// The part of the container not yet handed out.
#[derive(Debug, Clone, Copy)]
struct Remaining {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
}

impl Remaining {
    fn has_width(&self) -> bool {
        self.left < self.right
    }

    fn has_height(&self) -> bool {
        self.bottom < self.top
    }

    fn take_top(&mut self, height: f32, spacing: f32) -> (f32, f32) {
        let old = self.top;
        self.top = (self.top - height).max(self.bottom);
        if self.top - spacing <= self.bottom {
            self.top = self.bottom;
        }
        let band = (self.top, old);
        if self.top > self.bottom {
            self.top -= spacing;
        }
        band
    }

    fn take_bottom(&mut self, height: f32, spacing: f32) -> (f32, f32) {
        let old = self.bottom;
        self.bottom = (self.bottom + height).min(self.top);
        if self.bottom + spacing >= self.top {
            self.bottom = self.top;
        }
        let band = (old, self.bottom);
        if self.bottom < self.top {
            self.bottom += spacing;
        }
        band
    }

    fn take_left(&mut self, width: f32, spacing: f32) -> (f32, f32) {
        let old = self.left;
        self.left = (self.left + width).min(self.right);
        if self.left + spacing >= self.right {
            self.left = self.right;
        }
        let band = (old, self.left);
        if self.left < self.right {
            self.left += spacing;
        }
        band
    }

    fn take_right(&mut self, width: f32, spacing: f32) -> (f32, f32) {
        let old = self.right;
        self.right = (self.right - width).max(self.left);
        if self.right - spacing <= self.left {
            self.right = self.left;
        }
        let band = (self.right, old);
        if self.right > self.left {
            self.right -= spacing;
        }
        band
    }
}

impl Element for BorderContainer {
    fn measure_width(&self) -> io::Result<f32> {
        let middle = width_of(&self.left)?
            + spacing_of(&self.left, self.spacings.left)
            + width_of(&self.center)?
            + spacing_of(&self.right, self.spacings.right)
            + width_of(&self.right)?;
        Ok(middle
            .max(width_of(&self.top)?)
            .max(width_of(&self.bottom)?))
    }

    fn measure_height(&self) -> io::Result<f32> {
        let middle = height_of(&self.left)?
            .max(height_of(&self.center)?)
            .max(height_of(&self.right)?);
        Ok(height_of(&self.top)?
            + spacing_of(&self.top, self.spacings.top)
            + middle
            + spacing_of(&self.bottom, self.spacings.bottom)
            + height_of(&self.bottom)?)
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let _guard = hcpdf_core::debug_span!("border.paint", ?area).entered();
        let mut rest = Remaining {
            left: area.left(),
            right: area.right(),
            bottom: area.bottom(),
            top: area.top(),
        };

        if rest.has_width() {
            if let Some(top) = &self.top
                && rest.has_height()
            {
                let (low, high) = rest.take_top(top.measure_height()?, self.spacings.top);
                top.paint(canvas, Rect::from_edges(rest.left, low, rest.right, high))?;
            }
            if let Some(bottom) = &self.bottom
                && rest.has_height()
            {
                let (low, high) = rest.take_bottom(bottom.measure_height()?, self.spacings.bottom);
                bottom.paint(canvas, Rect::from_edges(rest.left, low, rest.right, high))?;
            }
        }

        if !rest.has_height() {
            hcpdf_core::trace!(?area, "border: no room between top and bottom");
            return Ok(());
        }
        let (bottom, top) = (rest.bottom, rest.top);
        if let Some(left) = &self.left
            && rest.has_width()
        {
            let (low, high) = rest.take_left(left.measure_width()?, self.spacings.left);
            left.paint(canvas, Rect::from_edges(low, bottom, high, top))?;
        }
        if let Some(right) = &self.right
            && rest.has_width()
        {
            let (low, high) = rest.take_right(right.measure_width()?, self.spacings.right);
            right.paint(canvas, Rect::from_edges(low, bottom, high, top))?;
        }
        if let Some(center) = &self.center
            && rest.has_width()
        {
            center.paint(canvas, Rect::from_edges(rest.left, bottom, rest.right, top))?;
        }
        Ok(())
    }
}
