//! Alignment of an element inside a larger rectangle.

use std::fmt;
use std::io;

use hcpdf_core::Rect;
use hcpdf_render::Canvas;

use crate::Element;

/// Horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl HorizontalAlignment {
    /// Offset of a box of `width` from the left edge of a box of `outer`.
    pub fn offset(self, width: f32, outer: f32) -> f32 {
        match self {
            Self::Left => 0.0,
            Self::Center => (outer - width) / 2.0,
            Self::Right => outer - width,
        }
    }

    /// Left edge of a box of `width` aligned inside `parent`.
    pub fn x(self, width: f32, parent: Rect) -> f32 {
        parent.x + self.offset(width, parent.width)
    }
}

/// Vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// Bottom edge of a box of `height` aligned inside `parent`.
    pub fn y(self, height: f32, parent: Rect) -> f32 {
        match self {
            Self::Top => parent.top() - height,
            Self::Center => parent.y + (parent.height - height) / 2.0,
            Self::Bottom => parent.y,
        }
    }
}

/// One of the nine combinations of horizontal and vertical alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Alignment {
    pub const fn from_parts(horizontal: HorizontalAlignment, vertical: VerticalAlignment) -> Self {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;
        match (vertical, horizontal) {
            (V::Top, H::Left) => Self::TopLeft,
            (V::Top, H::Center) => Self::Top,
            (V::Top, H::Right) => Self::TopRight,
            (V::Center, H::Left) => Self::Left,
            (V::Center, H::Center) => Self::Center,
            (V::Center, H::Right) => Self::Right,
            (V::Bottom, H::Left) => Self::BottomLeft,
            (V::Bottom, H::Center) => Self::Bottom,
            (V::Bottom, H::Right) => Self::BottomRight,
        }
    }

    pub const fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeft | Self::Left | Self::BottomLeft => HorizontalAlignment::Left,
            Self::Top | Self::Center | Self::Bottom => HorizontalAlignment::Center,
            Self::TopRight | Self::Right | Self::BottomRight => HorizontalAlignment::Right,
        }
    }

    pub const fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeft | Self::Top | Self::TopRight => VerticalAlignment::Top,
            Self::Left | Self::Center | Self::Right => VerticalAlignment::Center,
            Self::BottomLeft | Self::Bottom | Self::BottomRight => VerticalAlignment::Bottom,
        }
    }
}

/// Positions a child at its preferred size inside the given rectangle.
///
/// On an aligned axis the child gets `min(preferred, available)` and is placed
/// according to the alignment. On an axis without alignment the child fills
/// the available extent.
pub struct Aligned {
    child: Box<dyn Element>,
    horizontal: Option<HorizontalAlignment>,
    vertical: Option<VerticalAlignment>,
}

impl fmt::Debug for Aligned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aligned")
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .finish_non_exhaustive()
    }
}

impl Aligned {
    pub fn new(child: impl Element + 'static, alignment: Alignment) -> Self {
        Self::from_parts(child, Some(alignment.horizontal()), Some(alignment.vertical()))
    }

    /// Aligned horizontally, filling vertically.
    pub fn horizontal(child: impl Element + 'static, alignment: HorizontalAlignment) -> Self {
        Self::from_parts(child, Some(alignment), None)
    }

    /// Aligned vertically, filling horizontally.
    pub fn vertical(child: impl Element + 'static, alignment: VerticalAlignment) -> Self {
        Self::from_parts(child, None, Some(alignment))
    }

    pub fn from_parts(
        child: impl Element + 'static,
        horizontal: Option<HorizontalAlignment>,
        vertical: Option<VerticalAlignment>,
    ) -> Self {
        Self {
            child: child.boxed(),
            horizontal,
            vertical,
        }
    }
}

impl Element for Aligned {
    fn measure_width(&self) -> io::Result<f32> {
        self.child.measure_width()
    }

    fn measure_height(&self) -> io::Result<f32> {
        self.child.measure_height()
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let (x, width) = match self.horizontal {
            Some(alignment) => {
                let width = self.child.measure_width()?.min(area.width);
                (alignment.x(width, area), width)
            }
            None => (area.x, area.width),
        };
        let (y, height) = match self.vertical {
            Some(alignment) => {
                let height = self.child.measure_height()?.min(area.height);
                (alignment.y(height, area), height)
            }
            None => (area.y, area.height),
        };
        self.child.paint(canvas, Rect::new(x, y, width, height))
    }
}
