//! Page setup.

use std::io;

use hcpdf_core::{Rect, Transform};
use hcpdf_render::Canvas;

use crate::Element;

/// Media box dimensions in points, portrait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub const A3: Self = Self::new(841.8898, 1190.5513);
    pub const A4: Self = Self::new(595.2756, 841.8898);
    pub const A5: Self = Self::new(419.5276, 595.2756);
    pub const LETTER: Self = Self::new(612.0, 792.0);
    pub const LEGAL: Self = Self::new(612.0, 1008.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::A4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    /// Displayed rotated by 90 degrees; content is laid out on the long side.
    Landscape,
}

/// One page of a document: a size, an orientation, and the transform that
/// maps laid-out content onto the media box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Page {
    size: PageSize,
    orientation: Orientation,
}

impl Page {
    pub const fn new(size: PageSize, orientation: Orientation) -> Self {
        Self { size, orientation }
    }

    pub const fn portrait(size: PageSize) -> Self {
        Self::new(size, Orientation::Portrait)
    }

    pub const fn landscape(size: PageSize) -> Self {
        Self::new(size, Orientation::Landscape)
    }

    #[inline]
    pub const fn size(&self) -> PageSize {
        self.size
    }

    #[inline]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The media box in page coordinates.
    pub fn media_box(&self) -> Rect {
        Rect::from_size(self.size.width, self.size.height)
    }

    /// The rectangle elements are painted into. Landscape pages swap width and
    /// height.
    pub fn content_area(&self) -> Rect {
        match self.orientation {
            Orientation::Portrait => self.media_box(),
            Orientation::Landscape => Rect::from_size(self.size.height, self.size.width),
        }
    }

    /// Value of the page's `/Rotate` entry.
    pub fn rotation_degrees(&self) -> u16 {
        match self.orientation {
            Orientation::Portrait => 0,
            Orientation::Landscape => 90,
        }
    }

    /// Paint `element` into [`content_area`](Self::content_area).
    ///
    /// Landscape content is painted under a quarter-turn transform so that
    /// it ends up upright once the viewer applies the page rotation. The
    /// graphics state is restored afterwards.
    pub fn paint(&self, element: &dyn Element, canvas: &mut dyn Canvas) -> io::Result<()> {
        let area = self.content_area();
        let _guard = hcpdf_core::debug_span!(
            "page.paint",
            orientation = ?self.orientation,
            width = area.width,
            height = area.height
        )
        .entered();
        match self.orientation {
            Orientation::Portrait => element.paint(canvas, area),
            Orientation::Landscape => {
                canvas.save_state()?;
                canvas.concat_transform(Transform::new(0.0, 1.0, -1.0, 0.0, area.height, 0.0))?;
                element.paint(canvas, area)?;
                canvas.restore_state()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use hcpdf_render::{CanvasOp, Color, RecordingCanvas};

    #[test]
    fn portrait_paints_media_box() {
        let page = Page::portrait(PageSize::LETTER);
        assert_eq!(page.rotation_degrees(), 0);
        let mut canvas = RecordingCanvas::new();
        page.paint(&Area::filled(Color::GRAY), &mut canvas).unwrap();
        assert_eq!(canvas.filled_rects(), vec![Rect::new(0.0, 0.0, 612.0, 792.0)]);
        assert!(!canvas.ops().contains(&CanvasOp::SaveState));
    }

    #[test]
    fn landscape_swaps_and_rotates() {
        let page = Page::landscape(PageSize::LETTER);
        assert_eq!(page.rotation_degrees(), 90);
        assert_eq!(page.content_area(), Rect::new(0.0, 0.0, 792.0, 612.0));

        let mut canvas = RecordingCanvas::new();
        page.paint(&Area::filled(Color::GRAY), &mut canvas).unwrap();
        let ops = canvas.ops();
        assert_eq!(ops.first(), Some(&CanvasOp::SaveState));
        assert_eq!(
            ops[1],
            CanvasOp::ConcatTransform {
                matrix: Transform::new(0.0, 1.0, -1.0, 0.0, 612.0, 0.0)
            }
        );
        assert_eq!(ops.last(), Some(&CanvasOp::RestoreState));
        assert_eq!(canvas.filled_rects(), vec![Rect::new(0.0, 0.0, 792.0, 612.0)]);
    }

    #[test]
    fn landscape_transform_maps_content_onto_media_box() {
        let m = Transform::new(0.0, 1.0, -1.0, 0.0, PageSize::A4.width, 0.0);
        let area = Page::landscape(PageSize::A4).content_area();
        let (x, y) = m.apply(area.right(), area.top());
        assert!(x.abs() < 1e-3);
        assert!((y - PageSize::A4.height).abs() < 1e-3);
    }

    #[test]
    fn default_is_portrait_a4() {
        let page = Page::default();
        assert_eq!(page.size(), PageSize::A4);
        assert_eq!(page.orientation(), Orientation::Portrait);
    }
}
