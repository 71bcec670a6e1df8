//! Overlaying elements in one rectangle.

use std::fmt;
use std::io;

use hcpdf_core::Rect;
use hcpdf_render::Canvas;

use crate::{Element, max_of, measure_heights, measure_widths};

/// Paints every child into the same rectangle, first child at the bottom.
pub struct Stack {
    children: Vec<Box<dyn Element>>,
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("children", &self.children.len())
            .finish()
    }
}

impl Stack {
    pub fn new(children: Vec<Box<dyn Element>>) -> Self {
        Self { children }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Element for Stack {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(max_of(measure_widths(&self.children)?))
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(max_of(measure_heights(&self.children)?))
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        for child in &self.children {
            child.paint(canvas, area)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::Area;
    use crate::testing::Probe;
    use hcpdf_render::{Color, RecordingCanvas};

    #[test]
    fn measures_maximum_of_children() {
        let stack = Stack::new(vec![
            Probe::new(10.0, 1.0).boxed(),
            Probe::new(2.0, 30.0).boxed(),
        ]);
        assert_eq!(stack.measure_width().unwrap(), 10.0);
        assert_eq!(stack.measure_height().unwrap(), 30.0);
        assert_eq!(Stack::new(Vec::new()).measure_width().unwrap(), 0.0);
    }

    #[test]
    fn paints_in_order_into_same_area() {
        let area = Rect::new(1.0, 2.0, 3.0, 4.0);
        let stack = Stack::new(vec![
            Area::filled(Color::RED).boxed(),
            Area::filled(Color::BLUE).boxed(),
        ]);
        let mut canvas = RecordingCanvas::new();
        stack.paint(&mut canvas, area).unwrap();
        assert_eq!(canvas.filled_rects(), vec![area, area]);
        assert_eq!(
            canvas.ops()[2],
            hcpdf_render::CanvasOp::SetFillColor { color: Color::BLUE }
        );
    }
}
