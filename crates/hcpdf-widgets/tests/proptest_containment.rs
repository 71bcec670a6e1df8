//! Property tests: containers never hand a child a rectangle outside their own.
//!
//! 1. Sequential children stay inside the container.
//! 2. Grid cells stay inside the container and do not overlap.
//! 3. Table positions stay inside the container.
//! 4. Border regions stay inside the container and do not overlap.
//! 5. Padding paints strictly inside the padded area, or not at all.

use std::io;
use std::sync::{Arc, Mutex};

use hcpdf_core::{Rect, Sides};
use hcpdf_layout::Layout;
use hcpdf_render::{Canvas, RecordingCanvas};
use hcpdf_widgets::{
    BorderContainer, Element, GridContainer, Padding, SequentialContainer, TableContainer,
};
use proptest::prelude::*;

const EPS: f32 = 1e-2;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Records the rectangles it is painted into; clones share the log.
#[derive(Clone)]
struct Spy {
    width: f32,
    height: f32,
    log: Arc<Mutex<Vec<Rect>>>,
}

impl Spy {
    fn new(width: f32, height: f32, log: &Arc<Mutex<Vec<Rect>>>) -> Self {
        Self {
            width,
            height,
            log: Arc::clone(log),
        }
    }
}

impl Element for Spy {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(self.width)
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(self.height)
    }

    fn paint(&self, _canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        self.log.lock().expect("log poisoned").push(area);
        Ok(())
    }
}

fn inside(inner: Rect, outer: Rect) -> bool {
    inner.width >= -EPS
        && inner.height >= -EPS
        && inner.left() >= outer.left() - EPS
        && inner.right() <= outer.right() + EPS
        && inner.bottom() >= outer.bottom() - EPS
        && inner.top() <= outer.top() + EPS
}

fn overlap(a: Rect, b: Rect) -> bool {
    a.left() < b.right() - EPS
        && b.left() < a.right() - EPS
        && a.bottom() < b.top() - EPS
        && b.bottom() < a.top() - EPS
}

fn layout() -> impl Strategy<Value = Layout> {
    (0u8..3, 0.0f32..10.0).prop_map(|(kind, spacing)| {
        let layout = match kind {
            0 => Layout::flow_spaced(spacing),
            1 => Layout::split_spaced(spacing),
            _ => Layout::stretch_spaced(spacing),
        };
        layout.expect("non-negative spacing")
    })
}

fn area() -> impl Strategy<Value = Rect> {
    (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..300.0, 0.0f32..300.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn size() -> impl Strategy<Value = (f32, f32)> {
    (0.0f32..80.0, 0.0f32..80.0)
}

fn painted(log: &Arc<Mutex<Vec<Rect>>>) -> Vec<Rect> {
    log.lock().expect("log poisoned").clone()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn sequential_children_stay_inside(
        layout in layout(),
        vertical in any::<bool>(),
        sizes in proptest::collection::vec(size(), 0..8),
        area in area(),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let children: Vec<Box<dyn Element>> = sizes
            .iter()
            .map(|&(w, h)| Spy::new(w, h, &log).boxed())
            .collect();
        let container = if vertical {
            SequentialContainer::vertical(layout, children)
        } else {
            SequentialContainer::horizontal(layout, children)
        };
        container.paint(&mut RecordingCanvas::new(), area).unwrap();
        for rect in painted(&log) {
            prop_assert!(inside(rect, area), "{rect:?} outside {area:?}");
        }
    }

    #[test]
    fn grid_cells_stay_inside_and_apart(
        layout in layout(),
        rows in 1usize..5,
        columns in 1usize..5,
        cell in size(),
        area in area(),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let cells: Vec<Vec<Box<dyn Element>>> = (0..rows)
            .map(|_| (0..columns).map(|_| Spy::new(cell.0, cell.1, &log).boxed()).collect())
            .collect();
        let grid = GridContainer::uniform(layout, cells).unwrap();
        grid.paint(&mut RecordingCanvas::new(), area).unwrap();
        let rects = painted(&log);
        prop_assert!(rects.len() <= rows * columns);
        for (i, &a) in rects.iter().enumerate() {
            prop_assert!(inside(a, area), "{a:?} outside {area:?}");
            for &b in &rects[i + 1..] {
                prop_assert!(!overlap(a, b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn table_positions_stay_inside(
        layout in layout(),
        positions in proptest::collection::vec(
            (0usize..4, 0usize..4, 1usize..3, 1usize..3, size()),
            1..8,
        ),
        area in area(),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut builder = TableContainer::builder(layout);
        for &(x, y, h, v, (w, ht)) in &positions {
            builder = builder.spanning(Spy::new(w, ht, &log), x, y, h, v);
        }
        let table = builder.build().unwrap();
        table.paint(&mut RecordingCanvas::new(), area).unwrap();
        for rect in painted(&log) {
            prop_assert!(inside(rect, area), "{rect:?} outside {area:?}");
        }
    }

    #[test]
    fn border_regions_stay_inside_and_apart(
        sides in proptest::collection::vec(size(), 5),
        spacing in 0.0f32..20.0,
        area in area(),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let spy = |i: usize| Spy::new(sides[i].0, sides[i].1, &log);
        let container = BorderContainer::builder()
            .top(spy(0))
            .bottom(spy(1))
            .left(spy(2))
            .right(spy(3))
            .center(spy(4))
            .all_spacings(spacing)
            .build()
            .unwrap();
        container.paint(&mut RecordingCanvas::new(), area).unwrap();
        let rects = painted(&log);
        for (i, &a) in rects.iter().enumerate() {
            prop_assert!(inside(a, area), "{a:?} outside {area:?}");
            for &b in &rects[i + 1..] {
                prop_assert!(!overlap(a, b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn padding_paints_inside_or_not_at_all(
        insets in (0.0f32..60.0, 0.0f32..60.0, 0.0f32..60.0, 0.0f32..60.0),
        area in area(),
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (top, right, bottom, left) = insets;
        let padding = Padding::new(Spy::new(1.0, 1.0, &log), Sides::new(top, right, bottom, left))
            .unwrap();
        padding.paint(&mut RecordingCanvas::new(), area).unwrap();
        let rects = painted(&log);
        let fits = area.width - (left + right) > 0.0 && area.height - (top + bottom) > 0.0;
        if fits {
            prop_assert_eq!(rects.len(), 1);
            prop_assert!(inside(rects[0], area));
            prop_assert!(rects[0].width > 0.0 && rects[0].height > 0.0);
        } else {
            prop_assert!(rects.is_empty());
        }
    }
}
