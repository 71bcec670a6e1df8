//! One immutable tree painted from several threads at once.
//!
//! Elements keep no per-paint state, so every thread must observe exactly the
//! trace a single-threaded paint produces.

use std::sync::Arc;
use std::thread;

use hcpdf_core::Rect;
use hcpdf_layout::Layout;
use hcpdf_render::{CanvasOp, Color, RecordingCanvas};
use hcpdf_widgets::{
    Area, BorderContainer, Edges, Element, GridContainer, Padding, SequentialContainer, Stack,
};

fn tree() -> Arc<dyn Element> {
    let grid = GridContainer::uniform(
        Layout::split(),
        vec![
            vec![
                Area::filled(Color::RED).boxed(),
                Area::outline(Color::BLACK, Edges::HORIZONTAL).boxed(),
            ],
            vec![
                Area::bordered(Color::YELLOW, Color::BLUE).boxed(),
                Padding::all(Area::filled(Color::GREEN), 2.0)
                    .expect("valid inset")
                    .boxed(),
            ],
        ],
    )
    .expect("rectangular grid");
    let column = SequentialContainer::vertical(
        Layout::flow(),
        vec![
            Area::filled(Color::CYAN).boxed(),
            Area::filled(Color::MAGENTA).boxed(),
        ],
    );
    let border = BorderContainer::builder()
        .left(column)
        .center(grid)
        .all_spacings(4.0)
        .build()
        .expect("valid spacings");
    Arc::new(Stack::new(vec![
        Area::filled(Color::WHITE).boxed(),
        border.boxed(),
    ]))
}

fn paint(element: &dyn Element, area: Rect) -> Vec<CanvasOp> {
    let mut canvas = RecordingCanvas::new();
    element.paint(&mut canvas, area).expect("paint");
    canvas.into_ops()
}

#[test]
fn concurrent_paints_match_sequential_paint() {
    let area = Rect::new(10.0, 10.0, 300.0, 200.0);
    let tree = tree();
    let expected = paint(tree.as_ref(), area);
    assert!(!expected.is_empty());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                (0..25)
                    .map(|_| paint(tree.as_ref(), area))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for ops in handle.join().expect("painter thread panicked") {
            assert_eq!(ops, expected);
        }
    }
}

#[test]
fn repainting_is_idempotent() {
    let tree = tree();
    let small = Rect::new(0.0, 0.0, 20.0, 20.0);
    let large = Rect::new(0.0, 0.0, 400.0, 400.0);
    let first = paint(tree.as_ref(), large);
    let _ = paint(tree.as_ref(), small);
    assert_eq!(paint(tree.as_ref(), large), first);
}
