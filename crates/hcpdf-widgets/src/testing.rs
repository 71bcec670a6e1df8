//! Test doubles.

use std::io;
use std::sync::{Arc, Mutex};

use hcpdf_core::Rect;
use hcpdf_render::Canvas;

use crate::Element;

/// Reports a fixed size and records every rectangle it is painted into.
#[derive(Debug, Clone)]
pub(crate) struct Probe {
    width: f32,
    height: f32,
    painted: Arc<Mutex<Vec<Rect>>>,
}

impl Probe {
    pub(crate) fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            painted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Rectangles received so far, shared between clones.
    pub(crate) fn painted(&self) -> Vec<Rect> {
        self.painted.lock().unwrap().clone()
    }

    /// The single rectangle received, or `None` if not painted exactly once.
    pub(crate) fn only(&self) -> Option<Rect> {
        match self.painted().as_slice() {
            [rect] => Some(*rect),
            _ => None,
        }
    }
}

impl Element for Probe {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(self.width)
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(self.height)
    }

    fn paint(&self, _canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        self.painted.lock().unwrap().push(area);
        Ok(())
    }
}

/// Fails every measurement and paint.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Broken;

impl Element for Broken {
    fn measure_width(&self) -> io::Result<f32> {
        Err(io::Error::other("broken width"))
    }

    fn measure_height(&self) -> io::Result<f32> {
        Err(io::Error::other("broken height"))
    }

    fn paint(&self, _canvas: &mut dyn Canvas, _area: Rect) -> io::Result<()> {
        Err(io::Error::other("broken paint"))
    }
}

pub(crate) fn approx(a: Rect, b: Rect) -> bool {
    const EPS: f32 = 1e-3;
    (a.x - b.x).abs() < EPS
        && (a.y - b.y).abs() < EPS
        && (a.width - b.width).abs() < EPS
        && (a.height - b.height).abs() < EPS
}
