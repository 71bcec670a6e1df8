//! Dense grids of elements.

use std::fmt;
use std::io;

use hcpdf_core::{BuildError, Rect};
use hcpdf_layout::Layout;
use hcpdf_render::Canvas;

use crate::Element;
use crate::sequential::Axis;

/// A dense `rows x columns` lattice.
///
/// Column widths are the maximum preferred width in each column and row
/// heights the maximum preferred height in each row. One layout distributes
/// the columns and another the rows; the cell at `(row, column)` is painted
/// into the intersection of the two intervals. Rows run top to bottom.
pub struct GridContainer {
    horizontal: Layout,
    vertical: Layout,
    rows: Vec<Vec<Box<dyn Element>>>,
    columns: usize,
}

impl fmt::Debug for GridContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridContainer")
            .field("horizontal", &self.horizontal)
            .field("vertical", &self.vertical)
            .field("rows", &self.rows.len())
            .field("columns", &self.columns)
            .finish()
    }
}

impl GridContainer {
    /// Fails if the rows do not all have the length of the first row.
    pub fn new(
        horizontal: Layout,
        vertical: Layout,
        rows: Vec<Vec<Box<dyn Element>>>,
    ) -> Result<Self, BuildError> {
        let columns = rows.first().map_or(0, Vec::len);
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(BuildError::RaggedGrid {
                row,
                expected: columns,
                actual: cells.len(),
            });
        }
        Ok(Self {
            horizontal,
            vertical,
            rows,
            columns,
        })
    }

    /// The same layout on both axes.
    pub fn uniform(layout: Layout, rows: Vec<Vec<Box<dyn Element>>>) -> Result<Self, BuildError> {
        Self::new(layout, layout, rows)
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    fn column_widths(&self) -> io::Result<Vec<f32>> {
        let mut widths = vec![0.0f32; self.columns];
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = width.max(cell.measure_width()?);
            }
        }
        Ok(widths)
    }

    fn row_heights(&self) -> io::Result<Vec<f32>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .try_fold(0.0f32, |acc, cell| {
                        Ok::<f32, io::Error>(acc.max(cell.measure_height()?))
                    })
            })
            .collect()
    }
}

impl Element for GridContainer {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(self.horizontal.size(&self.column_widths()?))
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(self.vertical.size(&self.row_heights()?))
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let _guard = hcpdf_core::debug_span!(
            "grid.paint",
            rows = self.rows.len(),
            columns = self.columns
        )
        .entered();
        let mut columns = self
            .horizontal
            .apply(Axis::Horizontal.space(area), &self.column_widths()?);
        let mut rows = self
            .vertical
            .apply(Axis::Vertical.space(area), &self.row_heights()?);
        while let Some(row) = rows.next_result() {
            columns.reset();
            while let Some(column) = columns.next_result() {
                let cell = Rect::from_edges(column.low, row.low, column.high, row.high);
                self.rows[row.index][column.index].paint(canvas, cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Probe, approx};
    use hcpdf_render::RecordingCanvas;

    type Cells = Vec<Vec<Box<dyn Element>>>;

    fn grid_of(rows: usize, columns: usize, size: (f32, f32)) -> (Vec<Vec<Probe>>, Cells) {
        let probes: Vec<Vec<Probe>> = (0..rows)
            .map(|_| (0..columns).map(|_| Probe::new(size.0, size.1)).collect())
            .collect();
        let boxed = probes
            .iter()
            .map(|row| row.iter().cloned().map(Element::boxed).collect())
            .collect();
        (probes, boxed)
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![
            vec![Probe::new(1.0, 1.0).boxed(), Probe::new(1.0, 1.0).boxed()],
            vec![Probe::new(1.0, 1.0).boxed()],
        ];
        assert_eq!(
            GridContainer::uniform(Layout::flow(), rows).unwrap_err(),
            BuildError::RaggedGrid {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn measures_per_track_maxima() {
        let rows = vec![
            vec![Probe::new(10.0, 1.0).boxed(), Probe::new(5.0, 7.0).boxed()],
            vec![Probe::new(3.0, 2.0).boxed(), Probe::new(20.0, 4.0).boxed()],
        ];
        let grid = GridContainer::new(
            Layout::flow_spaced(1.0).unwrap(),
            Layout::flow_spaced(2.0).unwrap(),
            rows,
        )
        .unwrap();
        assert_eq!(grid.measure_width().unwrap(), 10.0 + 1.0 + 20.0);
        assert_eq!(grid.measure_height().unwrap(), 7.0 + 2.0 + 4.0);
    }

    #[test]
    fn split_places_each_cell_in_its_slice() {
        let (probes, rows) = grid_of(2, 3, (5.0, 5.0));
        let grid = GridContainer::uniform(Layout::split(), rows).unwrap();
        assert_eq!(grid.measure_width().unwrap(), 15.0);
        assert_eq!(grid.measure_height().unwrap(), 10.0);

        let area = Rect::new(30.0, 60.0, 90.0, 40.0);
        grid.paint(&mut RecordingCanvas::new(), area).unwrap();
        for (r, row) in probes.iter().enumerate() {
            for (c, probe) in row.iter().enumerate() {
                let expected = Rect::new(
                    30.0 + 30.0 * c as f32,
                    100.0 - 20.0 * (r + 1) as f32,
                    30.0,
                    20.0,
                );
                let painted = probe.only().unwrap();
                assert!(approx(painted, expected), "cell ({r},{c}): {painted:?}");
            }
        }
    }

    #[test]
    fn clipped_rows_are_not_painted() {
        let (probes, rows) = grid_of(3, 1, (10.0, 10.0));
        let grid = GridContainer::uniform(Layout::flow(), rows).unwrap();
        grid.paint(&mut RecordingCanvas::new(), Rect::new(0.0, 0.0, 10.0, 15.0))
            .unwrap();
        assert_eq!(probes[0][0].only(), Some(Rect::new(0.0, 5.0, 10.0, 10.0)));
        assert_eq!(probes[1][0].only(), Some(Rect::new(0.0, 0.0, 10.0, 5.0)));
        assert!(probes[2][0].painted().is_empty());
    }

    #[test]
    fn empty_grid() {
        let grid = GridContainer::uniform(Layout::flow(), Vec::new()).unwrap();
        assert_eq!(grid.column_count(), 0);
        assert_eq!(grid.measure_width().unwrap(), 0.0);
        grid.paint(&mut RecordingCanvas::new(), Rect::new(0.0, 0.0, 1.0, 1.0))
            .unwrap();
    }
}
