//! Tables: sparse grids whose cells may span several tracks.
//!
//! A [`TableContainer`] places each [`TablePosition`] at a column `x` and a
//! row `y` (row 0 at the top), covering `horizontal_span` columns and
//! `vertical_span` rows.
//!
//! Track sizes are computed per axis in two passes:
//!
//! 1. Every position spanning exactly one track raises that track to its
//!    preferred size.
//! 2. Every spanning position whose preferred size exceeds the sum of the
//!    tracks it covers distributes the shortfall over those tracks according
//!    to the axis' [`SpanPolicy`].
//!
//! A [`Span::Remaining`] position extends to the last track of the table when
//! painted, but for sizing it only covers its first track.
//!
//! Positions paint in registration order, so later positions are drawn over
//! earlier ones where they overlap.

use std::fmt;
use std::io;

use hcpdf_core::{BuildError, Rect};
use hcpdf_layout::{Layout, LayoutResults};
use hcpdf_render::Canvas;

use crate::Element;
use crate::sequential::Axis;

/// How many tracks a position covers along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Span {
    /// A fixed number of tracks, at least one.
    Tracks(usize),
    /// Through the last track of the table.
    Remaining,
}

impl Default for Span {
    fn default() -> Self {
        Self::Tracks(1)
    }
}

impl Span {
    fn validate(self, axis: &'static str) -> Result<Self, BuildError> {
        match self {
            Self::Tracks(0) => Err(BuildError::InvalidSpan { axis, span: 0 }),
            _ => Ok(self),
        }
    }

    /// Last track covered for sizing purposes.
    fn sizing_end(self, start: usize) -> usize {
        match self {
            Self::Tracks(n) => start + n.saturating_sub(1),
            Self::Remaining => start,
        }
    }

    /// Last track covered when painting a table with `count` tracks.
    fn paint_end(self, start: usize, count: usize) -> usize {
        match self {
            Self::Tracks(_) => self.sizing_end(start),
            Self::Remaining => count.saturating_sub(1).max(start),
        }
    }

    fn spans(self) -> bool {
        !matches!(self, Self::Tracks(1))
    }
}

/// How a spanning position's shortfall is shared among its tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpanPolicy {
    /// Every track gets the same amount.
    Equal,
    /// Each track gets an amount proportional to its current size. Falls back
    /// to [`SpanPolicy::Equal`] when all covered tracks are empty.
    #[default]
    Proportional,
}

/// Policy used when none is configured.
pub const DEFAULT_SPAN_POLICY: SpanPolicy = SpanPolicy::Proportional;

impl SpanPolicy {
    /// Grow `sizes[start..=end]` so that they sum to at least `target`.
    pub fn adjust(self, sizes: &mut [f32], target: f32, start: usize, end: usize) {
        let tracks = &mut sizes[start..=end];
        let total: f32 = tracks.iter().sum();
        let extra = target - total;
        if extra.is_nan() || extra <= 0.0 {
            return;
        }
        match self {
            Self::Proportional if total != 0.0 => {
                for size in tracks.iter_mut() {
                    *size += extra * *size / total;
                }
            }
            Self::Equal | Self::Proportional => {
                let share = extra / tracks.len() as f32;
                for size in tracks.iter_mut() {
                    *size += share;
                }
            }
        }
    }
}

/// An element anchored at a table cell.
pub struct TablePosition {
    element: Box<dyn Element>,
    x: usize,
    y: usize,
    horizontal_span: Span,
    vertical_span: Span,
}

impl fmt::Debug for TablePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TablePosition")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("horizontal_span", &self.horizontal_span)
            .field("vertical_span", &self.vertical_span)
            .finish_non_exhaustive()
    }
}

impl TablePosition {
    /// Fails if a span is `Tracks(0)`.
    pub fn new(
        element: impl Element + 'static,
        x: usize,
        y: usize,
        horizontal_span: Span,
        vertical_span: Span,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            element: element.boxed(),
            x,
            y,
            horizontal_span: horizontal_span.validate("horizontal")?,
            vertical_span: vertical_span.validate("vertical")?,
        })
    }

    /// A single cell.
    pub fn cell(element: impl Element + 'static, x: usize, y: usize) -> Self {
        Self {
            element: element.boxed(),
            x,
            y,
            horizontal_span: Span::Tracks(1),
            vertical_span: Span::Tracks(1),
        }
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    #[inline]
    pub fn horizontal_span(&self) -> Span {
        self.horizontal_span
    }

    #[inline]
    pub fn vertical_span(&self) -> Span {
        self.vertical_span
    }

    fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Horizontal => self.horizontal_span,
            Axis::Vertical => self.vertical_span,
        }
    }

    fn measure(&self, axis: Axis) -> io::Result<f32> {
        match axis {
            Axis::Horizontal => self.element.measure_width(),
            Axis::Vertical => self.element.measure_height(),
        }
    }
}

// =========================================================================
// Builder
// =========================================================================

struct Pending {
    element: Box<dyn Element>,
    x: usize,
    y: usize,
    horizontal_span: Span,
    vertical_span: Span,
}

/// Collects positions and settings for a [`TableContainer`].
///
/// Spans are validated by [`build`](Self::build), which reports the first
/// invalid position in registration order.
pub struct TableContainerBuilder {
    horizontal_layout: Layout,
    vertical_layout: Layout,
    horizontal_policy: SpanPolicy,
    vertical_policy: SpanPolicy,
    positions: Vec<Pending>,
}

impl fmt::Debug for TableContainerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableContainerBuilder")
            .field("horizontal_layout", &self.horizontal_layout)
            .field("vertical_layout", &self.vertical_layout)
            .field("horizontal_policy", &self.horizontal_policy)
            .field("vertical_policy", &self.vertical_policy)
            .field("positions", &self.positions.len())
            .finish()
    }
}

impl TableContainerBuilder {
    fn new(horizontal_layout: Layout, vertical_layout: Layout) -> Self {
        Self {
            horizontal_layout,
            vertical_layout,
            horizontal_policy: DEFAULT_SPAN_POLICY,
            vertical_policy: DEFAULT_SPAN_POLICY,
            positions: Vec::new(),
        }
    }

    /// Use `layout` on both axes.
    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.horizontal_layout = layout;
        self.vertical_layout = layout;
        self
    }

    #[must_use]
    pub fn horizontal_layout(mut self, layout: Layout) -> Self {
        self.horizontal_layout = layout;
        self
    }

    #[must_use]
    pub fn vertical_layout(mut self, layout: Layout) -> Self {
        self.vertical_layout = layout;
        self
    }

    /// Use `policy` on both axes.
    #[must_use]
    pub fn distribution_policy(mut self, policy: SpanPolicy) -> Self {
        self.horizontal_policy = policy;
        self.vertical_policy = policy;
        self
    }

    #[must_use]
    pub fn horizontal_policy(mut self, policy: SpanPolicy) -> Self {
        self.horizontal_policy = policy;
        self
    }

    #[must_use]
    pub fn vertical_policy(mut self, policy: SpanPolicy) -> Self {
        self.vertical_policy = policy;
        self
    }

    /// Add an element at `(x, y)` with arbitrary spans.
    #[must_use]
    pub fn position(
        mut self,
        element: impl Element + 'static,
        x: usize,
        y: usize,
        horizontal_span: Span,
        vertical_span: Span,
    ) -> Self {
        self.positions.push(Pending {
            element: element.boxed(),
            x,
            y,
            horizontal_span,
            vertical_span,
        });
        self
    }

    /// Add an element occupying the single cell `(x, y)`.
    #[must_use]
    pub fn cell(self, element: impl Element + 'static, x: usize, y: usize) -> Self {
        self.position(element, x, y, Span::Tracks(1), Span::Tracks(1))
    }

    /// Add an element covering `columns x rows` cells from `(x, y)`.
    #[must_use]
    pub fn spanning(
        self,
        element: impl Element + 'static,
        x: usize,
        y: usize,
        columns: usize,
        rows: usize,
    ) -> Self {
        self.position(element, x, y, Span::Tracks(columns), Span::Tracks(rows))
    }

    /// Add an element reaching from `(x, y)` to the last column and row.
    #[must_use]
    pub fn remaining(self, element: impl Element + 'static, x: usize, y: usize) -> Self {
        self.position(element, x, y, Span::Remaining, Span::Remaining)
    }

    /// Add a prebuilt position.
    #[must_use]
    pub fn add(mut self, position: TablePosition) -> Self {
        self.positions.push(Pending {
            element: position.element,
            x: position.x,
            y: position.y,
            horizontal_span: position.horizontal_span,
            vertical_span: position.vertical_span,
        });
        self
    }

    /// Add a block of single cells with its top-left corner at `(x, y)`.
    /// `None` entries leave their cell free.
    #[must_use]
    pub fn elements(mut self, rows: Vec<Vec<Option<Box<dyn Element>>>>, x: usize, y: usize) -> Self {
        for (dy, row) in rows.into_iter().enumerate() {
            for (dx, element) in row.into_iter().enumerate() {
                if let Some(element) = element {
                    self = self.cell(element, x + dx, y + dy);
                }
            }
        }
        self
    }

    pub fn build(self) -> Result<TableContainer, BuildError> {
        let positions = self
            .positions
            .into_iter()
            .map(|p| {
                Ok(TablePosition {
                    element: p.element,
                    x: p.x,
                    y: p.y,
                    horizontal_span: p.horizontal_span.validate("horizontal")?,
                    vertical_span: p.vertical_span.validate("vertical")?,
                })
            })
            .collect::<Result<Vec<_>, BuildError>>()?;
        let columns = track_count(&positions, Axis::Horizontal);
        let rows = track_count(&positions, Axis::Vertical);
        Ok(TableContainer {
            horizontal_layout: self.horizontal_layout,
            vertical_layout: self.vertical_layout,
            horizontal_policy: self.horizontal_policy,
            vertical_policy: self.vertical_policy,
            positions,
            columns,
            rows,
        })
    }
}

fn track_count(positions: &[TablePosition], axis: Axis) -> usize {
    positions
        .iter()
        .map(|p| p.span(axis).sizing_end(p.start(axis)) + 1)
        .max()
        .unwrap_or(0)
}

// =========================================================================
// TableContainer
// =========================================================================

/// A grid of sparse, possibly spanning, positions.
pub struct TableContainer {
    horizontal_layout: Layout,
    vertical_layout: Layout,
    horizontal_policy: SpanPolicy,
    vertical_policy: SpanPolicy,
    positions: Vec<TablePosition>,
    columns: usize,
    rows: usize,
}

impl fmt::Debug for TableContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableContainer")
            .field("horizontal_layout", &self.horizontal_layout)
            .field("vertical_layout", &self.vertical_layout)
            .field("horizontal_policy", &self.horizontal_policy)
            .field("vertical_policy", &self.vertical_policy)
            .field("positions", &self.positions)
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .finish()
    }
}

impl TableContainer {
    /// Start a table with `layout` on both axes.
    pub fn builder(layout: Layout) -> TableContainerBuilder {
        TableContainerBuilder::new(layout, layout)
    }

    /// Start a table with separate column and row layouts.
    pub fn builder_with(horizontal: Layout, vertical: Layout) -> TableContainerBuilder {
        TableContainerBuilder::new(horizontal, vertical)
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn positions(&self) -> &[TablePosition] {
        &self.positions
    }

    /// Column widths after span redistribution.
    pub fn column_widths(&self) -> io::Result<Vec<f32>> {
        self.track_sizes(Axis::Horizontal)
    }

    /// Row heights after span redistribution, top row first.
    pub fn row_heights(&self) -> io::Result<Vec<f32>> {
        self.track_sizes(Axis::Vertical)
    }

    fn axis_parts(&self, axis: Axis) -> (Layout, SpanPolicy, usize) {
        match axis {
            Axis::Horizontal => (self.horizontal_layout, self.horizontal_policy, self.columns),
            Axis::Vertical => (self.vertical_layout, self.vertical_policy, self.rows),
        }
    }

    fn track_sizes(&self, axis: Axis) -> io::Result<Vec<f32>> {
        let (_, policy, count) = self.axis_parts(axis);
        let mut sizes = vec![0.0f32; count];
        for position in self.positions.iter().filter(|p| !p.span(axis).spans()) {
            let index = position.start(axis);
            sizes[index] = sizes[index].max(position.measure(axis)?);
        }
        for position in self.positions.iter().filter(|p| p.span(axis).spans()) {
            let start = position.start(axis);
            let end = position.span(axis).sizing_end(start);
            policy.adjust(&mut sizes, position.measure(axis)?, start, end);
        }
        Ok(sizes)
    }

    /// Emitted interval of every track, `None` for tracks the layout dropped.
    fn track_intervals(&self, axis: Axis, area: Rect) -> io::Result<Vec<Option<(f32, f32)>>> {
        let (layout, _, count) = self.axis_parts(axis);
        let sizes = self.track_sizes(axis)?;
        let mut results: LayoutResults = layout.apply(axis.space(area), &sizes);
        let mut intervals = vec![None; count];
        while let Some(result) = results.next_result() {
            intervals[result.index] = Some((result.low, result.high));
        }
        Ok(intervals)
    }

    /// Combined interval from the first to the last emitted covered track.
    fn covered(
        intervals: &[Option<(f32, f32)>],
        start: usize,
        end: usize,
    ) -> Option<(f32, f32)> {
        let first = intervals.get(start).copied().flatten()?;
        let last = intervals[start..=end.min(intervals.len() - 1)]
            .iter()
            .rev()
            .find_map(|interval| *interval)
            .unwrap_or(first);
        Some((first.0.min(last.0), first.1.max(last.1)))
    }
}

impl Element for TableContainer {
    fn measure_width(&self) -> io::Result<f32> {
        Ok(self.horizontal_layout.size(&self.column_widths()?))
    }

    fn measure_height(&self) -> io::Result<f32> {
        Ok(self.vertical_layout.size(&self.row_heights()?))
    }

    fn paint(&self, canvas: &mut dyn Canvas, area: Rect) -> io::Result<()> {
        let _guard = hcpdf_core::debug_span!(
            "table.paint",
            columns = self.columns,
            rows = self.rows,
            positions = self.positions.len()
        )
        .entered();
        let columns = self.track_intervals(Axis::Horizontal, area)?;
        let rows = self.track_intervals(Axis::Vertical, area)?;
        for position in &self.positions {
            let x_end = position.horizontal_span.paint_end(position.x, self.columns);
            let y_end = position.vertical_span.paint_end(position.y, self.rows);
            let (Some((left, right)), Some((bottom, top))) = (
                Self::covered(&columns, position.x, x_end),
                Self::covered(&rows, position.y, y_end),
            ) else {
                hcpdf_core::trace!(
                    x = position.x,
                    y = position.y,
                    "table: position outside emitted tracks"
                );
                continue;
            };
            position
                .element
                .paint(canvas, Rect::from_edges(left, bottom, right, top))?;
        }
        Ok(())
    }
}
