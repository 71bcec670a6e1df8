#![forbid(unsafe_code)]

//! One-dimensional layout algorithms.
//!
//! A [`Layout`] is independent of the axis it runs on. Containers hand it
//! either the widths or the heights of their children together with a
//! [`LayoutSpace`], and read the assigned intervals back from the returned
//! [`LayoutResults`].
//!
//! | Kind | Natural size | Distribution |
//! |---|---|---|
//! | [`LayoutKind::Flow`] | sum + spacing | preferred sizes; the overrunning element is clipped and iteration stops |
//! | [`LayoutKind::Split`] | count × max + spacing | equal shares, preferred sizes ignored |
//! | [`LayoutKind::Stretch`] | sum + spacing | preferred sizes scaled by one common factor to fill the space |

pub mod results;
pub mod space;

pub use hcpdf_core::BuildError;
pub use results::{LayoutResult, LayoutResults, LayoutStateError};
pub use space::LayoutSpace;

use hcpdf_core::error::non_negative;
use results::Overflow;

/// The distribution strategy of a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutKind {
    /// Preferred sizes, clipped at the end of the space.
    #[default]
    Flow,
    /// Equal shares.
    Split,
    /// Preferred sizes scaled to fill the space exactly.
    Stretch,
}

/// A one-dimensional layout with uniform spacing between adjacent elements.
///
/// Immutable; one instance may serve any number of containers and axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    kind: LayoutKind,
    spacing: f32,
}

impl Layout {
    /// Create a layout of the given kind with the given spacing.
    ///
    /// Fails if `spacing` is negative or NaN.
    pub fn new(kind: LayoutKind, spacing: f32) -> Result<Self, BuildError> {
        Ok(Self {
            kind,
            spacing: non_negative("spacing", spacing)?,
        })
    }

    /// Flow layout without spacing.
    pub const fn flow() -> Self {
        Self {
            kind: LayoutKind::Flow,
            spacing: 0.0,
        }
    }

    /// Split layout without spacing.
    pub const fn split() -> Self {
        Self {
            kind: LayoutKind::Split,
            spacing: 0.0,
        }
    }

    /// Stretch layout without spacing.
    pub const fn stretch() -> Self {
        Self {
            kind: LayoutKind::Stretch,
            spacing: 0.0,
        }
    }

    pub fn flow_spaced(spacing: f32) -> Result<Self, BuildError> {
        Self::new(LayoutKind::Flow, spacing)
    }

    pub fn split_spaced(spacing: f32) -> Result<Self, BuildError> {
        Self::new(LayoutKind::Split, spacing)
    }

    pub fn stretch_spaced(spacing: f32) -> Result<Self, BuildError> {
        Self::new(LayoutKind::Stretch, spacing)
    }

    #[inline]
    pub const fn kind(&self) -> LayoutKind {
        self.kind
    }

    #[inline]
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Spacing between `count` elements: `(count - 1) * spacing`, or zero.
    pub fn total_spacing(&self, count: usize) -> f32 {
        if count == 0 {
            0.0
        } else {
            (count - 1) as f32 * self.spacing
        }
    }

    /// Total length this layout needs to place `sizes` unconstrained.
    pub fn size(&self, sizes: &[f32]) -> f32 {
        let spacing = self.total_spacing(sizes.len());
        match self.kind {
            LayoutKind::Flow | LayoutKind::Stretch => total_size(sizes) + spacing,
            LayoutKind::Split => sizes.len() as f32 * max_size(sizes) + spacing,
        }
    }

    /// Place `sizes` inside `space`.
    pub fn apply(&self, space: LayoutSpace, sizes: &[f32]) -> LayoutResults {
        match self.kind {
            LayoutKind::Flow => {
                LayoutResults::new(space, self.spacing, sizes.to_vec(), Overflow::Clip)
            }
            LayoutKind::Split => self.apply_split(space, sizes.len()),
            LayoutKind::Stretch => self.apply_stretch(space, sizes),
        }
    }

    fn apply_split(&self, space: LayoutSpace, count: usize) -> LayoutResults {
        let spacing = self.total_spacing(count);
        if count == 0 || spacing >= space.length() {
            hcpdf_core::trace!(count, "split: no room left after spacing");
            return LayoutResults::empty(space);
        }
        let share = (space.length() - spacing) / count as f32;
        LayoutResults::new(space, self.spacing, vec![share; count], Overflow::Emit)
    }

    fn apply_stretch(&self, space: LayoutSpace, sizes: &[f32]) -> LayoutResults {
        let spacing = self.total_spacing(sizes.len());
        if sizes.is_empty() || spacing >= space.length() {
            hcpdf_core::trace!(count = sizes.len(), "stretch: no room left after spacing");
            return LayoutResults::empty(space);
        }
        let available = space.length() - spacing;
        let total = total_size(sizes);
        let scaled = if total == 0.0 {
            vec![available / sizes.len() as f32; sizes.len()]
        } else if total.is_infinite() {
            let infinite = sizes.iter().filter(|s| s.is_infinite()).count();
            let share = available / infinite as f32;
            sizes
                .iter()
                .map(|s| if s.is_infinite() { share } else { 0.0 })
                .collect()
        } else {
            let factor = available / total;
            sizes.iter().map(|s| s * factor).collect()
        };
        LayoutResults::new(space, self.spacing, scaled, Overflow::Emit)
    }
}

fn total_size(sizes: &[f32]) -> f32 {
    sizes.iter().sum()
}

fn max_size(sizes: &[f32]) -> f32 {
    sizes.iter().copied().fold(0.0, f32::max)
}
