#![forbid(unsafe_code)]

//! Core: geometry, construction-time validation, and logging.
//!
//! # Role in hcpdf
//! `hcpdf-core` holds the value types every other crate agrees on. Rectangles
//! live in page space (points, y increasing upward), so the layout and widget
//! crates never convert between coordinate systems.
//!
//! # Primary responsibilities
//! - **Rect / Sides / Transform**: page-space geometry.
//! - **BuildError**: the single error type for rejected constructor arguments.
//! - **units**: inch and millimetre conversion.
//! - **logging**: `tracing` re-exports, or no-op macros when the feature is off.

pub mod error;
pub mod geometry;
pub mod logging;
pub mod units;

pub use error::BuildError;
pub use geometry::{Rect, Sides, Transform};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
