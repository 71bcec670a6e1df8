//! Conversion between physical units and PDF default user-space units.
//!
//! One default user-space unit is 1/72 inch (a PostScript point).

/// Default user-space units (points) per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Millimetres per inch.
pub const MILLIMETERS_PER_INCH: f32 = 25.4;

#[inline]
pub fn points_from_inches(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

#[inline]
pub fn inches_from_points(points: f32) -> f32 {
    points / POINTS_PER_INCH
}

#[inline]
pub fn points_from_millimeters(millimeters: f32) -> f32 {
    millimeters / MILLIMETERS_PER_INCH * POINTS_PER_INCH
}

#[inline]
pub fn millimeters_from_points(points: f32) -> f32 {
    points / POINTS_PER_INCH * MILLIMETERS_PER_INCH
}
