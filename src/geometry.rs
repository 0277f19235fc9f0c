//! Integer pixel geometry for the icon artwork.
//!
//! Coordinates are signed so that shapes may start left of or above the
//! canvas origin; the drawing surface clips anything outside the raster.

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPx {
    pub x: i32,
    pub y: i32,
}

impl PointPx {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Reflects the point across the vertical line `x = axis`.
    pub const fn mirror_x(self, axis: i32) -> Self {
        Self {
            x: 2 * axis - self.x,
            y: self.y,
        }
    }
}

/// A rectangle given by its left, top, right and bottom edges.
///
/// Used as the bounding box of ellipses and rounded rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectPx {
    /// Creates a rectangle from its four edges.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Returns true if the rectangle encloses no area.
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Scales an integer length by `factor`, truncating towards zero.
pub fn scale(length: i32, factor: f64) -> i32 {
    (f64::from(length) * factor) as i32
}
