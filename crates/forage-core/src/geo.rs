//! Planar coordinate type and the geometric primitives the scanner needs.
//!
//! `Point` uses `f64` throughout.  Walk geometry is never stored in bulk
//! arrays, and the segment scanner divides by slopes arbitrarily close to
//! the steepness threshold, so the extra precision is worth far more than
//! the memory it costs.

/// A 2-D Cartesian coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Rotate this point about the origin by `angle` radians
    /// (counter-clockwise).
    pub fn rotate(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Slope of the line through `self` and `other`.
    ///
    /// Returns `±∞` for vertical segments and `NaN` when the points
    /// coincide; callers that care must test `is_finite()` before dividing.
    #[inline]
    pub fn slope_to(self, other: Point) -> f64 {
        (other.y - self.y) / (other.x - self.x)
    }

    /// The same point with x and y exchanged.  Used by the segment scanner
    /// to normalize steep segments into shallow ones.
    #[inline]
    pub fn swapped(self) -> Point {
        Point { x: self.y, y: self.x }
    }

    /// Displace by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }
}

/// The y-intercept of the line with `slope` passing through `point`.
#[inline]
pub fn intercept_from_slope(slope: f64, point: Point) -> f64 {
    point.y - slope * point.x
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.x, self.y)
    }
}
