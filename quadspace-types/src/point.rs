use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the integer plane.
///
/// Coordinates follow a Y-down convention: "north" is the direction of
/// decreasing `y`.
///
/// # Examples
///
/// ```
/// use quadspace_types::point::Point;
///
/// let p = Point::new(3, -4);
/// assert_eq!(p.x, 3);
/// assert_eq!(p.y, -4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    pub const fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Return this point shifted by `(dx, dy)`, or `None` on overflow.
    pub fn checked_offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<geo::Coord<i32>> for Point {
    fn from(c: geo::Coord<i32>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<Point> for geo::Coord<i32> {
    fn from(p: Point) -> Self {
        geo::coord! { x: p.x, y: p.y }
    }
}

impl From<geo::Point<i32>> for Point {
    fn from(p: geo::Point<i32>) -> Self {
        Self::new(p.x(), p.y())
    }
}

impl From<Point> for geo::Point<i32> {
    fn from(p: Point) -> Self {
        geo::Point::new(p.x, p.y)
    }
}
