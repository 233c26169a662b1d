use crate::point::Point;
use geo::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle on the integer plane.
///
/// The rectangle is half-open: it covers
/// `[origin.x, origin.x + width) × [origin.y, origin.y + height)`.
/// Points on the max edges belong to the neighbouring rectangle, which is
/// what lets the four quadrants of a split tile their parent exactly.
///
/// Edges are reported as `i64` so `origin + width` never overflows.
///
/// # Examples
///
/// ```
/// use quadspace_types::boundary::Boundary;
/// use quadspace_types::point::Point;
///
/// let b = Boundary::from_xywh(0, 0, 10, 10);
/// assert!(b.contains_point(&Point::new(0, 0)));
/// assert!(b.contains_point(&Point::new(9, 9)));
/// assert!(!b.contains_point(&Point::new(10, 5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Boundary {
    /// Top-left corner (smallest x and y)
    pub origin: Point,
    pub width: u32,
    pub height: u32,
}

impl Boundary {
    /// Create a boundary from its top-left corner and extent.
    pub const fn new(origin: Point, width: u32, height: u32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Create a boundary from raw `x`, `y`, `width`, `height` values.
    pub const fn from_xywh(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(Point::new(x, y), width, height)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Smallest x covered (inclusive).
    pub fn min_x(&self) -> i64 {
        i64::from(self.origin.x)
    }

    /// Smallest y covered (inclusive).
    pub fn min_y(&self) -> i64 {
        i64::from(self.origin.y)
    }

    /// Right edge (exclusive).
    pub fn max_x(&self) -> i64 {
        self.min_x() + i64::from(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn max_y(&self) -> i64 {
        self.min_y() + i64::from(self.height)
    }

    /// Number of integer points covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True when the boundary covers no points at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when every edge of this boundary is a valid `i32` coordinate
    /// (the exclusive max edges may sit one past `i32::MAX`).
    pub fn fits_i32_plane(&self) -> bool {
        let limit = i64::from(i32::MAX) + 1;
        self.max_x() <= limit && self.max_y() <= limit
    }

    /// Check whether `point` lies inside this half-open rectangle.
    #[inline]
    pub fn contains_point(&self, point: &Point) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        x >= self.min_x() && x < self.max_x() && y >= self.min_y() && y < self.max_y()
    }

    /// Check whether two half-open rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect, and an empty
    /// rectangle intersects nothing.
    #[inline]
    pub fn intersects(&self, other: &Boundary) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        !(self.min_x() >= other.max_x()
            || other.min_x() >= self.max_x()
            || self.min_y() >= other.max_y()
            || other.min_y() >= self.max_y())
    }

    /// Whether splitting this boundary can separate two distinct points.
    ///
    /// A 1×1 (or empty) boundary splits into a copy of itself plus empty
    /// quadrants, so subdividing it would never make progress.
    pub fn is_divisible(&self) -> bool {
        !self.is_empty() && (self.width >= 2 || self.height >= 2)
    }

    /// Split into four quadrants, in the order NW, NE, SW, SE.
    ///
    /// West quadrants get `floor(width / 2)` columns and east quadrants the
    /// rest; north quadrants get `floor(height / 2)` rows and south quadrants
    /// the rest. On odd extents the east/south side is one larger. The four
    /// results never overlap and their union is exactly `self`.
    pub fn quadrants(&self) -> [Boundary; 4] {
        let w = self.width / 2;
        let h = self.height / 2;
        let east_w = self.width - w;
        let south_h = self.height - h;

        let (x, y) = (self.origin.x, self.origin.y);
        let mid_x = offset(x, w);
        let mid_y = offset(y, h);

        [
            Boundary::from_xywh(x, y, w, h),
            Boundary::from_xywh(mid_x, y, east_w, h),
            Boundary::from_xywh(x, mid_y, w, south_h),
            Boundary::from_xywh(mid_x, mid_y, east_w, south_h),
        ]
    }

    /// Convert to a `geo::Rect` spanning the exclusive max corner.
    pub fn to_rect(&self) -> Rect<i64> {
        Rect::new(
            geo::coord! { x: self.min_x(), y: self.min_y() },
            geo::coord! { x: self.max_x(), y: self.max_y() },
        )
    }
}

fn offset(base: i32, by: u32) -> i32 {
    let shifted = i64::from(base) + i64::from(by);
    i32::try_from(shifted).unwrap_or(i32::MAX)
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}x{}", self.origin, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn covering(quads: &[Boundary; 4], p: &Point) -> usize {
        quads.iter().filter(|q| q.contains_point(p)).count()
    }

    #[test]
    fn test_boundary_edges() {
        let b = Boundary::from_xywh(-3, 4, 10, 5);
        assert_eq!(b.min_x(), -3);
        assert_eq!(b.min_y(), 4);
        assert_eq!(b.max_x(), 7);
        assert_eq!(b.max_y(), 9);
        assert_eq!(b.area(), 50);
        assert!(!b.is_empty());
        assert!(Boundary::from_xywh(0, 0, 0, 5).is_empty());
    }

    #[test]
    fn test_contains_point() {
        let b = Boundary::from_xywh(0, 0, 10, 10);
        let cases = [
            (Point::new(-1, -1), false),
            (Point::new(0, 0), true),
            (Point::new(5, 20), false),
            (Point::new(3, 4), true),
            (Point::new(9, 9), true),
            (Point::new(10, 10), false),
            (Point::new(10, 0), false),
            (Point::new(0, 10), false),
        ];

        for (p, expected) in cases {
            assert_eq!(b.contains_point(&p), expected, "point {}", p);
        }
    }

    #[test]
    fn test_contains_point_near_edges_randomized() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let b = Boundary::from_xywh(
                rng.gen_range(-50..50),
                rng.gen_range(-50..50),
                rng.gen_range(0..20),
                rng.gen_range(0..20),
            );
            let xs = [b.min_x() - 1, b.min_x(), b.max_x() - 1, b.max_x()];
            let ys = [b.min_y() - 1, b.min_y(), b.max_y() - 1, b.max_y()];
            let mid_x = (b.min_x() + b.max_x()) / 2;
            let mid_y = (b.min_y() + b.max_y()) / 2;

            for &x in xs.iter().chain(std::iter::once(&mid_x)) {
                for &y in ys.iter().chain(std::iter::once(&mid_y)) {
                    let p = Point::new(x as i32, y as i32);
                    let expected =
                        b.min_x() <= x && x < b.max_x() && b.min_y() <= y && y < b.max_y();
                    assert_eq!(b.contains_point(&p), expected, "{} in {}", p, b);
                }
            }
        }
    }

    #[test]
    fn test_intersects() {
        let a = Boundary::from_xywh(0, 0, 10, 10);
        let b = Boundary::from_xywh(5, 5, 10, 10);
        let c = Boundary::from_xywh(20, 20, 10, 10);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Boundary::from_xywh(0, 0, 10, 10);
        let right = Boundary::from_xywh(10, 0, 5, 10);
        let below = Boundary::from_xywh(0, 10, 10, 5);
        let corner = Boundary::from_xywh(10, 10, 5, 5);

        for other in [right, below, corner] {
            assert!(!a.intersects(&other));
            assert!(!other.intersects(&a));
        }

        let overlap_by_one = Boundary::from_xywh(9, 9, 5, 5);
        assert!(a.intersects(&overlap_by_one));
    }

    #[test]
    fn test_empty_intersects_nothing() {
        let a = Boundary::from_xywh(0, 0, 10, 10);
        let empty = Boundary::from_xywh(5, 5, 0, 3);
        assert!(!a.intersects(&empty));
        assert!(!empty.intersects(&a));
    }

    #[test]
    fn test_intersects_symmetric_randomized() {
        fn random_box(rng: &mut StdRng) -> Boundary {
            Boundary::from_xywh(
                rng.gen_range(-20..20),
                rng.gen_range(-20..20),
                rng.gen_range(0..15),
                rng.gen_range(0..15),
            )
        }

        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..500 {
            let a = random_box(&mut rng);
            let b = random_box(&mut rng);
            assert_eq!(a.intersects(&b), b.intersects(&a), "{} vs {}", a, b);

            // Overlap iff some integer point lies in both
            let shared = (a.min_x().max(b.min_x())..a.max_x().min(b.max_x())).any(|x| {
                (a.min_y().max(b.min_y())..a.max_y().min(b.max_y()))
                    .any(|y| {
                        let p = Point::new(x as i32, y as i32);
                        a.contains_point(&p) && b.contains_point(&p)
                    })
            });
            assert_eq!(a.intersects(&b), shared, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_quadrants_even() {
        let b = Boundary::from_xywh(0, 0, 20, 10);
        let [nw, ne, sw, se] = b.quadrants();

        assert_eq!(nw, Boundary::from_xywh(0, 0, 10, 5));
        assert_eq!(ne, Boundary::from_xywh(10, 0, 10, 5));
        assert_eq!(sw, Boundary::from_xywh(0, 5, 10, 5));
        assert_eq!(se, Boundary::from_xywh(10, 5, 10, 5));
    }

    #[test]
    fn test_quadrants_odd_gives_east_south_the_remainder() {
        let b = Boundary::from_xywh(2, 3, 5, 7);
        let [nw, ne, sw, se] = b.quadrants();

        assert_eq!(nw.width + ne.width, 5);
        assert_eq!(sw.width + se.width, 5);
        assert_eq!(nw.height + sw.height, 7);
        assert_eq!(ne.height + se.height, 7);
        assert_eq!(ne.width, 3);
        assert_eq!(se.height, 4);
    }

    #[test]
    fn test_quadrants_partition_exactly() {
        for width in 1..=9u32 {
            for height in 1..=9u32 {
                let b = Boundary::from_xywh(-4, 6, width, height);
                let quads = b.quadrants();

                let total: u64 = quads.iter().map(|q| q.area()).sum();
                assert_eq!(total, b.area(), "{}", b);

                for x in b.min_x() - 1..=b.max_x() {
                    for y in b.min_y() - 1..=b.max_y() {
                        let p = Point::new(x as i32, y as i32);
                        let expected = usize::from(b.contains_point(&p));
                        assert_eq!(covering(&quads, &p), expected, "{} in {}", p, b);
                    }
                }
            }
        }
    }

    #[test]
    fn test_is_divisible() {
        assert!(Boundary::from_xywh(0, 0, 2, 1).is_divisible());
        assert!(Boundary::from_xywh(0, 0, 1, 2).is_divisible());
        assert!(!Boundary::from_xywh(0, 0, 1, 1).is_divisible());
        assert!(!Boundary::from_xywh(0, 0, 0, 8).is_divisible());
    }

    #[test]
    fn test_fits_i32_plane() {
        assert!(Boundary::from_xywh(i32::MAX, 0, 1, 1).fits_i32_plane());
        assert!(!Boundary::from_xywh(i32::MAX, 0, 2, 1).fits_i32_plane());
        assert!(Boundary::from_xywh(i32::MIN, i32::MIN, u32::MAX, u32::MAX).fits_i32_plane());
    }

    #[test]
    fn test_to_rect() {
        let rect = Boundary::from_xywh(1, 2, 3, 4).to_rect();
        assert_eq!(rect.min().x, 1);
        assert_eq!(rect.min().y, 2);
        assert_eq!(rect.max().x, 4);
        assert_eq!(rect.max().y, 6);
    }

    #[test]
    fn test_display() {
        assert_eq!(Boundary::from_xywh(0, 1, 5, 6).to_string(), "(0, 1) 5x6");
    }
}
