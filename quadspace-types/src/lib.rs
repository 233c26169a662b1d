//! # quadspace-types
//!
//! Geometry primitives for the quadspace region quadtree.
//!
//! - **`Point`**: a point with `i32` coordinates
//! - **`Boundary`**: a half-open axis-aligned rectangle with containment,
//!   intersection and quadrant-splitting helpers
//!
//! Both types are serializable with Serde and convert to and from the `geo`
//! crate's primitives.
//!
//! ## Examples
//!
//! ```rust
//! use quadspace_types::boundary::Boundary;
//! use quadspace_types::point::Point;
//!
//! let area = Boundary::from_xywh(0, 0, 5, 6);
//! assert!(area.contains_point(&Point::new(4, 5)));
//! assert!(!area.contains_point(&Point::new(5, 5)));
//!
//! let [nw, ne, sw, se] = area.quadrants();
//! assert_eq!(nw.area() + ne.area() + sw.area() + se.area(), area.area());
//! ```

pub mod boundary;
pub mod point;

pub use boundary::Boundary;
pub use point::Point;
