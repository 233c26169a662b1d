//! Region quadtree for integer points with rectangular range queries.
//!
//! ```rust
//! use quadspace::{Boundary, Point, QuadTree};
//!
//! let mut tree = QuadTree::new(Boundary::from_xywh(0, 0, 5, 6), 1)?;
//! for x in 0..5 {
//!     for y in 0..6 {
//!         tree.insert(Point::new(x, y));
//!     }
//! }
//!
//! let mut found = tree.query(&Boundary::from_xywh(1, 1, 2, 2));
//! found.sort();
//! assert_eq!(
//!     found,
//!     vec![Point::new(1, 1), Point::new(1, 2), Point::new(2, 1), Point::new(2, 2)]
//! );
//! # Ok::<(), quadspace::QuadtreeError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod node;
pub mod tree;

pub use builder::QuadTreeBuilder;
pub use config::Config;
pub use error::{QuadtreeError, Result};
pub use node::{Node, Points, Quadrant};
pub use tree::{QuadTree, TreeStats};

pub use quadspace_types::{Boundary, Point};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Boundary, Config, Point, QuadTree, QuadTreeBuilder, QuadtreeError, Result};
}
