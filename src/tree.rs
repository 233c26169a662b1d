//! Caller-facing quadtree handle.

use crate::builder::QuadTreeBuilder;
use crate::config::Config;
use crate::error::{QuadtreeError, Result};
use crate::node::{Node, Points};
use quadspace_types::{Boundary, Point};
use serde::{Deserialize, Serialize};

/// A region quadtree over a fixed root boundary.
///
/// Wraps the root [`Node`] and keeps running counts so `len()` and
/// [`stats()`](QuadTree::stats) do not need a full traversal for the point
/// totals. The tree is single-threaded; wrap it in a lock to share it.
///
/// # Examples
///
/// ```
/// use quadspace::{Boundary, Point, QuadTree};
///
/// let mut tree = QuadTree::new(Boundary::from_xywh(0, 0, 100, 100), 4)?;
/// assert!(tree.insert(Point::new(10, 10)));
/// assert!(!tree.insert(Point::new(100, 0)));
///
/// let found = tree.query(&Boundary::from_xywh(0, 0, 50, 50));
/// assert_eq!(found, vec![Point::new(10, 10)]);
/// # Ok::<(), quadspace::QuadtreeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
    len: usize,
    rejected: usize,
}

/// Shape of a tree at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Indexed points
    pub points: usize,
    pub nodes: usize,
    pub leaves: usize,
    /// Levels, counting the root
    pub depth: usize,
    /// Inserts that returned `false`
    pub rejected: usize,
}

impl QuadTree {
    /// Create an empty tree covering `boundary`.
    ///
    /// Returns [`QuadtreeError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(boundary: Boundary, capacity: usize) -> Result<Self> {
        Ok(Self {
            root: Node::new(boundary, capacity)?,
            len: 0,
            rejected: 0,
        })
    }

    /// Create a tree from a [`Config`], which must name a boundary.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let boundary = config.boundary.ok_or_else(|| {
            QuadtreeError::InvalidInput("Config has no root boundary".to_string())
        })?;
        Self::new(boundary, config.capacity)
    }

    pub fn builder() -> QuadTreeBuilder {
        QuadTreeBuilder::new()
    }

    /// Insert a point. Returns `false` if the point was not indexed.
    pub fn insert(&mut self, point: Point) -> bool {
        let accepted = self.root.insert(point);
        if accepted {
            self.len += 1;
        } else {
            self.rejected += 1;
        }
        accepted
    }

    /// Insert every point from `points`, returning how many were accepted.
    pub fn insert_many<I>(&mut self, points: I) -> usize
    where
        I: IntoIterator<Item = Point>,
    {
        points.into_iter().filter(|&p| self.insert(p)).count()
    }

    /// All indexed points inside `range`, in no particular order.
    pub fn query(&self, range: &Boundary) -> Vec<Point> {
        self.root.query_range(range)
    }

    /// Like [`query`](QuadTree::query) but appends into a caller-owned buffer.
    pub fn query_into(&self, range: &Boundary, found: &mut Vec<Point>) {
        self.root.query(range, found);
    }

    /// Whether a point with exactly these coordinates has been indexed.
    pub fn contains(&self, point: &Point) -> bool {
        let cell = Boundary::new(*point, 1, 1);
        !self.root.query_range(&cell).is_empty()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn boundary(&self) -> &Boundary {
        self.root.boundary()
    }

    pub fn capacity(&self) -> usize {
        self.root.capacity()
    }

    /// Root node, for diagnostic traversal.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Every indexed point, node by node in pre-order.
    pub fn points(&self) -> Points<'_> {
        self.root.iter()
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            points: self.len,
            rejected: self.rejected,
            ..TreeStats::default()
        };

        self.root.walk(|node, depth| {
            stats.nodes += 1;
            if node.is_leaf() {
                stats.leaves += 1;
            }
            stats.depth = stats.depth.max(depth + 1);
        });

        stats
    }
}

impl<'a> IntoIterator for &'a QuadTree {
    type Item = &'a Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}
