//! Recursive quadtree node: subdivision, insertion and range queries.
//!
//! A node starts as a leaf that stores points directly. Once it holds
//! `capacity` points, the next insert splits it into four children and routes
//! the point into whichever child covers it. Points stored before the split
//! stay where they are, so a query always scans a node's own points before
//! descending.

use crate::error::{QuadtreeError, Result};
use quadspace_types::{Boundary, Point};

/// Position of a child within its parent, Y-down (north is smaller `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A quadtree node covering one [`Boundary`].
#[derive(Debug, Clone)]
pub struct Node {
    boundary: Boundary,
    capacity: usize,
    points: Vec<Point>,
    /// NW, NE, SW, SE; set once on subdivision and never replaced
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    /// Create an empty leaf.
    ///
    /// Fails if `capacity` is zero or the boundary reaches past the `i32`
    /// coordinate plane.
    pub fn new(boundary: Boundary, capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity(capacity));
        }
        if !boundary.fits_i32_plane() {
            return Err(QuadtreeError::InvalidInput(format!(
                "Boundary {} extends past the i32 coordinate range",
                boundary
            )));
        }

        Ok(Self::leaf(boundary, capacity))
    }

    fn leaf(boundary: Boundary, capacity: usize) -> Self {
        Self {
            boundary,
            capacity,
            points: Vec::new(),
            children: None,
        }
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points stored directly at this node, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> Option<&[Node; 4]> {
        self.children.as_deref()
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Node> {
        self.children
            .as_deref()
            .map(|children| &children[quadrant.index()])
    }

    /// Split this node into four children that tile its boundary.
    ///
    /// Returns `false` without touching anything if the node already has
    /// children. Points already held here are not moved.
    pub fn subdivide(&mut self) -> bool {
        if self.children.is_some() {
            return false;
        }

        let [nw, ne, sw, se] = self.boundary.quadrants();
        log::debug!(
            "Subdividing node {} into NW {}, NE {}, SW {}, SE {}",
            self.boundary,
            nw,
            ne,
            sw,
            se
        );

        let capacity = self.capacity;
        self.children = Some(Box::new([
            Node::leaf(nw, capacity),
            Node::leaf(ne, capacity),
            Node::leaf(sw, capacity),
            Node::leaf(se, capacity),
        ]));
        true
    }

    /// Insert a point into this subtree.
    ///
    /// Returns `false` if the point lies outside this node's boundary, or if
    /// it lands on a full node whose boundary is too small to split further.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.boundary.contains_point(&point) {
            return false;
        }

        if self.children.is_none() {
            if self.points.len() < self.capacity {
                self.points.push(point);
                return true;
            }

            if !self.boundary.is_divisible() {
                log::warn!(
                    "Rejecting point {}: node {} is full and cannot be subdivided",
                    point,
                    self.boundary
                );
                return false;
            }

            self.subdivide();
        }

        match self.children.as_deref_mut() {
            Some(children) => children.iter_mut().any(|child| child.insert(point)),
            None => false,
        }
    }

    /// Append every point in this subtree that `range` contains to `found`.
    ///
    /// Subtrees whose boundary does not intersect `range` are skipped.
    pub fn query(&self, range: &Boundary, found: &mut Vec<Point>) {
        if !self.boundary.intersects(range) {
            log::trace!("Pruning node {} for range {}", self.boundary, range);
            return;
        }

        found.extend(self.points.iter().filter(|p| range.contains_point(p)));

        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.query(range, found);
            }
        }
    }

    /// Collect every point in this subtree that `range` contains.
    pub fn query_range(&self, range: &Boundary) -> Vec<Point> {
        let mut found = Vec::new();
        self.query(range, &mut found);
        found
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.points.len()
            + self
                .children()
                .map_or(0, |children| children.iter().map(Node::len).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Levels in this subtree, counting this node (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children().map_or(0, |children| {
            children.iter().map(Node::depth).max().unwrap_or(0)
        })
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Node::node_count).sum())
    }

    /// Visit every node in pre-order with its depth below `self` (0 for
    /// `self`). Used by callers that draw or inspect the partitioning.
    pub fn walk<F>(&self, mut visitor: F)
    where
        F: FnMut(&Node, usize),
    {
        self.walk_inner(0, &mut visitor);
    }

    fn walk_inner<F>(&self, depth: usize, visitor: &mut F)
    where
        F: FnMut(&Node, usize),
    {
        visitor(self, depth);
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.walk_inner(depth + 1, visitor);
            }
        }
    }

    /// Iterate over every point in this subtree, node by node in pre-order.
    pub fn iter(&self) -> Points<'_> {
        Points {
            pending: vec![self],
            current: Default::default(),
        }
    }
}

/// Pre-order iterator over the points of a subtree, see [`Node::iter`].
#[derive(Debug, Clone)]
pub struct Points<'a> {
    pending: Vec<&'a Node>,
    current: std::slice::Iter<'a, Point>,
}

impl<'a> Iterator for Points<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(point) = self.current.next() {
                return Some(point);
            }

            let node = self.pending.pop()?;
            if let Some(children) = node.children.as_deref() {
                self.pending.extend(children.iter().rev());
            }
            self.current = node.points.iter();
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = &'a Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
