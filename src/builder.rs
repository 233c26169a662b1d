//! Builder for quadtree construction
//!
//! Lets callers start from a [`Config`] (possibly loaded from a file) and
//! override individual settings before building.

use crate::config::Config;
use crate::error::Result;
use crate::tree::QuadTree;
use quadspace_types::{Boundary, Point};
use std::path::Path;

/// Builder for [`QuadTree`] with optional config-file loading.
#[derive(Debug, Clone, Default)]
pub struct QuadTreeBuilder {
    config: Config,
}

impl QuadTreeBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Start from a configuration file (`.json`, or `.toml` with the `toml`
    /// feature).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            config: Config::load(path)?,
        })
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the region covered by the root node.
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.config.boundary = Some(boundary);
        self
    }

    /// Shorthand for `boundary(Boundary::new(origin, width, height))`.
    pub fn bounds(self, origin: Point, width: u32, height: u32) -> Self {
        self.boundary(Boundary::new(origin, width, height))
    }

    /// Set the per-node point capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Build the tree, validating the configuration first.
    pub fn build(self) -> Result<QuadTree> {
        log::debug!(
            "Building quadtree with capacity {} over {:?}",
            self.config.capacity,
            self.config.boundary
        );
        QuadTree::from_config(&self.config)
    }
}
