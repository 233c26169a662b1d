//! Tree configuration with JSON and TOML loading.

use crate::error::{QuadtreeError, Result};
use quadspace_types::Boundary;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings used to construct a [`QuadTree`](crate::QuadTree).
///
/// # Examples
///
/// ```
/// use quadspace::Config;
///
/// let json = r#"{
///     "capacity": 8,
///     "boundary": { "origin": { "x": 0, "y": 0 }, "width": 512, "height": 512 }
/// }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.capacity, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Points a node holds directly before it subdivides
    #[serde(default = "Config::default_capacity")]
    pub capacity: usize,

    /// Region covered by the root node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
}

impl Config {
    const fn default_capacity() -> usize {
        4
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(QuadtreeError::InvalidCapacity(self.capacity));
        }

        if let Some(boundary) = &self.boundary
            && !boundary.fits_i32_plane()
        {
            return Err(QuadtreeError::InvalidInput(format!(
                "Boundary {} extends past the i32 coordinate range",
                boundary
            )));
        }

        Ok(())
    }

    /// Load configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration as TOML string (requires toml feature)
    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read a configuration file, picking the format from its extension.
    ///
    /// `.json` is always supported; `.toml` needs the `toml` feature.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&contents),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&contents),
            _ => Err(QuadtreeError::InvalidInput(format!(
                "Unsupported config file format: {}",
                path.display()
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
            boundary: None,
        }
    }
}
