use serde::{Deserialize, Serialize};

/// Packing configuration.
///
/// The placement heuristic itself has no knobs; these settings cover input limits,
/// post-pack verification and the optional parallel overlap scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Largest accepted rectangle side in pixels. Larger inputs are rejected before packing.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    /// Re-check no-overlap and containment after packing and fail on violation.
    #[serde(default = "default_verify")]
    pub verify: bool,
    /// Scan placed rectangles in parallel when feature "parallel" is on.
    #[serde(default)]
    pub parallel: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_dimension: default_max_dimension(),
            verify: default_verify(),
            parallel: false,
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::PackError;

        if self.max_dimension == 0 {
            return Err(PackError::InvalidConfig(
                "max_dimension must be at least 1".into(),
            ));
        }
        // Shelf keys are `w + h` and canvas edges are `x + w`; both must stay in u32.
        if self.max_dimension > MAX_DIMENSION_LIMIT {
            return Err(PackError::InvalidConfig(format!(
                "max_dimension ({}) exceeds limit {}",
                self.max_dimension, MAX_DIMENSION_LIMIT
            )));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

/// Upper bound accepted for `max_dimension`.
pub const MAX_DIMENSION_LIMIT: u32 = 1 << 24;

fn default_max_dimension() -> u32 {
    16384
}
fn default_verify() -> bool {
    true
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn max_dimension(mut self, v: u32) -> Self {
        self.cfg.max_dimension = v;
        self
    }
    pub fn verify(mut self, v: bool) -> Self {
        self.cfg.verify = v;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
